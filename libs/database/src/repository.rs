//! Generic CRUD primitive over one SeaORM entity.
//!
//! Domain repositories wrap a `BaseRepository<Entity>` per table and add
//! their own queries on top through [`BaseRepository::db`]. Every call checks
//! a connection out of the pool for the duration of the statement only.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait,
};
use std::marker::PhantomData;

/// Primary-key type of an entity: a scalar for surrogate keys, a tuple for
/// composite keys.
pub type PrimaryKeyOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

pub struct BaseRepository<E: EntityTrait> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait> Clone for BaseRepository<E> {
    fn clone(&self) -> Self {
        Self::new(self.db.clone())
    }
}

impl<E: EntityTrait> BaseRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Look a row up by primary key. Composite keys are passed as tuples.
    pub async fn find_by_id<K>(&self, id: K) -> Result<Option<E::Model>, DbErr>
    where
        K: Into<PrimaryKeyOf<E>>,
    {
        E::find_by_id(id).one(&self.db).await
    }

    pub async fn exists<K>(&self, id: K) -> Result<bool, DbErr>
    where
        K: Into<PrimaryKeyOf<E>>,
    {
        Ok(self.find_by_id(id).await?.is_some())
    }

    pub async fn find_all(&self) -> Result<Vec<E::Model>, DbErr> {
        E::find().all(&self.db).await
    }

    /// Insert and return the stored row, including store-assigned columns.
    pub async fn insert<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.insert(&self.db).await
    }

    pub async fn update<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.update(&self.db).await
    }

    /// Delete by primary key, returning whether a row was removed.
    pub async fn delete_by_id<K>(&self, id: K) -> Result<bool, DbErr>
    where
        K: Into<PrimaryKeyOf<E>>,
    {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Set};

    mod tag {
        use sea_orm::entity::prelude::*;

        #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
        #[sea_orm(table_name = "tag")]
        pub struct Model {
            #[sea_orm(primary_key)]
            pub id: i32,
            pub label: String,
        }

        #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
        pub enum Relation {}

        impl ActiveModelBehavior for ActiveModel {}
    }

    mod membership {
        use sea_orm::entity::prelude::*;

        #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
        #[sea_orm(table_name = "membership")]
        pub struct Model {
            #[sea_orm(primary_key, auto_increment = false)]
            pub left_id: i32,
            #[sea_orm(primary_key, auto_increment = false)]
            pub right_id: i32,
        }

        #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
        pub enum Relation {}

        impl ActiveModelBehavior for ActiveModel {}
    }

    fn tag(id: i32, label: &str) -> tag::Model {
        tag::Model {
            id,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_find_by_id_and_all() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![tag(1, "backend")]])
            .append_query_results([vec![tag(1, "backend"), tag(2, "frontend")]])
            .into_connection();
        let repo = BaseRepository::<tag::Entity>::new(db);

        assert_eq!(repo.find_by_id(1).await.unwrap(), Some(tag(1, "backend")));
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_find_by_composite_key() {
        let row = membership::Model {
            left_id: 3,
            right_id: 7,
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row.clone()]])
            .append_query_results([Vec::<membership::Model>::new()])
            .into_connection();
        let repo = BaseRepository::<membership::Entity>::new(db);

        assert_eq!(repo.find_by_id((3, 7)).await.unwrap(), Some(row));
        assert!(!repo.exists((3, 8)).await.unwrap());
    }

    #[tokio::test]
    async fn test_insert_returns_stored_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![tag(9, "ops")]])
            .into_connection();
        let repo = BaseRepository::<tag::Entity>::new(db);

        let stored = repo
            .insert(tag::ActiveModel {
                label: Set("ops".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(stored, tag(9, "ops"));
    }

    #[tokio::test]
    async fn test_delete_reports_whether_row_existed() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let repo = BaseRepository::<tag::Entity>::new(db);

        assert!(repo.delete_by_id(1).await.unwrap());
        assert!(!repo.delete_by_id(1).await.unwrap());
    }
}
