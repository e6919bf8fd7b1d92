use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Role::Table)
                    .if_not_exists()
                    .col(pk_auto(Role::Id))
                    .col(string(Role::Name))
                    .col(string_null(Role::Description))
                    .to_owned(),
            )
            .await?;

        // Role names are unique; the index doubles as the lookup index on name.
        manager
            .create_index(
                Index::create()
                    .name("uq_role_name")
                    .table(Role::Table)
                    .col(Role::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Role::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Role {
    Table,
    Id,
    Name,
    Description,
}
