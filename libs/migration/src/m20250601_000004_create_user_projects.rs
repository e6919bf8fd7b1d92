use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000002_create_users::User;
use crate::m20250601_000003_create_projects::Project;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The composite primary key is what makes concurrent duplicate
        // assignments impossible.
        manager
            .create_table(
                Table::create()
                    .table(UserProject::Table)
                    .if_not_exists()
                    .col(integer(UserProject::UserId))
                    .col(integer(UserProject::ProjectId))
                    .primary_key(
                        Index::create()
                            .name("pk_user_project")
                            .col(UserProject::UserId)
                            .col(UserProject::ProjectId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_project_user_id")
                            .from(UserProject::Table, UserProject::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_project_project_id")
                            .from(UserProject::Table, UserProject::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_user_project_project_id")
                    .table(UserProject::Table)
                    .col(UserProject::ProjectId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserProject::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserProject {
    Table,
    UserId,
    ProjectId,
}
