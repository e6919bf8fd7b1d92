use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000001_create_roles::Role;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string(User::Name))
                    .col(string(User::Position))
                    .col(integer(User::RoleId))
                    .col(
                        timestamp_with_time_zone(User::CreationDate)
                            .default(Expr::current_timestamp()),
                    )
                    // A role cannot be removed while users still reference it.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_role_id")
                            .from(User::Table, User::RoleId)
                            .to(Role::Table, Role::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_user_role_id")
                    .table(User::Table)
                    .col(User::RoleId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum User {
    Table,
    Id,
    Name,
    Position,
    RoleId,
    CreationDate,
}
