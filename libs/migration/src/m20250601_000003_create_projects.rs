use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

fn statuses() -> [ProjectStatus; 5] {
    [
        ProjectStatus::Planning,
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
        ProjectStatus::OnHold,
        ProjectStatus::Cancelled,
    ]
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(ProjectStatus::Enum)
                    .values(statuses())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(pk_auto(Project::Id))
                    .col(string(Project::Name))
                    .col(string_null(Project::Description))
                    .col(
                        ColumnDef::new(Project::Status)
                            .enumeration(ProjectStatus::Enum, statuses())
                            .not_null()
                            .default("Planning"),
                    )
                    .col(timestamp_with_time_zone_null(Project::BeginDate))
                    .col(timestamp_with_time_zone_null(Project::EndDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_project_name")
                    .table(Project::Table)
                    .col(Project::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Project::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(ProjectStatus::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Project {
    Table,
    Id,
    Name,
    Description,
    Status,
    BeginDate,
    EndDate,
}

#[derive(DeriveIden)]
enum ProjectStatus {
    #[sea_orm(iden = "project_status")]
    Enum,
    #[sea_orm(iden = "Planning")]
    Planning,
    #[sea_orm(iden = "In Progress")]
    InProgress,
    #[sea_orm(iden = "Completed")]
    Completed,
    #[sea_orm(iden = "On Hold")]
    OnHold,
    #[sea_orm(iden = "Cancelled")]
    Cancelled,
}
