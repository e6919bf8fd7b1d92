pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_roles;
mod m20250601_000002_create_users;
mod m20250601_000003_create_projects;
mod m20250601_000004_create_user_projects;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_roles::Migration),
            Box::new(m20250601_000002_create_users::Migration),
            Box::new(m20250601_000003_create_projects::Migration),
            Box::new(m20250601_000004_create_user_projects::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_ordered_by_dependency() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        assert_eq!(
            names,
            [
                "m20250601_000001_create_roles",
                "m20250601_000002_create_users",
                "m20250601_000003_create_projects",
                "m20250601_000004_create_user_projects",
            ]
        );
    }
}
