use axum::Router;
use domain_projects::{PgRoleRepository, RoleService, roles::handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgRoleRepository::new(state.db.clone());
    let service = RoleService::new(repository);
    handlers::router(service)
}
