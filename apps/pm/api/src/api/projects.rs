use axum::Router;
use domain_projects::{PgProjectRepository, ProjectService, projects::handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgProjectRepository::new(state.db.clone());
    let service = ProjectService::new(repository);
    handlers::router(service)
}
