use axum::Router;
use domain_projects::{PgUserProjectRepository, UserProjectService, user_projects::handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgUserProjectRepository::new(state.db.clone());
    let service = UserProjectService::new(repository);
    handlers::router(service)
}
