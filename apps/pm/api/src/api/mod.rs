use axum::Router;

pub mod health;
pub mod projects;
pub mod roles;
pub mod user_projects;
pub mod users;

/// Creates the domain routes.
///
/// Each domain router carries full paths (`/role/...`, `/project/{id}/user`)
/// and has its state applied, so the result is a stateless Router.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .merge(roles::router(state))
        .merge(users::router(state))
        .merge(projects::router(state))
        .merge(user_projects::router(state))
}

/// Creates a router with the /ready endpoint that pings the database.
///
/// This router has state applied and can be merged with the stateless app router
/// from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
