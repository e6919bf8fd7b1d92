use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use axum_extra::extract::WithRejection;
use axum_helpers::{
    IdPath, MessageResponse,
    errors::responses::{ConflictResponse, InternalServerErrorResponse, NotFoundResponse},
    extractors,
};
use std::sync::Arc;
use utoipa::OpenApi;

use super::error::UserProjectResult;
use super::models::{UserIdQuery, UserProject};
use super::repository::UserProjectRepository;
use super::service::UserProjectService;
use crate::projects::Project;
use crate::users::User;

const TAG: &str = "project";

/// OpenAPI documentation for project membership
#[derive(OpenApi)]
#[openapi(
    paths(
        list_project_users,
        add_user_to_project,
        remove_user_from_project,
        list_user_projects
    ),
    components(
        schemas(UserProject, MessageResponse),
        responses(NotFoundResponse, ConflictResponse, InternalServerErrorResponse)
    )
)]
pub struct ApiDoc;

/// Create the membership router
pub fn router<R: UserProjectRepository + 'static>(service: UserProjectService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/project/{id}/user",
            get(list_project_users)
                .post(add_user_to_project)
                .delete(remove_user_from_project),
        )
        .route("/user/{id}/project", get(list_user_projects))
        .with_state(shared_service)
}

/// List the users assigned to a project
#[utoipa::path(
    get,
    path = "/project/{id}/user",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Users assigned to the project", body = Vec<User>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_project_users<R: UserProjectRepository>(
    State(service): State<Arc<UserProjectService<R>>>,
    IdPath(project_id): IdPath,
) -> UserProjectResult<Json<Vec<User>>> {
    let users = service.list_project_users(project_id).await?;
    Ok(Json(users))
}

/// Add a user to a project
#[utoipa::path(
    post,
    path = "/project/{id}/user",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Project ID"),
        UserIdQuery
    ),
    responses(
        (status = 200, description = "User added to project successfully", body = MessageResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_user_to_project<R: UserProjectRepository>(
    State(service): State<Arc<UserProjectService<R>>>,
    IdPath(project_id): IdPath,
    WithRejection(Query(query), _): extractors::Query<UserIdQuery>,
) -> UserProjectResult<Json<MessageResponse>> {
    service
        .add_user_to_project(query.user_id, project_id)
        .await?;
    Ok(Json(MessageResponse::new("User added to project successfully")))
}

/// Remove a user from a project
#[utoipa::path(
    delete,
    path = "/project/{id}/user",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Project ID"),
        UserIdQuery
    ),
    responses(
        (status = 200, description = "User removed from project successfully", body = MessageResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn remove_user_from_project<R: UserProjectRepository>(
    State(service): State<Arc<UserProjectService<R>>>,
    IdPath(project_id): IdPath,
    WithRejection(Query(query), _): extractors::Query<UserIdQuery>,
) -> UserProjectResult<Json<MessageResponse>> {
    service
        .remove_user_from_project(query.user_id, project_id)
        .await?;
    Ok(Json(MessageResponse::new(
        "User removed from project successfully",
    )))
}

/// List the projects a user is assigned to
#[utoipa::path(
    get,
    path = "/user/{id}/project",
    tag = "user",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Projects the user is assigned to", body = Vec<Project>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_user_projects<R: UserProjectRepository>(
    State(service): State<Arc<UserProjectService<R>>>,
    IdPath(user_id): IdPath,
) -> UserProjectResult<Json<Vec<Project>>> {
    let projects = service.list_user_projects(user_id).await?;
    Ok(Json(projects))
}
