use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    IdPath, MessageResponse, ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, EmptyUpdateResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use super::entity;
use super::error::ProjectResult;
use super::models::{CreateProject, UpdateProject, Project};
use super::repository::ProjectRepository;
use super::service::ProjectService;

/// OpenAPI documentation for Projects API
#[derive(OpenApi)]
#[openapi(
    paths(list_projects, create_project, get_project, update_project, delete_project),
    components(
        schemas(Project, CreateProject, UpdateProject, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            EmptyUpdateResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "Project management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the project router with all HTTP endpoints
pub fn router<R: ProjectRepository + 'static>(service: ProjectService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/project", get(list_projects).post(create_project))
        .route("/project/", get(list_projects).post(create_project))
        .route(
            "/project/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .with_state(shared_service)
}

/// List all projects
#[utoipa::path(
    get,
    path = "/project/",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "List of projects", body = Vec<Project>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_projects<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
) -> ProjectResult<Json<Vec<Project>>> {
    let projects = service.list_projects().await?;
    Ok(Json(projects))
}

/// Create a new project
#[utoipa::path(
    post,
    path = "/project/",
    tag = entity::Model::TAG,
    request_body = CreateProject,
    responses(
        (status = 200, description = "Project created successfully", body = Project),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_project<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProject>,
) -> ProjectResult<Json<Project>> {
    let project = service.create_project(input).await?;
    Ok(Json(project))
}

/// Get a project by ID
#[utoipa::path(
    get,
    path = "/project/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project found", body = Project),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_project<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    IdPath(id): IdPath,
) -> ProjectResult<Json<Project>> {
    let project = service.get_project(id).await?;
    Ok(Json(project))
}

/// Update a project
#[utoipa::path(
    put,
    path = "/project/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    request_body = UpdateProject,
    responses(
        (status = 200, description = "Project updated successfully", body = Project),
        (status = 400, response = EmptyUpdateResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_project<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateProject>,
) -> ProjectResult<Json<Project>> {
    let project = service.update_project(id, input).await?;
    Ok(Json(project))
}

/// Delete a project and its user assignments
#[utoipa::path(
    delete,
    path = "/project/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project deleted successfully", body = MessageResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_project<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    IdPath(id): IdPath,
) -> ProjectResult<Json<MessageResponse>> {
    service.delete_project(id).await?;
    Ok(Json(MessageResponse::new("Project deleted successfully")))
}
