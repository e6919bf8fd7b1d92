use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    IdPath, MessageResponse, ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, ConflictResponse, EmptyUpdateResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use super::entity;
use super::error::RoleResult;
use super::models::{CreateRole, Role, UpdateRole};
use super::repository::RoleRepository;
use super::service::RoleService;

/// OpenAPI documentation for Roles API
#[derive(OpenApi)]
#[openapi(
    paths(list_roles, create_role, get_role, update_role, delete_role),
    components(
        schemas(Role, CreateRole, UpdateRole, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            EmptyUpdateResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "Role management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the role router with all HTTP endpoints
pub fn router<R: RoleRepository + 'static>(service: RoleService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/role", get(list_roles).post(create_role))
        .route("/role/", get(list_roles).post(create_role))
        .route(
            "/role/{id}",
            get(get_role).put(update_role).delete(delete_role),
        )
        .with_state(shared_service)
}

/// List all roles
#[utoipa::path(
    get,
    path = "/role/",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "List of roles", body = Vec<Role>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_roles<R: RoleRepository>(
    State(service): State<Arc<RoleService<R>>>,
) -> RoleResult<Json<Vec<Role>>> {
    let roles = service.list_roles().await?;
    Ok(Json(roles))
}

/// Create a new role
#[utoipa::path(
    post,
    path = "/role/",
    tag = entity::Model::TAG,
    request_body = CreateRole,
    responses(
        (status = 200, description = "Role created successfully", body = Role),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_role<R: RoleRepository>(
    State(service): State<Arc<RoleService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateRole>,
) -> RoleResult<Json<Role>> {
    let role = service.create_role(input).await?;
    Ok(Json(role))
}

/// Get a role by ID
#[utoipa::path(
    get,
    path = "/role/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Role found", body = Role),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_role<R: RoleRepository>(
    State(service): State<Arc<RoleService<R>>>,
    IdPath(id): IdPath,
) -> RoleResult<Json<Role>> {
    let role = service.get_role(id).await?;
    Ok(Json(role))
}

/// Update a role
#[utoipa::path(
    put,
    path = "/role/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Role ID")
    ),
    request_body = UpdateRole,
    responses(
        (status = 200, description = "Role updated successfully", body = Role),
        (status = 400, response = EmptyUpdateResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_role<R: RoleRepository>(
    State(service): State<Arc<RoleService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateRole>,
) -> RoleResult<Json<Role>> {
    let role = service.update_role(id, input).await?;
    Ok(Json(role))
}

/// Delete a role that no user holds
#[utoipa::path(
    delete,
    path = "/role/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Role deleted successfully", body = MessageResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_role<R: RoleRepository>(
    State(service): State<Arc<RoleService<R>>>,
    IdPath(id): IdPath,
) -> RoleResult<Json<MessageResponse>> {
    service.delete_role(id).await?;
    Ok(Json(MessageResponse::new("Role deleted successfully")))
}
