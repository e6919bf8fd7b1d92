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
use super::error::UserResult;
use super::models::{CreateUser, UpdateUser, User};
use super::repository::UserRepository;
use super::service::UserService;

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user, update_user, delete_user),
    components(
        schemas(User, CreateUser, UpdateUser, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            EmptyUpdateResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "User management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the user router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/user", get(list_users).post(create_user))
        .route("/user/", get(list_users).post(create_user))
        .route(
            "/user/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(shared_service)
}

/// List all users
#[utoipa::path(
    get,
    path = "/user/",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<Vec<User>>> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/user/",
    tag = entity::Model::TAG,
    request_body = CreateUser,
    responses(
        (status = 200, description = "User created successfully", body = User),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> UserResult<Json<User>> {
    let user = service.create_user(input).await?;
    Ok(Json(user))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<Json<User>> {
    let user = service.get_user(id).await?;
    Ok(Json(user))
}

/// Update a user
#[utoipa::path(
    put,
    path = "/user/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated successfully", body = User),
        (status = 400, response = EmptyUpdateResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateUser>,
) -> UserResult<Json<User>> {
    let user = service.update_user(id, input).await?;
    Ok(Json(user))
}

/// Delete a user and their project assignments
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted successfully", body = MessageResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<Json<MessageResponse>> {
    service.delete_user(id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
