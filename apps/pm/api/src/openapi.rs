use domain_projects::{projects, roles, user_projects, users};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Project Management API",
        description = "API for Project Management"
    ),
    components(schemas(axum_helpers::ErrorResponse)),
    tags(
        (name = "role", description = "Role management endpoints"),
        (name = "user", description = "User management endpoints"),
        (name = "project", description = "Project management endpoints")
    )
)]
struct BaseDoc;

/// Complete API document: the base info plus every domain area's paths.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = BaseDoc::openapi();
        doc.merge(roles::handlers::ApiDoc::openapi());
        doc.merge(users::handlers::ApiDoc::openapi());
        doc.merge(projects::handlers::ApiDoc::openapi());
        doc.merge(user_projects::handlers::ApiDoc::openapi());
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/role/",
            "/role/{id}",
            "/user/",
            "/user/{id}",
            "/user/{id}/project",
            "/project/",
            "/project/{id}",
            "/project/{id}/user",
        ] {
            assert!(paths.contains(&expected), "missing path {expected}");
        }
    }

    #[test]
    fn test_document_has_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().unwrap().schemas;

        for expected in ["ErrorResponse", "Role", "User", "Project", "ProjectStatus"] {
            assert!(schemas.contains_key(expected), "missing schema {expected}");
        }
    }
}
