use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Assignment of a user to a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct UserProject {
    #[schema(example = 1)]
    pub user_id: i32,
    #[schema(example = 1)]
    pub project_id: i32,
}

/// `?user_id=` query of the association endpoints
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserIdQuery {
    /// User to add or remove
    pub user_id: i32,
}
