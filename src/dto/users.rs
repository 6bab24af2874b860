use serde::Deserialize;
use utoipa::ToSchema;

/// Body of `POST /users` and `PUT /users/{user_id}`. Any client-sent id is ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserPayload {
    pub name: String,
}
