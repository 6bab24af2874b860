use serde::Serialize;
use utoipa::ToSchema;

/// Envelope used for health, fallback and error bodies.
///
/// Resource endpoints return their records bare; only these operational
/// responses carry a message alongside the payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }
}
