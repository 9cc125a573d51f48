use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A plain confirmation body, e.g. `{"message": "Review updated"}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
