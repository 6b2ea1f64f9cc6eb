pub mod admin;
pub mod quote;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "The provided key is invalid or already used")]
    pub error: String,
}
