use service_core::error::AppError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Store error: {0}")]
    Store(anyhow::Error),

    #[error("Corrupt record at {key}: {source}")]
    Corrupt {
        key: String,
        source: serde_json::Error,
    },

    #[error("A valid submission key is required")]
    KeyRequired,

    #[error("The provided key is invalid or already used")]
    KeyNotFound,

    #[error("The provided key is invalid or already used")]
    KeyExhausted,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing or invalid Authorization header")]
    Unauthorized,

    #[error("Admin session is invalid or expired")]
    Forbidden,

    #[error("This quote and author already exist")]
    DuplicateContent,

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Store(e) => AppError::StoreError(e),
            ServiceError::Corrupt { .. } => AppError::StoreError(anyhow::anyhow!(err)),
            ServiceError::KeyRequired => {
                AppError::BadRequest(anyhow::anyhow!("A valid submission key is required"))
            }
            ServiceError::KeyNotFound | ServiceError::KeyExhausted => AppError::BadRequest(
                anyhow::anyhow!("The provided key is invalid or already used"),
            ),
            ServiceError::InvalidCredentials => {
                AppError::AuthError(anyhow::anyhow!("Invalid credentials"))
            }
            ServiceError::Unauthorized => {
                AppError::Unauthorized(anyhow::anyhow!("Missing or invalid Authorization header"))
            }
            ServiceError::Forbidden => {
                AppError::Forbidden(anyhow::anyhow!("Admin session is invalid or expired"))
            }
            ServiceError::DuplicateContent => {
                AppError::Conflict(anyhow::anyhow!("This quote and author already exist"))
            }
            ServiceError::Validation(e) => AppError::BadRequest(anyhow::anyhow!(e)),
        }
    }
}
