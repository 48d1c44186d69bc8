use thiserror::Error;

/// Process-level service errors.
///
/// Tool calls never surface these; they only abort startup or the stdio loop.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to build HTTP client")]
    HttpClient(#[from] reqwest::Error),

    #[error("stdio transport failed")]
    Io(#[from] std::io::Error),
}

impl ServiceError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::Config { .. } => "config_error",
            ServiceError::HttpClient(_) => "http_client_error",
            ServiceError::Io(_) => "io_error",
        }
    }
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
