use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error {status} {status_text} ({url})")]
    Http {
        status: u16,
        status_text: String,
        url: String,
    },

    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl ApiError {
    /// HTTP 狀態碼（僅 Http 錯誤有）
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// 給使用者看的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ApiError::Http {
                status,
                status_text,
                ..
            } => format!("Server responded with {} {}", status, status_text),
            ApiError::Transport(_) => "Could not reach the API server".to_string(),
            ApiError::InvalidUrl { url, .. } => format!("Cannot build a request URL from '{}'", url),
            ApiError::InvalidHeader { name, .. } => format!("Header '{}' is not valid", name),
            ApiError::IoError(_) => "Could not read a local file".to_string(),
            ApiError::SerializationError(_) => "Response or payload is not valid JSON".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ApiError::Http { status: 401, .. } | ApiError::Http { status: 403, .. } => {
                "Check that the bearer token is present and still valid"
            }
            ApiError::Http { status: 404, .. } => {
                "Check the endpoint path and the configured API base URL"
            }
            ApiError::Http { status, .. } if *status >= 500 => {
                "The backend failed; check the server logs and try again"
            }
            ApiError::Http { .. } => "Check the request method, headers and body",
            ApiError::Transport(_) => {
                "Make sure the backend is running and the host/port are reachable"
            }
            ApiError::InvalidUrl { .. } => "Use a path such as /orders or a full http(s) URL",
            ApiError::InvalidHeader { .. } => "Headers must be given as 'Name: value'",
            ApiError::IoError(_) => "Check the file path and its permissions",
            ApiError::SerializationError(_) => "Check that the body is well-formed JSON",
            ApiError::ConfigValidationError { .. }
            | ApiError::InvalidConfigValueError { .. }
            | ApiError::MissingConfigError { .. } => {
                "Fix the configuration file, flags or environment variables"
            }
        }
    }

    /// CLI 退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            ApiError::Http { .. } => 2,
            ApiError::Transport(_) => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
