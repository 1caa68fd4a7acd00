use std::path::PathBuf;
use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not determine the user configuration directory")]
    NoConfigDir,

    #[error("I/O error accessing '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = AppError::InvalidInput {
            field: "assets_priorities",
            reason: "duplicate entry 'native'".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid assets_priorities: duplicate entry 'native'"
        );
    }

    #[test]
    fn test_io_error_names_path() {
        let err = AppError::io(
            "/tmp/config.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains("/tmp/config.json"));
        assert!(message.contains("denied"));
    }
}
