use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaliceError {
    #[error("{message}")]
    UsageError { message: String },

    #[error("{message}")]
    TypeError { message: String },

    #[error("Invalid argument {name}: {reason}")]
    InvalidArgumentError { name: String, reason: String },

    #[error("Invalid UTF-8 data: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),

    #[error("Operation timed out after {seconds}s")]
    TimeoutError { seconds: u64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("INI file error: {0}")]
    IniError(#[from] ini::Error),

    #[error("Command `{command}` failed with {status}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
        output: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error(transparent)]
    HandlerError(#[from] anyhow::Error),
}

impl MaliceError {
    pub fn not_a_boolean() -> Self {
        MaliceError::TypeError {
            message: "Not a boolean".to_string(),
        }
    }

    /// Process exit code `main` uses when this error reaches the top level.
    pub fn exit_code(&self) -> i32 {
        match self {
            MaliceError::UsageError { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, MaliceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_error_exit_code() {
        let err = MaliceError::UsageError {
            message: "No command provided".to_string(),
        };
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "No command provided");
    }

    #[test]
    fn test_generic_errors_exit_with_one() {
        assert_eq!(MaliceError::TimeoutError { seconds: 3 }.exit_code(), 1);
        assert_eq!(MaliceError::not_a_boolean().exit_code(), 1);
        assert_eq!(MaliceError::not_a_boolean().to_string(), "Not a boolean");
    }
}
