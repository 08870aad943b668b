use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Arithmetic overflow in {operation}")]
    OverflowError { operation: String },

    #[error("Division by zero: {dividend} / 0")]
    DivisionByZeroError { dividend: i64 },
}

impl DemoError {
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::OverflowError {
            operation: operation.into(),
        }
    }

    /// 設定問題回傳 1，執行期問題回傳 2
    pub fn exit_code(&self) -> i32 {
        match self {
            DemoError::ConfigError { .. } | DemoError::InvalidConfigValueError { .. } => 1,
            DemoError::IoError(_)
            | DemoError::SerializationError(_)
            | DemoError::OverflowError { .. }
            | DemoError::DivisionByZeroError { .. } => 2,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::ConfigError { .. } => "Check that the config file exists and is valid TOML",
            DemoError::InvalidConfigValueError { .. } => {
                "Fix the highlighted setting or remove it to use the default"
            }
            DemoError::OverflowError { .. } => "Use smaller operands in the [debug]/[hello] settings",
            DemoError::DivisionByZeroError { .. } => "Set hello.num2 to a non-zero value",
            DemoError::IoError(_) | DemoError::SerializationError(_) => {
                "Check that stdin/stdout are available and retry"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let config = DemoError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(config.exit_code(), 1);
        assert_eq!(DemoError::overflow("factorial").exit_code(), 2);
        assert_eq!(DemoError::DivisionByZeroError { dividend: 10 }.exit_code(), 2);
    }

    #[test]
    fn test_display() {
        let err = DemoError::overflow("factorial(21)");
        assert_eq!(err.to_string(), "Arithmetic overflow in factorial(21)");
    }
}
