use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChainError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Arithmetic overflow in {operation}: {lhs} and {rhs}")]
    ArithmeticOverflow {
        operation: String,
        lhs: i64,
        rhs: i64,
    },

    #[error("Division by zero in {operation}")]
    DivisionByZero { operation: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Evaluation,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ChainError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ChainError::ConfigError { .. }
            | ChainError::InvalidConfigValueError { .. }
            | ChainError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ChainError::ArithmeticOverflow { .. } | ChainError::DivisionByZero { .. } => {
                ErrorCategory::Evaluation
            }
            ChainError::IoError(_) | ChainError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Evaluation => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 對應的程序結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ChainError::IoError(_) => "Check that the config file exists and is readable",
            ChainError::SerializationError(_) => "Report this issue; the result could not be encoded",
            ChainError::ConfigError { .. } => "Check the TOML syntax of the chain file",
            ChainError::InvalidConfigValueError { .. } => {
                "Fix the highlighted field in the chain file"
            }
            ChainError::MissingConfigError { .. } => "Add the missing field to the chain file",
            ChainError::ArithmeticOverflow { .. } => {
                "Use smaller operands or fewer multiplying steps"
            }
            ChainError::DivisionByZero { .. } => "Use a non-zero operand for divide / divisible_by",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ChainError::IoError(e) => format!("Could not read input: {}", e),
            ChainError::ArithmeticOverflow { operation, .. } => {
                format!("The chain overflowed while applying '{}'", operation)
            }
            ChainError::DivisionByZero { operation } => {
                format!("The chain divided by zero while applying '{}'", operation)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ChainError>;
