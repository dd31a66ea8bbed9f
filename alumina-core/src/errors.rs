use thiserror::Error;

/// Error type for invalid operations.
#[derive(Error, Debug)]
pub enum AluminaError {
    #[error("{0}")]
    Error(String),
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
    #[error("Variable '{0}' is not available in the current state")]
    MissingVariable(String),
    #[error("Exogenous variable '{0}' is required by a component but was not provided")]
    MissingExogenousVariable(String),
    #[error("Unit mismatch for variable '{variable}': expected {expected}, got {found}")]
    WrongUnits {
        variable: String,
        expected: String,
        found: String,
    },
    #[error("Variable '{variable}' is produced by both {first} and {second}")]
    DuplicateProducer {
        variable: String,
        first: String,
        second: String,
    },
    #[error("The component graph contains a cycle involving {0}")]
    CyclicDependency(String),
    #[error("Time {time} is outside of the range {start}..={end}")]
    TimeOutOfRange { time: f64, start: f64, end: f64 },
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl AluminaError {
    pub fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        AluminaError::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience type for `Result<T, AluminaError>`.
pub type AluminaResult<T> = Result<T, AluminaError>;
