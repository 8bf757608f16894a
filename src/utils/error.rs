use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Number parameter is empty")]
    EmptyNumber,

    #[error("Not a valid integer: {input}")]
    InvalidNumber { input: String },

    #[error("Negative numbers are not supported: {input}")]
    NegativeNumber { input: String },

    #[error("Number {input} exceeds the supported maximum of {max}", max = u64::MAX)]
    NumberOutOfRange { input: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Upstream returned status {status} for {url}")]
    UpstreamStatus { url: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Classification of {number} failed: {message}")]
    ComputationError { number: String, message: String },
}

impl ClassifierError {
    /// 是否為呼叫端輸入錯誤 (對應 HTTP 400)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyNumber
                | Self::InvalidNumber { .. }
                | Self::NegativeNumber { .. }
                | Self::NumberOutOfRange { .. }
        )
    }

    /// 錯誤回應中回傳給呼叫端的原始輸入
    pub fn echoed_input(&self) -> Option<&str> {
        match self {
            Self::EmptyNumber => Some(""),
            Self::InvalidNumber { input }
            | Self::NegativeNumber { input }
            | Self::NumberOutOfRange { input } => Some(input),
            Self::ComputationError { number, .. } => Some(number),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::EmptyNumber => "Please provide a number to classify".to_string(),
            Self::InvalidNumber { input } => format!("'{}' is not an integer", input),
            Self::NegativeNumber { input } => {
                format!("'{}' is negative; only non-negative integers are classified", input)
            }
            Self::NumberOutOfRange { input } => {
                format!("'{}' is larger than {}, the largest supported number", input, u64::MAX)
            }
            Self::HttpError(_) | Self::UpstreamStatus { .. } => {
                "The fun fact service could not be reached".to_string()
            }
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => {
                format!("Configuration problem: {}", self)
            }
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::ComputationError { .. } => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClassifierError>;
