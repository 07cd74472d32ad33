use thiserror::Error;

/// 固定錯誤訊息，呼叫端可直接比對
pub const INTEGER_ONLY: &str = "provide only integer input";
pub const NOT_CONVERTIBLE: &str = "could not convert string to int or float";
pub const NOT_VALID_INPUT: &str = "not a valid input";

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("{message}")]
    TypeMismatch { message: &'static str },

    #[error("{message}")]
    InvalidFormat { message: &'static str },

    #[error("rank {rank} is out of range for {distinct} distinct values")]
    RankOutOfRange { rank: usize, distinct: usize },

    #[error("No tokens found in text from {source_name}")]
    NoTokens { source_name: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("HTTP request to {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DrillError {
    pub fn type_mismatch(message: &'static str) -> Self {
        Self::TypeMismatch { message }
    }

    pub fn invalid_format(message: &'static str) -> Self {
        Self::InvalidFormat { message }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::TypeMismatch { .. }
            | Self::InvalidFormat { .. }
            | Self::RankOutOfRange { .. }
            | Self::NoTokens { .. } => ErrorSeverity::High,
            // 網路錯誤可以重試
            Self::HttpError(_) | Self::HttpStatus { .. } => ErrorSeverity::Medium,
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            Self::IoError(_) | Self::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::TypeMismatch { message } | Self::InvalidFormat { message } => {
                format!("Input rejected: {}", message)
            }
            Self::RankOutOfRange { rank, distinct } => format!(
                "Cannot pick rank {} from only {} distinct values",
                rank, distinct
            ),
            Self::NoTokens { source_name } => format!("'{}' contains no words", source_name),
            Self::HttpError(_) | Self::HttpStatus { .. } => {
                format!("Could not download the text: {}", self)
            }
            Self::IoError(e) => format!("Could not read the file: {}", e),
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } => "Pass a value of the expected type",
            Self::InvalidFormat { .. } => {
                "Use a decimal, 0x/0b/0o, or floating point literal such as 3.982e5"
            }
            Self::RankOutOfRange { .. } => "Lower --rank or provide more distinct items",
            Self::NoTokens { .. } => "Check that the source contains non-whitespace text",
            Self::HttpError(_) | Self::HttpStatus { .. } => {
                "Check the URL and your network connection, then retry"
            }
            Self::IoError(_) => "Check that the path exists and is readable",
            Self::SerializationError(_) => "Check that the JSON input is well formed",
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DrillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_messages_display_verbatim() {
        assert_eq!(
            DrillError::type_mismatch(INTEGER_ONLY).to_string(),
            "provide only integer input"
        );
        assert_eq!(
            DrillError::invalid_format(NOT_CONVERTIBLE).to_string(),
            "could not convert string to int or float"
        );
    }

    #[test]
    fn test_severity_mapping() {
        let http = DrillError::HttpStatus {
            url: "http://x".to_string(),
            status: 404,
        };
        assert_eq!(http.severity(), ErrorSeverity::Medium);
        assert_eq!(
            DrillError::type_mismatch(NOT_VALID_INPUT).severity(),
            ErrorSeverity::High
        );

        let bad_value = DrillError::InvalidConfigValueError {
            field: "greeting.fill".to_string(),
            value: "500".to_string(),
            reason: "out of range".to_string(),
        };
        assert_eq!(bad_value.severity(), ErrorSeverity::High);
        assert_eq!(
            bad_value.recovery_suggestion(),
            "Fix the configuration file and run again"
        );
    }
}
