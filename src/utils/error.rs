use thiserror::Error;

#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("Webhook request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Request file error: {0}")]
    RequestFile(#[from] toml::de::Error),

    #[error("Invalid value for {field}: \"{value}\" ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Webhook rejected the submission: {message}")]
    Rejected { message: String },
}

impl BudgetError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BudgetError::Http(_) => {
                "Check your network connection and that the webhook endpoint is reachable"
            }
            BudgetError::Serialization(_) => "This is a bug; please report the submission payload",
            BudgetError::Io(_) => "Check that the request file exists and is readable",
            BudgetError::RequestFile(_) => {
                "Check the TOML syntax of the request file ([contact], [service], [project])"
            }
            BudgetError::InvalidConfigValue { .. } => {
                "Run with --help to see the expected flags and values"
            }
            BudgetError::Validation { .. } => "Fix the listed form fields and try again",
            BudgetError::Rejected { .. } => "Try again later or contact us via WhatsApp instead",
        }
    }
}

pub type Result<T> = std::result::Result<T, BudgetError>;
