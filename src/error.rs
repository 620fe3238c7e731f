use thiserror::Error;

/// Missing or incomplete configuration, detected before any network I/O.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set. Add it to the environment or your .env file.")]
    MissingApiKey,
    #[error("Email configuration is incomplete: {0} is not set")]
    MissingEmailValue(&'static str),
}

/// Failure while producing the dictionary report.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Failed to reach the generation endpoint: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API call failed with status {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error("Failed to decode the API response: {0}")]
    Envelope(String),
    #[error("Generated text is not a valid term list: {0}")]
    TermList(#[from] serde_json::Error),
}

/// Failure while handing the report to the SMTP relay.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Invalid mailbox address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("Could not assemble the email: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("SMTP delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
