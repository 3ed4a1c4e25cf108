use thiserror::Error;

pub const STATUS_OK: &str = "OK";
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Failures talking to the maps provider. "Nothing found" is not one of them.
#[derive(Debug, Error)]
pub enum MapsError {
    #[error("Request to the maps provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Maps provider rejected the request with status `{status}`: {message}")]
    Rejected { status: String, message: String },
}

impl MapsError {
    /// Checks a provider `status` field, treating `OK`, `ZERO_RESULTS` and no status as success.
    pub fn check_status(
        status: Option<&str>,
        error_message: Option<String>,
    ) -> Result<(), MapsError> {
        match status {
            None | Some(STATUS_OK) | Some(STATUS_ZERO_RESULTS) => Ok(()),
            Some(status) => Err(MapsError::Rejected {
                status: status.to_string(),
                message: error_message.unwrap_or_else(|| String::from("no details provided")),
            }),
        }
    }
}
