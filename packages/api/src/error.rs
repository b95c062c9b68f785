//! Error taxonomy for backend calls.

use thiserror::Error;

/// Failure of a backend call.
///
/// The backend's error bodies are never parsed; an expired token, a 500 and
/// a dropped connection all surface to the user the same way.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("server returned status {status}")]
    Status { status: u16 },
    /// The request never completed.
    #[error("request failed: {0}")]
    Transport(String),
    /// The response body did not decode as expected.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Map a non-2xx status to [`ApiError::Status`].
pub(crate) fn expect_success(response: &reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
        })
    }
}
