use thiserror::Error;

/// Failure of a single gateway call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The server answered with a status outside `200..300`.
    #[error("{message}")]
    RemoteRequest { status: u16, message: String },

    /// The body was not JSON of the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// No API key is configured; the weather endpoint was not called.
    #[error("No weather API key configured")]
    MissingApiKey,

    /// The request never produced a usable response (connect, timeout, body read).
    #[error("request failed: {0}")]
    Transport(String),
}

impl GatewayError {
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::RemoteRequest { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Why a submission did not produce a weather snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Input was blank; no request was made.
    #[error("city name is empty")]
    Validation,

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
