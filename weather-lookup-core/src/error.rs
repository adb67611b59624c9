use reqwest::StatusCode;
use thiserror::Error;

/// Why a lookup produced no result.
///
/// Transport failures (`ConnectionFailure`, `Timeout`, `TooManyRedirects`), HTTP status
/// failures (`BadRequest` .. `GatewayTimeout`) and anything else (`Unknown`) are all terminal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Bad request: please check the city name")]
    BadRequest,

    #[error("Unauthorized: please check your API key")]
    Unauthorized,

    #[error("Forbidden: access denied to the requested resource")]
    Forbidden,

    #[error("City not found: please check the city name")]
    NotFound,

    #[error("Internal server error: please try again later")]
    ServerError,

    #[error("Bad gateway: the server is down or not responding")]
    BadGateway,

    #[error("Service unavailable: the server is currently unavailable")]
    ServiceUnavailable,

    #[error("Gateway timeout: the server took too long to respond")]
    GatewayTimeout,

    #[error("Connection error: please check your internet connection")]
    ConnectionFailure,

    #[error("Timeout: the request took too long to complete")]
    Timeout,

    #[error("Too many redirects: the URL may be incorrect or the server is misconfigured")]
    TooManyRedirects,

    #[error("An error occurred: {0}")]
    Unknown(String),
}

impl LookupError {
    /// Variant for a status with a dedicated category, `None` for every other code.
    pub fn from_known_status(status: StatusCode) -> Option<Self> {
        let err = match status.as_u16() {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            500 => Self::ServerError,
            502 => Self::BadGateway,
            503 => Self::ServiceUnavailable,
            504 => Self::GatewayTimeout,
            _ => return None,
        };
        Some(err)
    }

    /// Classify a non-success HTTP status. `body` is only used for unmapped codes.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        Self::from_known_status(status).unwrap_or_else(|| {
            Self::Unknown(format!("HTTP {status}: {}", truncate_body(body)))
        })
    }

    /// Classify a failure that happened before a response was received.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_redirect() {
            Self::TooManyRedirects
        } else if err.is_connect() {
            Self::ConnectionFailure
        } else {
            Self::Unknown(err.to_string())
        }
    }

    /// True for failures raised before any HTTP status was seen.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::ConnectionFailure | Self::Timeout | Self::TooManyRedirects)
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
