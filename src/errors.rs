use std::fmt;

/// Main error type for the chaosdex data layer.
///
/// Resolution itself never errors: an unresolved name is `None`, and the
/// caller renders a "not available" state. Errors only arise at the
/// data-acquisition boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DexError {
    /// Error fetching or decoding an upstream dataset
    Fetch(FetchError),
}

/// Errors from the upstream dataset fetchers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request could not be sent or timed out
    Request { url: String, message: String },
    /// The server answered with a non-success status
    Status { url: String, status: u16 },
    /// The response body was not the expected JSON shape
    Decode { url: String, message: String },
}

impl fmt::Display for DexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DexError::Fetch(err) => write!(f, "Fetch error: {}", err),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Request { url, message } => {
                write!(f, "Request failed for {}: {}", url, message)
            }
            FetchError::Status { url, status } => {
                write!(f, "Unexpected status {} for {}", status, url)
            }
            FetchError::Decode { url, message } => {
                write!(f, "Malformed response from {}: {}", url, message)
            }
        }
    }
}

impl std::error::Error for DexError {}
impl std::error::Error for FetchError {}

impl From<FetchError> for DexError {
    fn from(err: FetchError) -> Self {
        DexError::Fetch(err)
    }
}

/// Type alias for Results using DexError
pub type DexResult<T> = Result<T, DexError>;

/// Type alias for Results using FetchError
pub type FetchResult<T> = Result<T, FetchError>;
