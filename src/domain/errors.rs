#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The backing file could not be read or written
    Io(String),
    /// The backing file exists but is not valid structured data
    Malformed(String),
    /// An expense amount was not a usable non-negative number
    InvalidAmount(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(msg) => {
                write!(f, "File error: {}", msg)
            }
            StoreError::Malformed(msg) => {
                write!(f, "Malformed store file: {}", msg)
            }
            StoreError::InvalidAmount(value) => {
                write!(f, "Invalid amount: {}", value)
            }
        }
    }
}

impl std::error::Error for StoreError {}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// No API key was configured for this provider
    MissingKey,
    /// The provider answered, but not with data for the requested city
    CityNotFound,
    /// Transport-level failure (timeout, DNS, connection refused)
    Http(String),
    /// The provider answered with a body we could not decode
    UnexpectedPayload(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::MissingKey => {
                write!(f, "API key not configured")
            }
            FetchError::CityNotFound => {
                write!(f, "City not found")
            }
            FetchError::Http(msg) => {
                write!(f, "Request failed: {}", msg)
            }
            FetchError::UnexpectedPayload(msg) => {
                write!(f, "Unexpected response: {}", msg)
            }
        }
    }
}

impl std::error::Error for FetchError {}

pub type FetchResult<T> = Result<T, FetchError>;
