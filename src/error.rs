use thiserror::Error;

/// Shown to users whenever the endpoint gives us nothing bookable to report.
pub const UNAVAILABLE_MESSAGE: &str = "We do not have any flights on the date and route you have \
     selected or all our flights are sold out.";

/// Fallback business error when the endpoint reports failure without a detail code.
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("failed to encode search payload: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("no data received from the availability endpoint")]
    EmptyResponse,

    /// The body did not match the response schema. Displays as the generic
    /// unavailability text; the parse failure stays reachable via `source()`.
    #[error("{}", UNAVAILABLE_MESSAGE)]
    Decode(#[source] DecodeError),

    #[error("{0}")]
    Business(String),

    #[error("invalid airport code \"{0}\" — must be exactly 3 letters (e.g. IST, LHR, JFK)")]
    InvalidAirport(String),

    #[error("invalid date \"{0}\" — must be YYYY-MM-DD format (e.g. 2026-03-01)")]
    InvalidDate(String),

    #[error("{0}")]
    Validation(String),
}

impl SearchError {
    /// Text meant for end users. Decode failures and detail-less business
    /// failures collapse to the same unavailability message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Decode(_) => UNAVAILABLE_MESSAGE.to_string(),
            Self::Business(code) if code == UNKNOWN_ERROR => UNAVAILABLE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        self.user_message() == UNAVAILABLE_MESSAGE
    }

    pub fn decode_cause(&self) -> Option<&DecodeError> {
        match self {
            Self::Decode(cause) => Some(cause),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out — the airline endpoint may be slow or unreachable. \
             Try increasing --timeout or check your connection")]
    Timeout,

    #[error("connection failed — check your internet connection ({0})")]
    Connect(String),

    #[error("DNS resolution failed — check your internet connection ({0})")]
    Dns(String),

    #[error("proxy error — check your --proxy URL is correct ({0})")]
    Proxy(String),

    #[error("TLS/SSL error — connection to the airline failed ({0})")]
    Tls(String),

    #[error("I/O error while talking to the airline ({0})")]
    Io(String),
}

/// A response body that could not be decoded into `SearchResponse`.
#[derive(Debug, Error)]
#[error("{message} in {type_name} at `{path}` (line {line}, column {column})")]
pub struct DecodeError {
    message: String,
    path: String,
    type_name: &'static str,
    line: usize,
    column: usize,
    #[source]
    cause: serde_json::Error,
}

impl DecodeError {
    pub fn new(cause: serde_json::Error, path: String, type_name: &'static str) -> Self {
        let full = cause.to_string();
        // serde_json appends " at line X column Y"; keep the bare message
        let message = match full.rsplit_once(" at line ") {
            Some((head, _)) => head.to_string(),
            None => full,
        };
        Self {
            message,
            path,
            type_name,
            line: cause.line(),
            column: cause.column(),
            cause,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Location of the failing value, e.g. `data.originDestinationInformationList[0]`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Schema type that was being decoded when the error occurred.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn is_syntax(&self) -> bool {
        self.cause.is_syntax() || self.cause.is_eof()
    }

    pub fn is_missing_field(&self) -> bool {
        self.message.starts_with("missing field")
    }

    pub fn cause(&self) -> &serde_json::Error {
        &self.cause
    }
}

pub fn from_http_error(err: wreq::Error) -> TransportError {
    let msg = err.to_string();
    let lower = msg.to_lowercase();

    if err.is_timeout() {
        return TransportError::Timeout;
    }

    if err.is_connect() {
        if lower.contains("dns") || lower.contains("resolve") || lower.contains("getaddrinfo") {
            return TransportError::Dns(msg);
        }
        return TransportError::Connect(msg);
    }

    if lower.contains("proxy") || lower.contains("socks") {
        return TransportError::Proxy(msg);
    }

    if lower.contains("tls") || lower.contains("ssl") || lower.contains("certificate") {
        return TransportError::Tls(msg);
    }

    TransportError::Io(msg)
}
