// shared/src/lib.rs

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0} is required")]
    MissingParam(&'static str),
    #[error("invalid value for {name}: {value:?}")]
    InvalidParam { name: &'static str, value: String },
    #[error("upstream responded with status {status}")]
    UpstreamStatus {
        code: &'static str,
        status: u16,
        body: String,
    },
    #[error("{0}")]
    Transport(String),
    #[error("invalid upstream payload: {0}")]
    InvalidPayload(String),
    #[error("no route for {0}")]
    NotFound(String),
    #[error("configuration: {0}")]
    Config(String),
}

impl Error {
    /// Machine-readable code sent as the `error` field of a response body
    pub fn code(&self) -> &'static str {
        match self {
            Error::MissingParam(_) => "missing_param",
            Error::InvalidParam { .. } => "invalid_param",
            Error::UpstreamStatus { code, .. } => code,
            Error::Transport(_) | Error::InvalidPayload(_) => "upstream_error",
            Error::NotFound(_) => "not_found",
            Error::Config(_) => "config_error",
        }
    }

    /// HTTP status the gateway answers with
    pub fn status(&self) -> u16 {
        match self {
            Error::MissingParam(_) | Error::InvalidParam { .. } => 400,
            Error::UpstreamStatus { status, .. } => *status,
            Error::Transport(_) | Error::InvalidPayload(_) => 502,
            Error::NotFound(_) => 404,
            Error::Config(_) => 500,
        }
    }

    /// Human-readable detail; upstream errors pass the raw upstream body through
    pub fn detail(&self) -> String {
        match self {
            Error::UpstreamStatus { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod config;
pub mod region;

pub use region::Region;
