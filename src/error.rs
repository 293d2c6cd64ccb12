use reqwest::StatusCode;

/// Why a call to an external service produced nothing usable.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("unparsable body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no usable result")]
    Empty,

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

pub type FetchResult<T> = Result<T, FetchError>;
