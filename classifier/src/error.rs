use thiserror::Error;

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("inference api answered {code}: {message}")]
    Status {
        code: u16,
        message: String,
    },
    #[error("model is still loading, retry in about {estimated_time:.0}s")]
    ModelLoading {
        estimated_time: f32,
    },
    #[error("cannot decode inference answer: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("malformed inference answer: {0}")]
    Malformed(String),
    #[error("inference answer has no labels")]
    Empty,
}

pub type GatewayResult<T> = Result<T, ErrorKind>;
