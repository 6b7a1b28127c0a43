use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("answer has {len} characters, at least {min} needed")]
    TooShort { len: usize, min: usize },
    #[error("still waiting for the previous answer")]
    Busy,
    #[error("no game running")]
    NotPlaying,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("at least one topic is needed")]
    NoTopics,
    #[error("threshold {0} is outside [0, 1]")]
    Threshold(f32),
    #[error("time limit must be positive, got {0}")]
    TimeLimit(f32),
}

pub type SubmitResult<T> = Result<T, SubmitError>;
