use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("invalid regex pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("you must set at least one allow-skip or disallow-skip pattern")]
    EmptyPolicy,
}

pub type Result<T> = std::result::Result<T, PolicyError>;
