use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The document has no element with this id.
    #[error("element #{0} not found in document")]
    MissingElement(&'static str),

    #[error("no click handler bound to #{0}")]
    UnboundTarget(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
