use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Server config lookup failed: {0}")]
    Lookup(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
