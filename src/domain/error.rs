// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("AnkiConnect is unreachable: {0}")]
    Unreachable(String),
    #[error("AnkiConnect error: {0}")]
    Api(String),
    #[error("Malformed AnkiConnect response: {0}")]
    MalformedResponse(String),
}
