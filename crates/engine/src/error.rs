//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidRecord`] thrown when a record is rejected at the data-entry
//!   boundary.
//! - [`KeyNotFound`] thrown when an item is not found.
//! - [`ExistingKey`] thrown when a vehicle name is already taken.
//!
//!  [`InvalidRecord`]: EngineError::InvalidRecord
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`ExistingKey`]: EngineError::ExistingKey
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid record: {0}")]
    InvalidRecord(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidRecord(a), Self::InvalidRecord(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            _ => false,
        }
    }
}
