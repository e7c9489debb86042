//! Error types for Elemforge
//!
//! Rule violations are not errors: an illegal [`crate::game::GameAction`] is
//! rejected with `false` and leaves the game state untouched. `DuelError`
//! covers genuine faults in the surrounding plumbing (malformed deck input,
//! unknown ids, I/O).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DuelError {
    #[error("Invalid card format: {0}")]
    InvalidCardFormat(String),

    #[error("Invalid deck format: {0}")]
    InvalidDeckFormat(String),

    #[error("Card not found: {0}")]
    CardNotFound(u32),

    #[error("Player not found: {0}")]
    PlayerNotFound(u32),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DuelError>;
