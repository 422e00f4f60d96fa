//! Error types for the hearth engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HearthError {
    #[error("Entity not found: {0}")]
    EntityNotFound(u32),

    #[error("Invalid game action: {0}")]
    InvalidAction(String),
}

pub type Result<T> = std::result::Result<T, HearthError>;
