use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("Slot index out of range")]
    InvalidSlot,
    #[error("Session already ended, no new moves are accepted")]
    SessionOver,
    #[error("Session is running, difficulty is locked")]
    SessionRunning,
}

pub type Result<T> = core::result::Result<T, GameError>;
