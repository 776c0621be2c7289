//! Engine error types.
//!
//! Every error here is a programmer error on the caller's side or an
//! exhausted generation budget. None of them has a player-facing message;
//! players only ever see the outcome texts.

use thiserror::Error;

use super::color::OptionId;

/// Result type alias using [`GameError`].
pub type Result<T> = std::result::Result<T, GameError>;

/// Engine errors.
#[derive(Error, Debug)]
pub enum GameError {
    /// `guess()` named an option that is not part of the current round.
    #[error("{id} is not an option of round {round}")]
    InvalidOptionReference { id: OptionId, round: u64 },

    /// A guess was made against a round that has since been replaced.
    #[error("{id} was chosen in round {round}, but the current round is {current}")]
    StaleRound {
        id: OptionId,
        round: u64,
        current: u64,
    },

    /// Distractor generation gave up before finding enough colors.
    #[error("generated {found} of {needed} distractors in {attempts} attempts")]
    ImpossibleGeneration {
        found: usize,
        needed: usize,
        attempts: u32,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    /// A snapshot decoded fine but describes an impossible round.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}
