//! # color-guess
//!
//! Engine for an RGB color-guessing game.
//!
//! Each round draws a target color and six options, exactly one of which
//! matches the target. Guessing the match scores points; a reset draws a new
//! round but keeps the score.
//!
//! ## Design Principles
//!
//! 1. **Pure state**: The engine decides, a presentation layer renders.
//!    Nothing here knows about pages, buttons or styles.
//!
//! 2. **Injected randomness**: Every engine owns a seeded `GameRng`.
//!    Same seed, same rounds.
//!
//! 3. **Loud contract violations**: Guessing an option that is not on screen
//!    is an error, never a silent miss.
//!
//! ## Modules
//!
//! - `core`: Colors, options, state, configuration, RNG, errors
//! - `engine`: The game state machine, views, snapshots, shared handle
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod engine;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Color, ColorOption, ColorParseError, OptionId,
    GameConfig, OPTION_COUNT, DISTRACTOR_COUNT,
    GameError, Result,
    GameRng, GameRngState,
    GameState, Outcome,
};

pub use crate::engine::{GameEngine, GameSnapshot, GameView, OptionView, SharedGameEngine};
