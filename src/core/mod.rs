//! Core types: colors, options, state, configuration, RNG, errors.
//!
//! Everything here is plain data plus the rules that keep it consistent.
//! The [`engine`](crate::engine) module drives it.

pub mod color;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use color::{Color, ColorOption, ColorParseError, OptionId};
pub use config::{GameConfig, DISTRACTOR_COUNT, OPTION_COUNT};
pub use error::{GameError, Result};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Options, Outcome};
