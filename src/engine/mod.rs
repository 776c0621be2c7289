//! The color-guessing game engine.
//!
//! - `game`: [`GameEngine`], the state machine driving one session
//! - `generator`: target and distractor draws
//! - `view`: detached, presentation-ready state
//! - `snapshot`: serializable engine checkpoints
//! - `shared`: lock-protected handle for several surfaces

mod game;
mod generator;
pub mod shared;
pub mod snapshot;
pub mod view;

pub use game::GameEngine;
pub use shared::SharedGameEngine;
pub use snapshot::GameSnapshot;
pub use view::{GameView, OptionView};
