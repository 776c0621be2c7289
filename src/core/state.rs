//! Game state: the current round plus everything that outlives it.
//!
//! ## Per round
//!
//! - Target color and the options presented for it
//! - Outcome of the most recent guess
//!
//! ## Per session
//!
//! - Score (never reset by a new round)
//! - Round counter
//!
//! The state is plain data. All mutation goes through
//! [`GameEngine`](crate::engine::GameEngine), which upholds the invariants
//! checked by [`GameState::check_invariants`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::{Color, ColorOption, OptionId};
use super::config::OPTION_COUNT;
use super::error::{GameError, Result};

/// Options of one round, stored inline.
pub type Options = SmallVec<[ColorOption; OPTION_COUNT]>;

/// Result of the most recent guess in the current round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No guess since the round started.
    #[default]
    Unresolved,
    /// The last guess picked the target.
    Correct,
    /// The last guess picked a distractor.
    Incorrect,
}

impl Outcome {
    /// Text shown to the player for this outcome.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Outcome::Unresolved => "Escolha uma cor",
            Outcome::Correct => "Acertou!",
            Outcome::Incorrect => "Errou! Tente novamente!",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// Complete state of one game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) target: Color,
    pub(crate) options: Options,
    pub(crate) score: u64,
    pub(crate) last_outcome: Outcome,
    pub(crate) round: u64,
}

impl GameState {
    /// Build the state of a freshly generated round.
    ///
    /// `round` starts at 1 for the round drawn at construction.
    #[must_use]
    pub(crate) fn new(target: Color, options: Options, score: u64, round: u64) -> Self {
        Self {
            target,
            options,
            score,
            last_outcome: Outcome::Unresolved,
            round,
        }
    }

    /// The color to guess.
    #[must_use]
    pub fn target(&self) -> Color {
        self.target
    }

    /// Options in presentation order.
    #[must_use]
    pub fn options(&self) -> &[ColorOption] {
        &self.options
    }

    /// Cumulative score of the session.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Outcome of the most recent guess.
    #[must_use]
    pub fn last_outcome(&self) -> Outcome {
        self.last_outcome
    }

    /// Generation counter, incremented by every start/reset.
    #[must_use]
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Has a guess been made this round?
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.last_outcome != Outcome::Unresolved
    }

    /// Look up an option by id.
    #[must_use]
    pub fn option(&self, id: OptionId) -> Option<&ColorOption> {
        self.options.iter().find(|o| o.id == id)
    }

    /// The option whose color equals the target.
    #[must_use]
    pub fn correct_option(&self) -> Option<&ColorOption> {
        self.options.iter().find(|o| o.color == self.target)
    }

    /// Options whose color differs from the target.
    pub fn distractors(&self) -> impl Iterator<Item = &ColorOption> {
        self.options.iter().filter(move |o| o.color != self.target)
    }

    /// Verify the round invariants.
    ///
    /// Reports the first violation found as `InvalidSnapshot`. Used when a
    /// state arrives from outside the engine (snapshots).
    pub fn check_invariants(&self) -> Result<()> {
        let invalid = |reason: String| -> Result<()> { Err(GameError::InvalidSnapshot(reason)) };

        if self.options.len() != OPTION_COUNT {
            return invalid(format!(
                "expected {} options, found {}",
                OPTION_COUNT,
                self.options.len()
            ));
        }

        for (index, option) in self.options.iter().enumerate() {
            if option.id.index() >= OPTION_COUNT {
                return invalid(format!("{} is out of range", option.id));
            }
            if self.options[..index].iter().any(|o| o.id == option.id) {
                return invalid(format!("{} appears twice", option.id));
            }
        }

        let matches = self.options.iter().filter(|o| o.color == self.target).count();
        if matches != 1 {
            return invalid(format!(
                "expected exactly one option matching {}, found {}",
                self.target, matches
            ));
        }

        if self.round == 0 {
            return invalid("round counter must start at 1".to_string());
        }

        Ok(())
    }
}
