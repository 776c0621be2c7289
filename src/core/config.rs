//! Game configuration.
//!
//! The defaults reproduce the classic game: six options, three points per
//! correct guess, distractors that never repeat within a round.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Number of options presented each round.
pub const OPTION_COUNT: usize = 6;

/// Number of wrong options each round.
pub const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

/// Game configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Points added to the score on a correct guess (default: 3).
    pub points_per_hit: u32,

    /// Require distractors to differ from each other, not only from the
    /// target (default: true).
    pub distinct_distractors: bool,

    /// Maximum distractor draws per round before generation fails.
    pub max_generation_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            points_per_hit: 3,
            distinct_distractors: true,
            max_generation_attempts: 1024,
        }
    }
}

impl GameConfig {
    /// Set the points awarded per correct guess.
    #[must_use]
    pub fn with_points_per_hit(mut self, points: u32) -> Self {
        self.points_per_hit = points;
        self
    }

    /// Allow or forbid repeated distractor colors within a round.
    #[must_use]
    pub fn with_distinct_distractors(mut self, distinct: bool) -> Self {
        self.distinct_distractors = distinct;
        self
    }

    /// Set the distractor draw budget.
    #[must_use]
    pub fn with_max_generation_attempts(mut self, attempts: u32) -> Self {
        self.max_generation_attempts = attempts;
        self
    }

    /// Check the configuration before an engine is built from it.
    pub fn validate(&self) -> Result<()> {
        if self.points_per_hit == 0 {
            return Err(GameError::InvalidConfig(
                "points_per_hit must be at least 1".to_string(),
            ));
        }
        // Every attempt yields at most one distractor
        if (self.max_generation_attempts as usize) < DISTRACTOR_COUNT {
            return Err(GameError::InvalidConfig(format!(
                "max_generation_attempts must be at least {}",
                DISTRACTOR_COUNT
            )));
        }
        Ok(())
    }
}
