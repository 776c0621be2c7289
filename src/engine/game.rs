//! The game engine: owns one session's state and RNG.

use tracing::{debug, info, warn};

use super::generator::generate_round;
use super::snapshot::GameSnapshot;
use super::view::GameView;
use crate::core::{
    Color, ColorOption, GameConfig, GameError, GameRng, GameState, OptionId, Outcome, Result,
};

/// Single source of truth for one game session.
///
/// ## State machine
///
/// - `start()` / `reset()`: any outcome → `Unresolved`, new target and options
/// - `guess(target)`: → `Correct`, score += `points_per_hit`
/// - `guess(distractor)`: → `Incorrect`, score unchanged
///
/// There is no terminal state; the cycle repeats for as long as the session
/// lives.
///
/// ## Example
///
/// ```
/// use color_guess::{GameConfig, GameEngine, Outcome};
///
/// let mut engine = GameEngine::new(GameConfig::default(), 42).unwrap();
/// assert_eq!(engine.outcome_text(), "Escolha uma cor");
///
/// let correct = engine.state().correct_option().unwrap().id;
/// assert_eq!(engine.guess(correct).unwrap(), Outcome::Correct);
/// assert_eq!(engine.score(), 3);
///
/// engine.reset().unwrap();
/// assert_eq!(engine.score(), 3);
/// assert_eq!(engine.outcome(), Outcome::Unresolved);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    rng: GameRng,
}

impl GameEngine {
    /// Create an engine with a seeded RNG and draw the first round.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Create an engine seeded from OS entropy.
    pub fn from_entropy(config: GameConfig) -> Result<Self> {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Create an engine around an existing RNG and draw the first round.
    ///
    /// The score starts at 0 here and nowhere else.
    pub fn with_rng(config: GameConfig, mut rng: GameRng) -> Result<Self> {
        config.validate()?;
        let state = Self::next_round(&mut rng, &config, Color::random, 0, 1)?;
        Ok(Self { config, state, rng })
    }

    fn next_round(
        rng: &mut GameRng,
        config: &GameConfig,
        draw: impl FnMut(&mut GameRng) -> Color,
        score: u64,
        round: u64,
    ) -> Result<GameState> {
        let (target, options) = generate_round(rng, config, draw)?;
        debug!(round, target = %target, "generated round");
        Ok(GameState::new(target, options, score, round))
    }

    /// Start a new round.
    ///
    /// Replaces the target and all options and clears the outcome. The score
    /// is carried over. On failure the current round is left as it was.
    pub fn start(&mut self) -> Result<()> {
        self.start_with(Color::random)
    }

    fn start_with(&mut self, draw: impl FnMut(&mut GameRng) -> Color) -> Result<()> {
        let round = self.state.round + 1;
        self.state = Self::next_round(&mut self.rng, &self.config, draw, self.state.score, round)?;
        Ok(())
    }

    /// Restart the game. Same as [`start`](Self::start); never touches the score.
    pub fn reset(&mut self) -> Result<()> {
        info!(round = self.state.round, score = self.state.score, "resetting game");
        self.start()
    }

    /// Judge a guess against the current target.
    ///
    /// Each guess is evaluated on its own; earlier guesses in the same round
    /// only matter through the score they already added.
    pub fn guess(&mut self, id: OptionId) -> Result<Outcome> {
        let option = self.lookup(id)?;

        let outcome = if option.color == self.state.target {
            self.state.score = self.state.score.saturating_add(u64::from(self.config.points_per_hit));
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };
        self.state.last_outcome = outcome;

        debug!(
            round = self.state.round,
            option = %id,
            ?outcome,
            score = self.state.score,
            "guess evaluated"
        );
        Ok(outcome)
    }

    /// Judge a guess made against a specific round.
    ///
    /// Fails with `StaleRound` if the caller rendered a round other than the
    /// current one, since its option ids point at colors that no longer exist.
    pub fn guess_in_round(&mut self, round: u64, id: OptionId) -> Result<Outcome> {
        if round != self.state.round {
            warn!(stale_round = round, round = self.state.round, option = %id, "guess for stale round");
            return Err(GameError::StaleRound {
                id,
                round,
                current: self.state.round,
            });
        }
        self.guess(id)
    }

    fn lookup(&self, id: OptionId) -> Result<ColorOption> {
        match self.state.option(id) {
            Some(option) => Ok(*option),
            None => {
                warn!(round = self.state.round, option = %id, "guess for unknown option");
                Err(GameError::InvalidOptionReference {
                    id,
                    round: self.state.round,
                })
            }
        }
    }

    // === Queries ===

    /// The target formatted as `(r, g, b)`.
    #[must_use]
    pub fn display_color(&self) -> String {
        self.state.target.to_string()
    }

    /// Cumulative score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.state.score
    }

    /// Outcome of the most recent guess.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.state.last_outcome
    }

    /// Text for the current outcome.
    #[must_use]
    pub fn outcome_text(&self) -> &'static str {
        self.state.last_outcome.text()
    }

    /// Options of the current round.
    #[must_use]
    pub fn options(&self) -> &[ColorOption] {
        self.state.options()
    }

    /// Current round number (1 after construction).
    #[must_use]
    pub fn round(&self) -> u64 {
        self.state.round
    }

    /// Full state, read-only.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Presentation-ready view of the current state.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView::from_state(&self.state)
    }

    // === Snapshots ===

    /// Capture config, state and RNG position.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config.clone(),
            state: self.state.clone(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild an engine from a snapshot.
    ///
    /// The restored engine produces the same future rounds as the one the
    /// snapshot was taken from.
    pub fn restore(snapshot: GameSnapshot) -> Result<Self> {
        snapshot.config.validate()?;
        snapshot.state.check_invariants()?;

        Ok(Self {
            rng: GameRng::from_state(&snapshot.rng),
            config: snapshot.config,
            state: snapshot.state,
        })
    }

    /// Encode a snapshot with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(&self.snapshot())?)
    }

    /// Decode and restore a bincode snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let snapshot: GameSnapshot = bincode::deserialize(bytes)?;
        Self::restore(snapshot)
    }
}
