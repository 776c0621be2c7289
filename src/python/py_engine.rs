//! Engine bindings for Python.

use pyo3::prelude::*;

use crate::core::GameConfig;
use crate::engine::GameEngine;

use super::py_core::{to_py_err, PyColor, PyOptionId};

/// Python wrapper for GameEngine.
///
/// One instance is one game session.
#[pyclass(name = "ColorGuessGame")]
pub struct PyColorGuessGame {
    engine: GameEngine,
}

#[pymethods]
impl PyColorGuessGame {
    /// Create a new game and draw the first round.
    ///
    /// # Arguments
    /// - seed: RNG seed; `None` seeds from OS entropy
    /// - points_per_hit: Points added per correct guess
    /// - distinct_distractors: Forbid repeated wrong colors within a round
    #[new]
    #[pyo3(signature = (seed = None, points_per_hit = 3, distinct_distractors = true))]
    fn new(seed: Option<u64>, points_per_hit: u32, distinct_distractors: bool) -> PyResult<Self> {
        let config = GameConfig::default()
            .with_points_per_hit(points_per_hit)
            .with_distinct_distractors(distinct_distractors);
        let engine = match seed {
            Some(seed) => GameEngine::new(config, seed),
            None => GameEngine::from_entropy(config),
        }
        .map_err(to_py_err)?;
        Ok(Self { engine })
    }

    /// Draw a new round, keeping the score.
    fn reset(&mut self) -> PyResult<()> {
        self.engine.reset().map_err(to_py_err)
    }

    /// Guess an option. Returns the outcome text.
    fn guess(&mut self, option: &PyOptionId) -> PyResult<&'static str> {
        self.engine
            .guess(option.0)
            .map(|outcome| outcome.text())
            .map_err(to_py_err)
    }

    /// The target as `(r, g, b)`.
    fn display_color(&self) -> String {
        self.engine.display_color()
    }

    /// Text for the current outcome.
    fn outcome_text(&self) -> &'static str {
        self.engine.outcome_text()
    }

    #[getter]
    fn score(&self) -> u64 {
        self.engine.score()
    }

    #[getter]
    fn round(&self) -> u64 {
        self.engine.round()
    }

    /// Options in presentation order.
    fn options(&self) -> Vec<(PyOptionId, PyColor)> {
        self.engine
            .options()
            .iter()
            .map(|o| (PyOptionId(o.id), PyColor(o.color)))
            .collect()
    }

    /// Encode the session as bytes.
    fn to_bytes(&self) -> PyResult<Vec<u8>> {
        self.engine.to_bytes().map_err(to_py_err)
    }

    /// Resume a session from `to_bytes()` output.
    #[staticmethod]
    fn from_bytes(data: Vec<u8>) -> PyResult<Self> {
        let engine = GameEngine::from_bytes(&data).map_err(to_py_err)?;
        Ok(Self { engine })
    }

    fn __repr__(&self) -> String {
        format!(
            "ColorGuessGame(round={}, score={}, outcome={:?})",
            self.engine.round(),
            self.engine.score(),
            self.engine.outcome_text()
        )
    }
}
