//! Engine handle shared between several presentation surfaces.
//!
//! Every operation takes the lock once, so a caller never sees the target of
//! one round next to the options of another.

use std::sync::Arc;

use parking_lot::Mutex;

use super::game::GameEngine;
use super::view::GameView;
use crate::core::{OptionId, Outcome, Result};

/// Cloneable, thread-safe handle to one [`GameEngine`].
#[derive(Clone, Debug)]
pub struct SharedGameEngine {
    inner: Arc<Mutex<GameEngine>>,
}

impl SharedGameEngine {
    #[must_use]
    pub fn new(engine: GameEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Restart the game and return the new round's view.
    pub fn reset(&self) -> Result<GameView> {
        let mut engine = self.inner.lock();
        engine.reset()?;
        Ok(engine.view())
    }

    /// Guess an option of the round the caller rendered.
    ///
    /// Fails with `StaleRound` if another surface has reset the
    /// game since `view.round`.
    pub fn guess(&self, round: u64, id: OptionId) -> Result<(Outcome, GameView)> {
        let mut engine = self.inner.lock();
        let outcome = engine.guess_in_round(round, id)?;
        Ok((outcome, engine.view()))
    }

    /// Current view.
    #[must_use]
    pub fn view(&self) -> GameView {
        self.inner.lock().view()
    }

    /// Run a read-only closure against the engine under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&GameEngine) -> R) -> R {
        f(&*self.inner.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, GameError};
    use std::thread;

    fn shared() -> SharedGameEngine {
        SharedGameEngine::new(GameEngine::new(GameConfig::default(), 42).unwrap())
    }

    fn correct_id(shared: &SharedGameEngine) -> OptionId {
        shared.with(|e| e.state().correct_option().unwrap().id)
    }

    #[test]
    fn test_guess_returns_fresh_view() {
        let shared = shared();
        let view = shared.view();
        let id = correct_id(&shared);

        let (outcome, after) = shared.guess(view.round, id).unwrap();

        assert_eq!(outcome, Outcome::Correct);
        assert_eq!(after.score, 3);
        assert_eq!(after.outcome_text, "Acertou!");
    }

    #[test]
    fn test_other_surface_reset_invalidates_guess() {
        let surface_a = shared();
        let surface_b = surface_a.clone();

        let seen_by_a = surface_a.view();
        let id = correct_id(&surface_a);
        surface_b.reset().unwrap();

        let err = surface_a.guess(seen_by_a.round, id).unwrap_err();
        assert!(matches!(err, GameError::StaleRound { .. }));
        assert_eq!(surface_a.view().score, 0);
    }

    #[test]
    fn test_concurrent_guesses_serialize() {
        let shared = shared();
        let round = shared.view().round;
        let id = correct_id(&shared);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let handle = shared.clone();
                thread::spawn(move || handle.guess(round, id).map(|(o, _)| o))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), Outcome::Correct);
        }
        assert_eq!(shared.view().score, 24);
    }

    #[test]
    fn test_concurrent_resets_keep_invariants() {
        let shared = shared();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let handle = shared.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        handle.reset().unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.view().round, 101);
        shared.with(|e| e.state().check_invariants().unwrap());
    }
}
