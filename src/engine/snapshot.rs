//! Serializable engine snapshots.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameRngState, GameState};

/// Everything needed to resume a session exactly where it stopped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub state: GameState,
    /// RNG position, so future rounds match the original session.
    pub rng: GameRngState,
}

#[cfg(test)]
mod tests {
    use super::GameSnapshot;
    use crate::core::GameConfig;
    use crate::engine::GameEngine;

    #[test]
    fn test_snapshot_serde() {
        let engine = GameEngine::new(GameConfig::default(), 11).unwrap();
        let snapshot = engine.snapshot();

        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: GameSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(snapshot, deserialized);
    }
}
