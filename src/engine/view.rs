//! Read-only view of a game for presentation layers.
//!
//! A view carries exactly what a page needs to render: the color text, one
//! CSS color per option, the outcome text and the score. It is detached from
//! the engine, so it can be sent across threads or serialized as JSON.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, OptionId};

/// One option as rendered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionView {
    pub id: OptionId,
    /// `rgb(r, g, b)`
    pub css: String,
}

/// Snapshot of everything shown on screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub round: u64,
    /// `(r, g, b)`
    pub display_color: String,
    pub options: Vec<OptionView>,
    pub outcome_text: String,
    pub score: u64,
}

impl GameView {
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        Self {
            round: state.round(),
            display_color: state.target().to_string(),
            options: state
                .options()
                .iter()
                .map(|o| OptionView {
                    id: o.id,
                    css: o.color.css(),
                })
                .collect(),
            outcome_text: state.last_outcome().text().to_string(),
            score: state.score(),
        }
    }

    /// Text for the score display.
    #[must_use]
    pub fn score_text(&self) -> String {
        format!("Placar: {}", self.score)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{Color, GameConfig};
    use crate::engine::GameEngine;

    #[test]
    fn test_view_mirrors_engine() {
        let engine = GameEngine::new(GameConfig::default(), 3).unwrap();
        let view = engine.view();

        assert_eq!(view.round, 1);
        assert_eq!(view.display_color, engine.display_color());
        assert_eq!(view.outcome_text, "Escolha uma cor");
        assert_eq!(view.score, 0);
        assert_eq!(view.options.len(), 6);

        for (view_option, option) in view.options.iter().zip(engine.options()) {
            assert_eq!(view_option.id, option.id);
            assert_eq!(view_option.css.parse::<Color>(), Ok(option.color));
        }
    }

    #[test]
    fn test_exactly_one_css_matches_display() {
        let engine = GameEngine::new(GameConfig::default(), 8).unwrap();
        let view = engine.view();
        let target: Color = view.display_color.parse().unwrap();

        let matches = view
            .options
            .iter()
            .filter(|o| o.css.parse::<Color>() == Ok(target))
            .count();
        assert_eq!(matches, 1);
    }

    #[test]
    fn test_score_text() {
        let mut engine = GameEngine::new(GameConfig::default(), 3).unwrap();
        let id = engine.state().correct_option().unwrap().id;
        engine.guess(id).unwrap();

        assert_eq!(engine.view().score_text(), "Placar: 3");
    }
}
