//! Property tests for round generation and scoring.

use proptest::prelude::*;
use std::collections::HashSet;

use color_guess::{Color, GameConfig, GameEngine, Outcome, OPTION_COUNT};

/// Mirrors the color text check a page test applies:
/// `\((\s*\d{1,3}\s*,){2}\s*\d{1,3}\s*\)`
fn matches_display_pattern(text: &str) -> bool {
    let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) else {
        return false;
    };
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|p| (1..=3).contains(&p.len()) && p.bytes().all(|b| b.is_ascii_digit()))
}

proptest! {
    #[test]
    fn prop_round_invariants(seed in any::<u64>(), resets in 0usize..20) {
        let mut engine = GameEngine::new(GameConfig::default(), seed).unwrap();
        for _ in 0..resets {
            engine.reset().unwrap();
        }

        let state = engine.state();
        prop_assert_eq!(state.options().len(), OPTION_COUNT);
        prop_assert_eq!(
            state.options().iter().filter(|o| o.color == state.target()).count(),
            1
        );
        prop_assert!(state.check_invariants().is_ok());
        prop_assert_eq!(engine.outcome(), Outcome::Unresolved);
    }

    #[test]
    fn prop_distractors_pairwise_distinct(seed in any::<u64>()) {
        let engine = GameEngine::new(GameConfig::default(), seed).unwrap();
        let colors: HashSet<Color> = engine.options().iter().map(|o| o.color).collect();
        prop_assert_eq!(colors.len(), OPTION_COUNT);
    }

    #[test]
    fn prop_relaxed_config_keeps_single_match(seed in any::<u64>()) {
        let config = GameConfig::default().with_distinct_distractors(false);
        let engine = GameEngine::new(config, seed).unwrap();
        let state = engine.state();
        prop_assert!(state.distractors().all(|o| o.color != state.target()));
        prop_assert_eq!(state.distractors().count(), OPTION_COUNT - 1);
    }

    #[test]
    fn prop_display_color_shape(seed in any::<u64>()) {
        let engine = GameEngine::new(GameConfig::default(), seed).unwrap();
        let text = engine.display_color();
        prop_assert!(matches_display_pattern(&text), "bad display text {}", text);
        prop_assert_eq!(text.parse::<Color>().unwrap(), engine.state().target());
    }

    #[test]
    fn prop_any_color_displays_and_parses(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let color = Color::new(r, g, b);
        prop_assert!(matches_display_pattern(&color.to_string()));
        prop_assert_eq!(color.css().parse::<Color>(), Ok(color));
    }

    #[test]
    fn prop_score_counts_hits(seed in any::<u64>(), moves in prop::collection::vec((any::<bool>(), any::<bool>()), 0..30)) {
        let mut engine = GameEngine::new(GameConfig::default(), seed).unwrap();
        let mut expected = 0u64;

        for (aim_right, reset_after) in moves {
            let state = engine.state();
            let id = if aim_right {
                state.correct_option().unwrap().id
            } else {
                state.distractors().next().unwrap().id
            };

            let outcome = engine.guess(id).unwrap();
            if aim_right {
                prop_assert_eq!(outcome, Outcome::Correct);
                expected += 3;
            } else {
                prop_assert_eq!(outcome, Outcome::Incorrect);
            }
            prop_assert_eq!(engine.score(), expected);

            if reset_after {
                engine.reset().unwrap();
                prop_assert_eq!(engine.score(), expected);
            }
        }
    }
}
