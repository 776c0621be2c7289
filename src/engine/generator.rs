//! Round generation: one target, five distractors, shuffled together.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::warn;

use crate::core::{
    Color, ColorOption, GameConfig, GameError, GameRng, OptionId, Options, Result,
    DISTRACTOR_COUNT, OPTION_COUNT,
};

/// Distractors of one round.
pub(crate) type Distractors = SmallVec<[Color; DISTRACTOR_COUNT]>;

/// Draw a fresh target and option set.
///
/// `draw` supplies every color, the target first; [`Color::random`] in play.
/// The target sits at a random position among the options. Option ids are
/// assigned by position after shuffling.
pub(crate) fn generate_round(
    rng: &mut GameRng,
    config: &GameConfig,
    mut draw: impl FnMut(&mut GameRng) -> Color,
) -> Result<(Color, Options)> {
    let target = draw(&mut *rng);
    let distractors = pick_distractors(target, config, || draw(&mut *rng))?;

    let mut colors: SmallVec<[Color; OPTION_COUNT]> = SmallVec::new();
    colors.push(target);
    colors.extend(distractors);
    rng.shuffle(&mut colors);

    let options = colors
        .into_iter()
        .enumerate()
        .map(|(i, color)| ColorOption::new(OptionId::new(i as u8), color))
        .collect();

    Ok((target, options))
}

/// Pull candidates from `draw` until enough distractors are accepted.
///
/// A candidate equal to the target is always rejected. With
/// `distinct_distractors`, a candidate equal to an accepted distractor is
/// rejected too. Every candidate counts against `max_generation_attempts`.
pub(crate) fn pick_distractors(
    target: Color,
    config: &GameConfig,
    mut draw: impl FnMut() -> Color,
) -> Result<Distractors> {
    let mut distractors = Distractors::new();
    let mut seen: FxHashSet<Color> = FxHashSet::default();
    seen.insert(target);

    let mut attempts = 0u32;
    while distractors.len() < DISTRACTOR_COUNT {
        if attempts >= config.max_generation_attempts {
            warn!(
                found = distractors.len(),
                attempts,
                target = %target,
                "distractor generation exhausted"
            );
            return Err(GameError::ImpossibleGeneration {
                found: distractors.len(),
                needed: DISTRACTOR_COUNT,
                attempts,
            });
        }
        attempts += 1;

        let candidate = draw();
        let accepted = if config.distinct_distractors {
            seen.insert(candidate)
        } else {
            candidate != target
        };
        if accepted {
            distractors.push(candidate);
        }
    }

    Ok(distractors)
}
