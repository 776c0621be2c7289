//! Python bindings for the color-guess engine.
//!
//! # Quick Start
//!
//! ```python
//! import color_guess as cg
//!
//! game = cg.ColorGuessGame(seed=42)
//! print(game.display_color())          # "(168, 34, 1)"
//!
//! for option_id, color in game.options():
//!     if str(color) == game.display_color():
//!         print(game.guess(option_id))  # "Acertou!"
//!
//! game.reset()
//! print(game.score)                    # 3
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engine;

pub use py_core::*;
pub use py_engine::*;

/// color_guess: an RGB color-guessing game engine.
#[pymodule]
fn color_guess(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyColor>()?;
    m.add_class::<PyOptionId>()?;
    m.add_class::<PyColorGuessGame>()?;

    Ok(())
}
