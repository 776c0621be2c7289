//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{Color, GameError, OptionId};

/// Map an engine error onto a Python exception.
///
/// Bad option references and stale rounds are the caller's fault (`ValueError`); anything
/// else is reported as `RuntimeError`.
pub(crate) fn to_py_err(err: GameError) -> PyErr {
    match err {
        GameError::InvalidOptionReference { .. }
        | GameError::StaleRound { .. }
        | GameError::InvalidConfig(_) => {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", err))
        }
        _ => PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!("{}", err)),
    }
}

/// Python wrapper for Color.
#[pyclass(name = "Color")]
#[derive(Clone, Debug)]
pub struct PyColor(pub Color);

#[pymethods]
impl PyColor {
    #[new]
    fn new(r: u8, g: u8, b: u8) -> Self {
        Self(Color::new(r, g, b))
    }

    /// Parse `(r, g, b)` or `rgb(r, g, b)`.
    #[staticmethod]
    fn parse(text: &str) -> PyResult<Self> {
        text.parse::<Color>()
            .map(Self)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))
    }

    #[getter]
    fn r(&self) -> u8 {
        self.0.r
    }

    #[getter]
    fn g(&self) -> u8 {
        self.0.g
    }

    #[getter]
    fn b(&self) -> u8 {
        self.0.b
    }

    /// CSS form, `rgb(r, g, b)`.
    fn css(&self) -> String {
        self.0.css()
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Color{}", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        let [r, g, b] = self.0.channels();
        (u64::from(r) << 16) | (u64::from(g) << 8) | u64::from(b)
    }
}

/// Python wrapper for OptionId.
#[pyclass(name = "OptionId")]
#[derive(Clone, Debug)]
pub struct PyOptionId(pub OptionId);

#[pymethods]
impl PyOptionId {
    #[new]
    fn new(id: u8) -> Self {
        Self(OptionId::new(id))
    }

    #[getter]
    fn id(&self) -> u8 {
        self.0 .0
    }

    fn __repr__(&self) -> String {
        format!("OptionId({})", self.0 .0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0 .0 as u64
    }
}
