//! Python bindings.
//!
//! Batch validation and text scanning release the GIL while they run.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::scan::{self, CardMatch};
use crate::validation::{self, ValidationResult};
use crate::validators;

/// Validation result exposed to Python
#[pyclass(name = "ValidationResult", frozen)]
#[derive(Clone)]
pub struct PyValidationResult {
    #[pyo3(get)]
    is_valid: bool,
    #[pyo3(get)]
    bandeira: Option<&'static str>,
    #[pyo3(get)]
    message: String,
}

#[pymethods]
impl PyValidationResult {
    fn __repr__(&self) -> String {
        format!(
            "ValidationResult(is_valid={}, bandeira={}, message={:?})",
            if self.is_valid { "True" } else { "False" },
            self.bandeira
                .map(|b| format!("{:?}", b))
                .unwrap_or_else(|| "None".to_string()),
            self.message
        )
    }
}

impl From<ValidationResult> for PyValidationResult {
    fn from(result: ValidationResult) -> Self {
        PyValidationResult {
            is_valid: result.is_valid,
            bandeira: result.bandeira.map(|b| b.name()),
            message: result.message,
        }
    }
}

/// Card number located in text
#[pyclass(name = "CardMatch", frozen)]
#[derive(Clone)]
pub struct PyCardMatch {
    #[pyo3(get)]
    start: usize,
    #[pyo3(get)]
    end: usize,
    #[pyo3(get)]
    raw: String,
    #[pyo3(get)]
    bandeira: &'static str,
    #[pyo3(get)]
    luhn_valid: bool,
}

impl From<CardMatch> for PyCardMatch {
    fn from(m: CardMatch) -> Self {
        PyCardMatch {
            start: m.start,
            end: m.end,
            raw: m.raw,
            bandeira: m.brand.name(),
            luhn_valid: m.luhn_valid,
        }
    }
}

/// Validate a card number: brand detection plus Luhn check
#[pyfunction]
fn validate_credit_card(card_number: &str) -> PyValidationResult {
    validation::validate_credit_card(card_number).into()
}

/// Detect the card brand, or None
#[pyfunction]
fn discover_bandeira(card_number: &str) -> Option<&'static str> {
    validation::discover_bandeira(card_number).map(|b| b.name())
}

/// Luhn check ignoring spaces and hyphens; False for non-numeric input
#[pyfunction]
fn luhn_check(card_number: &str) -> bool {
    validation::luhn_check(card_number)
}

/// Raw Luhn checksum over digits; raises ValueError on other characters
#[pyfunction]
fn luhn(digits: &str) -> PyResult<bool> {
    validators::luhn(digits).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Validate a list of card numbers in parallel
#[pyfunction]
fn validate_batch(py: Python<'_>, card_numbers: Vec<String>) -> Vec<PyValidationResult> {
    py.allow_threads(|| validation::validate_batch(&card_numbers))
        .into_iter()
        .map(PyValidationResult::from)
        .collect()
}

/// Find card numbers of known brands in text
#[pyfunction]
fn find_cards(py: Python<'_>, text: &str) -> Vec<PyCardMatch> {
    py.allow_threads(|| scan::find_cards(text))
        .into_iter()
        .map(PyCardMatch::from)
        .collect()
}

/// bandeira native extension module
#[pymodule]
#[pyo3(name = "bandeira")]
fn bandeira_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyValidationResult>()?;
    m.add_class::<PyCardMatch>()?;
    m.add_function(wrap_pyfunction!(validate_credit_card, m)?)?;
    m.add_function(wrap_pyfunction!(discover_bandeira, m)?)?;
    m.add_function(wrap_pyfunction!(luhn_check, m)?)?;
    m.add_function(wrap_pyfunction!(luhn, m)?)?;
    m.add_function(wrap_pyfunction!(validate_batch, m)?)?;
    m.add_function(wrap_pyfunction!(find_cards, m)?)?;
    Ok(())
}
