use thiserror::Error;

/// Engine failure modes.
///
/// Missing optional evidence is never an error; it is `None` and shrinks
/// the applicable scoring denominator instead. The only hard failure is a
/// non-positive value where a divisor is required.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("invalid input: {field} must be positive, got {value}")]
    InvalidInput { field: &'static str, value: f64 },
}

impl AnalysisError {
    pub fn invalid_input(field: &'static str, value: f64) -> Self {
        AnalysisError::InvalidInput { field, value }
    }
}
