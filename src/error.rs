use thiserror::Error;

/// Top-level error type for bubble outline construction.
///
/// The outline builder itself is total and never fails; errors are only
/// produced by the opt-in validation layer.
#[derive(Debug, Error)]
pub enum BubbleError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to shape parameters.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("parameter {parameter} = {value} is not finite")]
    NonFinite { parameter: &'static str, value: f64 },
}

/// Convenience type alias for results using [`BubbleError`].
pub type Result<T> = std::result::Result<T, BubbleError>;
