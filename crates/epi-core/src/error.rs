use std::fmt;

/// Errors raised by the decomposition pipeline. All are detected before
/// any numeric work starts; the numeric stages themselves are total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EpicycleError {
    /// x and y sample vectors differ in length.
    ShapeMismatch { x_len: usize, y_len: usize },
    /// A closed path needs at least two points.
    TooFewPoints { points: usize },
    /// NaN or infinite coordinate in the input path.
    NonFinitePoint { index: usize },
    /// A configuration field that must be positive is zero.
    DegenerateConfig { field: &'static str },
    /// Requested mode count outside [1, available]. Rejected, never clamped.
    ModeCountOutOfRange { requested: usize, available: usize },
}

impl fmt::Display for EpicycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EpicycleError::ShapeMismatch { x_len, y_len } => {
                write!(f, "path shape mismatch: {x_len} x values vs {y_len} y values")
            }
            EpicycleError::TooFewPoints { points } => {
                write!(f, "path needs at least 2 points, got {points}")
            }
            EpicycleError::NonFinitePoint { index } => {
                write!(f, "non-finite coordinate at path index {index}")
            }
            EpicycleError::DegenerateConfig { field } => {
                write!(f, "degenerate configuration: {field} must be positive")
            }
            EpicycleError::ModeCountOutOfRange { requested, available } => {
                write!(
                    f,
                    "mode count {requested} out of range: must be in [1, {available}]"
                )
            }
        }
    }
}

impl std::error::Error for EpicycleError {}

pub type Result<T> = std::result::Result<T, EpicycleError>;
