use thiserror::Error;

/// Errors raised by the turtle when an operation receives arguments it can't use
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TurtleError {
    /// An argument had the wrong kind (e.g. text where a number was expected)
    #[error("{operation}: expected {expected}, got `{got}`")]
    BadArgument {
        operation: &'static str,
        expected: &'static str,
        got: String,
    },

    #[error("bad color string: {0}")]
    BadColor(String),

    #[error("there is no shape named {0}")]
    UnknownShape(String),

    #[error("bad speed value: {0}")]
    BadSpeed(String),

    /// Pen width must be strictly positive
    #[error("pen size must be positive, got {0}")]
    BadPenSize(f32),

    #[error("{0} called while not filling")]
    NotFilling(&'static str),
}

/// Result returned by every turtle operation invoked by name.
///
/// `Ok(Some(text))` carries a value worth showing to the user (queries such as `position`).
pub type EngineResult = Result<Option<String>, TurtleError>;
