use crate::registry::DispersionHandle;

/// Errors returned by parameter, dispersion, and model operations.
///
/// Numeric degeneracies during evaluation (a zero normalization, a kernel
/// returning NaN) are not represented here: they propagate through the
/// returned intensity as NaN or infinity.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Returned when a parameter is set outside of its bounds.
    #[error("value {value} for '{name}' is outside of [{min}, {max}]")]
    OutOfBounds {
        /// The name of the parameter.
        name: String,
        /// The rejected value.
        value: f64,
        /// The lower bound.
        min: f64,
        /// The upper bound.
        max: f64,
    },

    /// Returned when the lower bound would exceed the upper bound.
    #[error("invalid bounds for '{name}': min ({min}) must be less than or equal to max ({max})")]
    InvalidBounds {
        /// The name of the parameter.
        name: String,
        /// The lower bound value.
        min: f64,
        /// The upper bound value.
        max: f64,
    },

    /// Returned when a model has no parameter with the given name.
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),

    /// Returned when a dispersion is attached to a parameter that cannot carry one.
    #[error("parameter '{0}' does not accept a dispersion")]
    NotDispersible(String),

    /// Returned when the evaluation input is neither a scalar nor a pair.
    #[error("expected a scalar or a sequence of {expected} values, got {got} values")]
    WrongArity {
        /// The accepted sequence length.
        expected: usize,
        /// The length actually supplied.
        got: usize,
    },

    /// Returned when the qx and qy arrays of a 2D evaluation differ in length.
    #[error("coordinate length mismatch: qx has {qx} values but qy has {qy}")]
    LengthMismatch {
        /// Number of qx values.
        qx: usize,
        /// Number of qy values.
        qy: usize,
    },

    /// Returned when dispersion settings cannot be imported.
    #[error("invalid dispersion settings: {0}")]
    InvalidDispersionSpec(String),

    /// Returned when a handle does not refer to a registered dispersion.
    #[error("no dispersion registered for {0}")]
    UnknownHandle(DispersionHandle),

    /// Returned when no model has the given name.
    #[error("unknown model '{0}'")]
    UnknownModel(String),

    /// Returned when a snapshot was taken from a different model.
    #[error("snapshot of model '{found}' cannot be restored into '{expected}'")]
    ModelMismatch {
        /// The name of the model being restored.
        expected: String,
        /// The model name recorded in the snapshot.
        found: String,
    },
}

pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for an [`Error::InvalidDispersionSpec`] with a formatted reason.
    pub(crate) fn spec(reason: impl Into<String>) -> Self {
        Error::InvalidDispersionSpec(reason.into())
    }
}
