use thiserror::Error;

/// Invalid input to the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FigureError {
    #[error("figure has no points")]
    EmptyInput,

    #[error("edge #{edge} references point {index}, but only {len} points are available")]
    EdgeIndexOutOfRange { edge: usize, index: usize, len: usize },
}

/// Error type shared by the random figure generators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("invalid generator params: {reason}")]
    InvalidParams { reason: String },

    #[error(transparent)]
    Classify(#[from] FigureError),
}

impl GeneratorError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}
