/// Convenience result type used across instareel.
pub type ReelResult<T> = Result<T, ReelError>;

/// Error taxonomy for reel construction and frame evaluation.
///
/// Caption grouping itself never fails; errors come from invalid props or configuration, frames
/// requested outside the reel, and IO/serialization at the boundary.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Invalid props, configuration, or asset references.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while evaluating a frame (for example, a frame outside the reel).
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing JSON documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ReelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
