/// Convenience result type used across scanraster.
pub type RasterResult<T> = Result<T, RasterError>;

/// Top-level error taxonomy used by rasterization APIs.
///
/// Every failure is local and synchronous. Nothing is retried and partially written rows stay
/// written.
#[derive(thiserror::Error, Debug)]
pub enum RasterError {
    /// No registered backend of the target grid implements the requested operation.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Clip stack misuse, e.g. popping an empty stack.
    #[error("invalid clip state: {0}")]
    InvalidClipState(String),

    /// Negative or overflowing grid dimensions.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// A backend was invoked on a grid lacking the capability it depends on.
    #[error("capability mismatch: {0}")]
    CapabilityMismatch(String),

    /// Invalid renderer configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RasterError {
    /// Build a [`RasterError::UnsupportedOperation`] value.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::UnsupportedOperation(msg.into())
    }

    /// Build a [`RasterError::InvalidClipState`] value.
    pub fn clip_state(msg: impl Into<String>) -> Self {
        Self::InvalidClipState(msg.into())
    }

    /// Build a [`RasterError::InvalidDimensions`] value.
    pub fn dimensions(msg: impl Into<String>) -> Self {
        Self::InvalidDimensions(msg.into())
    }

    /// Build a [`RasterError::CapabilityMismatch`] value.
    pub fn capability(msg: impl Into<String>) -> Self {
        Self::CapabilityMismatch(msg.into())
    }

    /// Build a [`RasterError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
