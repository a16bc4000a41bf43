/// Convenience result type used across vectormation.
pub type VectorResult<T> = Result<T, VectorError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Every variant signals a caller contract violation; nothing in the engine is
/// transient, so there is no retry path.
#[derive(thiserror::Error, Debug)]
pub enum VectorError {
    /// Invalid configuration: unknown style key, malformed color, mismatched
    /// interpolation kinds, malformed transform clause or path data.
    #[error("configuration error: {0}")]
    Config(String),

    /// A feature that exists in the model but is not implemented for this input.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// Geometry that cannot answer the query (for example the box of nothing).
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from collaborators or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VectorError {
    /// Build a [`VectorError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`VectorError::Unsupported`] value.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Build a [`VectorError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`VectorError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
