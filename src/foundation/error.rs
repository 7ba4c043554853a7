/// Convenience result type used across chromeshot.
pub type ChromeResult<T> = Result<T, ChromeError>;

/// Top-level error taxonomy for rasterization, configuration and IO.
///
/// Composing a scene never fails; only turning it into pixels or loading
/// configuration from disk can.
#[derive(thiserror::Error, Debug)]
pub enum ChromeError {
    /// Invalid user-provided data (sizes that cannot be rasterized, bad colors).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while loading or interpreting a configuration document.
    #[error("config error: {0}")]
    Config(String),

    /// Errors while executing a render plan.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChromeError {
    /// Build a [`ChromeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ChromeError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ChromeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ChromeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
