/// Crate-wide result alias.
pub type PhaseResult<T> = Result<T, PhaseError>;

/// Error type shared by table construction, lookups and auxiliary constructors.
#[derive(thiserror::Error, Debug)]
pub enum PhaseError {
    /// Malformed channel table. Only raised while building or parsing a table.
    #[error("config error: {0}")]
    Config(String),

    /// Invalid argument to a non-table constructor (scroll range, hour, tick spacing).
    #[error("validation error: {0}")]
    Validation(String),

    /// A consumer asked for a channel the table does not define.
    #[error("unknown channel '{0}'")]
    UnknownChannel(String),

    /// A consumer asked for a section the table does not define.
    #[error("unknown section '{0}'")]
    UnknownSection(String),

    /// Channel table JSON could not be decoded.
    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PhaseError {
    /// Build a [`PhaseError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`PhaseError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PhaseError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True for errors that come from a malformed channel table.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<serde_json::Error> for PhaseError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
