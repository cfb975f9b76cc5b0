/// Errors that can occur across the Meetcost workspace.
///
/// Library crates use this type directly. The dashboard layer turns it into a
/// tagged `{success: false, error}` result, and the binary reports it through
/// `miette`.
///
/// # Examples
///
/// ```
/// use meetcost_core::MeetcostError;
///
/// let err = MeetcostError::Store("database is locked".into());
/// assert!(err.to_string().contains("database is locked"));
/// ```
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum MeetcostError {
    /// Filesystem I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// The key-value store could not be read or written.
    #[error("store error: {0}")]
    Store(String),

    /// JSON serialization / deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML deserialization failure.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Caller-supplied data was rejected.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
