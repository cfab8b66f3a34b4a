//! Error types for scope operations.
//!
//! Every fault in this crate is recoverable: transport and persistence
//! failures are handled at the boundary where they occur and degrade to a
//! running (if unsynchronized or default-configured) scope.

/// Error type for wire decoding, configuration and persistence operations.
#[derive(thiserror::Error, Debug)]
pub enum ScopeError {
    /// Inbound sample frame whose byte length is not a multiple of 2.
    #[error("truncated sample frame: {len} bytes is not a whole number of u16 samples")]
    TruncatedFrame { len: usize },

    /// The peer rejected a configuration-apply request.
    #[error("configuration rejected: {0}")]
    ConfigRejected(String),

    /// IO error reading or writing the persisted configuration.
    #[error("persistence error: {0}")]
    Persistence(#[from] std::io::Error),

    /// The persisted configuration blob exists but does not parse.
    #[error("corrupt stored configuration: {0}")]
    CorruptConfig(#[from] serde_json::Error),

    /// The persisted configuration blob parses but holds a value outside the
    /// range the hardware can represent.
    #[error("invalid stored configuration: {0}")]
    InvalidConfig(String),
}
