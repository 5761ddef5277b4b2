#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The configuration cannot produce a working client. Raised before any
    /// network activity; no partial client exists afterwards.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The HTTP exchange could not be completed: connection failure or a
    /// non-success status. One attempt per call, never retried here.
    #[error("RPC transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The daemon answered with a non-null `error` field. Code and message
    /// are the daemon's own payload, passed through unmodified.
    #[error("daemon RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The reply body was not a decodable JSON-RPC envelope.
    #[error("invalid JSON-RPC response: {0}")]
    InvalidResponse(String),
}
