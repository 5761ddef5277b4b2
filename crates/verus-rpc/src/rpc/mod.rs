//! Transport seam between the client and the daemon's HTTP endpoint.
//!
//! [`Transport`] carries one JSON-RPC envelope per call; [`HttpTransport`]
//! is the production implementation. Tests swap in `mock::MockTransport` to
//! capture issued requests and replay canned replies.

pub mod http;
#[cfg(test)]
pub mod mock;
pub mod protocol;

pub use http::HttpTransport;
pub use protocol::{JsonRpcRequest, JsonRpcResponse};

use crate::error::ClientError;

/// One synchronous request/response exchange with the daemon.
///
/// Implementations perform exactly one attempt per call; retry policy, if
/// any ever exists, belongs to the caller.
pub trait Transport: Send + Sync {
    fn round_trip(&self, request: &JsonRpcRequest) -> Result<JsonRpcResponse, ClientError>;
}
