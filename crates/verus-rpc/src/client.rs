//! The request/response transform every catalogue method funnels through.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::config::{ClientConfig, Network};
use crate::error::ClientError;
use crate::response::{normalize, RpcValue};
use crate::rpc::protocol::{parse_rpc_error, JsonRpcRequest};
use crate::rpc::{HttpTransport, Transport};

/// Identifier prefix stamped on outgoing request ids.
const CLIENT_ID: &str = "verus-rpc";

/// Handle to one Verus daemon.
///
/// Construction resolves the network's port and native currency once; after
/// that every call is an independent, stateless round trip. The client is
/// freely shareable across threads; nothing mutates between calls except
/// the request-id counter.
pub struct VerusClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    next_id: AtomicU64,
}

impl VerusClient {
    /// Wire the configuration to the HTTP transport. Fails only if the
    /// underlying HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Build a client over any transport. This is the seam tests use to
    /// substitute a mock; callers can use it to intercept the exchange.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config,
            transport,
            next_id: AtomicU64::new(1),
        }
    }

    pub fn network(&self) -> Network {
        self.config.network
    }

    /// Ticker of the configured network's native currency.
    pub fn native_currency(&self) -> &'static str {
        self.config.network.native_currency()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn next_request_id(&self) -> String {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        format!("{CLIENT_ID}-{n}")
    }

    /// Invoke one daemon method with positional `params`.
    ///
    /// Exactly one HTTP round trip. A non-null `error` in the reply becomes
    /// [`ClientError::Rpc`]; otherwise the `result` is normalized: object
    /// replies become keyed records, and everything else (an absent result
    /// included) passes through as-is.
    pub fn call(&self, method: &str, params: Vec<Value>) -> Result<RpcValue, ClientError> {
        let request = JsonRpcRequest::new(self.next_request_id(), method, params);
        debug!(
            rpc.id = %request.id,
            rpc.method = %request.method,
            rpc.params = request.params.len(),
            "rpc call"
        );

        let reply = self.transport.round_trip(&request)?;
        if let Some(error) = reply.error {
            return Err(parse_rpc_error(error));
        }

        Ok(normalize(reply.result.unwrap_or(Value::Null)))
    }
}
