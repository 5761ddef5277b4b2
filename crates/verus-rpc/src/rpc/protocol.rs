//! JSON-RPC 1.0 envelope types.
//!
//! The daemon speaks the 1.0 dialect: positional params only, and a reply
//! envelope that always carries both `result` and `error` (one of them
//! null). These structs are the full extent of the wire schema; result
//! payloads stay as `serde_json::Value`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClientError;

/// Protocol version string the daemon expects in every request.
pub const JSONRPC_VERSION: &str = "1.0";

/// A single positional-parameter request envelope.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: &'static str,
    pub id: String,
    pub method: String,
    pub params: Vec<Value>,
}

impl JsonRpcRequest {
    pub fn new(id: String, method: &str, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            method: method.to_owned(),
            params,
        }
    }
}

/// Decoded reply envelope. The echoed `id` is not read back; each call has
/// exactly one outstanding request.
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse {
    pub result: Option<Value>,
    pub error: Option<Value>,
}

/// Convert a non-null wire `error` value into a typed failure.
///
/// Daemon errors carry `{"code": <int>, "message": <string>}`; anything
/// else is reported as a malformed reply rather than guessed at.
pub fn parse_rpc_error(error: Value) -> ClientError {
    #[derive(Deserialize)]
    struct WireError {
        code: i64,
        message: String,
    }

    match serde_json::from_value::<WireError>(error.clone()) {
        Ok(parsed) => ClientError::Rpc {
            code: parsed.code,
            message: parsed.message,
        },
        Err(_) => ClientError::InvalidResponse(format!("non-standard JSON-RPC error: {error}")),
    }
}
