//! Blocking HTTP implementation of [`Transport`].

use reqwest::header;
use tracing::{debug, trace};

use crate::config::ClientConfig;
use crate::error::ClientError;

use super::protocol::{JsonRpcRequest, JsonRpcResponse};
use super::Transport;

/// Talks JSON-RPC to the daemon over HTTP with basic authentication.
///
/// Holds nothing beyond the connection settings resolved at construction.
/// Each exchange is one POST with a single attempt; the daemon expects
/// `content-type: text/plain` rather than `application/json`.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    url: String,
    user: String,
    password: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        // reqwest's blocking client defaults to a 30 second timeout; passing
        // the Option through means `timeout: None` really is unbounded.
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            url: config.base_url(),
            user: config.rpc_user.clone(),
            password: config.rpc_password.clone(),
        })
    }
}

impl Transport for HttpTransport {
    fn round_trip(&self, request: &JsonRpcRequest) -> Result<JsonRpcResponse, ClientError> {
        let body = serde_json::to_string(request)
            .expect("request envelope of strings and JSON values always serializes");

        let response = self
            .client
            .post(&self.url)
            .header(header::CONTENT_TYPE, "text/plain")
            .basic_auth(&self.user, Some(&self.password))
            .body(body)
            .send()?
            .error_for_status()?;

        let status = response.status();
        let text = response.text()?;
        debug!(
            rpc.id = %request.id,
            rpc.method = %request.method,
            %status,
            body_len = text.len(),
            "rpc response"
        );
        trace!(rpc.id = %request.id, rpc.method = %request.method, body = %text, "rpc response body");

        serde_json::from_str(&text).map_err(|e| {
            ClientError::InvalidResponse(format!("decode JSON-RPC response: {e}; body={text}"))
        })
    }
}
