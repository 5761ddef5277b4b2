//! Canned-reply transport for exercising the client without a daemon.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::{json, Value};

use crate::error::ClientError;

use super::protocol::{JsonRpcRequest, JsonRpcResponse};
use super::Transport;

/// A request as the mock observed it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub id: String,
    pub method: String,
    pub params: Vec<Value>,
}

/// Replays queued wire bodies in order and records every issued request.
/// When the queue runs dry it answers with a null result, so tests that
/// only assert on the request shape need no setup.
pub struct MockTransport {
    replies: Mutex<VecDeque<Value>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder {
            replies: VecDeque::new(),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

pub struct MockTransportBuilder {
    replies: VecDeque<Value>,
}

impl MockTransportBuilder {
    /// Queue a successful reply with the given `result`.
    pub fn with_result(mut self, result: Value) -> Self {
        self.replies
            .push_back(json!({"result": result, "error": null, "id": "x"}));
        self
    }

    /// Queue a daemon-side error reply.
    pub fn with_error(mut self, code: i64, message: &str) -> Self {
        self.replies.push_back(json!({
            "result": null,
            "error": {"code": code, "message": message},
            "id": "x",
        }));
        self
    }

    /// Queue a wire body verbatim, malformed shapes included.
    pub fn with_body(mut self, body: Value) -> Self {
        self.replies.push_back(body);
        self
    }

    pub fn build(self) -> MockTransport {
        MockTransport {
            replies: Mutex::new(self.replies),
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl Transport for MockTransport {
    fn round_trip(&self, request: &JsonRpcRequest) -> Result<JsonRpcResponse, ClientError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            id: request.id.clone(),
            method: request.method.clone(),
            params: request.params.clone(),
        });

        let body = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| json!({"result": null, "error": null, "id": "x"}));
        serde_json::from_value(body)
            .map_err(|e| ClientError::InvalidResponse(format!("mock reply body: {e}")))
    }
}
