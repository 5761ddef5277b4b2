//! Daemon control and state queries.

use serde_json::json;

use crate::client::VerusClient;
use crate::error::ClientError;
use crate::response::RpcValue;

impl VerusClient {
    /// Returns an object containing various daemon state info: version,
    /// protocol, block height, connections, errors.
    pub fn get_info(&self) -> Result<RpcValue, ClientError> {
        self.call("getinfo", vec![])
    }

    /// Returns help text for all commands, or for `command` alone.
    pub fn help(&self, command: Option<&str>) -> Result<RpcValue, ClientError> {
        let params = match command {
            Some(command) => vec![json!(command)],
            None => vec![],
        };
        self.call("help", params)
    }

    /// Asks the daemon to shut down.
    pub fn stop(&self) -> Result<RpcValue, ClientError> {
        self.call("stop", vec![])
    }
}
