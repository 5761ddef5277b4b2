//! Mining and staking controls.

use serde_json::json;

use crate::client::VerusClient;
use crate::error::ClientError;
use crate::response::RpcValue;

impl VerusClient {
    /// Returns whether the daemon is currently set to mine or mint coins.
    pub fn get_generate(&self) -> Result<RpcValue, ClientError> {
        self.call("getgenerate", vec![])
    }

    /// Turns mining/minting on or off. `gen_proc_limit` is the number of
    /// processor threads to use, with 0 meaning stake instead of mine.
    pub fn set_generate(
        &self,
        generate: bool,
        gen_proc_limit: Option<i32>,
    ) -> Result<RpcValue, ClientError> {
        let mut params = vec![json!(generate)];
        if let Some(limit) = gen_proc_limit {
            params.push(json!(limit));
        }
        self.call("setgenerate", params)
    }

    /// Returns mining-related state: hash rate, staking status, difficulty.
    pub fn get_mining_info(&self) -> Result<RpcValue, ClientError> {
        self.call("getmininginfo", vec![])
    }
}
