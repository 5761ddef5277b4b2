//! Wallet state and address management.

use serde_json::json;

use crate::client::VerusClient;
use crate::error::ClientError;
use crate::response::RpcValue;

impl VerusClient {
    /// Returns an object containing wallet information.
    pub fn get_wallet_info(&self) -> Result<RpcValue, ClientError> {
        self.call("getwalletinfo", vec![])
    }

    /// Returns a new address from the keypool and marks it as used.
    pub fn get_new_address(&self) -> Result<RpcValue, ClientError> {
        self.call("getnewaddress", vec![])
    }

    /// Returns information about an address, including whether it is valid
    /// and whether it belongs to this wallet.
    pub fn validate_address(&self, address: &str) -> Result<RpcValue, ClientError> {
        self.call("validateaddress", vec![json!(address)])
    }

    /// Returns the most recent wallet transactions, `count` of them
    /// (default 10) after skipping `skip` (default 0).
    pub fn list_transactions(
        &self,
        count: Option<u32>,
        skip: Option<u32>,
    ) -> Result<RpcValue, ClientError> {
        self.call(
            "listtransactions",
            vec![json!(count.unwrap_or(10)), json!(skip.unwrap_or(0))],
        )
    }
}
