//! Address-index queries.
//!
//! These require the daemon to run with the address index enabled. They all
//! take their arguments as one JSON object in the first positional slot.

use serde_json::{json, Map, Value};

use crate::client::VerusClient;
use crate::error::ClientError;
use crate::response::RpcValue;

impl VerusClient {
    /// Returns the balance for one or more base58check encoded addresses.
    pub fn get_address_balance(&self, addresses: &[&str]) -> Result<RpcValue, ClientError> {
        self.call("getaddressbalance", vec![json!({"addresses": addresses})])
    }

    /// Returns all changes (deltas) for the given addresses, optionally
    /// bounded to the `[start, end]` block height range.
    pub fn get_address_deltas(
        &self,
        addresses: &[&str],
        start: Option<u64>,
        end: Option<u64>,
        chain_info: Option<bool>,
        friendly_names: Option<bool>,
        verbosity: Option<u8>,
    ) -> Result<RpcValue, ClientError> {
        let mut query = Map::new();
        query.insert("addresses".to_owned(), json!(addresses));
        query.insert("chainInfo".to_owned(), json!(chain_info.unwrap_or(false)));
        query.insert(
            "friendlynames".to_owned(),
            json!(friendly_names.unwrap_or(false)),
        );
        query.insert("verbosity".to_owned(), json!(verbosity.unwrap_or(0)));
        if let Some(start) = start {
            query.insert("start".to_owned(), json!(start));
        }
        if let Some(end) = end {
            query.insert("end".to_owned(), json!(end));
        }
        self.call("getaddressdeltas", vec![Value::Object(query)])
    }

    /// Returns all mempool deltas for the given addresses.
    pub fn get_address_mempool(
        &self,
        addresses: &[&str],
        friendly_names: Option<bool>,
        verbosity: Option<u8>,
    ) -> Result<RpcValue, ClientError> {
        self.call(
            "getaddressmempool",
            vec![json!({
                "addresses": addresses,
                "friendlynames": friendly_names.unwrap_or(false),
                "verbosity": verbosity.unwrap_or(0),
            })],
        )
    }

    /// Returns the transaction ids touching the given addresses, optionally
    /// bounded to the `[start, end]` block height range.
    pub fn get_address_txids(
        &self,
        addresses: &[&str],
        start: Option<u64>,
        end: Option<u64>,
    ) -> Result<RpcValue, ClientError> {
        let mut query = Map::new();
        query.insert("addresses".to_owned(), json!(addresses));
        if let Some(start) = start {
            query.insert("start".to_owned(), json!(start));
        }
        if let Some(end) = end {
            query.insert("end".to_owned(), json!(end));
        }
        self.call("getaddresstxids", vec![Value::Object(query)])
    }

    /// Returns all unspent outputs for the given addresses.
    pub fn get_address_utxos(
        &self,
        addresses: &[&str],
        chain_info: Option<bool>,
        friendly_names: Option<bool>,
        verbosity: Option<u8>,
    ) -> Result<RpcValue, ClientError> {
        self.call(
            "getaddressutxos",
            vec![json!({
                "addresses": addresses,
                "chainInfo": chain_info.unwrap_or(false),
                "friendlynames": friendly_names.unwrap_or(false),
                "verbosity": verbosity.unwrap_or(0),
            })],
        )
    }

    /// Returns a snapshot of (address, amount) pairs, limited to the `top`
    /// largest balances if given.
    pub fn get_snapshot(&self, top: Option<u64>) -> Result<RpcValue, ClientError> {
        let params = match top {
            Some(top) => vec![json!(top)],
            None => vec![],
        };
        self.call("getsnapshot", params)
    }
}
