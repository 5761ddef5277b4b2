//! Block, transaction, and chain-state queries.

use serde_json::{json, Value};

use crate::client::VerusClient;
use crate::error::ClientError;
use crate::response::RpcValue;

use super::BlockRef;

impl VerusClient {
    /// Returns the hash of the best (tip) block in the longest chain.
    pub fn get_best_block_hash(&self) -> Result<RpcValue, ClientError> {
        self.call("getbestblockhash", vec![])
    }

    /// Returns block data for a hash or height.
    ///
    /// Verbosity 0 returns hex-encoded block data, 1 (the default) a JSON
    /// object, 2 the object with detailed transaction data.
    pub fn get_block(
        &self,
        block: impl Into<BlockRef>,
        verbosity: Option<u8>,
    ) -> Result<RpcValue, ClientError> {
        self.call(
            "getblock",
            vec![block.into().into_param(), json!(verbosity.unwrap_or(1))],
        )
    }

    /// Returns the number of blocks in the best valid chain.
    pub fn get_block_count(&self) -> Result<RpcValue, ClientError> {
        self.call("getblockcount", vec![])
    }

    /// Returns the hash of the block at the given height.
    pub fn get_block_hash(&self, height: u64) -> Result<RpcValue, ClientError> {
        self.call("getblockhash", vec![json!(height)])
    }

    /// Returns an object containing state info regarding blockchain
    /// processing.
    pub fn get_blockchain_info(&self) -> Result<RpcValue, ClientError> {
        self.call("getblockchaininfo", vec![])
    }

    /// Returns detailed change information (deltas) for a block.
    pub fn get_block_deltas(&self, block_hash: &str) -> Result<RpcValue, ClientError> {
        self.call("getblockdeltas", vec![json!(block_hash)])
    }

    /// Returns block hashes within the `[low, high]` timestamp range.
    ///
    /// Without explicit `options`, orphans are excluded and logical times
    /// are reported, matching the daemon's most common usage.
    pub fn get_block_hashes(
        &self,
        high: u64,
        low: u64,
        options: Option<Value>,
    ) -> Result<RpcValue, ClientError> {
        let options =
            options.unwrap_or_else(|| json!({"noOrphans": true, "logicalTimes": true}));
        self.call("getblockhashes", vec![json!(high), json!(low), options])
    }

    /// Returns information about a block header. Verbose (the default)
    /// decodes the header; otherwise the daemon returns serialized hex.
    pub fn get_block_header(
        &self,
        block_hash: &str,
        verbose: Option<bool>,
    ) -> Result<RpcValue, ClientError> {
        self.call(
            "getblockheader",
            vec![json!(block_hash), json!(verbose.unwrap_or(true))],
        )
    }

    /// Returns information about all known tips in the block tree.
    pub fn get_chain_tips(&self) -> Result<RpcValue, ClientError> {
        self.call("getchaintips", vec![])
    }

    /// Computes statistics about the total number and rate of transactions
    /// in the chain, optionally over `nblocks` ending at `block_hash`.
    pub fn get_chain_tx_stats(
        &self,
        nblocks: Option<u64>,
        block_hash: Option<&str>,
    ) -> Result<RpcValue, ClientError> {
        let mut params = Vec::new();
        if let Some(nblocks) = nblocks {
            params.push(json!(nblocks));
        }
        if let Some(block_hash) = block_hash {
            params.push(json!(block_hash));
        }
        self.call("getchaintxstats", params)
    }

    /// Returns the proof-of-work difficulty as a multiple of the minimum.
    pub fn get_difficulty(&self) -> Result<RpcValue, ClientError> {
        self.call("getdifficulty", vec![])
    }

    /// Returns details on the current state of the transaction memory pool.
    pub fn get_mempool_info(&self) -> Result<RpcValue, ClientError> {
        self.call("getmempoolinfo", vec![])
    }

    /// Returns all transaction ids in the memory pool, as detailed objects
    /// when `verbose` is set.
    pub fn get_raw_mempool(&self, verbose: Option<bool>) -> Result<RpcValue, ClientError> {
        self.call("getrawmempool", vec![json!(verbose.unwrap_or(false))])
    }

    /// Returns the transaction id and input index where an output is spent.
    pub fn get_spent_info(&self, txid: &str, index: u32) -> Result<RpcValue, ClientError> {
        self.call("getspentinfo", vec![json!({"txid": txid, "index": index})])
    }

    /// Returns details about an unspent transaction output.
    pub fn get_tx_out(
        &self,
        txid: &str,
        vout: u32,
        include_mempool: Option<bool>,
    ) -> Result<RpcValue, ClientError> {
        self.call(
            "gettxout",
            vec![
                json!(txid),
                json!(vout),
                json!(include_mempool.unwrap_or(false)),
            ],
        )
    }

    /// Returns a hex-encoded proof that the given transactions were
    /// included in a block.
    pub fn get_tx_out_proof(
        &self,
        txids: &[&str],
        block_hash: Option<&str>,
    ) -> Result<RpcValue, ClientError> {
        let params = match block_hash {
            Some(block_hash) => vec![json!(txids), json!(block_hash)],
            None => vec![json!(txids)],
        };
        self.call("gettxoutproof", params)
    }

    /// Returns statistics about the UTXO set.
    pub fn get_tx_out_set_info(&self) -> Result<RpcValue, ClientError> {
        self.call("gettxoutsetinfo", vec![])
    }

    /// Returns the raw transaction data for a transaction id.
    ///
    /// Verbose (the default) asks for a decoded JSON object; otherwise the
    /// daemon returns serialized hex. The wire flag is `1` for verbose and
    /// the empty-string placeholder for hex.
    pub fn get_raw_transaction(
        &self,
        txid: &str,
        verbose: Option<bool>,
    ) -> Result<RpcValue, ClientError> {
        let verbose_flag = if verbose.unwrap_or(true) {
            json!(1)
        } else {
            json!("")
        };
        self.call("getrawtransaction", vec![json!(txid), verbose_flag])
    }

    /// Returns coin supply information, at `height` if given.
    pub fn coin_supply(&self, height: Option<u64>) -> Result<RpcValue, ClientError> {
        let params = match height {
            Some(height) => vec![json!(height)],
            None => vec![],
        };
        self.call("coinsupply", params)
    }

    /// Verifies the blockchain database. Defaults to check level 3 over the
    /// most recent 288 blocks.
    pub fn verify_chain(
        &self,
        check_level: Option<u32>,
        num_blocks: Option<u32>,
    ) -> Result<RpcValue, ClientError> {
        self.call(
            "verifychain",
            vec![
                json!(check_level.unwrap_or(3)),
                json!(num_blocks.unwrap_or(288)),
            ],
        )
    }

    /// Verifies that a txout proof points to a transaction in a block.
    pub fn verify_tx_out_proof(&self, proof: &str) -> Result<RpcValue, ClientError> {
        self.call("verifytxoutproof", vec![json!(proof)])
    }

    /// Returns information about the note commitment tree state for a block.
    pub fn z_get_tree_state(&self, block: impl Into<BlockRef>) -> Result<RpcValue, ClientError> {
        self.call("z_gettreestate", vec![block.into().into_param()])
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::response::RpcValue;
    use crate::rpc::mock::MockTransport;
    use crate::test_util::mock_client;

    #[test]
    fn get_best_block_hash_returns_the_literal_hash() {
        let (client, mock) =
            mock_client(MockTransport::builder().with_result(json!("000abc")).build());
        let value = client.get_best_block_hash().unwrap();
        assert_eq!(value, RpcValue::Raw(json!("000abc")));

        let requests = mock.requests();
        assert_eq!(requests[0].method, "getbestblockhash");
        assert!(requests[0].params.is_empty());
    }

    #[test]
    fn get_block_forwards_hash_and_verbosity() {
        let (client, mock) = mock_client(MockTransport::builder().build());
        client.get_block("000abc", Some(2)).unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].method, "getblock");
        assert_eq!(requests[0].params, vec![json!("000abc"), json!(2)]);
    }

    #[test]
    fn get_block_verbosity_defaults_to_one() {
        let (client, mock) = mock_client(MockTransport::builder().build());
        client.get_block("000abc", None).unwrap();
        client.get_block(100u64, None).unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].params, vec![json!("000abc"), json!(1)]);
        assert_eq!(requests[1].params, vec![json!(100), json!(1)]);
    }

    #[test]
    fn get_raw_transaction_flag_is_one_or_empty_string() {
        let (client, mock) = mock_client(MockTransport::builder().build());
        client.get_raw_transaction("deadbeef", None).unwrap();
        client.get_raw_transaction("deadbeef", Some(false)).unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].params, vec![json!("deadbeef"), json!(1)]);
        assert_eq!(requests[1].params, vec![json!("deadbeef"), json!("")]);
    }

    #[test]
    fn get_block_hashes_fills_in_default_options() {
        let (client, mock) = mock_client(MockTransport::builder().build());
        client.get_block_hashes(1_700_000_100, 1_700_000_000, None).unwrap();

        let requests = mock.requests();
        assert_eq!(
            requests[0].params,
            vec![
                json!(1_700_000_100u64),
                json!(1_700_000_000u64),
                json!({"noOrphans": true, "logicalTimes": true}),
            ]
        );
    }

    #[test]
    fn verify_chain_defaults_match_the_daemon() {
        let (client, mock) = mock_client(MockTransport::builder().build());
        client.verify_chain(None, None).unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].method, "verifychain");
        assert_eq!(requests[0].params, vec![json!(3), json!(288)]);
    }

    #[test]
    fn get_chain_tx_stats_only_sends_given_params() {
        let (client, mock) = mock_client(MockTransport::builder().build());
        client.get_chain_tx_stats(None, None).unwrap();
        client.get_chain_tx_stats(Some(2016), None).unwrap();
        client.get_chain_tx_stats(Some(2016), Some("000abc")).unwrap();

        let requests = mock.requests();
        assert!(requests[0].params.is_empty());
        assert_eq!(requests[1].params, vec![json!(2016)]);
        assert_eq!(requests[2].params, vec![json!(2016), json!("000abc")]);
    }

    #[test]
    fn get_spent_info_wraps_its_arguments_in_one_object() {
        let (client, mock) = mock_client(MockTransport::builder().build());
        client.get_spent_info("deadbeef", 1).unwrap();

        let requests = mock.requests();
        assert_eq!(
            requests[0].params,
            vec![json!({"txid": "deadbeef", "index": 1})]
        );
    }

    #[test]
    fn get_tx_out_proof_appends_the_block_hash_only_when_given() {
        let (client, mock) = mock_client(MockTransport::builder().build());
        client.get_tx_out_proof(&["aa", "bb"], None).unwrap();
        client.get_tx_out_proof(&["aa"], Some("000abc")).unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].params, vec![json!(["aa", "bb"])]);
        assert_eq!(requests[1].params, vec![json!(["aa"]), json!("000abc")]);
    }
}
