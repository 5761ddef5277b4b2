//! Shared helpers for unit tests.

use std::sync::Arc;

use crate::client::VerusClient;
use crate::config::{ClientConfig, Network};
use crate::rpc::mock::MockTransport;

pub fn test_config() -> ClientConfig {
    ClientConfig::new(Network::Testnet, "user", "password")
}

/// Client wired to a mock transport, returned alongside the mock so tests
/// can inspect the requests it observed.
pub fn mock_client(mock: MockTransport) -> (VerusClient, Arc<MockTransport>) {
    let mock = Arc::new(mock);
    let client = VerusClient::with_transport(test_config(), mock.clone());
    (client, mock)
}
