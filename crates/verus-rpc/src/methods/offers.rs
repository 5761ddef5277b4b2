//! Marketplace offers on identities and currencies.

use serde_json::{json, Value};

use crate::client::VerusClient;
use crate::error::ClientError;
use crate::response::RpcValue;

impl VerusClient {
    /// Creates a new offer from the daemon's offer-definition shape.
    pub fn make_offer(&self, offer_data: Value) -> Result<RpcValue, ClientError> {
        self.call("makeoffer", vec![offer_data])
    }

    /// Accepts an existing offer.
    pub fn take_offer(&self, offer_id: &str, offer_data: Value) -> Result<RpcValue, ClientError> {
        self.call("takeoffer", vec![json!(offer_id), offer_data])
    }

    /// Returns the currently open offers.
    pub fn get_offers(&self) -> Result<RpcValue, ClientError> {
        self.call("getoffers", vec![])
    }

    /// Closes the offer with the given id.
    pub fn close_offers(&self, offer_id: &str) -> Result<RpcValue, ClientError> {
        self.call("closeoffers", vec![json!(offer_id)])
    }
}
