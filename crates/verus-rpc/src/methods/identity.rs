//! VerusID identity queries and lifecycle operations.

use serde_json::{json, Value};

use crate::client::VerusClient;
use crate::error::ClientError;
use crate::response::RpcValue;

impl VerusClient {
    /// Returns details for an identity, addressed by name (@-terminated)
    /// or i-address.
    pub fn get_identity(&self, identity: &str) -> Result<RpcValue, ClientError> {
        self.call("getidentity", vec![json!(identity)])
    }

    /// Updates an identity. `new_data` holds the fields to change, in the
    /// daemon's identity-definition shape.
    pub fn update_identity(
        &self,
        identity: &str,
        new_data: Value,
    ) -> Result<RpcValue, ClientError> {
        self.call("updateidentity", vec![json!(identity), new_data])
    }

    /// Registers a new identity from a full identity definition.
    pub fn register_identity(&self, identity_data: Value) -> Result<RpcValue, ClientError> {
        self.call("registeridentity", vec![identity_data])
    }

    /// Registers a name commitment ahead of identity registration.
    pub fn register_name_commitment(
        &self,
        name: &str,
        commitment: &str,
    ) -> Result<RpcValue, ClientError> {
        self.call(
            "registernamecommitment",
            vec![json!(name), json!(commitment)],
        )
    }

    /// Revokes an identity.
    pub fn revoke_identity(&self, identity: &str) -> Result<RpcValue, ClientError> {
        self.call("revokeidentity", vec![json!(identity)])
    }

    /// Recovers a revoked identity using its recovery authority.
    pub fn recover_identity(
        &self,
        identity: &str,
        recovery_data: Value,
    ) -> Result<RpcValue, ClientError> {
        self.call("recoveridentity", vec![json!(identity), recovery_data])
    }

    /// Sets a timelock on an identity, either an unlock height or an
    /// unlock delay, per the daemon's timelock object shape.
    pub fn set_identity_timelock(
        &self,
        identity: &str,
        timelock: Value,
    ) -> Result<RpcValue, ClientError> {
        self.call("setidentitytimelock", vec![json!(identity), timelock])
    }
}
