//! Client configuration and network parameter resolution.
//!
//! The daemon listens on a fixed per-network RPC port and names its native
//! currency differently on each network; both are functions of [`Network`]
//! rather than independent configuration knobs.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ClientError;

// ==============================================================================
// Network
// ==============================================================================

/// Which Verus deployment the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// RPC listening port. Fixed by the daemon, not configurable.
    pub const fn port(self) -> u16 {
        match self {
            Network::Mainnet => 27486,
            Network::Testnet => 18843,
        }
    }

    /// Ticker of the network's native currency.
    pub const fn native_currency(self) -> &'static str {
        match self {
            Network::Mainnet => "vrsc",
            Network::Testnet => "vrsctest",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ClientError;

    /// Case-insensitive. Anything other than `mainnet` or `testnet` is
    /// rejected outright rather than mapped to a fallback network.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            other => Err(ClientError::InvalidConfiguration(format!(
                "network must be `mainnet` or `testnet`, got `{other}`"
            ))),
        }
    }
}

// ==============================================================================
// Client Configuration
// ==============================================================================

/// Connection parameters for one daemon. Immutable for the lifetime of the
/// client built from it.
///
/// Credentials are always caller-supplied; there are no built-in defaults
/// that could silently mask missing credentials.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Hostname or address of the machine running the daemon.
    pub host: String,
    pub network: Network,
    pub rpc_user: String,
    pub rpc_password: String,
    /// Per-request timeout applied to the HTTP transport. `None` leaves the
    /// exchange unbounded on the client side.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Configuration for a daemon on the local machine.
    pub fn new(
        network: Network,
        rpc_user: impl Into<String>,
        rpc_password: impl Into<String>,
    ) -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            network,
            rpc_user: rpc_user.into(),
            rpc_password: rpc_password.into(),
            timeout: None,
        }
    }

    /// Root URL the daemon serves JSON-RPC on.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}/", self.host, self.network.port())
    }
}
