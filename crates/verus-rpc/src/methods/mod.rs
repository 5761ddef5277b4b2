//! The daemon method catalogue, grouped by command family.
//!
//! Each method maps its arguments onto the daemon's positional parameter
//! list and delegates to [`VerusClient::call`]; none validates or
//! reinterprets what the daemon returns. Optional arguments reproduce the
//! daemon's documented defaults, including the empty-string placeholder
//! some methods use to skip a positional slot.
//!
//! [`VerusClient::call`]: crate::client::VerusClient::call

mod addresses;
mod blockchain;
mod control;
mod currencies;
mod identity;
mod mining;
mod offers;
mod wallet;

use serde_json::Value;

/// A block named either by hash or by height.
///
/// Several daemon methods accept both forms in the same positional slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockRef {
    Hash(String),
    Height(u64),
}

impl BlockRef {
    pub(crate) fn into_param(self) -> Value {
        match self {
            BlockRef::Hash(hash) => Value::String(hash),
            BlockRef::Height(height) => Value::from(height),
        }
    }
}

impl From<&str> for BlockRef {
    fn from(hash: &str) -> Self {
        BlockRef::Hash(hash.to_owned())
    }
}

impl From<String> for BlockRef {
    fn from(hash: String) -> Self {
        BlockRef::Hash(hash)
    }
}

impl From<u64> for BlockRef {
    fn from(height: u64) -> Self {
        BlockRef::Height(height)
    }
}

impl From<u32> for BlockRef {
    fn from(height: u32) -> Self {
        BlockRef::Height(u64::from(height))
    }
}
