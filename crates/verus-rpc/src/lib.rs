//! Verus daemon JSON-RPC client.
//!
//! [`VerusClient`] speaks the daemon's JSON-RPC 1.0 dialect over HTTP with
//! basic authentication. The RPC port and native currency ticker are resolved
//! from the configured [`Network`] at construction time; after that, every
//! daemon method is exposed as a catalogue method that builds the positional
//! parameter list, performs one blocking round trip, and returns the
//! normalized reply ([`RpcValue`]).

pub mod client;
pub mod config;
pub mod error;
pub mod methods;
pub mod response;
pub mod rpc;
#[cfg(test)]
mod test_util;

pub use client::VerusClient;
pub use config::{ClientConfig, Network};
pub use error::ClientError;
pub use methods::BlockRef;
pub use response::{normalize, ResponseData, RpcValue};
