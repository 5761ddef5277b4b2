use clap::{Parser, Subcommand};

use verus_rpc::Network;

/// Command-line access to a Verus daemon's JSON-RPC interface.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Host running the daemon.
    #[arg(long, default_value = "127.0.0.1", env = "VERUS_RPC_HOST")]
    pub host: String,

    /// Network the daemon is configured for (mainnet or testnet); decides
    /// the RPC port.
    #[arg(long, default_value = "mainnet", env = "VERUS_RPC_NETWORK")]
    pub network: Network,

    /// RPC username.
    #[arg(long, env = "VERUS_RPC_USER")]
    pub rpc_user: String,

    /// RPC password.
    #[arg(long, env = "VERUS_RPC_PASSWORD", hide_env_values = true)]
    pub rpc_password: String,

    /// Per-request timeout in seconds. Unset means no client-side timeout.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Daemon state summary.
    Getinfo,
    /// Wallet state summary.
    Getwalletinfo,
    /// Hash of the current chain tip.
    Getbestblockhash,
    /// Height of the best valid chain.
    Getblockcount,
    /// Block data by hash or height.
    Getblock {
        /// Block hash or height.
        block: String,
        /// 0 = serialized hex, 1 = summary object, 2 = with transaction detail.
        #[arg(long, default_value_t = 1)]
        verbosity: u8,
    },
    /// Block hash at a height.
    Getblockhash { height: u64 },
    /// Raw transaction by id.
    Getrawtransaction {
        txid: String,
        /// Print serialized hex instead of the decoded object.
        #[arg(long)]
        hex: bool,
    },
    /// Mining and staking status.
    Getmininginfo,
    /// Whether the daemon is mining or minting.
    Getgenerate,
    /// Turn mining/minting on or off.
    Setgenerate {
        /// true to start generating, false to stop.
        generate: bool,
        /// Processor threads to use; 0 stakes instead of mining.
        #[arg(long)]
        gen_proc_limit: Option<i32>,
    },
    /// Currency definition by name or i-address.
    Getcurrency { currency: String },
    /// Estimate a currency conversion.
    Estimateconversion {
        amount: f64,
        from_currency: String,
        to_currency: String,
        /// Intermediate basket currency to route the conversion through.
        #[arg(long)]
        via: Option<String>,
    },
    /// Import records for a currency.
    Getimports {
        currency: String,
        #[arg(long)]
        start_height: Option<u64>,
        #[arg(long)]
        end_height: Option<u64>,
    },
    /// Export records for a currency.
    Getexports {
        currency: String,
        #[arg(long)]
        start_height: Option<u64>,
        #[arg(long)]
        end_height: Option<u64>,
    },
    /// Identity by name (@-terminated) or i-address.
    Getidentity { identity: String },
    /// Validate an address.
    Validateaddress { address: String },
    /// Help text from the daemon.
    Help { command: Option<String> },
    /// Ask the daemon to shut down.
    Stop,
}
