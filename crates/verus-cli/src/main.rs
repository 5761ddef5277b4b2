mod cli;

use std::time::Duration;

use clap::Parser;
use eyre::WrapErr;
use serde_json::Value;

use verus_rpc::{ClientConfig, ClientError, RpcValue, VerusClient};

fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let mut config = ClientConfig::new(args.network, args.rpc_user, args.rpc_password);
    config.host = args.host;
    config.timeout = args.timeout_secs.map(Duration::from_secs);

    let client = VerusClient::new(config).wrap_err("build RPC client")?;
    let value = run(&client, args.command)?;
    print_value(value);
    Ok(())
}

fn run(client: &VerusClient, command: cli::Command) -> Result<RpcValue, ClientError> {
    use cli::Command::*;

    match command {
        Getinfo => client.get_info(),
        Getwalletinfo => client.get_wallet_info(),
        Getbestblockhash => client.get_best_block_hash(),
        Getblockcount => client.get_block_count(),
        Getblock { block, verbosity } => client.get_block(block.as_str(), Some(verbosity)),
        Getblockhash { height } => client.get_block_hash(height),
        Getrawtransaction { txid, hex } => client.get_raw_transaction(&txid, Some(!hex)),
        Getmininginfo => client.get_mining_info(),
        Getgenerate => client.get_generate(),
        Setgenerate {
            generate,
            gen_proc_limit,
        } => client.set_generate(generate, gen_proc_limit),
        Getcurrency { currency } => client.get_currency(&currency),
        Estimateconversion {
            amount,
            from_currency,
            to_currency,
            via,
        } => client.estimate_conversion(amount, &from_currency, &to_currency, via.as_deref()),
        Getimports {
            currency,
            start_height,
            end_height,
        } => client.get_imports(&currency, start_height, end_height),
        Getexports {
            currency,
            start_height,
            end_height,
        } => client.get_exports(&currency, start_height, end_height),
        Getidentity { identity } => client.get_identity(&identity),
        Validateaddress { address } => client.validate_address(&address),
        Help { command } => client.help(command.as_deref()),
        Stop => client.stop(),
    }
}

/// Bare strings print as-is, like the daemon's own CLI; a null result
/// prints nothing; everything else pretty-prints as JSON.
fn print_value(value: RpcValue) {
    match value.into_json() {
        Value::String(s) => println!("{s}"),
        Value::Null => {}
        other => println!(
            "{}",
            serde_json::to_string_pretty(&other).expect("JSON value always renders")
        ),
    }
}
