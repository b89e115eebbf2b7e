//! casperrpc CLI: query a Casper node from the terminal.
//!
//! Usage:
//! ```bash
//! # Node status
//! casperrpc status --url http://127.0.0.1:7777/rpc
//!
//! # Liquid balance of an account
//! casperrpc balance --public-key 01a35887f3...
//!
//! # Send a raw JSON-RPC call
//! casperrpc call --method chain_get_state_root_hash
//! ```

mod logging;

use std::env;
use std::process;

use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;

use casperrpc_client::CasperClient;
use logging::LogConfig;

const URL_ENV: &str = "CASPER_NODE_URL";
const DEFAULT_URL: &str = "http://127.0.0.1:7777/rpc";

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let rest = &args[2..];
    logging::init_tracing(&LogConfig {
        level: parse_flag(rest, "--log-level").unwrap_or_else(|| LogConfig::default().level),
        json: has_flag(rest, "--json-logs"),
    });

    let result = match args[1].as_str() {
        "version" | "--version" | "-V" => {
            println!("casperrpc {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        command => run(command, rest).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(command: &str, args: &[String]) -> Result<()> {
    let client = connect(args)?;
    match command {
        "status" => print_json(&client.get_status().await?),
        "peers" => print_json(&client.get_peers().await?),
        "state-root" => {
            println!("{}", client.get_state_root_hash().await?);
            Ok(())
        }
        "block" => {
            let block = match block_selector(args)? {
                BlockSelector::Latest => client.get_latest_block().await?,
                BlockSelector::Height(h) => client.get_block_by_height(h).await?,
                BlockSelector::Hash(hash) => client.get_block_by_hash(&hash).await?,
            };
            print_json(&block)
        }
        "transfers" => {
            let transfers = match block_selector(args)? {
                BlockSelector::Latest => client.get_latest_block_transfers().await?,
                BlockSelector::Height(h) => client.get_block_transfers_by_height(h).await?,
                BlockSelector::Hash(hash) => client.get_block_transfers_by_hash(&hash).await?,
            };
            print_json(&transfers)
        }
        "deploy" => {
            let hash = require_flag(args, "--hash")?;
            match client.get_deploy(&hash).await? {
                Some(deploy) => print_json(&deploy),
                None => {
                    println!("deploy {hash} not found");
                    Ok(())
                }
            }
        }
        "account" => {
            let key = require_flag(args, "--public-key")?;
            match client.get_account_info(&key).await? {
                Some(info) => print_json(&info),
                None => {
                    println!("account {key} is not recorded on chain");
                    Ok(())
                }
            }
        }
        "balance" => {
            let key = require_flag(args, "--public-key")?;
            println!("{}", client.get_liquid_balance(&key).await?);
            Ok(())
        }
        "stake" => {
            let key = require_flag(args, "--public-key")?;
            print_json(&client.get_staking_balance(&key).await?)
        }
        "auction" => print_json(&client.get_auction_info().await?),
        "call" => {
            let method = require_flag(args, "--method")?;
            let params = parse_flag(args, "--params")
                .map(|p| serde_json::from_str(&p).context("--params is not valid JSON"))
                .transpose()?;
            print_json(&client.call_raw(&method, params).await?)
        }
        other => {
            print_usage();
            bail!("unknown command: {other}")
        }
    }
}

fn print_usage() {
    println!("casperrpc {}", env!("CARGO_PKG_VERSION"));
    println!("Query a Casper node over JSON-RPC\n");
    println!("USAGE:");
    println!("    casperrpc <COMMAND> [FLAGS]\n");
    println!("COMMANDS:");
    println!("    status       Node status");
    println!("    peers        Connected peers");
    println!("    state-root   Current state root hash");
    println!("    block        Block (latest, --height N or --hash H)");
    println!("    transfers    Block transfers (latest, --height N or --hash H)");
    println!("    deploy       Deploy by --hash");
    println!("    account      Account info by --public-key");
    println!("    balance      Liquid balance by --public-key");
    println!("    stake        Delegations by --public-key");
    println!("    auction      Auction snapshot");
    println!("    call         Raw call: --method M [--params JSON]");
    println!("    version      Print version");
    println!("    help         Print this help\n");
    println!("FLAGS:");
    println!("    --url <URL>          Node RPC endpoint  [env: {URL_ENV}, default: {DEFAULT_URL}]");
    println!("    --log-level <LEVEL>  Log filter when RUST_LOG is unset  [default: warn]");
    println!("    --json-logs          Emit logs as JSON");
}

fn connect(args: &[String]) -> Result<CasperClient> {
    let url = parse_flag(args, "--url")
        .or_else(|| env::var(URL_ENV).ok())
        .unwrap_or_else(|| DEFAULT_URL.to_string());
    tracing::debug!(%url, "connecting");
    Ok(CasperClient::http(url)?)
}

enum BlockSelector {
    Latest,
    Height(u64),
    Hash(String),
}

fn block_selector(args: &[String]) -> Result<BlockSelector> {
    match (parse_flag(args, "--height"), parse_flag(args, "--hash")) {
        (Some(_), Some(_)) => bail!("--height and --hash are mutually exclusive"),
        (Some(h), None) => Ok(BlockSelector::Height(
            h.parse().with_context(|| format!("invalid --height {h}"))?,
        )),
        (None, Some(hash)) => Ok(BlockSelector::Hash(hash)),
        (None, None) => Ok(BlockSelector::Latest),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn require_flag(args: &[String], flag: &str) -> Result<String> {
    parse_flag(args, flag).ok_or_else(|| anyhow!("{flag} is required"))
}

fn parse_flag(args: &[String], flag: &str) -> Option<String> {
    let pos = args.iter().position(|a| a == flag)?;
    args.get(pos + 1).cloned()
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}
