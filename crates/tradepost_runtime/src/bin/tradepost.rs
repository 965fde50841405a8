//! Tradepost CLI entry point.

use std::env;
use std::process::ExitCode;
use std::sync::{Arc, RwLock};

use tradepost_runtime::commands::{SET_TRADE_PERM_PERMISSION, standard_commands};
use tradepost_runtime::repl::Repl;
use tradepost_runtime::session::Session;
use tradepost_runtime::shop::ShopRegistry;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    sender: Option<String>,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-s" | "--sender" => {
                i += 1;
                if i >= args.len() {
                    return Err("--sender requires a value".into());
                }
                config.sender = Some(args[i].clone());
            }
            arg => {
                return Err(format!("unknown option: {arg}").into());
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("tradepost {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let registry = Arc::new(RwLock::new(seed_shops()));
    let sender = config.sender.unwrap_or_else(|| "console".to_string());
    let session = Session::new(sender, registry).with_permission(SET_TRADE_PERM_PERMISSION);
    let commands = standard_commands(&session);

    let mut repl = Repl::new(session, commands)?;
    repl.run()?;
    Ok(())
}

fn seed_shops() -> ShopRegistry {
    let mut shops = ShopRegistry::new();
    shops.add("Bakery");
    shops.add("Iron Forge");
    shops.add("Fish Market");
    shops
}

fn print_help() {
    println!(
        "\x1b[1mTradepost\x1b[0m - Interactive shop administration shell

\x1b[1mUSAGE:\x1b[0m
    tradepost [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -s, --sender NAME  Sign in under the given name (default: console)

\x1b[1mSHELL COMMANDS:\x1b[0m
    settradeperm <shop> [?|-|<perm>]  Query, set, or remove a trade permission
    list                              List all registered shops
    target [shop]                     Target a shop, or clear the target
    help                              Show the command overview
    Ctrl+D                            Exit"
    );
}
