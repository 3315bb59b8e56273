use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use hudctl::ctx::AppContext;
use log::LevelFilter;
use t20hud::{Dispatched, SystemAdapter};

/// Command-line host for the Tormenta20 action HUD
#[derive(Parser)]
#[command(name = "hudctl")]
#[command(about = "Inspect Tormenta20 action-HUD menus", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (TOML or JSON)
    #[arg(short, long, default_value = t20hud::config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the default attribute bars
    Attributes,

    /// Print the default category layout
    Layout,

    /// Build the menu of one category from a character snapshot
    Menu {
        /// Character snapshot (JSON or TOML)
        snapshot: PathBuf,
        /// Category id, e.g. `skills`
        category: String,
    },

    /// Activate a menu entry on a scripted character
    Use {
        /// Character snapshot (JSON or TOML)
        snapshot: PathBuf,
        /// Leaf id, e.g. `skill-luta`, `attr-for` or an item id
        item_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .parse_default_env()
        .init();

    let ctx = AppContext::load(&cli.config)?;
    ctx.print_summary();

    match cli.command {
        Command::Attributes => print_json(&ctx.adapter.default_attributes())?,
        Command::Layout => print_json(&ctx.adapter.default_layout())?,
        Command::Menu { snapshot, category } => {
            let node = ctx.menu(&snapshot, &category).await?;
            if node.is_error() {
                eprintln!("{}", format!("menu `{category}` failed to build").red());
            }
            print_json(&node)?;
        }
        Command::Use { snapshot, item_id } => {
            let (outcome, lines) = ctx.use_item(&snapshot, &item_id).await?;
            for line in lines {
                println!("{}", line.green().bold());
            }
            match outcome {
                Dispatched::Invoked(behavior) => {
                    println!("{}", format!("{item_id}: {behavior:?}").cyan())
                }
                Dispatched::NoOp => println!("{}", format!("{item_id}: nothing to do").yellow()),
            }
        }
    }

    Ok(())
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
