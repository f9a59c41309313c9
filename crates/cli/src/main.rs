//! Arcana Cart CLI - manage a file-backed cart from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add two copies of a card
//! arcana-cart add card-42 --name "Ember Drake" --price 2.50 --image assets/cards/drake.png --qty 2
//!
//! # Change a quantity (floored, minimum 1)
//! arcana-cart set card-42 5
//!
//! # Remove an item
//! arcana-cart remove card-42
//!
//! # Show the cart, or just the total quantity
//! arcana-cart show
//! arcana-cart count
//!
//! # Delete the cart slot
//! arcana-cart clear
//! ```
//!
//! Every command that writes the cart prints the badge line (`cart: 6`)
//! afterwards. Configuration comes from `ARCANA_CART_*` environment
//! variables; `--data-dir` and `--key` override them.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use arcana_cart_client::config::validate_storage_key;
use arcana_cart_client::{ClientConfig, FileStorage, TerminalBadge, telemetry};
use arcana_cart_core::{BadgeRefresher, CartStore};

mod commands;

#[derive(Parser)]
#[command(name = "arcana-cart")]
#[command(author, version, about = "Arcana Cart command-line tools")]
struct Cli {
    /// Directory holding the cart file (overrides `ARCANA_CART_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Storage slot name (overrides `ARCANA_CART_STORAGE_KEY`)
    #[arg(long, global = true)]
    key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an item, or increase its quantity if already in the cart
    Add {
        /// Item id
        id: String,

        /// Display name
        #[arg(short, long, default_value = "")]
        name: String,

        /// Unit price
        #[arg(short, long, default_value_t = 0.0)]
        price: f64,

        /// Image path or URL
        #[arg(short, long, default_value = "")]
        image: String,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        qty: i64,
    },
    /// Set an item's quantity (floored to a whole number, at least 1)
    Set {
        /// Item id
        id: String,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        qty: f64,
    },
    /// Remove an item
    Remove {
        /// Item id
        id: String,
    },
    /// Print the total quantity
    Count,
    /// List the items in the cart
    Show {
        /// Print the raw JSON array instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Delete the cart slot
    Clear,
}

fn main() {
    let cli = Cli::parse();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Tracing is not up yet; fall back to the default format to report this.
            let _ = telemetry::init_tracing(arcana_cart_client::LogFormat::Text);
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = telemetry::init_tracing(config.log_format) {
        tracing::warn!("Tracing already initialized: {e}");
    }

    if let Err(e) = run(cli, config) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, mut config: ClientConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(key) = cli.key {
        validate_storage_key(&key).map_err(|reason| format!("invalid --key: {reason}"))?;
        config.storage_key = key;
    }

    tracing::debug!(dir = %config.data_dir.display(), key = %config.storage_key, "Opening cart");

    let store = CartStore::new(FileStorage::new(&config.data_dir), config.storage_key.as_str())
        .with_observer(BadgeRefresher::new(TerminalBadge::new(io::stdout())));

    let mut out = io::stdout();

    match cli.command {
        Commands::Add {
            id,
            name,
            price,
            image,
            qty,
        } => commands::cart::add(&store, &id, name, price, image, qty)?,
        Commands::Set { id, qty } => commands::cart::set(&store, &mut out, &id, qty)?,
        Commands::Remove { id } => commands::cart::remove(&store, &mut out, &id)?,
        Commands::Count => commands::cart::count(&store, &mut out)?,
        Commands::Show { json } => commands::cart::show(&store, &mut out, json)?,
        Commands::Clear => commands::cart::clear(&store)?,
    }
    Ok(())
}
