//! XYRA CLI - Catalog, dictionary and locale tools.
//!
//! # Usage
//!
//! ```bash
//! # List products, optionally in one category or as JSON
//! xyra-cli catalog list --category Reels
//! xyra-cli catalog list --json
//!
//! # Show a product with its related products
//! xyra-cli catalog show crystal-minnow --related 3
//!
//! # Report translation keys missing from any locale
//! xyra-cli dictionary check
//!
//! # Trace how the storefront would route a request
//! xyra-cli locale resolve /shop --accept-language "ja,en;q=0.5"
//! ```
//!
//! # Commands
//!
//! - `catalog list` / `catalog show` - Inspect the product catalog
//! - `dictionary check` - Verify every locale has every UI string
//! - `locale resolve` - Explain the locale redirect for a path

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "xyra-cli")]
#[command(author, version, about = "XYRA storefront tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Check UI string dictionaries
    Dictionary {
        #[command(subcommand)]
        action: DictionaryAction,
    },
    /// Trace locale resolution
    Locale {
        #[command(subcommand)]
        action: LocaleAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products
    List {
        /// Only show products in this category (Reels, Lures, Baits, Gifts)
        #[arg(short, long)]
        category: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one product
    Show {
        /// Product ID
        id: String,

        /// Number of related products to list
        #[arg(short, long, default_value_t = 3)]
        related: usize,
    },
}

#[derive(Subcommand)]
enum DictionaryAction {
    /// Report keys missing from any locale
    Check,
}

#[derive(Subcommand)]
enum LocaleAction {
    /// Resolve the locale for a request path
    Resolve {
        /// Request path, e.g. `/shop`
        path: String,

        /// Value of the `NEXT_LOCALE` cookie
        #[arg(long)]
        cookie: Option<String>,

        /// Value of the `Accept-Language` header
        #[arg(long)]
        accept_language: Option<String>,

        /// Fallback locale
        #[arg(long, default_value = "en")]
        default: String,
    },
}

fn main() {
    // Load .env file if present (RUST_LOG may be set there)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("xyra_cli=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = run(cli).and_then(|output| {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{output}").map_err(CliError::from)
    });

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List { category, json } => {
                commands::catalog::list(category.as_deref(), json)
            }
            CatalogAction::Show { id, related } => commands::catalog::show(&id, related),
        },
        Commands::Dictionary { action } => match action {
            DictionaryAction::Check => commands::dictionary::check(),
        },
        Commands::Locale { action } => match action {
            LocaleAction::Resolve {
                path,
                cookie,
                accept_language,
                default,
            } => commands::locale::resolve(
                &path,
                cookie.as_deref(),
                accept_language.as_deref(),
                &default,
            ),
        },
    }
}
