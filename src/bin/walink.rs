//! Command-line front-end for the WhatsApp link helper.
//!
//! Derives `wa.me` links in the terminal using the same registry, validation
//! and derivation rules as the web form.
//!
//! # Usage
//!
//! ```bash
//! # Print a link
//! cargo run --bin walink -- link --country ID --phone 081234567890 --text "Hi there"
//!
//! # Prompt for the phone number and copy the link to the clipboard
//! cargo run --bin walink -- link --country ID --copy
//!
//! # List countries matching a search term
//! cargo run --bin walink -- countries --search indo
//! ```
//!
//! # Environment Variables
//!
//! - `COUNTRY_TABLE_PATH` - JSON table replacing the bundled one
//! - `PHONE_SEPARATORS` - `strip` (default) or `keep`
//! - `DEFAULT_COUNTRY` - Country used when `--country` is omitted
//!
//! The link itself goes to stdout; prompts, notifications and errors go to
//! stderr so the output can be piped.

use wa_link_helper::application::services::{CopyOutcome, LinkService};
use wa_link_helper::domain::entities::FormInput;
use wa_link_helper::domain::validation::FieldError;
use wa_link_helper::infrastructure::clipboard::Osc52Clipboard;
use wa_link_helper::infrastructure::notifier::TerminalNotifier;
use wa_link_helper::infrastructure::registry::StaticCountryRegistry;
use wa_link_helper::utils::SeparatorPolicy;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// WhatsApp link helper for the terminal.
#[derive(Parser)]
#[command(name = "walink")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON country table replacing the bundled one
    #[arg(long, global = true, env = "COUNTRY_TABLE_PATH")]
    table: Option<String>,

    /// How separators in phone numbers are treated: strip or keep
    #[arg(long, global = true, env = "PHONE_SEPARATORS", default_value = "strip")]
    separators: SeparatorPolicy,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Derive a wa.me link
    Link {
        /// Country code, e.g. ID
        #[arg(short, long, env = "DEFAULT_COUNTRY", default_value = "ID")]
        country: String,

        /// Phone number as you would dial it nationally; prompted when omitted
        #[arg(short, long)]
        phone: Option<String>,

        /// Message to prefill
        #[arg(short, long, default_value = "")]
        text: String,

        /// Copy the link to the clipboard (OSC 52)
        #[arg(long)]
        copy: bool,
    },

    /// List countries and their dial prefixes
    Countries {
        /// Only show entries whose name or code contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let registry = StaticCountryRegistry::load(cli.table.as_deref())
        .context("Failed to load country table")?;
    let service = LinkService::new(Arc::new(registry), cli.separators);

    match cli.command {
        Commands::Link {
            country,
            phone,
            text,
            copy,
        } => handle_link(&service, country, phone, text, copy),
        Commands::Countries { search } => {
            list_countries(&service, search.as_deref());
            Ok(())
        }
    }
}

/// Derives (and optionally copies) a link.
///
/// # Flow
///
/// 1. Prompt for the phone number if it was not given
/// 2. Run the validation gate; print field errors and fail when invalid
/// 3. Print the link, copying it first when `--copy` is set
fn handle_link(
    service: &LinkService,
    country: String,
    phone: Option<String>,
    text: String,
    copy: bool,
) -> Result<()> {
    let phone = match phone {
        Some(phone) => phone,
        None => Input::<String>::new()
            .with_prompt("Phone number")
            .allow_empty(true)
            .interact_text()?,
    };

    if service.country(&country).is_err() {
        eprintln!(
            "{}",
            format!("⚠️  Unknown country '{}', no dial prefix will be added", country).yellow()
        );
    }

    let input = FormInput::new(country, phone, text);

    if copy {
        let clipboard = Osc52Clipboard::stdout();
        let notifier = TerminalNotifier::new();

        return match service.copy_link(&input, &clipboard, &notifier) {
            CopyOutcome::Copied(link) | CopyOutcome::CopyFailed { link, .. } => {
                println!("{}", link.url);
                Ok(())
            }
            CopyOutcome::Rejected(errors) => fail_with(&errors),
        };
    }

    let snapshot = service.snapshot(&input);
    match snapshot.visible_link() {
        Some(link) => {
            println!("{}", link.url);
            Ok(())
        }
        None => fail_with(snapshot.validity.errors()),
    }
}

/// Prints field errors and returns a failing result.
fn fail_with(errors: &[FieldError]) -> Result<()> {
    for error in errors {
        eprintln!("{} {}", "✘".red().bold(), error.message);
    }

    anyhow::bail!("the form is not valid")
}

/// Prints every matching country.
fn list_countries(service: &LinkService, search: Option<&str>) {
    let needle = search.map(str::to_lowercase);

    let entries: Vec<_> = service
        .countries()
        .into_iter()
        .filter(|entry| match &needle {
            Some(needle) => {
                entry.region_name.to_lowercase().contains(needle)
                    || entry.code.to_lowercase().contains(needle)
            }
            None => true,
        })
        .collect();

    if entries.is_empty() {
        println!("{}", "No countries found".yellow());
        return;
    }

    println!("{}", "🌍 Countries".bright_blue().bold());
    println!();

    for entry in &entries {
        println!(
            "  {:<6} {}",
            entry.code.bright_cyan(),
            entry.display_label()
        );
    }

    println!();
    println!("{} {}", "Total:".bold(), entries.len());
}
