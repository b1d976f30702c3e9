//! Contact Book - command line entry point
//!
//! A thin front end over [`ContactBook`]: each subcommand maps to one
//! collaborator call. Contacts are printed to stdout as JSON; logs go to
//! stderr.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use contact_book::{Config, ContactBook, ContactDraft, ContactId};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "contact-book")]
#[command(about = "Manage a local contact book", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Contact document (overrides CONTACT_BOOK_DATA_FILE)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List contacts, optionally filtered by a search query
    List {
        /// Case-insensitive substring to search for
        query: Option<String>,
    },
    /// Show a single contact
    Show {
        /// Contact ID
        id: String,
    },
    /// Add a new contact
    Add(ContactFields),
    /// Replace the fields of an existing contact
    Update {
        /// Contact ID
        id: String,
        #[command(flatten)]
        fields: ContactFields,
    },
    /// Delete a contact
    Delete {
        /// Contact ID
        id: String,
    },
    /// Export all contacts to a CSV file
    Export {
        /// Destination path
        path: PathBuf,
    },
    /// Import contacts from a CSV file, skipping duplicates
    Import {
        /// Source path
        path: PathBuf,
    },
}

#[derive(Args)]
struct ContactFields {
    /// Full name (required)
    #[arg(short, long)]
    name: String,
    /// Phone number
    #[arg(short, long, default_value = "")]
    phone: String,
    /// Email address
    #[arg(short, long, default_value = "")]
    email: String,
    /// Postal address (may contain newlines)
    #[arg(short, long, default_value = "")]
    address: String,
}

impl From<ContactFields> for ContactDraft {
    fn from(fields: ContactFields) -> Self {
        ContactDraft {
            name: fields.name,
            phone: fields.phone,
            email: fields.email,
            address: fields.address,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(path) = cli.data_file {
        config.data_file = path;
    }

    // Logging goes to stderr so stdout stays parseable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(data_file = %config.data_file.display(), "Opening contact book");
    let (mut book, warning) = ContactBook::open(&config);
    if let Some(warning) = warning {
        warn!("{}", warning);
    }

    run(&mut book, cli.command)
}

fn run(book: &mut ContactBook, command: Commands) -> Result<()> {
    match command {
        Commands::List { query } => {
            let contacts = book.list_contacts(query.as_deref());
            print_json(&contacts)?;
            eprintln!("{}", book.status_line(query.as_deref()));
        }
        Commands::Show { id } => {
            let contact = book.get_contact(&parse_id(&id)?)?;
            print_json(&contact)?;
        }
        Commands::Add(fields) => {
            let contact = book.add_contact(&fields.into())?;
            print_json(&contact)?;
        }
        Commands::Update { id, fields } => {
            let contact = book.update_contact(&parse_id(&id)?, &fields.into())?;
            print_json(&contact)?;
        }
        Commands::Delete { id } => {
            book.delete_contact(&parse_id(&id)?)?;
            println!("Deleted {id}");
        }
        Commands::Export { path } => {
            let count = book
                .export_contacts(&path)
                .with_context(|| format!("Could not export to {}", path.display()))?;
            println!("Exported {count} contacts to {}", path.display());
        }
        Commands::Import { path } => {
            let summary = book
                .import_contacts(&path)
                .with_context(|| format!("Could not import {}", path.display()))?;
            println!(
                "Imported {} contacts ({} duplicates, {} without a name skipped)",
                summary.added, summary.skipped_duplicate, summary.skipped_blank
            );
        }
    }
    Ok(())
}

fn parse_id(id: &str) -> Result<ContactId> {
    id.parse::<ContactId>()
        .with_context(|| format!("Invalid contact id `{id}`"))
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
