use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use contactbook::cli::{
    handle_contact_command, handle_export_command, handle_import_command, handle_log_command,
    ContactCommands, ExportFormat, TerminalPrompter,
};
use contactbook::config::{ContactPaths, Settings};
use contactbook::error::ContactResult;
use contactbook::storage::Storage;

#[derive(Parser)]
#[command(
    name = "contactbook",
    version,
    about = "Personal contact book for the command line",
    long_about = "Add, list, filter, search and delete contacts. Contacts are stored \
                  as JSON in contacts.json next to the program (or in \
                  $CONTACTBOOK_DATA_DIR when set)."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Contact(ContactCommands),

    /// Export all contacts to a file
    Export {
        /// Output file path
        output: PathBuf,
        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Import contacts from a CSV file (name,email,phone,category)
    Import {
        /// Path to CSV file
        file: PathBuf,
    },

    /// Show recent changes from the audit log
    Log {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths, optionally changing settings
    Config {
        /// Write contacts.json indented instead of on one line
        #[arg(long)]
        pretty_json: Option<bool>,
        /// Record adds and deletes in audit.log
        #[arg(long)]
        audit: Option<bool>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ContactPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Operation failures are reported, not signalled through the exit status
    if let Err(e) = run(cli.command, paths, &settings) {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run(command: Option<Commands>, paths: ContactPaths, settings: &Settings) -> ContactResult<()> {
    let Some(command) = command else {
        println!("Contact Book - personal contacts from the command line");
        println!();
        println!("Run 'contactbook --help' for usage information.");
        println!("Run 'contactbook add' to create your first contact.");
        return Ok(());
    };

    let storage = Storage::new(paths.clone(), settings)?;

    let result = match command {
        Commands::Contact(cmd) => {
            let mut prompter = TerminalPrompter::stdio();
            handle_contact_command(&storage, cmd, &mut prompter)
        }
        Commands::Export {
            output,
            format,
            pretty,
        } => handle_export_command(&storage, &output, format, pretty),
        Commands::Import { file } => handle_import_command(&storage, &file),
        Commands::Log { limit } => handle_log_command(&storage, limit),
        Commands::Config { pretty_json, audit } => {
            update_config(&paths, settings, pretty_json, audit)
        }
    };

    for failure in storage.take_audit_failures() {
        eprintln!("Warning: audit log not updated: {}", failure);
    }

    result
}

fn update_config(
    paths: &ContactPaths,
    settings: &Settings,
    pretty_json: Option<bool>,
    audit: Option<bool>,
) -> ContactResult<()> {
    if pretty_json.is_none() && audit.is_none() {
        print_config(paths, settings);
        return Ok(());
    }

    let mut updated = settings.clone();
    if let Some(pretty_json) = pretty_json {
        updated.pretty_json = pretty_json;
    }
    if let Some(audit) = audit {
        updated.audit_enabled = audit;
    }
    updated.save(paths)?;

    println!("Configuration saved.");
    println!();
    print_config(paths, &updated);
    Ok(())
}

fn print_config(paths: &ContactPaths, settings: &Settings) {
    println!("Contact Book Configuration");
    println!("==========================");
    println!("Data directory: {}", paths.base_dir().display());
    println!("Contacts file:  {}", paths.contacts_file().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Pretty JSON:   {}", settings.pretty_json);
    println!("  Audit enabled: {}", settings.audit_enabled);
}
