//! Zentab CLI
//!
//! Command-line interface for Zentab - start page bookmarks and settings.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use zentab_core::{Config, Store};

mod commands;
mod output;
mod prompt;
mod resolve;

use commands::bookmark::EditArgs;
use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "zentab")]
#[command(about = "Zentab - your start page bookmarks from the terminal")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Use a different config file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log debug output (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the active collection (default)
    Show,
    /// Manage collections
    Collection {
        #[command(subcommand)]
        command: CollectionCommands,
    },
    /// Manage categories of the active collection
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },
    /// Manage bookmarks of the active collection
    Bookmark {
        #[command(subcommand)]
        command: BookmarkCommands,
    },
    /// Show or change settings
    Settings {
        #[command(subcommand)]
        command: Option<SettingsCommands>,
    },
    /// Show or change extension settings
    Extension {
        #[command(subcommand)]
        command: Option<ExtensionCommands>,
    },
    /// Write a backup file of all data
    Export {
        /// File or directory to write to
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Replace all data with a backup file
    Import {
        /// Backup file to read
        file: PathBuf,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
    /// Show storage location and counts
    Status,
}

#[derive(Subcommand)]
enum CollectionCommands {
    /// List all collections
    #[command(alias = "ls")]
    List,
    /// Create a new collection and switch to it
    Add {
        /// Collection title
        title: String,
    },
    /// Remove a collection
    #[command(alias = "rm")]
    Remove {
        /// Collection ID, ID prefix or title
        id: String,
    },
    /// Rename a collection
    Rename {
        /// Collection ID, ID prefix or title
        id: String,
        /// New title
        title: String,
    },
    /// Switch the active collection
    #[command(alias = "switch")]
    Use {
        /// Collection ID, ID prefix or title
        id: String,
    },
}

#[derive(Subcommand)]
enum CategoryCommands {
    /// List categories
    #[command(alias = "ls")]
    List,
    /// Add a category
    Add {
        /// Category title (defaults to "New Category")
        title: Option<String>,
    },
    /// Delete a category and its bookmarks
    #[command(alias = "rm")]
    Delete {
        /// Category ID, ID prefix or title
        id: String,
    },
    /// Rename a category
    Rename {
        /// Category ID, ID prefix or title
        id: String,
        /// New title
        title: String,
    },
    /// Move a category to another position
    Move {
        /// Current position (0-based)
        from: usize,
        /// New position (0-based)
        to: usize,
    },
}

#[derive(Subcommand)]
enum BookmarkCommands {
    /// List bookmarks
    #[command(alias = "ls")]
    List {
        /// Only this category
        category: Option<String>,
    },
    /// Show bookmark details
    Show {
        /// Bookmark ID, ID prefix or title
        id: String,
    },
    /// Add a bookmark
    Add {
        /// Category ID, ID prefix or title
        category: String,
        /// Bookmark title
        title: String,
        /// Bookmark URL (https:// is added when no scheme is given)
        url: String,
        /// Icon name or URL
        #[arg(short, long)]
        icon: Option<String>,
    },
    /// Delete a bookmark
    #[command(alias = "rm")]
    Delete {
        /// Category ID, ID prefix or title
        category: String,
        /// Bookmark ID, ID prefix or title
        id: String,
    },
    /// Edit a bookmark
    Edit {
        /// Category ID, ID prefix or title
        category: String,
        /// Bookmark ID, ID prefix or title
        id: String,
        /// New title
        #[arg(short = 'T', long)]
        title: Option<String>,
        /// New URL
        #[arg(short, long)]
        url: Option<String>,
        /// New icon
        #[arg(short, long, conflicts_with = "clear_icon")]
        icon: Option<String>,
        /// Remove the icon
        #[arg(long)]
        clear_icon: bool,
    },
    /// Move a bookmark to a category
    #[command(alias = "mv")]
    Move {
        /// Bookmark ID, ID prefix or title
        id: String,
        /// Target category ID, ID prefix or title
        target: String,
        /// Position in the target category (defaults to the end)
        index: Option<usize>,
    },
    /// Open a bookmark in the browser
    Open {
        /// Bookmark ID, ID prefix or title
        id: String,
    },
}

#[derive(Subcommand)]
enum SettingsCommands {
    /// Show all settings
    Show,
    /// Set a setting
    Set {
        /// Setting key (e.g. userName, isEditMode)
        key: String,
        /// New value
        value: String,
    },
    /// Clear an optional setting
    Unset {
        /// Setting key (backgroundImageUrl, userName, weatherCity)
        key: String,
    },
}

#[derive(Subcommand)]
enum ExtensionCommands {
    /// List extensions
    #[command(alias = "ls")]
    List,
    /// Show settings of an extension
    Show {
        /// Extension ID
        id: String,
    },
    /// Replace settings of an extension
    Set {
        /// Extension ID
        id: String,
        /// Settings as a JSON object
        json: String,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, backup_dir, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Config commands work on the config file itself, not the store
    if let Some(Commands::Config { command }) = &cli.command {
        return handle_config_command(command.clone(), cli.config.as_ref(), &output);
    }

    let config = Config::load_with_cli_override(cli.config.as_ref())
        .context("Failed to load configuration")?;
    init_logging(&config, cli.verbose);

    let mut store = Store::open_with_config(config);

    match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => commands::collection::show(&store, &output),
        Commands::Collection { command } => {
            handle_collection_command(command, &mut store, &output)
        }
        Commands::Category { command } => handle_category_command(command, &mut store, &output),
        Commands::Bookmark { command } => handle_bookmark_command(command, &mut store, &output),
        Commands::Settings { command } => handle_settings_command(command, &mut store, &output),
        Commands::Extension { command } => {
            handle_extension_command(command, &mut store, &output)
        }
        Commands::Export { output: path } => commands::transfer::export(&store, path, &output),
        Commands::Import { file } => commands::transfer::import(&mut store, file, &output),
        Commands::Config { .. } => unreachable!(), // Handled above
        Commands::Status => commands::status::show(&store, &output),
    }
}

fn handle_collection_command(
    command: CollectionCommands,
    store: &mut Store,
    output: &Output,
) -> Result<()> {
    match command {
        CollectionCommands::List => commands::collection::list(store, output),
        CollectionCommands::Add { title } => commands::collection::add(store, title, output),
        CollectionCommands::Remove { id } => commands::collection::remove(store, id, output),
        CollectionCommands::Rename { id, title } => {
            commands::collection::rename(store, id, title, output)
        }
        CollectionCommands::Use { id } => commands::collection::switch(store, id, output),
    }
}

fn handle_category_command(
    command: CategoryCommands,
    store: &mut Store,
    output: &Output,
) -> Result<()> {
    match command {
        CategoryCommands::List => commands::category::list(store, output),
        CategoryCommands::Add { title } => commands::category::add(store, title, output),
        CategoryCommands::Delete { id } => commands::category::delete(store, id, output),
        CategoryCommands::Rename { id, title } => {
            commands::category::rename(store, id, title, output)
        }
        CategoryCommands::Move { from, to } => commands::category::reorder(store, from, to, output),
    }
}

fn handle_bookmark_command(
    command: BookmarkCommands,
    store: &mut Store,
    output: &Output,
) -> Result<()> {
    match command {
        BookmarkCommands::List { category } => commands::bookmark::list(store, category, output),
        BookmarkCommands::Show { id } => commands::bookmark::show(store, id, output),
        BookmarkCommands::Add {
            category,
            title,
            url,
            icon,
        } => commands::bookmark::add(store, category, title, url, icon, output),
        BookmarkCommands::Delete { category, id } => {
            commands::bookmark::delete(store, category, id, output)
        }
        BookmarkCommands::Edit {
            category,
            id,
            title,
            url,
            icon,
            clear_icon,
        } => {
            let args = EditArgs {
                title,
                url,
                icon,
                clear_icon,
            };
            commands::bookmark::edit(store, category, id, args, output)
        }
        BookmarkCommands::Move { id, target, index } => {
            commands::bookmark::move_to(store, id, target, index, output)
        }
        BookmarkCommands::Open { id } => commands::bookmark::open(store, id, output),
    }
}

fn handle_settings_command(
    command: Option<SettingsCommands>,
    store: &mut Store,
    output: &Output,
) -> Result<()> {
    match command {
        Some(SettingsCommands::Show) | None => commands::settings::show(store, output),
        Some(SettingsCommands::Set { key, value }) => {
            commands::settings::set(store, key, value, output)
        }
        Some(SettingsCommands::Unset { key }) => commands::settings::unset(store, key, output),
    }
}

fn handle_extension_command(
    command: Option<ExtensionCommands>,
    store: &mut Store,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ExtensionCommands::List) | None => commands::settings::list_extensions(store, output),
        Some(ExtensionCommands::Show { id }) => {
            commands::settings::show_extension(store, id, output)
        }
        Some(ExtensionCommands::Set { id, json }) => {
            commands::settings::set_extension(store, id, json, output)
        }
    }
}

fn handle_config_command(
    command: Option<ConfigCommands>,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(config_path, output),
        Some(ConfigCommands::Set { key, value }) => {
            commands::config::set(key, value, config_path, output)
        }
    }
}

/// Initialize logging
///
/// RUST_LOG wins when set; otherwise warnings, or debug with `--verbose`.
/// Logs go to the configured log file, or stderr when none is set or it
/// cannot be opened.
fn init_logging(config: &Config, verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("zentab_core={},zentab_cli={}", level, level))
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false);

    let log_file = config.log_file.as_deref().and_then(open_log_file);

    let _ = match log_file {
        Some(file) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    debug!("Logging initialized");
}

/// Open the log file for appending, or `None` to log to stderr instead
fn open_log_file(path: &Path) -> Option<File> {
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!(
                "Warning: Could not open log file {:?}: {}. Logging to stderr.",
                path, e
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_log_file_appends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("zentab.log");
        std::fs::write(&path, "earlier\n").unwrap();

        let mut file = open_log_file(&path).unwrap();
        std::io::Write::write_all(&mut file, b"later\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "earlier\nlater\n");
    }

    #[test]
    fn test_unopenable_log_file_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be opened as a log file
        assert!(open_log_file(temp_dir.path()).is_none());
        assert!(open_log_file(&temp_dir.path().join("missing").join("x.log")).is_none());
    }
}
