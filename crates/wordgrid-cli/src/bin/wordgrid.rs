use clap::{Parser, Subcommand};

use wordgrid_cli::commands::find_ops::{FindOptions, OutputFormat};
use wordgrid_cli::commands::{config_ops, find_ops};
use wordgrid_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "wordgrid", about = "Find dictionary words hidden in a letter grid")]
struct Cli {
    /// Custom settings TOML (defaults are embedded)
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every dictionary word found in the grid, sorted
    Find {
        /// Grid file, one row per line
        grid_file: String,
        /// Word list, one word per line
        dict_file: String,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
        /// Fold grid and words to uppercase before searching
        #[arg(long)]
        uppercase: bool,
        /// Search starting cells in parallel
        #[arg(long)]
        parallel: bool,
        /// Force a sequential search
        #[arg(long, conflicts_with = "parallel")]
        sequential: bool,
    },
    /// Show word and node counts of the index built from a word list
    Stats {
        /// Word list, one word per line
        dict_file: String,
    },
    /// Check whether a string is a word or prefix in a word list
    Lookup {
        /// Word list, one word per line
        dict_file: String,
        /// String to look up
        query: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Some(file) = &cli.settings {
        config_ops::load_settings(file);
    }

    match cli.command {
        Command::Find {
            grid_file,
            dict_file,
            format,
            uppercase,
            parallel,
            sequential,
        } => {
            let opts = FindOptions {
                format,
                uppercase: uppercase.then_some(true),
                parallel: match (parallel, sequential) {
                    (true, _) => Some(true),
                    (_, true) => Some(false),
                    _ => None,
                },
            };
            find_ops::find(&grid_file, &dict_file, &opts);
        }
        Command::Stats { dict_file } => find_ops::stats(&dict_file),
        Command::Lookup { dict_file, query } => find_ops::lookup(&dict_file, &query),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
