use std::collections::HashSet;
use std::path::Path;
use std::process;

use tracing::info;
use wordgrid_core::settings::settings;
use wordgrid_core::{find_words_with_options, PrefixTrie, SearchOptions, TrieLookupResult};

use crate::input::{load_dictionary, load_grid};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub struct FindOptions {
    pub format: OutputFormat,
    /// Overrides `input.uppercase` when set.
    pub uppercase: Option<bool>,
    /// Overrides `search.parallel` when set.
    pub parallel: Option<bool>,
}

pub fn find(grid_file: &str, dict_file: &str, opts: &FindOptions) {
    let input = &settings().input;
    let uppercase = opts.uppercase.unwrap_or(input.uppercase);

    let grid = die!(
        load_grid(Path::new(grid_file), uppercase),
        "Error loading {grid_file}: {}"
    );
    let words = die!(
        load_dictionary(Path::new(dict_file), &input.comment_prefix, uppercase),
        "Error loading {dict_file}: {}"
    );

    let trie = PrefixTrie::from_words(&words);
    let mut search = SearchOptions::from_settings();
    if let Some(parallel) = opts.parallel {
        search.parallel = parallel;
    }
    let found = find_words_with_options(&grid, &trie, search);
    info!(found = found.len(), cells = grid.len(), "search finished");

    print_words(&found, opts.format);
}

fn print_words(found: &HashSet<String>, format: OutputFormat) {
    let out = die!(format_words(found, format), "Error encoding JSON: {}");
    print!("{out}");
}

/// Render found words sorted: one per line, or a single JSON array line.
pub fn format_words(
    found: &HashSet<String>,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let mut sorted: Vec<&String> = found.iter().collect();
    sorted.sort();
    match format {
        OutputFormat::Text => Ok(sorted.iter().map(|w| format!("{w}\n")).collect()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(&sorted)?)),
    }
}

pub fn stats(dict_file: &str) {
    let input = &settings().input;
    let words = die!(
        load_dictionary(Path::new(dict_file), &input.comment_prefix, input.uppercase),
        "Error loading {dict_file}: {}"
    );
    let trie = PrefixTrie::from_words(&words);
    println!("Lines: {}", words.len());
    println!("Words: {}", trie.word_count());
    println!("Nodes: {}", trie.node_count());
}

pub fn lookup(dict_file: &str, query: &str) {
    let input = &settings().input;
    let words = die!(
        load_dictionary(Path::new(dict_file), &input.comment_prefix, input.uppercase),
        "Error loading {dict_file}: {}"
    );
    let trie = PrefixTrie::from_words(&words);
    println!("{query}: {}", lookup_label(&trie.lookup(query)));
}

pub fn lookup_label(result: &TrieLookupResult) -> &'static str {
    match result {
        TrieLookupResult::None => "none",
        TrieLookupResult::Prefix => "prefix",
        TrieLookupResult::Exact => "word",
        TrieLookupResult::ExactAndPrefix => "word, prefix",
    }
}
