//! Find dictionary words hidden in a letter grid.
//!
//! ```
//! use wordgrid_core::{find_words, Grid};
//!
//! let grid = Grid::parse("CCC\nCAC\nCCT\nDOG").unwrap();
//! let found = find_words(&grid, ["CAT", "DOG", "BIRD", "PLANE"]);
//! assert!(found.contains("CAT") && found.contains("DOG"));
//! assert_eq!(found.len(), 2);
//! ```

pub mod grid;
pub mod search;
pub mod settings;
pub mod trie;

pub use grid::{Grid, GridError};
pub use search::{
    find_words, find_words_in_rows, find_words_with_index, find_words_with_options,
    SearchOptions,
};
pub use trie::{PrefixTrie, TrieLookupResult, TrieNode};
