//! Grid word search.
//!
//! Builds a `PrefixTrie` from the dictionary, then runs a backtracking
//! depth-first walk from every cell over the 8 neighbouring directions. The
//! walk descends the trie one edge per step and abandons a branch as soon as
//! no dictionary word continues the spelled prefix.

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(test)]
mod tests;
mod walker;

use std::collections::HashSet;

use tracing::{debug, debug_span};

use crate::grid::{Grid, GridError};
use crate::settings::settings;
use crate::trie::PrefixTrie;
use walker::Walker;

/// How a search is scheduled. Never changes what is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Spread starting cells over the rayon pool. Ignored without the
    /// `parallel` feature.
    pub parallel: bool,
    /// Grids with fewer cells than this run sequentially.
    pub parallel_min_cells: usize,
}

impl SearchOptions {
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            parallel_min_cells: usize::MAX,
        }
    }

    pub fn from_settings() -> Self {
        let s = &settings().search;
        Self {
            parallel: s.parallel,
            parallel_min_cells: s.parallel_min_cells,
        }
    }

    fn runs_parallel(&self, grid: &Grid) -> bool {
        self.parallel && grid.len() >= self.parallel_min_cells
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::from_settings()
    }
}

/// Find every dictionary word that can be spelled in `grid`.
///
/// A word is spelled by a chain of cells where each step moves to one of the
/// 8 neighbours and no cell is used twice. Matching is case-sensitive.
pub fn find_words<I, S>(grid: &Grid, dictionary: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if grid.is_empty() {
        return HashSet::new();
    }
    let trie = PrefixTrie::from_words(dictionary);
    find_words_with_index(grid, &trie)
}

/// Like [`find_words`], but validates raw rows first.
pub fn find_words_in_rows<R, I, S>(
    rows: impl IntoIterator<Item = R>,
    dictionary: I,
) -> Result<HashSet<String>, GridError>
where
    R: AsRef<[char]>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let grid = Grid::from_rows(rows)?;
    Ok(find_words(&grid, dictionary))
}

/// Sequential search against a pre-built index.
///
/// One visited mask is reused for every starting cell.
pub fn find_words_with_index(grid: &Grid, trie: &PrefixTrie) -> HashSet<String> {
    find_words_with_options(grid, trie, SearchOptions::sequential())
}

pub fn find_words_with_options(
    grid: &Grid,
    trie: &PrefixTrie,
    options: SearchOptions,
) -> HashSet<String> {
    let _span = debug_span!("find_words", rows = grid.rows(), cols = grid.cols()).entered();
    debug!(
        word_count = trie.word_count(),
        parallel = options.parallel,
        "searching grid"
    );
    if grid.is_empty() || trie.is_empty() {
        return HashSet::new();
    }

    let found = if options.runs_parallel(grid) {
        search_parallel(grid, trie)
    } else {
        search_sequential(grid, trie)
    };

    debug!(found = found.len(), "search complete");
    found
}

fn search_sequential(grid: &Grid, trie: &PrefixTrie) -> HashSet<String> {
    let mut walker = Walker::new(grid);
    for start in 0..grid.len() {
        walker.search_from(start, trie.root());
    }
    walker.into_found()
}

#[cfg(feature = "parallel")]
fn search_parallel(grid: &Grid, trie: &PrefixTrie) -> HashSet<String> {
    parallel::find_words_parallel(grid, trie)
}

#[cfg(not(feature = "parallel"))]
fn search_parallel(grid: &Grid, trie: &PrefixTrie) -> HashSet<String> {
    debug!("built without the `parallel` feature, searching sequentially");
    search_sequential(grid, trie)
}
