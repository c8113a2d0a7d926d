use std::collections::HashSet;

use rayon::prelude::*;
use tracing::debug;

use super::walker::Walker;
use crate::grid::Grid;
use crate::trie::PrefixTrie;

/// Fan starting cells out across the rayon pool.
///
/// Each rayon task folds into its own `Walker`, so visited masks are never
/// shared between threads. The per-task result sets are merged at the end.
pub(super) fn find_words_parallel(grid: &Grid, trie: &PrefixTrie) -> HashSet<String> {
    let root = trie.root();
    let found = (0..grid.len())
        .into_par_iter()
        .fold(
            || Walker::new(grid),
            |mut walker, start| {
                walker.search_from(start, root);
                walker
            },
        )
        .map(Walker::into_found)
        .reduce(HashSet::new, |mut a, mut b| {
            if a.len() < b.len() {
                std::mem::swap(&mut a, &mut b);
            }
            a.extend(b);
            a
        });
    debug!(threads = rayon::current_num_threads(), "parallel search merged");
    found
}
