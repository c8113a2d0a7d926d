//! Property-based checks of the search against a brute-force path checker.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::grid::Grid;
use crate::search::{find_words, find_words_with_index, find_words_with_options, SearchOptions};
use crate::trie::PrefixTrie;

// ---------------------------------------------------------------------------
// Reference: per-word path search, no trie
// ---------------------------------------------------------------------------

fn spells_from(grid: &Grid, word: &[char], index: usize, used: &mut Vec<bool>) -> bool {
    if used[index] || grid.at(index) != word[0] {
        return false;
    }
    if word.len() == 1 {
        return true;
    }
    used[index] = true;
    let hit = grid
        .neighbors(index)
        .any(|next| spells_from(grid, &word[1..], next, used));
    used[index] = false;
    hit
}

fn is_spellable(grid: &Grid, word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return false;
    }
    let mut used = vec![false; grid.len()];
    (0..grid.len()).any(|start| spells_from(grid, &chars, start, &mut used))
}

// ---------------------------------------------------------------------------
// Strategies: small alphabet so that words actually occur
// ---------------------------------------------------------------------------

fn arb_letter() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['A', 'B', 'C', 'D'])
}

fn arb_grid() -> impl Strategy<Value = Grid> {
    (0usize..5, 1usize..5).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(arb_letter(), cols), rows)
            .prop_map(|rows| Grid::from_rows(rows).unwrap())
    })
}

fn arb_word() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_letter(), 1..6).prop_map(|cs| cs.into_iter().collect())
}

fn arb_dictionary() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_word(), 0..16)
}

proptest! {
    #[test]
    fn found_words_are_exactly_the_spellable_ones(grid in arb_grid(), dict in arb_dictionary()) {
        let found = find_words(&grid, &dict);
        let expected: HashSet<String> = dict
            .iter()
            .filter(|w| is_spellable(&grid, w))
            .cloned()
            .collect();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn larger_dictionary_never_loses_words(
        grid in arb_grid(),
        dict in arb_dictionary(),
        extra in arb_dictionary(),
    ) {
        let small = find_words(&grid, &dict);
        let large = find_words(&grid, dict.iter().chain(extra.iter()));
        prop_assert!(small.is_subset(&large));
    }

    #[test]
    fn repeated_searches_agree(grid in arb_grid(), dict in arb_dictionary()) {
        let trie = PrefixTrie::from_words(&dict);
        prop_assert_eq!(
            find_words_with_index(&grid, &trie),
            find_words_with_index(&grid, &trie)
        );
    }

    #[test]
    fn parallel_matches_sequential(grid in arb_grid(), dict in arb_dictionary()) {
        let trie = PrefixTrie::from_words(&dict);
        let options = SearchOptions { parallel: true, parallel_min_cells: 1 };
        prop_assert_eq!(
            find_words_with_options(&grid, &trie, options),
            find_words_with_index(&grid, &trie)
        );
    }

    #[test]
    fn single_cell_grid_matches_only_its_letter(letter in arb_letter(), dict in arb_dictionary()) {
        let grid = Grid::from_rows([[letter]]).unwrap();
        let found = find_words(&grid, &dict);
        let expected: HashSet<String> = dict
            .iter()
            .filter(|w| w.as_str() == letter.to_string())
            .cloned()
            .collect();
        prop_assert_eq!(found, expected);
    }
}
