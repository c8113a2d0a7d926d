mod properties;

use std::collections::HashSet;

use crate::grid::Grid;

pub(super) fn grid(rows: &[&str]) -> Grid {
    Grid::from_rows(rows.iter().map(|r| r.chars().collect::<Vec<char>>())).unwrap()
}

pub(super) fn set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}
