use std::collections::HashSet;

use crate::grid::Grid;
use crate::trie::TrieNode;

/// Depth-first walker that owns the visited mask, the candidate being spelled
/// and the words found so far.
///
/// A walker may be reused across any number of starting cells: every call to
/// `search_from` unmarks each cell it marked before returning.
pub(super) struct Walker<'g> {
    grid: &'g Grid,
    visited: Vec<bool>,
    path: String,
    found: HashSet<String>,
}

impl<'g> Walker<'g> {
    pub(super) fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            visited: vec![false; grid.len()],
            path: String::new(),
            found: HashSet::new(),
        }
    }

    /// Collect every word spelled by a path starting at cell `start`.
    pub(super) fn search_from(&mut self, start: usize, root: &TrieNode) {
        self.visit(start, root);
    }

    pub(super) fn into_found(self) -> HashSet<String> {
        self.found
    }

    /// `parent` is the trie node for `self.path` before this cell is added.
    fn visit(&mut self, index: usize, parent: &TrieNode) {
        if self.visited[index] {
            return;
        }
        let ch = self.grid.at(index);
        // Pruned: no word continues with this character, so the mask is
        // left untouched.
        let Some(node) = parent.child(ch) else {
            return;
        };

        self.path.push(ch);
        if node.is_word() && !self.found.contains(&self.path) {
            self.found.insert(self.path.clone());
        }

        if node.has_children() {
            self.visited[index] = true;
            let grid = self.grid;
            for next in grid.neighbors(index) {
                self.visit(next, node);
            }
            self.visited[index] = false;
        }

        self.path.pop();
    }

    #[cfg(test)]
    pub(super) fn is_clean(&self) -> bool {
        self.path.is_empty() && !self.visited.iter().any(|&v| v)
    }
}
