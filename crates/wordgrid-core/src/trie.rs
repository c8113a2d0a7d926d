use std::collections::HashMap;

/// Outcome of walking a query string through the trie.
#[derive(Debug, PartialEq, Eq)]
pub enum TrieLookupResult {
    /// No inserted word starts with the query.
    None,
    /// The query is a strict prefix of at least one word.
    Prefix,
    /// The query is a word and nothing longer extends it.
    Exact,
    /// The query is a word and also a prefix of longer words.
    ExactAndPrefix,
}

/// One prefix position. Children are keyed by the next character.
#[derive(Debug, Default)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
    is_word: bool,
}

impl TrieNode {
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// True when the path from the root to this node spells an inserted word.
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    fn count_nodes(&self) -> usize {
        1 + self
            .children
            .values()
            .map(TrieNode::count_nodes)
            .sum::<usize>()
    }
}

/// Character trie over a fixed dictionary.
///
/// Both queries run in time proportional to the query length, independent
/// of how many words were inserted.
#[derive(Debug, Default)]
pub struct PrefixTrie {
    root: TrieNode,
    word_count: usize,
}

impl PrefixTrie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        trie.extend(words);
        trie
    }

    /// Insert `word`. Inserting the same word again is a no-op.
    ///
    /// The empty string marks the root itself as a word.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        if !node.is_word {
            node.is_word = true;
            self.word_count += 1;
        }
    }

    /// True when some inserted word starts with `prefix` (or equals it).
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// True when `word` was inserted exactly.
    pub fn has_word(&self, word: &str) -> bool {
        self.walk(word).is_some_and(TrieNode::is_word)
    }

    pub fn lookup(&self, query: &str) -> TrieLookupResult {
        match self.walk(query) {
            None => TrieLookupResult::None,
            Some(node) => match (node.is_word, node.has_children()) {
                (false, _) => TrieLookupResult::Prefix,
                (true, false) => TrieLookupResult::Exact,
                (true, true) => TrieLookupResult::ExactAndPrefix,
            },
        }
    }

    /// Entry node for incremental walks.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct words inserted.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.count_nodes()
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    fn walk(&self, s: &str) -> Option<&TrieNode> {
        s.chars().try_fold(&self.root, |node, ch| node.child(ch))
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixTrie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixTrie {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        Self::from_words(words)
    }
}
