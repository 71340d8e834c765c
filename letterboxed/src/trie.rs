use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct TrieNode {
    character: Option<char>, // None only for the root
    is_terminal: bool,
    children: BTreeMap<char, TrieNode>,
}

impl TrieNode {
    fn new(character: char) -> Self {
        TrieNode {
            character: Some(character),
            is_terminal: false,
            children: BTreeMap::new(),
        }
    }

    fn root() -> Self {
        TrieNode::default()
    }

    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Pre-order walk from this node. `word` holds the path above it and is
    /// restored before returning.
    fn collect(&self, word: &mut String, output: &mut Vec<String>) {
        if let Some(c) = self.character {
            word.push(c);
        }
        if self.is_terminal {
            output.push(word.clone());
        }

        for child in self.children.values() {
            child.collect(word, output);
        }

        if self.character.is_some() {
            word.pop();
        }
    }
}

/// Prefix index over a vocabulary of words.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            root: TrieNode::root(),
            len: 0,
        }
    }

    pub fn insert(&mut self, word: &str) {
        let node = word.chars().fold(&mut self.root, |node, c| {
            node.children.entry(c).or_insert_with(|| TrieNode::new(c))
        });

        if !node.is_terminal {
            node.is_terminal = true;
            self.len += 1;
        }
    }

    fn find(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
    }

    /// Every stored word starting with `prefix`, in depth-first pre-order from
    /// the node the prefix ends at. Empty if the prefix is not in the trie.
    pub fn query(&self, prefix: &str) -> Vec<String> {
        let mut output = vec![];
        if let Some(node) = self.find(prefix) {
            let mut word = prefix.to_owned();
            word.pop();
            node.collect(&mut word, &mut output);
        }
        output
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(TrieNode::is_terminal)
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut trie = Trie::new();
        iter.into_iter().for_each(|word| trie.insert(word.as_ref()));
        trie
    }
}
