use std::collections::BTreeSet;

use crate::{sides::Sides, trie::Trie};

/// Builds a new index holding the words of `index` that start with one of
/// `starts` and satisfy `keep`.
fn restrict<F>(index: &Trie, starts: &BTreeSet<char>, keep: F) -> Trie
where
    F: Fn(&str) -> bool,
{
    let mut restricted = Trie::new();
    let mut prefix = String::with_capacity(4);
    for &c in starts {
        prefix.clear();
        prefix.push(c);
        index
            .query(&prefix)
            .iter()
            .filter(|word| keep(word.as_str()))
            .for_each(|word| restricted.insert(word));
    }
    restricted
}

/// Words spelled only with letters from `allowed`.
pub fn restrict_to_alphabet(full: &Trie, allowed: &BTreeSet<char>) -> Trie {
    restrict(full, allowed, |word| word.chars().all(|c| allowed.contains(&c)))
}

/// Words that can be played on `sides`.
pub fn restrict_to_groups(index: &Trie, sides: &Sides) -> Trie {
    restrict(index, &sides.alphabet(), |word| sides.is_valid(word))
}
