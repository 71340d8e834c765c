use std::{collections::BTreeSet, fmt::Display};

use indicatif::ProgressBar;
use log::{debug, warn};
use rayon::prelude::*;

use crate::trie::Trie;

pub const MAX_CHAIN_WORDS: usize = 6;

pub trait Scorer: Sync + Send {
    fn score(&self, word: &str, characters_left: &BTreeSet<char>) -> usize;
}

/// Scores a word by how many uncovered letters it would cover.
pub struct CoverageScorer;

impl CoverageScorer {
    pub fn new() -> Self {
        CoverageScorer {}
    }
}

impl Default for CoverageScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for CoverageScorer {
    fn score(&self, word: &str, characters_left: &BTreeSet<char>) -> usize {
        word.chars()
            .collect::<BTreeSet<char>>()
            .intersection(characters_left)
            .count()
    }
}

#[derive(Debug, Clone)]
struct ChainState {
    letter: char,
    words: Vec<String>,
    characters_left: BTreeSet<char>,
}

impl ChainState {
    fn new(start: char, target: &BTreeSet<char>) -> Self {
        ChainState {
            letter: start,
            words: vec![],
            characters_left: target.clone(),
        }
    }

    fn push(&mut self, word: String) {
        word.chars().for_each(|c| {
            self.characters_left.remove(&c);
        });
        if let Some(last) = word.chars().last() {
            self.letter = last;
        }
        self.words.push(word);
    }

    fn into_attempt(self, start: char) -> ChainAttempt {
        ChainAttempt {
            start,
            words: self.words,
            uncovered: self.characters_left,
        }
    }
}

/// The chain built from one starting letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainAttempt {
    start: char,
    words: Vec<String>,
    uncovered: BTreeSet<char>,
}

impl ChainAttempt {
    pub fn start(&self) -> char {
        self.start
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn uncovered(&self) -> &BTreeSet<char> {
        &self.uncovered
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.uncovered.is_empty()
    }
}

impl Display for ChainAttempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.words.is_empty() {
            return f.write_str("-");
        }
        f.write_str(&self.words.join(" -> "))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    attempts: Vec<ChainAttempt>,
}

impl SearchOutcome {
    pub fn attempts(&self) -> &[ChainAttempt] {
        &self.attempts
    }

    /// The attempt leaving the fewest letters uncovered, then using the fewest
    /// words. Ties go to the earliest attempt.
    pub fn best(&self) -> Option<&ChainAttempt> {
        self.attempts
            .iter()
            .min_by_key(|attempt| (attempt.uncovered.len(), attempt.len()))
    }
}

impl From<Vec<ChainAttempt>> for SearchOutcome {
    fn from(attempts: Vec<ChainAttempt>) -> Self {
        SearchOutcome { attempts }
    }
}

pub struct ChainSearch<'a, S: Scorer> {
    vocabulary: &'a Trie,
    scorer: S,
    max_words: usize,
}

impl<'a, S: Scorer> ChainSearch<'a, S> {
    pub fn new(vocabulary: &'a Trie, scorer: S) -> Self {
        ChainSearch {
            vocabulary,
            scorer,
            max_words: MAX_CHAIN_WORDS,
        }
    }

    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Highest scoring candidate, keeping the first one on a tie.
    fn best_candidate(
        &self,
        candidates: Vec<String>,
        characters_left: &BTreeSet<char>,
    ) -> Option<String> {
        let mut best: Option<(usize, String)> = None;
        for word in candidates {
            let score = self.scorer.score(&word, characters_left);
            if best.as_ref().map_or(true, |(top, _)| score > *top) {
                best = Some((score, word));
            }
        }
        best.map(|(_, word)| word)
    }

    /// Greedily extends a chain from `start` until `target` is covered, the
    /// chain reaches the word limit, or no word continues it.
    pub fn build_chain(&self, start: char, target: &BTreeSet<char>) -> ChainAttempt {
        let mut state = ChainState::new(start, target);
        let mut prefix = String::with_capacity(4);

        while state.words.len() < self.max_words && !state.characters_left.is_empty() {
            prefix.clear();
            prefix.push(state.letter);

            let candidates = self.vocabulary.query(&prefix);
            let word = match self.best_candidate(candidates, &state.characters_left) {
                Some(word) => word,
                None => {
                    warn!("skipping {}, there are no valid words for it", state.letter);
                    break;
                }
            };

            debug!("{}: picked {} after {:?}", start, word, state.words);
            state.push(word);
        }

        state.into_attempt(start)
    }

    /// Builds one chain per letter of `target`.
    pub fn search(&self, target: &BTreeSet<char>, show_progress: bool) -> SearchOutcome {
        let starts: Vec<char> = target.iter().copied().collect();
        let progress_bar = if show_progress {
            ProgressBar::new(starts.len() as u64)
        } else {
            ProgressBar::hidden()
        };

        let attempts: Vec<ChainAttempt> = starts
            .par_iter()
            .map(|&start| {
                let attempt = self.build_chain(start, target);
                progress_bar.inc(1);
                attempt
            })
            .collect();
        progress_bar.finish_and_clear();

        SearchOutcome::from(attempts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        sides::Sides,
        vocabulary::{restrict_to_alphabet, restrict_to_groups},
    };

    const DICTIONARY: [&str; 9] = [
        "cat", "tiger", "rat", "rag", "tic", "tea", "ace", "act", "dog",
    ];

    fn vocabulary(sides: &Sides) -> Trie {
        let full: Trie = DICTIONARY.iter().collect();
        restrict_to_groups(&restrict_to_alphabet(&full, &sides.alphabet()), sides)
    }

    fn attempt(start: char, words: &[&str], uncovered: &str) -> ChainAttempt {
        ChainAttempt {
            start,
            words: words.iter().map(|&word| word.to_owned()).collect(),
            uncovered: uncovered.chars().collect(),
        }
    }

    mod scorer {
        use super::*;

        #[test]
        fn test_coverage() {
            let scorer = CoverageScorer::new();
            let left: BTreeSet<char> = "tic".chars().collect();
            assert_eq!(scorer.score("tic", &left), 3);
            assert_eq!(scorer.score("tiger", &left), 2);
            assert_eq!(scorer.score("dog", &left), 0);
        }

        #[test]
        fn test_repeated_letters_count_once() {
            let scorer = CoverageScorer::new();
            let left: BTreeSet<char> = "ab".chars().collect();
            assert_eq!(scorer.score("aaa", &left), 1);
            assert_eq!(scorer.score("abab", &left), 2);
        }
    }

    mod build_chain {
        use super::*;

        #[test]
        fn test_full_coverage() {
            let sides: Sides = "cte ai gr".parse().unwrap();
            let vocabulary = vocabulary(&sides);
            let search = ChainSearch::new(&vocabulary, CoverageScorer::new());

            let chain = search.build_chain('c', &sides.alphabet());
            assert_eq!(chain, attempt('c', &["cat", "tiger"], ""));
            assert!(chain.is_complete());
        }

        #[test]
        fn test_tie_keeps_first_candidate() {
            let sides: Sides = "cte ai gr".parse().unwrap();
            let vocabulary = vocabulary(&sides);
            let search = ChainSearch::new(&vocabulary, CoverageScorer::new());

            // "rag" and "rat" both cover three letters
            let chain = search.build_chain('r', &sides.alphabet());
            assert_eq!(chain, attempt('r', &["rag"], "ceit"));
        }

        #[test]
        fn test_no_candidate_words() {
            let sides: Sides = "cte ai gr".parse().unwrap();
            let vocabulary = vocabulary(&sides);
            let search = ChainSearch::new(&vocabulary, CoverageScorer::new());

            let chain = search.build_chain('a', &sides.alphabet());
            assert!(chain.is_empty());
            assert_eq!(chain.uncovered(), &sides.alphabet());
        }

        #[test]
        fn test_chaining() {
            let sides: Sides = "cte ai gr".parse().unwrap();
            let vocabulary = vocabulary(&sides);
            let search = ChainSearch::new(&vocabulary, CoverageScorer::new());

            for start in sides.alphabet() {
                let chain = search.build_chain(start, &sides.alphabet());
                for pair in chain.words().windows(2) {
                    assert_eq!(pair[0].chars().last(), pair[1].chars().next());
                }
                if let Some(first) = chain.words().first() {
                    assert!(first.starts_with(start));
                }
            }
        }

        #[test]
        fn test_word_limit() {
            let sides: Sides = "ab cd".parse().unwrap();
            let vocabulary: Trie = ["aca"].iter().collect();
            let search = ChainSearch::new(&vocabulary, CoverageScorer::new());

            let chain = search.build_chain('a', &sides.alphabet());
            assert_eq!(chain.len(), MAX_CHAIN_WORDS);
            assert_eq!(chain.uncovered(), &"bd".chars().collect::<BTreeSet<char>>());

            let search = search.with_max_words(2);
            assert_eq!(search.build_chain('a', &sides.alphabet()).len(), 2);
        }

        #[test]
        fn test_zero_word_limit() {
            let vocabulary: Trie = ["aca"].iter().collect();
            let search = ChainSearch::new(&vocabulary, CoverageScorer::new()).with_max_words(0);
            assert!(search.build_chain('a', &"ac".chars().collect()).is_empty());
        }

        #[test]
        fn test_coverage_never_grows() {
            let sides: Sides = "cte ai gr".parse().unwrap();
            let vocabulary = vocabulary(&sides);
            let search = ChainSearch::new(&vocabulary, CoverageScorer::new());
            let target = sides.alphabet();

            for start in sides.alphabet() {
                let chain = search.build_chain(start, &target);
                let mut state = ChainState::new(start, &target);
                for word in chain.words() {
                    let before = state.characters_left.clone();
                    state.push(word.clone());
                    assert!(state.characters_left.is_subset(&before));
                }
                assert_eq!(&state.characters_left, chain.uncovered());
            }
        }
    }

    mod search {
        use super::*;

        #[test]
        fn test_attempt_per_letter() {
            let sides: Sides = "cte ai gr".parse().unwrap();
            let vocabulary = vocabulary(&sides);
            let outcome = ChainSearch::new(&vocabulary, CoverageScorer::new())
                .search(&sides.alphabet(), false);

            let starts: Vec<char> = outcome.attempts().iter().map(ChainAttempt::start).collect();
            assert_eq!(starts, vec!['a', 'c', 'e', 'g', 'i', 'r', 't']);
        }

        #[test]
        fn test_attempts_are_independent() {
            let sides: Sides = "cte ai gr".parse().unwrap();
            let vocabulary = vocabulary(&sides);
            let outcome = ChainSearch::new(&vocabulary, CoverageScorer::new())
                .search(&sides.alphabet(), false);

            assert_eq!(
                outcome.attempts(),
                &[
                    attempt('a', &[], "acegirt"),
                    attempt('c', &["cat", "tiger"], ""),
                    attempt('e', &[], "acegirt"),
                    attempt('g', &[], "acegirt"),
                    attempt('i', &[], "acegirt"),
                    attempt('r', &["rag"], "ceit"),
                    attempt('t', &["tiger", "rag"], "c"),
                ]
            );
        }

        #[test]
        fn test_best_chain() {
            let sides: Sides = "cte ai gr".parse().unwrap();
            let vocabulary = vocabulary(&sides);
            let outcome = ChainSearch::new(&vocabulary, CoverageScorer::new())
                .search(&sides.alphabet(), false);

            let best = outcome.best().unwrap();
            assert!(best.is_complete());
            assert!(best.len() <= 2);
            assert_eq!(best.to_string(), "cat -> tiger");
        }

        #[test]
        fn test_empty_target() {
            let vocabulary: Trie = DICTIONARY.iter().collect();
            let outcome = ChainSearch::new(&vocabulary, CoverageScorer::new())
                .search(&BTreeSet::new(), false);
            assert!(outcome.attempts().is_empty());
            assert!(outcome.best().is_none());
        }
    }

    mod best {
        use super::*;

        #[test]
        fn test_fewest_words() {
            let outcome = SearchOutcome::from(vec![
                attempt('a', &["ab", "bc", "cd", "de"], ""),
                attempt('b', &["bc", "ce"], ""),
                attempt('c', &["cb", "ba", "ad", "da", "ae"], ""),
            ]);
            assert_eq!(outcome.best().map(ChainAttempt::len), Some(2));
        }

        #[test]
        fn test_first_on_tie() {
            let outcome = SearchOutcome::from(vec![
                attempt('a', &["ab", "bc", "cd"], ""),
                attempt('b', &["bc", "ce"], ""),
                attempt('c', &["cd", "de"], ""),
            ]);
            assert_eq!(outcome.best().map(ChainAttempt::start), Some('b'));
        }

        #[test]
        fn test_complete_beats_shorter() {
            let outcome = SearchOutcome::from(vec![
                attempt('a', &[], "abcde"),
                attempt('b', &["bca"], "de"),
                attempt('c', &["cab", "bed"], ""),
            ]);
            assert_eq!(outcome.best().map(ChainAttempt::start), Some('c'));
        }

        #[test]
        fn test_closest_when_nothing_complete() {
            let outcome = SearchOutcome::from(vec![
                attempt('a', &[], "abcde"),
                attempt('b', &["bca", "ab"], "de"),
                attempt('c', &["cab"], "de"),
            ]);
            assert_eq!(outcome.best().map(ChainAttempt::start), Some('c'));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(attempt('a', &[], "a").to_string(), "-");
        assert_eq!(attempt('c', &["cat", "tiger"], "").to_string(), "cat -> tiger");
    }
}
