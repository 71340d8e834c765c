use std::{collections::BTreeSet, fmt::Display, str::FromStr};

use thiserror::Error;

pub const MIN_WORD_LENGTH: usize = 3;

pub type CharacterGroup = Vec<char>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SidesError {
    #[error("no sides were given")]
    Empty,
    #[error("side {0} has no letters")]
    EmptyGroup(usize),
    #[error("letter '{0}' appears on more than one side")]
    Duplicate(char),
}

/// The letter groups of a puzzle. Two letters from the same side may not be
/// adjacent within a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sides(Vec<CharacterGroup>);

impl Sides {
    pub fn groups(&self) -> &[CharacterGroup] {
        &self.0
    }

    /// Every letter appearing on any side.
    pub fn alphabet(&self) -> BTreeSet<char> {
        self.0.iter().flatten().copied().collect()
    }

    pub fn is_valid(&self, word: &str) -> bool {
        is_valid_word(word, &self.0)
    }
}

impl FromStr for Sides {
    type Err = SidesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let groups: Vec<CharacterGroup> = s
            .split_whitespace()
            .map(|side| side.chars().collect())
            .collect();

        Sides::try_from(groups)
    }
}

impl TryFrom<Vec<CharacterGroup>> for Sides {
    type Error = SidesError;

    fn try_from(groups: Vec<CharacterGroup>) -> Result<Self, Self::Error> {
        if groups.is_empty() {
            return Err(SidesError::Empty);
        }

        let mut seen = BTreeSet::new();
        for (idx, group) in groups.iter().enumerate() {
            if group.is_empty() {
                return Err(SidesError::EmptyGroup(idx));
            }
            for &c in group.iter().collect::<BTreeSet<_>>() {
                if !seen.insert(c) {
                    return Err(SidesError::Duplicate(c));
                }
            }
        }

        Ok(Sides(groups))
    }
}

impl Display for Sides {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sides: Vec<String> = self.0.iter().map(|group| group.iter().collect()).collect();
        f.write_str(&sides.join(" "))
    }
}

/// A word is valid when it is at least [`MIN_WORD_LENGTH`] long, every letter
/// is on some side, and no two consecutive letters share a side.
///
/// A letter listed on several sides belongs to the first one, in order, that
/// contains it.
pub fn is_valid_word(word: &str, groups: &[CharacterGroup]) -> bool {
    if word.chars().count() < MIN_WORD_LENGTH {
        return false;
    }

    let mut previous: Option<usize> = None;
    for c in word.chars() {
        let current = match groups.iter().position(|group| group.contains(&c)) {
            Some(idx) => idx,
            None => return false,
        };
        if previous == Some(current) {
            return false;
        }
        previous = Some(current);
    }

    true
}
