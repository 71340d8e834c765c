use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{search::MAX_CHAIN_WORDS, sides::Sides, source::WordSource};

const PROMPT: &str = "What are the letters given? Separate them by a space: ";

/// Finds a short chain of words covering every letter of a Letter Boxed puzzle
#[derive(Debug, Clone, Parser)]
#[command(name = "letterboxed")]
pub struct Config {
    /// Letters on each side, e.g. `cat ige rnu olp`. Asked for on stdin when omitted
    pub sides: Vec<String>,

    /// Newline-delimited word list
    #[arg(short, long, default_value = "word_list.txt")]
    pub words: PathBuf,

    /// Read words from the database at DATABASE_URL instead of the word list
    #[arg(long)]
    pub database: bool,

    /// Longest chain to try before giving up on a starting letter
    #[arg(long, default_value_t = MAX_CHAIN_WORDS)]
    pub max_words: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl Config {
    pub fn word_source(&self) -> WordSource {
        if self.database {
            WordSource::Database
        } else {
            WordSource::File(self.words.clone())
        }
    }

    pub fn sides(&self) -> Result<Sides> {
        if self.sides.is_empty() {
            return prompt_for_sides();
        }
        Ok(self.sides.join(" ").parse::<Sides>()?)
    }
}

fn prompt_for_sides() -> Result<Sides> {
    print!("{}", PROMPT);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("cannot read the sides")?;
    Ok(line.parse::<Sides>()?)
}
