extern crate entity;
extern crate indicatif;

use std::{collections::BTreeSet, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use entity::{prelude::*, word::ActiveModel};
use indicatif::ProgressBar;
use log::info;
use sea_orm::{DatabaseConnection, EntityTrait, Set};

const CHUNK_SIZE: usize = 5000;
const WORD_LIST_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/refs/heads/master/words_alpha.txt";

/// Loads a newline-delimited word list into the `word` table
#[derive(Debug, Parser)]
#[command(name = "words")]
struct Args {
    /// Read the word list from a local file instead of downloading it
    #[arg(long, conflicts_with = "url")]
    file: Option<PathBuf>,

    /// Where to download the word list from
    #[arg(long, default_value = WORD_LIST_URL)]
    url: String,
}

impl Args {
    async fn fetch(&self) -> Result<String> {
        match &self.file {
            Some(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("cannot read {}", path.display())),
            None => Ok(reqwest::get(&self.url)
                .await?
                .error_for_status()?
                .text()
                .await?),
        }
    }
}

/// Trimmed, non-empty, each word once, in first-seen order.
fn unique_words(text: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    text.lines()
        .map(str::trim)
        .filter(|word| !word.is_empty() && seen.insert(*word))
        .map(str::to_owned)
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    let args = Args::parse();

    let words: Vec<ActiveModel> = unique_words(&args.fetch().await?)
        .into_iter()
        .map(|text| ActiveModel {
            text: Set(text),
            ..Default::default()
        })
        .collect();
    info!("fetched {} words", words.len());

    let db: DatabaseConnection = entity::get_connection()
        .await
        .context("cannot connect to the word database")?;

    println!("Processing...");
    let pb = ProgressBar::new(words.len() as u64);
    for batch in words.chunks(CHUNK_SIZE) {
        Word::insert_many(batch.to_vec()).exec(&db).await?;
        pb.inc(batch.len() as u64);
    }

    pb.finish_and_clear();

    println!("Done!");

    Ok(())
}
