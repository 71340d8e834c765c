use std::path::PathBuf;

use anyhow::{Context, Result};
use entity::prelude::*;
use sea_orm::EntityTrait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// Newline-delimited word list
    File(PathBuf),
    /// The `word` table behind `DATABASE_URL`
    Database,
}

impl WordSource {
    pub async fn load(&self) -> Result<Vec<String>> {
        match self {
            WordSource::File(path) => {
                let text = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("cannot read word list {}", path.display()))?;
                Ok(parse_word_list(&text))
            }
            WordSource::Database => {
                let db = entity::get_connection()
                    .await
                    .context("cannot connect to the word database")?;
                let models = Word::find().all(&db).await.context("cannot load words")?;
                Ok(models
                    .into_iter()
                    .map(|model| model.text.trim().to_owned())
                    .filter(|word| !word.is_empty())
                    .collect())
            }
        }
    }
}

pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}
