use anyhow::Result;
use clap::Parser;
use log::info;

use letterboxed::{
    config::Config,
    search::{ChainSearch, CoverageScorer},
    trie::Trie,
    vocabulary::{restrict_to_alphabet, restrict_to_groups},
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    env_logger::Builder::from_default_env()
        .filter_level(config.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .init();

    let sides = config.sides()?;
    let alphabet = sides.alphabet();

    let words = config.word_source().load().await?;
    let dictionary: Trie = words.iter().collect();
    info!("created dictionary of {} words", dictionary.len());

    let possible_words = restrict_to_alphabet(&dictionary, &alphabet);
    info!("{} words use only {}", possible_words.len(), sides);

    let valid_words = restrict_to_groups(&possible_words, &sides);
    info!("{} words can be played on the sides", valid_words.len());

    info!("searching from {} starting letters", alphabet.len());
    let outcome = ChainSearch::new(&valid_words, CoverageScorer::new())
        .with_max_words(config.max_words)
        .search(&alphabet, !config.no_progress);

    for attempt in outcome.attempts() {
        println!("{}: {}", attempt.start(), attempt);
    }

    match outcome.best() {
        Some(best) if best.is_complete() => println!("Best: {}", best),
        Some(best) => {
            let missing: String = best.uncovered().iter().collect();
            println!("Best: {} (missing {})", best, missing);
        }
        None => println!("No chain found"),
    }

    Ok(())
}
