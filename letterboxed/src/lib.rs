pub mod config;
pub mod search;
pub mod sides;
pub mod source;
pub mod trie;
pub mod vocabulary;
