pub mod cli;
pub mod classifier;
pub mod dictionary;
pub mod error;
pub mod export;
pub mod loader;
pub mod tagger;
