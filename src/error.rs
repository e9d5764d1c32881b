use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while turning a markdown file into an HTML page.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read config {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to highlight `{language}` code block: {message}")]
    Highlight { language: String, message: String },

    #[error("unknown highlight theme `{0}`")]
    UnknownTheme(String),

    #[error("failed to generate stylesheet: {0}")]
    Stylesheet(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
