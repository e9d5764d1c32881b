use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub page: PageConfig,
    pub extensions: Extensions,
    pub highlight: HighlightConfig,
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    pub title: String,
}

/// Markdown extensions applied on top of CommonMark.
///
/// Fenced code blocks are part of CommonMark itself and cannot be turned off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Extensions {
    pub tables: bool,
    pub sane_lists: bool,
    pub highlight: bool,
    pub strip_frontmatter: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HighlightConfig {
    /// Class on the `<div>` wrapping each highlighted code block.
    pub css_class: String,
    pub theme: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    pub max_width: String,
    pub padding: String,
    pub font_family: String,
    pub line_height: String,
}

impl Config {
    /// The configuration embedded at build time from `default_config.toml`.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("default_config.toml is validated by build.rs")
    }

    /// Load a TOML file and layer it over the compiled defaults.
    ///
    /// Keys missing from the file keep their default value.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| Error::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse TOML text layered over the compiled defaults.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let mut base: toml::Table = toml::from_str(DEFAULT_CONFIG)?;
        let overlay: toml::Table = toml::from_str(content)?;
        merge(&mut base, overlay);
        toml::Value::Table(base).try_into()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::compiled_default()
    }
}

impl Default for Extensions {
    fn default() -> Self {
        Config::compiled_default().extensions
    }
}

fn merge(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(base_table)), toml::Value::Table(overlay_table)) => {
                merge(base_table, overlay_table);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
