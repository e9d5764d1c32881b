mod config;
mod error;
mod highlight;
mod parser;
mod template;

pub use config::{Config, Extensions, HighlightConfig, LayoutConfig, PageConfig};
pub use error::{Error, Result};
pub use highlight::{Highlighter, StyleSheetSource};
pub use parser::{CmarkEngine, MarkdownEngine};
pub use template::{Page, render_page};

use std::fs;
use std::path::Path;

use tracing::{debug, info};

/// Convert markdown to an HTML fragment using default config.
pub fn markdown_to_fragment(markdown: &str) -> Result<String> {
    markdown_to_fragment_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to an HTML fragment with custom config.
pub fn markdown_to_fragment_with_config(markdown: &str, config: &Config) -> Result<String> {
    let highlighter = Highlighter::new();
    CmarkEngine::new(&highlighter, &config.highlight.css_class)
        .convert(markdown, &config.extensions)
}

/// CSS for highlighted code blocks with the configured theme and class.
pub fn stylesheet(config: &Config) -> Result<String> {
    Highlighter::new().stylesheet(&config.highlight.theme, &config.highlight.css_class)
}

/// Convert markdown to a complete HTML page using default config.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    markdown_to_html_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to a complete HTML page with custom config.
pub fn markdown_to_html_with_config(markdown: &str, config: &Config) -> Result<String> {
    let highlighter = Highlighter::new();
    let engine = CmarkEngine::new(&highlighter, &config.highlight.css_class);
    render_document(markdown, config, &engine, &highlighter)
}

/// Run the page pipeline against any engine and stylesheet source.
pub fn render_document(
    markdown: &str,
    config: &Config,
    engine: &impl MarkdownEngine,
    styles: &impl StyleSheetSource,
) -> Result<String> {
    let fragment = engine.convert(markdown, &config.extensions)?;
    let stylesheet = styles.stylesheet(&config.highlight.theme, &config.highlight.css_class)?;
    debug!(
        theme = %config.highlight.theme,
        css_bytes = stylesheet.len(),
        "generated stylesheet"
    );

    Ok(render_page(&Page {
        title: &config.page.title,
        stylesheet: &stylesheet,
        layout: &config.layout,
        fragment: &fragment,
    }))
}

/// Read `input`, convert it, and overwrite `output` with the page.
///
/// The output file is untouched if reading or converting fails.
pub fn convert_file(input: &Path, output: &Path, config: &Config) -> Result<()> {
    let markdown = fs::read_to_string(input).map_err(|source| Error::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;
    debug!(path = %input.display(), bytes = markdown.len(), "read input");

    let document = markdown_to_html_with_config(&markdown, config)?;

    fs::write(output, &document).map_err(|source| Error::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;
    info!(path = %output.display(), bytes = document.len(), "wrote page");

    Ok(())
}
