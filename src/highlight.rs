use std::fmt::Write;

use syntect::{
    highlighting::{Color, ThemeSet},
    html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style},
    parsing::{SyntaxReference, SyntaxSet},
    util::LinesWithEndings,
};
use tracing::debug;

use crate::error::{Error, Result};

/// Prefix on every token class, so theme rules never collide with page styles.
const TOKEN_CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hl-" };

/// Something that can produce the CSS for highlighted code blocks.
pub trait StyleSheetSource {
    /// CSS rules for blocks wrapped in `.{css_class}`, coloured with `theme`.
    fn stylesheet(&self, theme: &str, css_class: &str) -> Result<String>;
}

/// Syntax highlighter backed by syntect's bundled syntaxes and themes.
pub struct Highlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl Highlighter {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    /// Names of the themes accepted by [`StyleSheetSource::stylesheet`].
    pub fn themes(&self) -> Vec<&str> {
        self.theme_set.themes.keys().map(String::as_str).collect()
    }

    /// Highlight one code block body into class-styled HTML spans.
    ///
    /// Unknown or missing languages are rendered as escaped plain text.
    pub fn highlight(&self, code: &str, language: Option<&str>) -> Result<String> {
        let lang_token = language.unwrap_or("text");
        let syntax = self
            .find_syntax(lang_token)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
        debug!(language = lang_token, syntax = %syntax.name, "highlighting code block");

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, TOKEN_CLASS_STYLE);

        let mut code = code.to_string();
        if !code.ends_with('\n') {
            code.push('\n');
        }

        for line in LinesWithEndings::from(&code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .map_err(|err| Error::Highlight {
                    language: lang_token.to_string(),
                    message: err.to_string(),
                })?;
        }

        Ok(generator.finalize())
    }

    fn find_syntax(&self, token: &str) -> Option<&SyntaxReference> {
        let lowercase = token.to_ascii_lowercase();
        self.syntax_set
            .find_syntax_by_token(&lowercase)
            .or_else(|| self.syntax_set.find_syntax_by_name(token))
            .or_else(|| self.syntax_set.find_syntax_by_extension(&lowercase))
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleSheetSource for Highlighter {
    fn stylesheet(&self, theme: &str, css_class: &str) -> Result<String> {
        let theme_data = self
            .theme_set
            .themes
            .get(theme)
            .ok_or_else(|| Error::UnknownTheme(theme.to_string()))?;

        let mut css = String::new();

        // Wrapper rule carrying the theme's base colours
        css.push_str(&format!(".{css_class} {{\n"));
        if let Some(fg) = theme_data.settings.foreground {
            writeln!(css, "    color: {};", hex(fg)).ok();
        }
        if let Some(bg) = theme_data.settings.background {
            writeln!(css, "    background-color: {};", hex(bg)).ok();
        }
        css.push_str("}\n");
        css.push_str(&format!(
            ".{css_class} pre {{\n    margin: 0;\n    padding: 12px;\n    overflow-x: auto;\n}}\n"
        ));

        let tokens = css_for_theme_with_class_style(theme_data, TOKEN_CLASS_STYLE)
            .map_err(|err| Error::Stylesheet(err.to_string()))?;
        css.push_str(&tokens);

        Ok(css)
    }
}

fn hex(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}
