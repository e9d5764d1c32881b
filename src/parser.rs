use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd, html};
use tracing::debug;

use crate::config::Extensions;
use crate::error::Result;
use crate::highlight::Highlighter;
use crate::template::escape_html;

/// Converts markdown text to an HTML fragment.
pub trait MarkdownEngine {
    fn convert(&self, markdown: &str, extensions: &Extensions) -> Result<String>;
}

/// pulldown-cmark engine whose code blocks go through a [`Highlighter`].
pub struct CmarkEngine<'a> {
    highlighter: &'a Highlighter,
    css_class: &'a str,
}

impl<'a> CmarkEngine<'a> {
    pub fn new(highlighter: &'a Highlighter, css_class: &'a str) -> Self {
        Self {
            highlighter,
            css_class,
        }
    }
}

impl MarkdownEngine for CmarkEngine<'_> {
    fn convert(&self, markdown: &str, extensions: &Extensions) -> Result<String> {
        let parser = Parser::new_ext(markdown, parser_options(extensions));
        let mut events = Vec::new();
        let mut state = ParseState::default();

        for event in parser {
            self.process_event(event, extensions, &mut state, &mut events)?;
        }

        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, events.into_iter());
        debug!(
            markdown_bytes = markdown.len(),
            html_bytes = html_output.len(),
            highlighted_blocks = state.highlighted_blocks,
            "converted markdown"
        );
        Ok(html_output)
    }
}

fn parser_options(extensions: &Extensions) -> Options {
    let mut options = Options::empty();
    if extensions.tables {
        options.insert(Options::ENABLE_TABLES);
    }
    if extensions.strip_frontmatter {
        options.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);
    }
    options
}

#[derive(Default)]
struct ParseState {
    // Code block state
    in_code_block: bool,
    code_language: Option<String>,
    code_content: String,

    highlighted_blocks: usize,
}

impl CmarkEngine<'_> {
    fn process_event<'e>(
        &self,
        event: Event<'e>,
        extensions: &Extensions,
        state: &mut ParseState,
        events: &mut Vec<Event<'e>>,
    ) -> Result<()> {
        match event {
            // Code blocks are buffered and replaced by highlighted HTML
            Event::Start(Tag::CodeBlock(kind)) if extensions.highlight => {
                state.in_code_block = true;
                state.code_language = match kind {
                    CodeBlockKind::Fenced(info) => info_language(&info),
                    CodeBlockKind::Indented => None,
                };
                state.code_content.clear();
            }
            Event::Text(text) if state.in_code_block => {
                state.code_content.push_str(&text);
            }
            Event::End(TagEnd::CodeBlock) if state.in_code_block => {
                state.in_code_block = false;
                let content = std::mem::take(&mut state.code_content);
                let language = state.code_language.take();
                let block = self.highlighted_block(&content, language.as_deref())?;
                state.highlighted_blocks += 1;
                events.push(Event::Html(CowStr::from(block)));
            }

            // Without sane lists every ordered list restarts at 1
            Event::Start(Tag::List(Some(_))) if !extensions.sane_lists => {
                events.push(Event::Start(Tag::List(Some(1))));
            }

            event => events.push(event),
        }
        Ok(())
    }

    fn highlighted_block(&self, code: &str, language: Option<&str>) -> Result<String> {
        let highlighted = self.highlighter.highlight(code, language)?;

        let mut out = String::with_capacity(highlighted.len() + 96);
        out.push_str("<div class=\"");
        out.push_str(&escape_html(self.css_class));
        out.push_str("\"><pre><code");
        if let Some(lang) = language {
            out.push_str(" class=\"language-");
            out.push_str(&escape_html(lang));
            out.push('"');
        }
        out.push('>');
        out.push_str(&highlighted);
        out.push_str("</code></pre></div>\n");
        Ok(out)
    }
}

/// First word of a fence info string, e.g. `rust` in "```rust ignore".
fn info_language(info: &str) -> Option<String> {
    info.split_whitespace()
        .next()
        .map(|lang| lang.trim_start_matches('{').trim_start_matches('.'))
        .map(|lang| lang.trim_end_matches('}'))
        .filter(|lang| !lang.is_empty())
        .map(str::to_string)
}
