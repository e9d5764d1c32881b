use crate::config::LayoutConfig;

/// Everything substituted into the page skeleton.
pub struct Page<'a> {
    pub title: &'a str,
    pub stylesheet: &'a str,
    pub layout: &'a LayoutConfig,
    pub fragment: &'a str,
}

/// Wrap a rendered fragment in a complete HTML document.
pub fn render_page(page: &Page) -> String {
    let mut out = String::with_capacity(page.stylesheet.len() + page.fragment.len() + 1024);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    out.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    out.push_str("    <title>");
    out.push_str(&escape_html(page.title));
    out.push_str("</title>\n");

    out.push_str("    <style>\n");
    out.push_str(page.stylesheet);
    if !page.stylesheet.is_empty() && !page.stylesheet.ends_with('\n') {
        out.push('\n');
    }
    layout_css(page.layout, &mut out);
    out.push_str("    </style>\n</head>\n<body>\n");

    out.push_str(page.fragment);
    if !page.fragment.is_empty() && !page.fragment.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("</body>\n</html>\n");

    out
}

fn layout_css(layout: &LayoutConfig, out: &mut String) {
    out.push_str(&format!(
        "body {{\n    max-width: {};\n    margin: 0 auto;\n    padding: {};\n    font-family: {};\n    line-height: {};\n}}\n",
        layout.max_width, layout.padding, layout.font_family, layout.line_height
    ));
    out.push_str(
        "table {\n    border-collapse: collapse;\n    width: 100%;\n    margin: 20px 0;\n}\n",
    );
    out.push_str(
        "th, td {\n    border: 1px solid #ddd;\n    padding: 12px;\n    text-align: left;\n}\n",
    );
    out.push_str("th {\n    background-color: #f5f5f5;\n    font-weight: bold;\n}\n");
}

/// Escape text for use in HTML element content or a quoted attribute.
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
