//! Post body rendering with syntax highlighting
//!
//! Bodies arrive from the API either as Markdown or as ready-made HTML,
//! depending on the deployment. Both paths go through a safe pipeline:
//! Markdown rendering escapes any embedded raw HTML, and HTML bodies are
//! sanitized before display.

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use serde::{Deserialize, Serialize};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::helpers::html_escape;

/// Which shape post bodies have in this deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BodyFormat {
    /// Markdown text, rendered to HTML on display
    #[default]
    Markdown,
    /// Pre-rendered HTML, sanitized on display
    Html,
}

/// Renders post bodies to display markup
pub struct BodyRenderer {
    format: BodyFormat,
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
}

impl BodyRenderer {
    /// Create a renderer for the given body format
    pub fn new(format: BodyFormat) -> Self {
        Self {
            format,
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: "base16-ocean.dark".to_string(),
        }
    }

    /// Render a post body to safe HTML
    pub fn render(&self, body: &str) -> String {
        match self.format {
            BodyFormat::Markdown => self.render_markdown(body),
            BodyFormat::Html => sanitize_html(body),
        }
    }

    fn render_markdown(&self, markdown: &str) -> String {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut code_block_lang: Option<String> = None;
        let mut in_code_block = false;
        let mut code_block_content = String::new();

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    code_block_lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                        _ => None,
                    };
                    in_code_block = true;
                    code_block_content.clear();
                }
                Event::End(TagEnd::CodeBlock) => {
                    let highlighted =
                        self.highlight_code(&code_block_content, code_block_lang.as_deref());
                    events.push(Event::Html(CowStr::from(highlighted)));
                    code_block_lang = None;
                    in_code_block = false;
                }
                Event::Text(text) if in_code_block => {
                    code_block_content.push_str(&text);
                }
                // Raw HTML embedded in Markdown is demoted to text so that
                // it renders escaped instead of executing
                Event::Html(markup) | Event::InlineHtml(markup) => {
                    events.push(Event::Text(markup));
                }
                _ => events.push(event),
            }
        }

        let mut output = String::new();
        html::push_html(&mut output, events.into_iter());
        output
    }

    /// Highlight a fenced code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .unwrap_or_else(|| {
                self.theme_set
                    .themes
                    .values()
                    .next()
                    .expect("No themes available")
            });

        match highlighted_html_for_string(code, &self.syntax_set, syntax, theme) {
            Ok(highlighted) => format!(
                r#"<figure class="highlight {}">{}</figure>"#,
                lang, highlighted
            ),
            Err(_) => {
                // Fallback to plain code block
                format!(
                    r#"<pre><code class="language-{}">{}</code></pre>"#,
                    lang,
                    html_escape(code)
                )
            }
        }
    }
}

impl Default for BodyRenderer {
    fn default() -> Self {
        Self::new(BodyFormat::Markdown)
    }
}

/// Elements removed together with their content
const DROPPED_ELEMENTS: [&str; 2] = ["script", "style"];

/// Sanitize pre-rendered HTML: drop script/style elements with their
/// content, inline event handlers, and javascript: URLs. Other tags pass
/// through unchanged.
pub fn sanitize_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find('<') {
        output.push_str(&rest[..open]);
        rest = &rest[open..];

        let Some(close) = rest.find('>') else {
            // Unterminated tag, drop the remainder
            rest = "";
            break;
        };
        let tag = &rest[..=close];
        let name = tag_name(tag);

        if DROPPED_ELEMENTS.contains(&name.as_str()) {
            // Skip everything up to and including the matching close tag
            let end_tag = format!("</{}", name);
            let after = &rest[close + 1..];
            match after.to_ascii_lowercase().find(&end_tag) {
                Some(pos) => {
                    let tail = &after[pos..];
                    let skip = tail.find('>').map(|i| i + 1).unwrap_or(tail.len());
                    rest = &tail[skip..];
                }
                None => {
                    // Unclosed element, drop the remainder
                    rest = "";
                    break;
                }
            }
        } else {
            output.push_str(&clean_tag(tag));
            rest = &rest[close + 1..];
        }
    }

    output.push_str(rest);
    output
}

/// Lowercased element name of a `<...>` fragment
fn tag_name(tag: &str) -> String {
    tag.trim_start_matches('<')
        .trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Strip event-handler attributes and javascript: URLs from a single tag
fn clean_tag(tag: &str) -> String {
    let inner = tag.trim_start_matches('<').trim_end_matches('>');
    let mut tokens = split_attributes(inner);
    if tokens.is_empty() {
        return tag.to_string();
    }

    let name = tokens.remove(0);
    let mut cleaned = format!("<{}", name);
    for attr in tokens {
        let mut halves = attr.splitn(2, '=');
        let key = halves.next().unwrap_or("").to_ascii_lowercase();
        let value = halves.next().unwrap_or("").to_ascii_lowercase();
        if key.starts_with("on") || value.trim_matches(['"', '\'']).starts_with("javascript:") {
            continue;
        }
        cleaned.push(' ');
        cleaned.push_str(&attr);
    }
    cleaned.push('>');
    cleaned
}

/// Split a tag's inner text into name and attribute tokens, keeping quoted
/// values (which may contain spaces) in one token
fn split_attributes(inner: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in inner.chars() {
        match quote {
            Some(q) => {
                current.push(c);
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '"' | '\'' => {
                    current.push(c);
                    quote = Some(c);
                }
                c if c.is_whitespace() => {
                    if !current.is_empty() {
                        tokens.push(std::mem::take(&mut current));
                    }
                }
                _ => current.push(c),
            },
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = BodyRenderer::new(BodyFormat::Markdown);
        let html = renderer.render("# Hello World\n\nThis is a test.");
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_render_code_block() {
        let renderer = BodyRenderer::new(BodyFormat::Markdown);
        let html = renderer.render("```rust\nfn main() {}\n```");
        assert!(html.contains("highlight"));
    }

    #[test]
    fn test_markdown_escapes_embedded_html() {
        let renderer = BodyRenderer::new(BodyFormat::Markdown);
        let html = renderer.render("hello <script>alert(1)</script> world");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_html_mode_drops_script_content() {
        let renderer = BodyRenderer::new(BodyFormat::Html);
        let html = renderer.render("<p>ok</p><script>alert(1)</script><p>after</p>");
        assert!(!html.contains("script"));
        assert!(!html.contains("alert"));
        assert!(html.contains("<p>ok</p>"));
        assert!(html.contains("<p>after</p>"));
    }

    #[test]
    fn test_html_mode_drops_unclosed_script() {
        let html = sanitize_html("<p>ok</p><script>alert(1)");
        assert_eq!(html, "<p>ok</p>");
    }

    #[test]
    fn test_html_mode_strips_event_handlers() {
        let html = sanitize_html(r#"<img src="x.png" onerror="alert(1)">"#);
        assert!(!html.contains("onerror"));
        assert!(html.contains(r#"src="x.png""#));
    }

    #[test]
    fn test_html_mode_strips_javascript_urls() {
        let html = sanitize_html(r#"<a href="javascript:alert(1)">x</a>"#);
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn test_html_mode_strips_quoted_handler_with_spaces() {
        let html = sanitize_html(r#"<div class="note" onclick="alert(1); go()">x</div>"#);
        assert!(!html.contains("onclick"));
        assert!(!html.contains("go()"));
        assert!(html.contains(r#"class="note""#));
        assert!(html.contains("</div>"));
    }

    #[test]
    fn test_html_mode_keeps_plain_markup() {
        let input = "<h2>Title</h2><p>Body with <b>bold</b> text.</p>";
        assert_eq!(sanitize_html(input), input);
    }

    #[test]
    fn test_body_format_from_config_string() {
        let format: BodyFormat = serde_yaml::from_str("markdown").unwrap();
        assert_eq!(format, BodyFormat::Markdown);
        let format: BodyFormat = serde_yaml::from_str("html").unwrap();
        assert_eq!(format, BodyFormat::Html);
    }
}
