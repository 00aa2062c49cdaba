//! Main content text extraction from HTML documents.
//!
//! This module extracts the readable text of a documentation page by:
//! 1. Looking for semantic containers in priority order: `<main>`, `<article>`, content-specific divs
//! 2. Skipping scripts, styles, navigation, headers, footers, sidebars and other page chrome
//! 3. Falling back to `<body>` if no semantic container is found
//! 4. Emitting line breaks at block boundaries and normalizing whitespace outside `<pre>`
//!
//! Extraction is a pure function of the HTML and the rules.

use ego_tree::NodeId;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

use super::rules::ExtractionRules;
use super::whitespace::normalize_whitespace;

/// Maximum HTML nesting depth walked during text collection
///
/// Legitimate pages rarely exceed 30-50 levels; deeper branches are
/// truncated with a warning instead of risking stack exhaustion.
const MAX_HTML_NESTING_DEPTH: usize = 100;

/// Elements that start and end on their own line
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "blockquote", "dd", "details", "div", "dl", "dt", "figcaption",
    "figure", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "li", "main", "ol", "p", "pre",
    "section", "summary", "table", "tbody", "thead", "tfoot", "tr", "ul",
];

/// Cells get a separator so table columns don't run together
const CELL_ELEMENTS: &[&str] = &["td", "th"];

static BODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("body").expect("BUG: hardcoded CSS selector 'body' is invalid")
});

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("title").expect("BUG: hardcoded CSS selector 'title' is invalid")
});

/// Text extracted from one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    pub title: Option<String>,
    pub text: String,
}

/// Extract the main content of `html` as normalized plain text
///
/// # Example
/// ```
/// use kodegen_tools_docs::page_extractor::{extract_text, ExtractionRules};
///
/// let html = r#"<html><body><nav>Menu</nav><main><p>Content</p></main></body></html>"#;
/// let page = extract_text(html, &ExtractionRules::default());
/// assert_eq!(page.text, "Content");
/// ```
#[must_use]
pub fn extract_text(html: &str, rules: &ExtractionRules) -> PageText {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|t| normalize_whitespace(&t.text().collect::<String>()))
        .filter(|t| !t.is_empty());

    let root = rules
        .content()
        .find_map(|selector| document.select(selector).next())
        .or_else(|| document.select(&BODY_SELECTOR).next())
        .unwrap_or_else(|| document.root_element());

    let mut to_skip: HashSet<NodeId> = HashSet::new();
    for selector in rules.strip() {
        for element in root.select(selector) {
            to_skip.insert(element.id());
        }
    }

    let mut collector = TextCollector::with_capacity(html.len() / 4);
    collect_text(&root, &to_skip, &mut collector, 0, false);

    PageText {
        title,
        text: collector.finish(),
    }
}

/// Accumulates running text and preformatted blocks separately
///
/// Running text is whitespace-normalized. Preformatted blocks keep their
/// indentation and only lose trailing whitespace and surrounding blank lines.
#[derive(Debug, Default)]
struct TextCollector {
    parts: Vec<String>,
    flow: String,
    pre: String,
}

impl TextCollector {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            flow: String::with_capacity(capacity),
            ..Self::default()
        }
    }

    fn push_text(&mut self, text: &str, in_pre: bool) {
        if in_pre {
            self.pre.push_str(text);
        } else {
            // Source newlines inside running text are layout, not content
            self.flow
                .extend(text.chars().map(|c| if c.is_whitespace() { ' ' } else { c }));
        }
    }

    fn push_char(&mut self, c: char, in_pre: bool) {
        if in_pre {
            self.pre.push(c);
        } else {
            self.flow.push(c);
        }
    }

    fn begin_pre(&mut self) {
        let flow = std::mem::take(&mut self.flow);
        self.parts.push(normalize_whitespace(&flow));
    }

    fn end_pre(&mut self) {
        let pre = std::mem::take(&mut self.pre);
        self.parts.push(tidy_preformatted(&pre));
    }

    fn finish(mut self) -> String {
        let flow = std::mem::take(&mut self.flow);
        self.parts.push(normalize_whitespace(&flow));
        self.parts
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

fn tidy_preformatted(block: &str) -> String {
    let lines: Vec<&str> = block.lines().map(str::trim_end).collect();
    let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
    lines[start..].join("\n").trim_end().to_string()
}

/// Recursively append the text of `element`'s children to `output`,
/// skipping removed subtrees.
fn collect_text(
    element: &ElementRef,
    to_skip: &HashSet<NodeId>,
    output: &mut TextCollector,
    depth: usize,
    in_pre: bool,
) {
    if depth > MAX_HTML_NESTING_DEPTH {
        tracing::warn!(
            element = element.value().name(),
            depth,
            limit = MAX_HTML_NESTING_DEPTH,
            "Maximum HTML nesting depth exceeded, truncating branch"
        );
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => output.push_text(text, in_pre),
            Node::Element(el) => {
                if to_skip.contains(&child.id()) {
                    continue;
                }
                let Some(child_elem) = ElementRef::wrap(child) else {
                    continue;
                };

                let name = el.name();
                if name == "br" {
                    output.push_char('\n', in_pre);
                    continue;
                }

                let opens_pre = !in_pre && name == "pre";
                let block = BLOCK_ELEMENTS.contains(&name);
                if opens_pre {
                    output.begin_pre();
                } else if block {
                    output.push_char('\n', in_pre);
                }
                collect_text(&child_elem, to_skip, output, depth + 1, in_pre || opens_pre);
                if opens_pre {
                    output.end_pre();
                } else if block {
                    output.push_char('\n', in_pre);
                } else if CELL_ELEMENTS.contains(&name) {
                    output.push_char(' ', in_pre);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> PageText {
        extract_text(html, &ExtractionRules::default())
    }

    #[test]
    fn prefers_main_container() {
        let html = r#"
            <html><head><title> Vector stores | LangChain </title></head>
            <body>
                <nav>Docs Menu</nav>
                <main><h1>Vector stores</h1><p>Store embeddings.</p></main>
                <footer>Copyright</footer>
            </body></html>
        "#;
        let page = extract(html);
        assert_eq!(page.title.as_deref(), Some("Vector stores | LangChain"));
        assert_eq!(page.text, "Vector stores\n\nStore embeddings.");
    }

    #[test]
    fn removes_scripts_and_styles() {
        let html = r#"
            <body>
                <script>var tracking = 1;</script>
                <style>.x { color: red }</style>
                <p>Visible text</p>
                <noscript>Enable JS</noscript>
            </body>
        "#;
        let page = extract(html);
        assert_eq!(page.text, "Visible text");
    }

    #[test]
    fn removes_chrome_inside_content() {
        let html = r"
            <article>
                <p>Main content</p>
                <nav>Navigation</nav>
                <aside>Sidebar</aside>
                <footer>Footer</footer>
            </article>
        ";
        let page = extract(html);
        assert!(page.text.contains("Main content"));
        assert!(!page.text.contains("Navigation"));
        assert!(!page.text.contains("Sidebar"));
        assert!(!page.text.contains("Footer"));
    }

    #[test]
    fn body_fallback_strips_site_header() {
        let html = r"
            <html><body>
                <header>Site header</header>
                <div><p>Body content</p></div>
            </body></html>
        ";
        let page = extract(html);
        assert_eq!(page.text, "Body content");
    }

    #[test]
    fn inline_elements_do_not_break_lines() {
        let html = "<main><p>Use <code>Chroma</code> with\n   <strong>LangChain</strong>.</p></main>";
        assert_eq!(extract(html).text, "Use Chroma with LangChain.");
    }

    #[test]
    fn preformatted_keeps_lines() {
        let html = "<main><pre><code>pip install chromadb\nimport chromadb</code></pre></main>";
        assert_eq!(extract(html).text, "pip install chromadb\nimport chromadb");
    }

    #[test]
    fn preformatted_keeps_indentation() {
        let html = "<main><p>Define   it:</p><pre><code>def f():\n    return 1  \n\n\tpass</code></pre><p>Done.</p></main>";
        assert_eq!(
            extract(html).text,
            "Define it:\n\ndef f():\n    return 1\n\n\tpass\n\nDone."
        );
    }

    #[test]
    fn preformatted_leading_blank_lines_are_dropped() {
        let html = "<main><pre>\n\n  indented first line\n    deeper\n\n</pre></main>";
        assert_eq!(extract(html).text, "  indented first line\n    deeper");
    }

    #[test]
    fn decodes_entities() {
        let html = "<main><p>5 &lt; 10 &amp;&amp; 10 &gt; 5</p></main>";
        assert_eq!(extract(html).text, "5 < 10 && 10 > 5");
    }

    #[test]
    fn table_cells_are_separated() {
        let html = "<main><table><tr><td>name</td><td>str</td></tr></table></main>";
        assert_eq!(extract(html).text, "name str");
    }

    #[test]
    fn custom_strip_selector_applies() {
        let rules = ExtractionRules::default()
            .with_extra_strip_selectors([".theme-edit-this-page"])
            .unwrap();
        let html = r#"<main><p>Body</p><a class="theme-edit-this-page">Edit this page</a></main>"#;
        assert_eq!(extract_text(html, &rules).text, "Body");
    }

    #[test]
    fn deterministic() {
        let html = "<main><h2>A</h2><p>b  c</p><ul><li>d</li><li>e</li></ul></main>";
        assert_eq!(extract(html), extract(html));
    }
}
