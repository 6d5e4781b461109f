//! Parsed page document.

use scraper::{ElementRef, Html, Node};

use super::selector::parse_selector_with_fallback;

/// Elements removed before any text is inspected.
const NON_CONTENT_SELECTOR: &str = "script, style";

/// A parsed HTML page with `<script>` and `<style>` subtrees removed.
///
/// Keyword searches over page text would otherwise pick up stylesheet rules
/// and inline JavaScript as if they were page content.
///
/// `Document` is not `Send`; parse, inspect and drop it between network calls.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses an HTML page and strips non-content nodes.
    pub fn parse(source: &str) -> Self {
        let mut html = Html::parse_document(source);
        strip_non_content(&mut html);
        Self { html }
    }

    /// Parses raw response bytes, replacing invalid UTF-8.
    pub fn parse_bytes(bytes: &[u8]) -> Self {
        Self::parse(&String::from_utf8_lossy(bytes))
    }

    /// First element with the given tag that satisfies `predicate`.
    pub fn find_element<'a, P>(&'a self, tag: &str, predicate: P) -> Option<ElementRef<'a>>
    where
        P: Fn(&ElementRef<'a>) -> bool,
    {
        let selector = parse_selector_with_fallback(tag, "element lookup");
        self.html.select(&selector).find(|el| predicate(el))
    }

    /// First element with the given tag.
    pub fn first(&self, tag: &str) -> Option<ElementRef<'_>> {
        self.find_element(tag, |_| true)
    }

    /// First `<input>` whose `name` attribute equals `name`.
    pub fn input_named(&self, name: &str) -> Option<ElementRef<'_>> {
        self.find_element("input", |el| el.value().attr("name") == Some(name))
    }

    /// Elements among `tags` whose own string contains any keyword
    /// (case-insensitive).
    ///
    /// An element's own string is the text of its single child, following a
    /// chain of single-child elements; elements with mixed or multiple children
    /// have none. This keeps wrappers from matching alongside the element that
    /// actually carries the text.
    pub fn elements_with_text(&self, tags: &[&str], keywords: &[&str]) -> Vec<ElementRef<'_>> {
        let selector = parse_selector_with_fallback(&tags.join(", "), "keyword search");
        self.html
            .select(&selector)
            .filter(|el| {
                own_string(*el)
                    .map(|text| contains_any(&text.to_lowercase(), keywords))
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Every table row as an ordered list of cell texts.
    ///
    /// Cells are `<td>` and `<th>` descendants of the row; each cell text is
    /// whitespace-stripped.
    pub fn table_rows(&self) -> Vec<Vec<String>> {
        let row_selector = parse_selector_with_fallback("table tr", "table rows");
        let cell_selector = parse_selector_with_fallback("td, th", "table cells");
        self.html
            .select(&row_selector)
            .map(|row| row.select(&cell_selector).map(stripped_text).collect())
            .collect()
    }

    /// Full visible text of the document, unmodified.
    pub fn text(&self) -> String {
        self.html.root_element().text().collect()
    }

    /// Trimmed `<title>` text, if present and non-empty.
    pub fn title(&self) -> Option<String> {
        self.first("title")
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|title| !title.is_empty())
    }
}

/// Text of an element with each text node trimmed and empty nodes dropped.
pub fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// The element's single string child, descending through single-child elements.
pub fn own_string(element: ElementRef<'_>) -> Option<String> {
    let mut children = element.children();
    let only = children.next()?;
    if children.next().is_some() {
        return None;
    }
    match only.value() {
        Node::Text(text) => Some((**text).to_string()),
        Node::Element(_) => ElementRef::wrap(only).and_then(own_string),
        _ => None,
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

fn strip_non_content(html: &mut Html) {
    let selector = parse_selector_with_fallback(NON_CONTENT_SELECTOR, "non-content removal");
    let ids: Vec<_> = html.select(&selector).map(|el| el.id()).collect();
    for id in ids {
        if let Some(mut node) = html.tree.get_mut(id) {
            node.detach();
        }
    }
}
