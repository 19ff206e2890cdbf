//! Selector-based query layer over parsed HTML.
//!
//! Extractors only see [`Markup`] and [`Node`]: "select nodes matching a
//! selector", "read an attribute", "read trimmed text". The `scraper` crate is
//! an implementation detail of this module.

use scraper::{ElementRef, Html, Selector};

/// A parsed HTML document.
pub struct Markup {
    document: Html,
}

impl Markup {
    /// Parses a full HTML document. Malformed markup never fails; the parser
    /// recovers the same way a browser does.
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// All elements matching `selector`, in document order.
    pub fn select(&self, selector: &str) -> Vec<Node<'_>> {
        match compile(selector) {
            Some(selector) => self.document.select(&selector).map(Node::new).collect(),
            None => Vec::new(),
        }
    }

    /// First element matching `selector`.
    pub fn first(&self, selector: &str) -> Option<Node<'_>> {
        let selector = compile(selector)?;
        self.document.select(&selector).next().map(Node::new)
    }
}

/// A matched element.
#[derive(Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl<'a> Node<'a> {
    fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// Descendants (excluding this node) matching `selector`, in document order.
    pub fn select(&self, selector: &str) -> Vec<Node<'a>> {
        match compile(selector) {
            Some(selector) => self.element.select(&selector).map(Node::new).collect(),
            None => Vec::new(),
        }
    }

    /// First descendant matching `selector`.
    pub fn first(&self, selector: &str) -> Option<Node<'a>> {
        let selector = compile(selector)?;
        self.element.select(&selector).next().map(Node::new)
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Attribute value, treating an empty attribute as absent.
    pub fn non_empty_attr(&self, name: &str) -> Option<&'a str> {
        self.attr(name).filter(|value| !value.is_empty())
    }

    /// Concatenated text of all descendant text nodes, trimmed.
    pub fn text(&self) -> String {
        self.element.text().collect::<String>().trim().to_string()
    }
}

fn compile(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(selector) => Some(selector),
        Err(e) => {
            tracing::warn!(selector, error = %e, "Invalid CSS selector");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
            <div class="card" id="one">
                <h2>  First  </h2>
                <a href="/a">A</a>
                <div class="card" id="nested"><h3>Inner</h3></div>
            </div>
            <div class="card" id="two"><span class="title">Second</span></div>
        </body></html>
    "#;

    #[test]
    fn test_select_in_document_order() {
        let markup = Markup::parse(PAGE);
        let ids: Vec<_> = markup
            .select(".card")
            .iter()
            .filter_map(|node| node.attr("id"))
            .collect();
        assert_eq!(ids, vec!["one", "nested", "two"]);
    }

    #[test]
    fn test_union_selector_first_match_follows_document_order() {
        let markup = Markup::parse(PAGE);
        let card = markup.first("#two").unwrap();
        assert_eq!(card.first("h1, h2, h3, .title").unwrap().text(), "Second");
    }

    #[test]
    fn test_node_select_excludes_self() {
        let markup = Markup::parse(PAGE);
        let nested = markup.first("#nested").unwrap();
        assert!(nested.select(".card").is_empty());
    }

    #[test]
    fn test_text_is_trimmed() {
        let markup = Markup::parse(PAGE);
        assert_eq!(markup.first("h2").unwrap().text(), "First");
    }

    #[test]
    fn test_non_empty_attr() {
        let markup = Markup::parse(r#"<img src="" data-src="/p.jpg">"#);
        let img = markup.first("img").unwrap();
        assert_eq!(img.attr("src"), Some(""));
        assert_eq!(img.non_empty_attr("src"), None);
        assert_eq!(img.non_empty_attr("data-src"), Some("/p.jpg"));
    }

    #[test]
    fn test_invalid_selector_yields_nothing() {
        let markup = Markup::parse(PAGE);
        assert!(markup.select("::::").is_empty());
        assert!(markup.first("::::").is_none());
    }
}
