//! Owned HTML tree the sanitizer rules operate on.
//!
//! `scraper` parses (html5ever does the error recovery), then the result is
//! copied into plain enums so rules can freely move, rename and drop nodes.

use scraper::{ElementRef, Html};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta",
    "source", "track", "wbr",
];

/// Elements whose first newline the parser swallows.
const LEADING_NEWLINE_ELEMENTS: &[&str] = &["pre", "textarea", "listing"];

/// Elements whose text is written without escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Lowercase tag name.
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &[], &mut out);
        out
    }

    /// First descendant (not self) matching `predicate`, in document order.
    pub fn find(&self, predicate: &impl Fn(&Element) -> bool) -> Option<&Element> {
        find_in(&self.children, predicate)
    }

    pub fn contains(&self, predicate: &impl Fn(&Element) -> bool) -> bool {
        self.find(predicate).is_some()
    }

    /// True if the element holds nothing but whitespace text.
    pub fn is_blank(&self) -> bool {
        self.children.iter().all(|child| match child {
            Node::Text(text) => text.trim().is_empty(),
            Node::Comment(_) => true,
            Node::Element(_) => false,
        })
    }
}

/// A parsed body fragment: the top-level nodes of the content.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fragment {
    pub children: Vec<Node>,
}

impl Fragment {
    /// Parse `html` in body context. Whole documents collapse to their body
    /// content, since html5ever drops `html`, `head` and `body` tags there.
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_fragment(html);
        Self {
            children: convert_children(document.root_element()),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            write_node(&mut out, node, false);
        }
        out
    }

    /// Text content, skipping anything inside the `skipped` elements.
    pub fn text_without(&self, skipped: &[&str]) -> String {
        let mut out = String::new();
        collect_text(&self.children, skipped, &mut out);
        out
    }

    pub fn find(&self, predicate: &impl Fn(&Element) -> bool) -> Option<&Element> {
        find_in(&self.children, predicate)
    }
}

fn convert_children(parent: ElementRef<'_>) -> Vec<Node> {
    parent
        .children()
        .filter_map(|child| match child.value() {
            scraper::Node::Text(text) => Some(Node::Text(String::from(&*text.text))),
            scraper::Node::Comment(comment) => {
                Some(Node::Comment(String::from(&*comment.comment)))
            }
            scraper::Node::Element(_) => {
                ElementRef::wrap(child).map(|element| Node::Element(convert_element(element)))
            }
            _ => None,
        })
        .collect()
}

fn convert_element(element: ElementRef<'_>) -> Element {
    let value = element.value();
    Element {
        name: value.name().to_ascii_lowercase(),
        attrs: value
            .attrs()
            .map(|(key, value)| (key.to_ascii_lowercase(), value.to_string()))
            .collect(),
        children: convert_children(element),
    }
}

fn find_in<'a>(
    nodes: &'a [Node],
    predicate: &impl Fn(&Element) -> bool,
) -> Option<&'a Element> {
    nodes.iter().filter_map(Node::as_element).find_map(|element| {
        if predicate(element) {
            Some(element)
        } else {
            find_in(&element.children, predicate)
        }
    })
}

fn collect_text(nodes: &[Node], skipped: &[&str], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) if !skipped.contains(&element.name.as_str()) => {
                collect_text(&element.children, skipped, out)
            }
            _ => {}
        }
    }
}

fn write_node(out: &mut String, node: &Node, raw_text: bool) {
    match node {
        Node::Text(text) if raw_text => out.push_str(text),
        Node::Text(text) => escape_into(out, text, false),
        Node::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment);
            out.push_str("-->");
        }
        Node::Element(element) => {
            out.push('<');
            out.push_str(&element.name);
            for (key, value) in &element.attrs {
                out.push(' ');
                out.push_str(key);
                out.push_str("=\"");
                escape_into(out, value, true);
                out.push('"');
            }
            out.push('>');
            if VOID_ELEMENTS.contains(&element.name.as_str()) {
                return;
            }
            if LEADING_NEWLINE_ELEMENTS.contains(&element.name.as_str())
                && matches!(element.children.first(), Some(Node::Text(text)) if text.starts_with('\n'))
            {
                out.push('\n');
            }
            let raw = RAW_TEXT_ELEMENTS.contains(&element.name.as_str());
            for child in &element.children {
                write_node(out, child, raw);
            }
            out.push_str("</");
            out.push_str(&element.name);
            out.push('>');
        }
    }
}

fn escape_into(out: &mut String, text: &str, attribute: bool) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '"' if attribute => out.push_str("&quot;"),
            '<' if !attribute => out.push_str("&lt;"),
            '>' if !attribute => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}
