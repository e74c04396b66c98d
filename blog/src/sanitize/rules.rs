//! The transformation rules, in the order the default pipeline runs them.

use super::tree::{Element, Fragment, Node};

/// One independent pass over the content tree.
pub trait Rule {
    fn name(&self) -> &'static str;
    fn apply(&self, fragment: &mut Fragment);
}

const ALLOWED_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "br", "hr", "blockquote", "ul", "ol",
    "li", "a", "em", "strong", "i", "b", "img", "div", "span", "pre", "code",
    "table", "thead", "tbody", "tr", "td", "th", "small", "sup", "sub", "mark",
    "del", "strike", "abbr", "kbd", "cite", "q", "ins", "u", "s",
];

const ALLOWED_ATTRS: &[&str] = &["href", "src", "alt", "target", "rel", "title"];

/// Removed together with everything inside them.
const DROPPED_TAGS: &[&str] = &["script", "style", "noscript", "template", "title"];

const URL_ATTRS: &[&str] = &["href", "src"];
const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// Keeps allow-listed markup only. Disallowed elements are unwrapped so
/// their text survives.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllowList;

impl Rule for AllowList {
    fn name(&self) -> &'static str {
        "allow-list"
    }

    fn apply(&self, fragment: &mut Fragment) {
        fragment.children = clean(std::mem::take(&mut fragment.children));
    }
}

fn clean(nodes: Vec<Node>) -> Vec<Node> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            Node::Comment(_) => {}
            Node::Text(text) => out.push(Node::Text(text)),
            Node::Element(mut element) => {
                if DROPPED_TAGS.contains(&element.name.as_str()) {
                    continue;
                }
                let children = clean(std::mem::take(&mut element.children));
                if ALLOWED_TAGS.contains(&element.name.as_str()) {
                    element.attrs.retain(|(key, value)| {
                        ALLOWED_ATTRS.contains(&key.as_str())
                            && (!URL_ATTRS.contains(&key.as_str()) || is_safe_url(value))
                    });
                    element.children = children;
                    out.push(Node::Element(element));
                } else {
                    out.extend(children);
                }
            }
        }
    }
    out
}

/// Relative URLs pass; absolute ones need a known scheme.
pub fn is_safe_url(value: &str) -> bool {
    // browsers ignore embedded tabs and newlines when reading the scheme
    let compact: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    match compact.split_once(':') {
        Some((scheme, _)) if !scheme.contains(['/', '?', '#']) => {
            SAFE_SCHEMES.contains(&scheme.to_ascii_lowercase().as_str())
        }
        _ => true,
    }
}

#[derive(Debug, Clone, Copy)]
enum Matcher {
    Contains(&'static str),
    Equals(&'static str),
}

/// `tag[attr*=value]` or `tag[attr=value]`.
#[derive(Debug, Clone, Copy)]
pub struct Selector {
    tag: &'static str,
    attr: &'static str,
    matcher: Matcher,
}

impl Selector {
    const fn contains(tag: &'static str, attr: &'static str, value: &'static str) -> Self {
        Self {
            tag,
            attr,
            matcher: Matcher::Contains(value),
        }
    }

    const fn equals(tag: &'static str, attr: &'static str, value: &'static str) -> Self {
        Self {
            tag,
            attr,
            matcher: Matcher::Equals(value),
        }
    }

    pub fn matches(&self, element: &Element) -> bool {
        if !element.is(self.tag) {
            return false;
        }
        match (element.attr(self.attr), self.matcher) {
            (Some(value), Matcher::Contains(needle)) => value.contains(needle),
            (Some(value), Matcher::Equals(expected)) => value == expected,
            (None, _) => false,
        }
    }
}

const BOILERPLATE: &[Selector] = &[
    Selector::contains("img", "src", "profile_picture"),
    Selector::equals("img", "alt", "Author"),
    Selector::contains("a", "href", "facebook.com/sharer"),
    Selector::contains("a", "href", "twitter.com/intent"),
    Selector::contains("a", "href", "linkedin.com/sharing"),
    Selector::contains("a", "href", "threads.net/intent"),
    Selector::contains("a", "href", "mailto:?"),
];

/// Removes author photos and share links, along with wrappers left holding
/// nothing else.
#[derive(Debug, Clone)]
pub struct Boilerplate {
    selectors: Vec<Selector>,
}

impl Default for Boilerplate {
    fn default() -> Self {
        Self {
            selectors: BOILERPLATE.to_vec(),
        }
    }
}

impl Rule for Boilerplate {
    fn name(&self) -> &'static str {
        "boilerplate"
    }

    fn apply(&self, fragment: &mut Fragment) {
        fragment.children.retain_mut(|node| match node {
            Node::Element(element) => !self.prune(element),
            _ => true,
        });
    }
}

impl Boilerplate {
    /// Prunes inside `element` and reports whether it should go as well:
    /// either it matches, or every element child it had was removed.
    fn prune(&self, element: &mut Element) -> bool {
        if self.selectors.iter().any(|s| s.matches(element)) {
            return true;
        }
        let before = element.element_children().count();
        element.children.retain_mut(|child| match child {
            Node::Element(child) => !self.prune(child),
            _ => true,
        });
        let after = element.element_children().count();
        before > 0 && after == 0
    }
}

const SUBTITLE_MAX_CHARS: usize = 100;

/// Drops the title (every `h1`) and, if a title was present, a short
/// leading `h2` subtitle. The page renders both itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct Headings;

impl Rule for Headings {
    fn name(&self) -> &'static str {
        "headings"
    }

    fn apply(&self, fragment: &mut Fragment) {
        if remove_all(&mut fragment.children, "h1") == 0 {
            return;
        }
        if remove_first_subtitle(&mut fragment.children) == Some(true) {
            tracing::debug!("Removed subtitle heading");
        }
    }
}

fn remove_all(nodes: &mut Vec<Node>, name: &str) -> usize {
    let before = nodes.len();
    nodes.retain(|node| !matches!(node, Node::Element(e) if e.is(name)));
    let mut removed = before - nodes.len();
    for node in nodes.iter_mut() {
        if let Node::Element(element) = node {
            removed += remove_all(&mut element.children, name);
        }
    }
    removed
}

/// `None` if there is no `h2`; otherwise whether the first one was short
/// enough to remove.
fn remove_first_subtitle(nodes: &mut Vec<Node>) -> Option<bool> {
    for i in 0..nodes.len() {
        let Node::Element(element) = &mut nodes[i] else {
            continue;
        };
        if element.is("h2") {
            let short = element.text().trim().chars().count() < SUBTITLE_MAX_CHARS;
            if short {
                nodes.remove(i);
            }
            return Some(short);
        }
        if let Some(result) = remove_first_subtitle(&mut element.children) {
            return Some(result);
        }
    }
    None
}

const DOUBLE_QUOTES: &[char] = &['"', '\u{201c}', '\u{201d}'];
const QUOTE_MARKS: &[char] = &['"', '\u{201c}', '\u{201d}', '❝', '❞'];
const QUOTE_GLYPH: char = '❝';
const STRUCTURAL_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "table"];

/// Turns divs that read like pull quotes into `blockquote`s.
#[derive(Debug, Default, Clone, Copy)]
pub struct PullQuotes;

impl Rule for PullQuotes {
    fn name(&self) -> &'static str {
        "pull-quotes"
    }

    fn apply(&self, fragment: &mut Fragment) {
        convert_quotes(&mut fragment.children);
    }
}

fn convert_quotes(nodes: &mut [Node]) {
    for node in nodes {
        let Node::Element(element) = node else {
            continue;
        };
        if element.is("div") && is_pull_quote(element) {
            element.name = "blockquote".to_string();
            element.attrs.clear();
            continue;
        }
        convert_quotes(&mut element.children);
    }
}

pub fn is_pull_quote(div: &Element) -> bool {
    if div.contains(&|e| STRUCTURAL_TAGS.contains(&e.name.as_str())) {
        return false;
    }
    let Some(paragraph) = div.find(&|e| e.is("p")) else {
        return false;
    };
    let text = div.text();
    let text = text.trim();

    let attributed =
        paragraph.text().contains(DOUBLE_QUOTES) && div.contains(&|e| e.is("small"));
    let glyph = text.contains(QUOTE_GLYPH);
    let length = text.chars().count();
    let quoted = text.contains(QUOTE_MARKS) && length > 20 && length < 500;

    attributed || glyph || quoted
}

const COLLAPSIBLE_TAGS: &[&str] = &["p", "div", "span"];

/// Removes paragraphs, divs and spans left empty, innermost first.
#[derive(Debug, Default, Clone, Copy)]
pub struct CollapseEmpty;

impl Rule for CollapseEmpty {
    fn name(&self) -> &'static str {
        "collapse-empty"
    }

    fn apply(&self, fragment: &mut Fragment) {
        collapse(&mut fragment.children);
    }
}

fn collapse(nodes: &mut Vec<Node>) {
    nodes.retain_mut(|node| match node {
        Node::Element(element) => {
            collapse(&mut element.children);
            !(COLLAPSIBLE_TAGS.contains(&element.name.as_str()) && element.is_blank())
        }
        _ => true,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(rule: &impl Rule, html: &str) -> String {
        let mut fragment = Fragment::parse(html);
        rule.apply(&mut fragment);
        fragment.to_html()
    }

    #[test]
    fn allow_list_drops_scripts_styles_and_comments() {
        let html = "<style>p{}</style><p>Hi<!-- x --></p><script>alert(1)</script>";
        assert_eq!(run(&AllowList, html), "<p>Hi</p>");
    }

    #[test]
    fn allow_list_unwraps_unknown_tags_and_strips_attributes() {
        let html = r#"<section><p style="color:red" class="c" title="t">a <font>b</font></p></section>"#;
        assert_eq!(run(&AllowList, html), r#"<p title="t">a b</p>"#);
    }

    #[test]
    fn allow_list_rejects_script_urls() {
        let html = r#"<a href="javascript:alert(1)">x</a><a href="/p/1">y</a><img src="java&#9;script:x" alt="i">"#;
        assert_eq!(
            run(&AllowList, html),
            r#"<a>x</a><a href="/p/1">y</a><img alt="i">"#
        );
    }

    #[test]
    fn url_safety() {
        assert!(is_safe_url("https://example.com"));
        assert!(is_safe_url("MAILTO:someone@example.com"));
        assert!(is_safe_url("#top"));
        assert!(is_safe_url("/path?next=a:b"));
        assert!(!is_safe_url(" javascript:alert(1)"));
        assert!(!is_safe_url("data:text/html;base64,xx"));
    }

    #[test]
    fn boilerplate_collapses_wrappers_of_author_photo() {
        let html = r#"<div><div><img src="https://x/profile_picture/a.png"></div></div><p>Body</p>"#;
        assert_eq!(run(&Boilerplate::default(), html), "<p>Body</p>");
    }

    #[test]
    fn boilerplate_keeps_wrappers_with_other_content() {
        let html = r#"<div><img alt="Author"><p>Keep</p></div>"#;
        assert_eq!(run(&Boilerplate::default(), html), "<div><p>Keep</p></div>");
    }

    #[test]
    fn boilerplate_removes_share_bar_with_several_links() {
        let html = concat!(
            r#"<div class="share"><a href="https://twitter.com/intent/tweet">T</a>"#,
            r#"<a href="https://www.linkedin.com/sharing/x">L</a></div><p>After</p>"#,
        );
        assert_eq!(run(&Boilerplate::default(), html), "<p>After</p>");
    }

    #[test]
    fn headings_remove_title_and_short_subtitle() {
        let html = "<h1>Title</h1><h2>Subtitle</h2><p>Text</p><h2>Section</h2>";
        assert_eq!(run(&Headings, html), "<p>Text</p><h2>Section</h2>");
    }

    #[test]
    fn headings_keep_long_first_h2() {
        let long = "x".repeat(120);
        let html = format!("<h1>Title</h1><h2>{long}</h2>");
        assert_eq!(run(&Headings, &html), format!("<h2>{long}</h2>"));
    }

    #[test]
    fn headings_without_title_leave_h2_alone() {
        let html = "<h2>Section</h2><p>Text</p>";
        assert_eq!(run(&Headings, html), html);
    }

    #[test]
    fn attributed_quote_becomes_blockquote() {
        let html = r#"<div class="q"><p>"Great tool"</p><small>Jane</small></div>"#;
        assert_eq!(
            run(&PullQuotes, html),
            r#"<blockquote><p>"Great tool"</p><small>Jane</small></blockquote>"#
        );
    }

    #[test]
    fn glyph_quote_becomes_blockquote() {
        let html = "<div>❝<p>Short</p></div>";
        assert_eq!(run(&PullQuotes, html), "<blockquote>❝<p>Short</p></blockquote>");
    }

    #[test]
    fn quoted_text_within_bounds_becomes_blockquote() {
        let html = "<div><p>\u{201c}Learning by doing beats watching.\u{201d}</p></div>";
        assert!(run(&PullQuotes, html).starts_with("<blockquote>"));
    }

    #[test]
    fn short_or_unparagraphed_quotes_stay_divs() {
        assert_eq!(run(&PullQuotes, "<div><p>\"Hi\"</p></div>"), "<div><p>\"Hi\"</p></div>");
        let html = "<div>\"A quoted sentence without any paragraph\"</div>";
        assert_eq!(run(&PullQuotes, html), html);
    }

    #[test]
    fn div_with_table_is_not_a_quote() {
        let html = concat!(
            r#"<div><p>"A quoted sentence that is long enough"</p><small>x</small>"#,
            "<table><tbody><tr><td>1</td></tr></tbody></table></div>",
        );
        assert_eq!(run(&PullQuotes, html), html);
    }

    #[test]
    fn converted_quotes_are_not_descended_into() {
        let html = r#"<div><p>"Outer quote text"</p><small>a</small><div><p>"Inner"</p><small>b</small></div></div>"#;
        let out = run(&PullQuotes, html);
        assert_eq!(out.matches("<blockquote>").count(), 1);
        assert!(out.contains("<div><p>\"Inner\"</p>"));
    }

    #[test]
    fn empty_elements_collapse_innermost_first() {
        let html = "<div><p> </p><span>\u{a0}</span></div><p>Keep</p><p><br></p>";
        assert_eq!(run(&CollapseEmpty, html), "<p>Keep</p><p><br></p>");
    }
}
