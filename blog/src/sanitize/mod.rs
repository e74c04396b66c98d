//! Cleans CMS post bodies for display.
//!
//! Content is parsed once into an owned tree, run through an ordered list of
//! [`Rule`]s and serialized back. The default pipeline is idempotent:
//! sanitizing already sanitized output returns it unchanged.

pub mod rules;
pub mod tree;

use payloads::FullPost;
pub use rules::{AllowList, Boilerplate, CollapseEmpty, Headings, PullQuotes, Rule};
pub use tree::{Element, Fragment, Node};

/// Upper bound on pipeline passes while waiting for the output to settle.
const MAX_PASSES: usize = 4;

pub struct Sanitizer {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new(vec![
            Box::new(AllowList),
            Box::new(Boilerplate::default()),
            Box::new(Headings),
            Box::new(PullQuotes),
            Box::new(CollapseEmpty),
        ])
    }
}

impl std::fmt::Debug for Sanitizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|rule| rule.name()))
            .finish()
    }
}

impl Sanitizer {
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Runs the pipeline until its output no longer changes. Unwrapping can
    /// leave nesting the parser restructures (a `p` inside a `p`), so one
    /// pass is not always a fixed point.
    pub fn sanitize(&self, html: &str) -> String {
        let mut out = self.pass(html);
        for _ in 1..MAX_PASSES {
            let next = self.pass(&out);
            if next == out {
                return out;
            }
            tracing::trace!("Sanitizer output changed on reparse");
            out = next;
        }
        tracing::warn!(len = out.len(), "Sanitizer output did not settle");
        out
    }

    fn pass(&self, html: &str) -> String {
        if html.trim().is_empty() {
            return String::new();
        }
        let mut fragment = Fragment::parse(html);
        for rule in &self.rules {
            rule.apply(&mut fragment);
            tracing::trace!(rule = rule.name(), "Applied sanitizer rule");
        }
        fragment.to_html().trim().to_string()
    }

    /// Sanitize a post's body in place, at most once per post.
    pub fn sanitize_post(&self, post: &mut FullPost) {
        if post.sanitized {
            return;
        }
        if let Some(content) = post.full_content.take() {
            let cleaned = self.sanitize(&content);
            tracing::debug!(
                title = %post.post.title,
                before = content.len(),
                after = cleaned.len(),
                "Sanitized post body"
            );
            post.full_content = Some(cleaned);
        }
        post.sanitized = true;
    }
}

/// Sanitize with the default rule set.
pub fn sanitize_html(html: &str) -> String {
    Sanitizer::default().sanitize(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::Post;

    const CMS_BODY: &str = r#"<!DOCTYPE html><html><head><title>Doc</title>
<style>.a{}</style></head><body>
<h1>Post title</h1>
<h2>Subtitle</h2>
<div><div><img src="https://cdn/profile_picture/a.png" alt="Author"></div></div>
<p style="x">Intro with <a href="https://example.com" onclick="x()">a link</a>.</p>
<div class="quote"><p>"Great tool"</p><small>Jane</small></div>
<div><a href="mailto:?subject=hi">Email</a></div>
<p>  </p>
<!-- pixel -->
<script>track()</script>
</body></html>"#;

    #[test]
    fn cleans_a_full_cms_document() {
        let out = sanitize_html(CMS_BODY);
        assert_eq!(
            out,
            concat!(
                r#"<p>Intro with <a href="https://example.com">a link</a>.</p>"#,
                "\n",
                r#"<blockquote><p>"Great tool"</p><small>Jane</small></blockquote>"#,
            )
        );
    }

    #[test]
    fn sanitizing_twice_changes_nothing() {
        let inputs = [
            CMS_BODY,
            "<div><h1>T</h1><p>\u{201c}A quote that is long enough\u{201d}</p></div>",
            "<section><p>a<font>b</font>c</p></section><div><span> </span></div>",
            "<table><tr><td>\"x\"</td></tr></table><p>&lt;tag&gt; &amp; text</p>",
            "<h1>A</h1><div><h2>B</h2><p>\"quoted words here ok\"</p><small>s</small></div>",
            "<p>x<button><p>y</p></button></p>",
            "<pre>\n\ncode</pre>",
            r#"<a href="/1">one<object><a href="/2">two</a></object></a>"#,
        ];
        for input in inputs {
            let once = sanitize_html(input);
            assert_eq!(sanitize_html(&once), once, "input: {input}");
        }
    }

    #[test]
    fn unwrapped_scope_elements_settle_into_siblings() {
        assert_eq!(sanitize_html("<p>x<button><p>y</p></button></p>"), "<p>x</p><p>y</p>");
        assert_eq!(
            sanitize_html(r#"<a href="/1">one<object><a href="/2">two</a></object></a>"#),
            r#"<a href="/1">one</a><a href="/2">two</a>"#
        );
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(sanitize_html(""), "");
        assert_eq!(sanitize_html("  \n"), "");
    }

    #[test]
    fn sanitize_post_runs_once() {
        let sanitizer = Sanitizer::default();
        let mut post = FullPost::new(
            Post {
                title: "t".into(),
                link: "l".into(),
                date: "d".into(),
                excerpt: String::new(),
                author: None,
            },
            Some("<h1>T</h1><p>Body</p>".into()),
        );
        sanitizer.sanitize_post(&mut post);
        assert!(post.sanitized);
        assert_eq!(post.full_content.as_deref(), Some("<p>Body</p>"));

        // a second call must not touch already cleaned content
        post.full_content = Some("<h1>kept</h1>".into());
        sanitizer.sanitize_post(&mut post);
        assert_eq!(post.full_content.as_deref(), Some("<h1>kept</h1>"));
    }
}
