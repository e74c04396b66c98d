//! RSS 2.0 feed parsing.

use crate::text::{EXCERPT_CHARS, collapse_whitespace, first_paragraph_text, plain_text, truncate};
use payloads::{FullPost, Post};
use quick_xml::Reader;
use quick_xml::events::Event;

/// Shown when an item carries no usable summary.
pub const EXCERPT_PLACEHOLDER: &str = "Read the full post for more.";

/// Descriptions shorter than this are replaced by the first paragraph.
const MIN_EXCERPT_CHARS: usize = 20;

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("malformed feed: {0}")]
    Parse(String),
}

impl From<quick_xml::Error> for FeedError {
    fn from(error: quick_xml::Error) -> Self {
        FeedError::Parse(error.to_string())
    }
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Title,
    Link,
    PubDate,
    Description,
    Content,
    Author,
}

impl Field {
    fn from_tag(name: &[u8]) -> Option<Self> {
        match name {
            b"title" => Some(Field::Title),
            b"link" => Some(Field::Link),
            b"pubDate" => Some(Field::PubDate),
            b"description" => Some(Field::Description),
            b"content:encoded" => Some(Field::Content),
            b"dc:creator" | b"author" => Some(Field::Author),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct ItemBuilder {
    title: String,
    link: String,
    pub_date: String,
    description: Option<String>,
    content: Option<String>,
    author: Option<String>,
}

impl ItemBuilder {
    fn push(&mut self, field: Field, text: &str) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Link => &mut self.link,
            Field::PubDate => &mut self.pub_date,
            Field::Description => self.description.get_or_insert_with(String::new),
            Field::Content => self.content.get_or_insert_with(String::new),
            Field::Author => self.author.get_or_insert_with(String::new),
        };
        slot.push_str(text);
    }

    fn build(self) -> FullPost {
        let content = self
            .content
            .filter(|c| !c.trim().is_empty())
            .or_else(|| self.description.clone());
        let description = plain_text(self.description.as_deref().unwrap_or_default());

        let mut excerpt = description.clone();
        if excerpt.chars().count() < MIN_EXCERPT_CHARS {
            if let Some(paragraph) = content.as_deref().and_then(first_paragraph_text) {
                excerpt = paragraph;
            }
        }
        if excerpt.is_empty() {
            excerpt = EXCERPT_PLACEHOLDER.to_string();
        }

        FullPost::new(
            Post {
                title: collapse_whitespace(&self.title),
                link: self.link.trim().to_string(),
                date: self.pub_date.trim().to_string(),
                excerpt: truncate(&excerpt, EXCERPT_CHARS),
                author: self
                    .author
                    .map(|a| collapse_whitespace(&a))
                    .filter(|a| !a.is_empty()),
            },
            content,
        )
    }
}

/// Parse every `<item>` of an RSS document, in document order.
pub fn parse_feed(xml: &str) -> Result<Vec<FullPost>, FeedError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut current: Option<ItemBuilder> = None;
    let mut field: Option<Field> = None;
    let mut depth = 0usize;
    let mut saw_root = false;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                depth += 1;
                saw_root = true;
                let name = start.name();
                if name.as_ref() == b"item" {
                    current = Some(ItemBuilder::default());
                    field = None;
                } else if current.is_some() {
                    field = Field::from_tag(name.as_ref());
                }
            }
            Event::End(end) => {
                depth = depth.saturating_sub(1);
                field = None;
                if end.name().as_ref() == b"item" {
                    if let Some(item) = current.take() {
                        items.push(item.build());
                    }
                }
            }
            Event::Empty(_) => saw_root = true,
            Event::Text(text) => {
                if let (Some(item), Some(field)) = (current.as_mut(), field) {
                    item.push(field, &text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let (Some(item), Some(field)) = (current.as_mut(), field) {
                    item.push(field, &String::from_utf8_lossy(&data));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(FeedError::Parse("document has no root element".into()));
    }
    if depth != 0 {
        return Err(FeedError::Parse("document ended inside an element".into()));
    }
    tracing::debug!(items = items.len(), "Parsed feed");
    Ok(items)
}
