use crate::sanitize::Sanitizer;
use payloads::{FullPost, Post};
use std::collections::HashMap;

/// Posts loaded during this page visit. The list is set once; full posts
/// are added as they are fetched and never evicted.
#[derive(Debug, Default)]
pub struct PostStore {
    posts: Vec<Post>,
    full_posts: HashMap<usize, FullPost>,
    sanitizer: Sanitizer,
}

impl PostStore {
    pub fn new(sanitizer: Sanitizer) -> Self {
        Self {
            posts: Vec::new(),
            full_posts: HashMap::new(),
            sanitizer,
        }
    }

    pub fn set_list(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.posts.len()
    }

    pub fn is_cached(&self, index: usize) -> bool {
        self.full_posts.contains_key(&index)
    }

    /// Cache a fetched post. A post already cached is kept, along with its
    /// sanitized body.
    pub fn insert(&mut self, index: usize, post: FullPost) {
        self.full_posts.entry(index).or_insert(post);
    }

    pub fn get(&self, index: usize) -> Option<&FullPost> {
        self.full_posts.get(&index)
    }

    /// The cached post with its body sanitized, sanitizing it on first use.
    pub fn prepared(&mut self, index: usize) -> Option<&FullPost> {
        let post = self.full_posts.get_mut(&index)?;
        self.sanitizer.sanitize_post(post);
        Some(post)
    }
}
