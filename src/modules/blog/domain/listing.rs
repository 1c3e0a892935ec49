use serde::Deserialize;

use super::blog::Blog;

pub const DEFAULT_PAGE_LIMIT: u64 = 10;
pub const MAX_PAGE_LIMIT: u64 = 50;
/// Pages past this read as this page; keeps the SQL offset well inside `i64`.
pub const MAX_PAGE: u64 = 100_000;

/// Raw `GET /api/blogs` query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogListQuery {
    pub published: Option<bool>,
    pub tag: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogFilter {
    pub published: Option<bool>,
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    pub fn new(page: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            page: page.unwrap_or(1).clamp(1, MAX_PAGE),
            limit: limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT),
        }
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl BlogListQuery {
    /// Anonymous readers only ever see published posts.
    pub fn into_parts(self, is_admin: bool) -> (BlogFilter, PageRequest) {
        let published = if is_admin {
            self.published
        } else {
            Some(true)
        };
        let tag = self
            .tag
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        (
            BlogFilter { published, tag },
            PageRequest::new(self.page, self.limit),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlogPage {
    pub items: Vec<Blog>,
    pub total: u64,
    pub request: PageRequest,
}
