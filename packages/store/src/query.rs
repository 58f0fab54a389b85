//! # Paged, filtered, sorted collections
//!
//! Listing pages (courses, posts, purchases, reviews) all need the same state:
//! a page number, a page size, an optional sort and a set of filters, plus the
//! page of results currently shown. [`PageQuery`] builds the query string,
//! [`Page`] is the backend's response envelope, and [`PagedCollection`] ties
//! them together with request sequencing so that switching tabs quickly never
//! lets an older response replace a newer one.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::sequence::{RequestSequencer, RequestTicket};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

/// Query for one page of a listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageQuery {
    page: u32,
    size: u32,
    sort: Option<Sort>,
    filters: BTreeMap<String, String>,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
            sort: None,
            filters: BTreeMap::new(),
        }
    }
}

impl PageQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1-based page number; 0 is treated as 1.
    pub fn page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Page size, clamped to `1..=MAX_PAGE_SIZE`.
    pub fn size(mut self, size: u32) -> Self {
        self.size = size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    pub fn sort_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(Sort {
            field: field.into(),
            direction,
        });
        self
    }

    /// Add a filter. An empty (or whitespace) value removes the filter instead.
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        if value.trim().is_empty() {
            self.filters.remove(&key);
        } else {
            self.filters.insert(key, value.trim().to_string());
        }
        self
    }

    pub fn current_page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.size
    }

    /// Same filters and sort, different page.
    pub fn with_page(&self, page: u32) -> Self {
        self.clone().page(page)
    }

    /// Query-string pairs in a stable order: page, size, sort, then filters by key.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("size".to_string(), self.size.to_string()),
        ];
        if let Some(sort) = &self.sort {
            pairs.push((
                "sort".to_string(),
                format!("{},{}", sort.field, sort.direction.as_str()),
            ));
        }
        pairs.extend(self.filters.iter().map(|(k, v)| (k.clone(), v.clone())));
        pairs
    }
}

/// One page of results as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub size: u32,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn total_pages(&self) -> u32 {
        if self.size == 0 {
            return 0;
        }
        let pages = self.total.div_ceil(u64::from(self.size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }
}

/// Listing state shared by every paged view.
#[derive(Clone, Debug)]
pub struct PagedCollection<T> {
    query: PageQuery,
    page: Page<T>,
    loading: bool,
    sequencer: RequestSequencer,
}

impl<T> Default for PagedCollection<T> {
    fn default() -> Self {
        Self {
            query: PageQuery::default(),
            page: Page::empty(),
            loading: false,
            sequencer: RequestSequencer::new(),
        }
    }
}

impl<T> PagedCollection<T> {
    pub fn new(query: PageQuery) -> Self {
        Self {
            query,
            ..Self::default()
        }
    }

    pub fn query(&self) -> &PageQuery {
        &self.query
    }

    pub fn page(&self) -> &Page<T> {
        &self.page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Switch to `query` and register the fetch for it.
    pub fn begin(&mut self, query: PageQuery) -> RequestTicket {
        self.query = query;
        self.loading = true;
        self.sequencer.next()
    }

    /// Store `page` if `ticket` is still the newest request. Returns whether it was applied.
    pub fn complete(&mut self, ticket: RequestTicket, page: Page<T>) -> bool {
        if !self.sequencer.is_current(ticket) {
            tracing::debug!(generation = ticket.generation(), "discarding stale page");
            return false;
        }
        self.page = page;
        self.loading = false;
        true
    }

    /// Mark the newest request as failed; the previous page stays visible.
    pub fn fail(&mut self, ticket: RequestTicket) {
        if self.sequencer.is_current(ticket) {
            self.loading = false;
        }
    }
}
