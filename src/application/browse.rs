//! Listing browser use case: filter then paginate the whole collection

use crate::domain::filter::distinct_types;
use crate::domain::{ContentDocument, ListingFilter, Page, Paginator};
use crate::infrastructure::ContentRepository;
use serde::Serialize;
use tracing::debug;

/// One browser request
#[derive(Debug, Clone, Default)]
pub struct BrowseRequest {
    pub filter: ListingFilter,
    /// 1-based page number
    pub page: usize,
}

/// One browser page plus the types offered as filter chips
#[derive(Debug, Clone, Serialize)]
pub struct BrowseResult {
    pub page: Page<ContentDocument>,
    pub available_types: Vec<String>,
}

/// Service behind the listing browser
pub struct BrowseService<R> {
    repository: R,
    paginator: Paginator,
}

impl<R: ContentRepository> BrowseService<R> {
    pub fn new(repository: R, page_size: usize) -> Self {
        BrowseService {
            repository,
            paginator: Paginator::new(page_size),
        }
    }

    pub fn execute(&self, request: &BrowseRequest) -> BrowseResult {
        let documents = self.repository.list_all();
        // Types are taken from the unfiltered collection
        let available_types = distinct_types(&documents);

        let matched = request.filter.apply(documents);
        debug!(
            query = %request.filter.query,
            matched = matched.len(),
            "filtered listings"
        );

        BrowseResult {
            page: self.paginator.page(matched, request.page),
            available_types,
        }
    }
}
