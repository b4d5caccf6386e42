//! In-memory pagination with 1-based page numbers

use serde::Serialize;

/// Default page size when none is configured
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// One page of a collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    /// Page numbers as the pager renders them
    pub fn page_numbers(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.total_pages
    }
}

/// Slices collections into fixed-size pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Paginator::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    /// A zero page size is treated as one
    pub fn new(page_size: usize) -> Self {
        Paginator {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.page_size)
    }

    /// Items `(n-1)*size .. n*size`; page 0 is page 1, pages past the end are empty
    pub fn page<T>(&self, items: Vec<T>, number: usize) -> Page<T> {
        let number = number.max(1);
        let total_items = items.len();
        let start = (number - 1).saturating_mul(self.page_size);

        let items: Vec<T> = items
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect();

        Page {
            items,
            number,
            total_pages: self.total_pages(total_items),
            total_items,
        }
    }
}
