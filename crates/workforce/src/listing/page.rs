use std::num::NonZeroUsize;

use serde::Serialize;

/// The visible slice of a list plus how many entities matched before slicing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult<E> {
    pub items: Vec<E>,
    pub total_count: usize,
    pub page: u32,
    pub page_size: NonZeroUsize,
}

/// Display metadata for pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: u32,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
    /// 1-based position of the first visible item, 0 when the page is empty.
    pub first_item: usize,
    /// 1-based position of the last visible item, 0 when the page is empty.
    pub last_item: usize,
}

impl<E> QueryResult<E> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_pages(&self) -> usize {
        self.total_count.div_ceil(self.page_size.get())
    }

    pub fn page_info(&self) -> PageInfo {
        let page_size = self.page_size.get();
        let total_pages = self.total_pages();
        let (first_item, last_item) = if self.items.is_empty() {
            (0, 0)
        } else {
            let offset = (self.page as usize).saturating_sub(1) * page_size;
            (offset + 1, offset + self.items.len())
        };

        PageInfo {
            page: self.page,
            page_size,
            total_count: self.total_count,
            total_pages,
            has_previous: self.page > 1,
            has_next: (self.page as usize) < total_pages,
            first_item,
            last_item,
        }
    }

    pub fn map<T>(self, f: impl FnMut(E) -> T) -> QueryResult<T> {
        QueryResult {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page: self.page,
            page_size: self.page_size,
        }
    }
}
