use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;
use std::num::NonZeroUsize;

use super::search::SearchTerm;

/// Rows per page used by every list view unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => panic!("default page size must be positive"),
};

/// A constraint on one field of an entity. At most one filter per field is active at a time.
pub trait FieldFilter {
    type Entity;
    type Field: Copy + Ord + fmt::Debug;

    fn field(&self) -> Self::Field;
    fn matches(&self, entity: &Self::Entity) -> bool;
}

/// Filter type for entities that expose no filterable fields. It has no values.
pub struct NoFilter<E>(Infallible, PhantomData<fn(&E)>);

impl<E> Clone for NoFilter<E> {
    fn clone(&self) -> Self {
        match self.0 {}
    }
}

impl<E> fmt::Debug for NoFilter<E> {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {}
    }
}

impl<E> FieldFilter for NoFilter<E> {
    type Entity = E;
    type Field = Infallible;

    fn field(&self) -> Self::Field {
        match self.0 {}
    }

    fn matches(&self, _entity: &E) -> bool {
        match self.0 {}
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("page size must be a positive integer")]
    ZeroPageSize,
}

/// Search text, field filters, and the page a list view is showing.
///
/// The page is 1-indexed. Plain setters leave it untouched; the `refine_*` and `clear_*` helpers
/// follow the view policy of jumping back to page 1 whenever the result set changes shape.
pub struct QueryConfig<F: FieldFilter> {
    search: SearchTerm,
    filters: BTreeMap<F::Field, F>,
    page: u32,
    page_size: NonZeroUsize,
}

impl<F: FieldFilter> QueryConfig<F> {
    pub fn new(page_size: usize) -> Result<Self, QueryError> {
        NonZeroUsize::new(page_size)
            .map(Self::with_page_size)
            .ok_or(QueryError::ZeroPageSize)
    }

    pub fn with_page_size(page_size: NonZeroUsize) -> Self {
        Self {
            search: SearchTerm::default(),
            filters: BTreeMap::new(),
            page: 1,
            page_size,
        }
    }

    pub fn search(mut self, term: impl Into<SearchTerm>) -> Self {
        self.search = term.into();
        self
    }

    /// Adds a filter, replacing any filter already set on the same field.
    pub fn filter(mut self, filter: F) -> Self {
        self.filters.insert(filter.field(), filter);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    pub fn refine_search(&mut self, term: impl Into<SearchTerm>) {
        self.search = term.into();
        self.page = 1;
    }

    pub fn refine_filter(&mut self, filter: F) {
        self.filters.insert(filter.field(), filter);
        self.page = 1;
    }

    /// Drops the constraint on `field`, the "All" choice of a filter select.
    pub fn clear_filter(&mut self, field: F::Field) {
        self.filters.remove(&field);
        self.page = 1;
    }

    pub fn clear_all(&mut self) {
        self.filters.clear();
        self.search = SearchTerm::default();
        self.page = 1;
    }

    pub fn search_term(&self) -> &SearchTerm {
        &self.search
    }

    pub fn filters(&self) -> impl Iterator<Item = &F> {
        self.filters.values()
    }

    pub fn filter_for(&self, field: F::Field) -> Option<&F> {
        self.filters.get(&field)
    }

    pub fn current_page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }
}

impl<F: FieldFilter> Default for QueryConfig<F> {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl<F> Clone for QueryConfig<F>
where
    F: FieldFilter + Clone,
{
    fn clone(&self) -> Self {
        Self {
            search: self.search.clone(),
            filters: self.filters.clone(),
            page: self.page,
            page_size: self.page_size,
        }
    }
}

impl<F> fmt::Debug for QueryConfig<F>
where
    F: FieldFilter + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryConfig")
            .field("search", &self.search.as_str())
            .field("filters", &self.filters)
            .field("page", &self.page)
            .field("page_size", &self.page_size)
            .finish()
    }
}
