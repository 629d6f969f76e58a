use super::config::{FieldFilter, QueryConfig};
use super::page::QueryResult;
use super::search::Searchable;

/// Filters, searches, and paginates `collection` according to `config`.
///
/// Filters are conjunctive and an empty search term matches everything. The surviving entities
/// keep their source order; `total_count` counts all of them while `items` holds only the
/// requested page. Page 0 and pages past the end yield no items.
pub fn apply<E, F>(collection: &[E], config: &QueryConfig<F>) -> QueryResult<E>
where
    E: Searchable + Clone,
    F: FieldFilter<Entity = E>,
{
    let term = config.search_term();
    let matched: Vec<&E> = collection
        .iter()
        .filter(|entity| config.filters().all(|filter| filter.matches(entity)))
        .filter(|entity| term.is_empty() || entity.matches_search(term))
        .collect();

    let total_count = matched.len();
    let page_size = config.page_size();
    let items = match config.current_page().checked_sub(1) {
        Some(pages_before) => {
            let start = (pages_before as usize).saturating_mul(page_size.get());
            matched
                .into_iter()
                .skip(start)
                .take(page_size.get())
                .cloned()
                .collect()
        }
        None => Vec::new(),
    };

    QueryResult {
        items,
        total_count,
        page: config.current_page(),
        page_size,
    }
}
