//! Client-side list query engine shared by the employee, department, and company views.
//!
//! A view keeps the full collection it fetched and a [`QueryConfig`]; [`apply`] turns the two into
//! the visible page plus the total match count. Nothing is cached between calls.

mod config;
mod engine;
mod page;
mod search;

pub use config::{FieldFilter, NoFilter, QueryConfig, QueryError, DEFAULT_PAGE_SIZE};
pub use engine::apply;
pub use page::{PageInfo, QueryResult};
pub use search::{SearchTerm, Searchable};
