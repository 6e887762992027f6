//! Derived product table view: filter, sort and paginate

pub mod filter;
pub mod pagination;
pub mod query;
pub mod sort;

pub use filter::{filter_products, FilterCriteria, Searchable};
pub use pagination::{clamp_page, paginate, total_pages};
pub use query::{ProductListQuery, ProductPage};
pub use sort::{locale_compare, sort_list, sort_products, SortCriteria, SortDirection, SortField, Sortable};
