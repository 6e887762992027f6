use super::filter::{filter_products, FilterCriteria};
use super::pagination::{clamp_page, paginate, total_pages};
use super::sort::{sort_list, SortCriteria, SortField};
use crate::domain::a001_product::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// Filter → sort → page pipeline over the canonical product list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductListQuery {
    pub criteria: FilterCriteria,
    pub sort: SortCriteria,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
}

impl ProductListQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort: SortCriteria::default(),
            page: 1,
            page_size,
        }
    }

    // Criteria changes and store mutations start over from page 1.
    // Selection and explicit page moves do not.

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.criteria.search_term = term.into();
        self.reset_page();
    }

    pub fn toggle_category(&mut self, name: &str) {
        self.criteria.toggle_category(name);
        self.reset_page();
    }

    pub fn set_in_stock_only(&mut self, value: bool) {
        self.criteria.in_stock_only = value;
        self.reset_page();
    }

    pub fn clear_filters(&mut self) {
        self.criteria.clear();
        self.reset_page();
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort.toggle(field);
        self.reset_page();
    }

    /// Zero is ignored
    pub fn set_page_size(&mut self, size: usize) {
        if size == 0 {
            return;
        }
        self.page_size = size;
        self.reset_page();
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Called after the product list itself changed
    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    /// `page` past the end is clamped to the last page
    pub fn run(&self, products: &[Product]) -> ProductPage {
        let mut rows = filter_products(products, &self.criteria);
        sort_list(&mut rows, self.sort);

        let total_count = rows.len();
        let total_pages = total_pages(total_count, self.page_size);
        let page = clamp_page(self.page, total_pages);
        let items = paginate(&rows, self.page_size, page).to_vec();

        ProductPage {
            items,
            total_count,
            total_pages,
            page,
        }
    }
}

/// One rendered page of the product table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub items: Vec<Product>,
    /// Size of the filtered set, across all pages
    pub total_count: usize,
    pub total_pages: usize,
    /// Page the items belong to, always within `1..=total_pages.max(1)`
    pub page: usize,
}

impl ProductPage {
    pub fn ids(&self) -> Vec<ProductId> {
        self.items.iter().map(|p| p.id.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    pub fn effective_page(&self) -> usize {
        self.page
    }
}
