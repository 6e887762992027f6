use crate::domain::a001_product::Product;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Trait for records that support free-text search
pub trait Searchable {
    /// `folded_term` is already trimmed and lower-cased
    fn matches_search(&self, folded_term: &str) -> bool;
}

impl Searchable for Product {
    fn matches_search(&self, folded_term: &str) -> bool {
        self.name.to_lowercase().contains(folded_term)
            || self.category.to_lowercase().contains(folded_term)
            || self.price_text().contains(folded_term)
    }
}

/// Active category / stock / search constraints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub selected_categories: BTreeSet<String>,
    pub in_stock_only: bool,
    pub search_term: String,
}

impl FilterCriteria {
    /// No predicate is active
    pub fn is_empty(&self) -> bool {
        self.selected_categories.is_empty() && !self.in_stock_only && self.folded_term().is_none()
    }

    /// Number of active constraints, for the filter badge
    pub fn active_count(&self) -> usize {
        self.selected_categories.len()
            + usize::from(self.in_stock_only)
            + usize::from(self.folded_term().is_some())
    }

    pub fn toggle_category(&mut self, name: &str) {
        if !self.selected_categories.remove(name) {
            self.selected_categories.insert(name.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.selected_categories.clear();
        self.in_stock_only = false;
        self.search_term.clear();
    }

    fn folded_term(&self) -> Option<String> {
        let term = self.search_term.trim();
        (!term.is_empty()).then(|| term.to_lowercase())
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_folded(product, self.folded_term().as_deref())
    }

    fn matches_folded(&self, product: &Product, folded_term: Option<&str>) -> bool {
        if !self.selected_categories.is_empty()
            && !self.selected_categories.contains(&product.category)
        {
            return false;
        }
        if self.in_stock_only && !product.is_in_stock() {
            return false;
        }
        folded_term.map_or(true, |term| product.matches_search(term))
    }
}

/// Filter `products` by `criteria`, preserving input order.
/// Empty criteria return the input unchanged.
pub fn filter_products(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let term = criteria.folded_term();
    products
        .iter()
        .filter(|p| criteria.matches_folded(p, term.as_deref()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::ProductStore;

    fn seed() -> Vec<Product> {
        ProductStore::seeded().unwrap().products().to_vec()
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.value()).collect()
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let products = seed();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());
        assert_eq!(filter_products(&products, &criteria), products);
    }

    #[test]
    fn test_category_filter() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_category("Electronics");
        let result = filter_products(&seed(), &criteria);
        assert_eq!(ids(&result), ["1", "2", "3", "17", "24"]);

        criteria.in_stock_only = true;
        let result = filter_products(&seed(), &criteria);
        assert_eq!(ids(&result), ["1", "2", "3", "17", "24"]);
    }

    #[test]
    fn test_multiple_categories_union() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_category("Books");
        criteria.toggle_category("Toys");
        let result = filter_products(&seed(), &criteria);
        assert_eq!(ids(&result), ["11", "12", "13", "14", "21", "22"]);
    }

    #[test]
    fn test_search_matches_price_text() {
        let criteria = FilterCriteria {
            search_term: "99".into(),
            ..Default::default()
        };
        assert_eq!(filter_products(&seed(), &criteria).len(), 24);

        let criteria = FilterCriteria {
            search_term: "129.99".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_products(&seed(), &criteria)), ["19"]);
    }

    #[test]
    fn test_search_is_trimmed_and_case_folded() {
        let criteria = FilterCriteria {
            search_term: "  SMART ".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_products(&seed(), &criteria)), ["3", "17"]);
    }

    #[test]
    fn test_search_matches_category() {
        let criteria = FilterCriteria {
            search_term: "kitchen".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_products(&seed(), &criteria)), ["7", "8", "19"]);
    }

    #[test]
    fn test_whitespace_search_is_inactive() {
        let criteria = FilterCriteria {
            search_term: "   ".into(),
            ..Default::default()
        };
        assert!(criteria.is_empty());
        assert_eq!(criteria.active_count(), 0);
    }

    #[test]
    fn test_in_stock_only_drops_zero_stock() {
        let mut products = seed();
        products[0].stock = 0;
        let criteria = FilterCriteria {
            in_stock_only: true,
            ..Default::default()
        };
        let result = filter_products(&products, &criteria);
        assert_eq!(result.len(), 23);
        assert!(result.iter().all(|p| p.stock > 0));
    }

    #[test]
    fn test_predicates_compose_with_and() {
        let mut criteria = FilterCriteria {
            search_term: "book".into(),
            ..Default::default()
        };
        criteria.toggle_category("Books");
        // "Science Fiction Book" and anything in "Books"
        assert_eq!(ids(&filter_products(&seed(), &criteria)), ["11", "12", "21"]);
        assert_eq!(criteria.active_count(), 2);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut criteria = FilterCriteria {
            in_stock_only: true,
            search_term: "x".into(),
            ..Default::default()
        };
        criteria.toggle_category("Toys");
        criteria.clear();
        assert_eq!(criteria, FilterCriteria::default());
    }
}
