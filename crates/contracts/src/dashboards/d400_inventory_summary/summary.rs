use crate::domain::a001_product::Product;
use crate::domain::a002_category::CategoryCatalog;
use serde::{Deserialize, Serialize};

/// Products below this stock level count as low stock
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;

/// Bar of the category chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// One entry per known category in catalog order, zero-filled
pub fn category_counts(products: &[Product], categories: &CategoryCatalog) -> Vec<CategoryCount> {
    categories
        .iter()
        .map(|name| CategoryCount {
            name: name.to_string(),
            count: products.iter().filter(|p| p.category == name).count(),
        })
        .collect()
}

/// Stable re-sort by count, largest first (chart display order)
pub fn sorted_by_count_desc(counts: &[CategoryCount]) -> Vec<CategoryCount> {
    let mut sorted = counts.to_vec();
    sorted.sort_by(|a, b| b.count.cmp(&a.count));
    sorted
}

/// Σ price × stock
pub fn total_value(products: &[Product]) -> f64 {
    products.iter().map(Product::total_value).sum()
}

/// Count of `stock < threshold`. Out-of-stock items are included.
pub fn low_stock_count(products: &[Product], threshold: u32) -> usize {
    products.iter().filter(|p| p.stock < threshold).count()
}

pub fn out_of_stock_count(products: &[Product]) -> usize {
    products.iter().filter(|p| p.stock == 0).count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn of(stock: u32, threshold: u32) -> Self {
        if stock == 0 {
            StockStatus::OutOfStock
        } else if stock < threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

/// Figures shown on the stats cards and chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total_products: usize,
    pub total_value: f64,
    pub low_stock_count: usize,
    pub out_of_stock_count: usize,
    pub category_counts: Vec<CategoryCount>,
}

impl InventorySummary {
    pub fn compute(products: &[Product], categories: &CategoryCatalog, threshold: u32) -> Self {
        Self {
            total_products: products.len(),
            total_value: total_value(products),
            low_stock_count: low_stock_count(products, threshold),
            out_of_stock_count: out_of_stock_count(products),
            category_counts: category_counts(products, categories),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::{ProductDto, ProductStore};

    fn lamp() -> ProductDto {
        ProductDto {
            id: None,
            name: "Desk Lamp".into(),
            category: "Home & Kitchen".into(),
            price: 25.0,
            stock: 0,
        }
    }

    #[test]
    fn test_seed_category_counts_follow_catalog_order() {
        let store = ProductStore::seeded().unwrap();
        let counts = category_counts(store.products(), store.categories());
        let pairs: Vec<(&str, usize)> = counts.iter().map(|c| (c.name.as_str(), c.count)).collect();
        assert_eq!(
            pairs,
            [
                ("Electronics", 5),
                ("Clothing", 4),
                ("Home & Kitchen", 3),
                ("Sports", 3),
                ("Books", 3),
                ("Toys", 3),
                ("Health & Beauty", 3),
            ]
        );
    }

    #[test]
    fn test_new_category_is_zero_filled() {
        let mut store = ProductStore::seeded().unwrap();
        store.add_category("Garden").unwrap();
        let counts = category_counts(store.products(), store.categories());
        assert_eq!(
            counts.last(),
            Some(&CategoryCount {
                name: "Garden".into(),
                count: 0
            })
        );
    }

    #[test]
    fn test_sorted_by_count_desc_is_stable() {
        let store = ProductStore::seeded().unwrap();
        let sorted = sorted_by_count_desc(&category_counts(store.products(), store.categories()));
        let names: Vec<&str> = sorted.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Electronics",
                "Clothing",
                "Home & Kitchen",
                "Sports",
                "Books",
                "Toys",
                "Health & Beauty"
            ]
        );
    }

    #[test]
    fn test_seed_low_and_out_of_stock() {
        let store = ProductStore::seeded().unwrap();
        // stock 8, 7, 5, 9, 6
        assert_eq!(low_stock_count(store.products(), DEFAULT_LOW_STOCK_THRESHOLD), 5);
        assert_eq!(out_of_stock_count(store.products()), 0);
    }

    #[test]
    fn test_adding_out_of_stock_product_moves_both_counters() {
        let mut store = ProductStore::seeded().unwrap();
        let before = InventorySummary::compute(store.products(), store.categories(), 10);

        store.add_product(&lamp()).unwrap();
        let after = InventorySummary::compute(store.products(), store.categories(), 10);

        assert_eq!(after.low_stock_count, before.low_stock_count + 1);
        assert_eq!(after.out_of_stock_count, before.out_of_stock_count + 1);
        assert_eq!(after.total_value, before.total_value);
        assert_eq!(after.total_products, before.total_products + 1);
    }

    #[test]
    fn test_total_value_is_additive() {
        let mut store = ProductStore::seeded().unwrap();
        let before = total_value(store.products());
        let mut dto = lamp();
        dto.price = 10.0;
        dto.stock = 5;
        store.add_product(&dto).unwrap();
        let after = total_value(store.products());
        assert!((after - before - 50.0).abs() < 1e-6);
    }

    #[test]
    fn test_stock_status() {
        assert_eq!(StockStatus::of(0, 10), StockStatus::OutOfStock);
        assert_eq!(StockStatus::of(9, 10), StockStatus::LowStock);
        assert_eq!(StockStatus::of(10, 10), StockStatus::InStock);
        assert_eq!(StockStatus::LowStock.label(), "Low Stock");
    }

    #[test]
    fn test_empty_inventory() {
        let summary = InventorySummary::compute(&[], &CategoryCatalog::new(["A"]), 10);
        assert_eq!(summary.total_products, 0);
        assert_eq!(summary.total_value, 0.0);
        assert_eq!(summary.category_counts[0].count, 0);
    }
}
