pub mod summary;

pub use summary::{
    category_counts, low_stock_count, out_of_stock_count, sorted_by_count_desc, total_value,
    CategoryCount, InventorySummary, StockStatus, DEFAULT_LOW_STOCK_THRESHOLD,
};
