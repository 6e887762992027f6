pub mod detail_panel;
pub mod details;
pub mod filter_panel;
pub mod list;
pub mod search_bar;

pub use detail_panel::ProductDetail;
pub use details::ProductFormDialog;
pub use filter_panel::ProductFilterPanel;
pub use list::ProductTable;
pub use search_bar::SearchBar;
