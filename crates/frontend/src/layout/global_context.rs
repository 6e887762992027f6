use crate::shared::toast::ToastService;
use contracts::dashboards::d400_inventory_summary::InventorySummary;
use contracts::domain::a001_product::{ProductDto, ProductId, ProductStore, StoreEvent};
use contracts::domain::common::ValidationError;
use contracts::projections::p900_product_list::{ProductListQuery, ProductPage, SortField};
use contracts::shared::config::{load_config, ConfigOverrides, DashboardConfig};
use contracts::shared::selection::PageSelectionState;
use leptos::prelude::*;
use web_sys::window;

/// Store, table view state and configuration, provided once at the root.
///
/// Every mutation of the product list and every filter change resets the
/// table to page 1. Selection changes keep the current page.
#[derive(Clone, Copy)]
pub struct InventoryContext {
    pub store: RwSignal<ProductStore>,
    pub query: RwSignal<ProductListQuery>,
    pub config: RwSignal<DashboardConfig>,
    /// Current table page (filtered, sorted, paginated)
    pub view: Memo<ProductPage>,
    pub summary: Memo<InventorySummary>,
}

impl InventoryContext {
    pub fn new(toasts: ToastService) -> Self {
        let config = load_config(&read_query_overrides()).unwrap_or_else(|e| {
            log::warn!("Ignoring configuration overrides: {:#}", e);
            DashboardConfig::default()
        });
        toasts.set_duration(config.notifications.toast_duration_ms);

        let mut store = ProductStore::seeded().unwrap_or_else(|e| {
            log::error!("Failed to load seed data: {:#}", e);
            ProductStore::default()
        });
        store.subscribe(log_event);
        store.subscribe(move |event| {
            if let Some(message) = toast_message(event) {
                toasts.success(message);
            }
        });
        log::info!(
            "Inventory loaded: {} products, {} categories",
            store.len(),
            store.categories().len()
        );

        let store = RwSignal::new(store);
        let query = RwSignal::new(ProductListQuery::new(config.inventory.page_size));
        let config = RwSignal::new(config);

        let view = Memo::new(move |_| {
            let query = query.get();
            store.with(|s| query.run(s.products()))
        });
        let summary = Memo::new(move |_| {
            let threshold = config.with(|c| c.inventory.low_stock_threshold);
            store.with(|s| InventorySummary::compute(s.products(), s.categories(), threshold))
        });

        Self {
            store,
            query,
            config,
            view,
            summary,
        }
    }

    pub fn low_stock_threshold(&self) -> u32 {
        self.config.with(|c| c.inventory.low_stock_threshold)
    }

    // ------------------------------------------------------------------
    // View state
    // ------------------------------------------------------------------

    pub fn set_search(&self, term: String) {
        log::debug!("search: '{}'", term);
        self.query.update(|q| q.set_search(term));
    }

    pub fn toggle_category(&self, name: &str) {
        self.query.update(|q| q.toggle_category(name));
    }

    pub fn set_in_stock_only(&self, value: bool) {
        self.query.update(|q| q.set_in_stock_only(value));
    }

    pub fn clear_filters(&self) {
        self.query.update(|q| q.clear_filters());
    }

    pub fn toggle_sort(&self, field: SortField) {
        self.query.update(|q| q.toggle_sort(field));
    }

    pub fn set_page(&self, page: usize) {
        self.query.update(|q| q.set_page(page));
    }

    pub fn set_page_size(&self, size: usize) {
        self.query.update(|q| q.set_page_size(size));
    }

    fn reset_page(&self) {
        self.query.update(|q| q.reset_page());
    }

    // ------------------------------------------------------------------
    // Store mutations
    // ------------------------------------------------------------------

    pub fn add_product(&self, dto: &ProductDto) -> Result<(), ValidationError> {
        let result = self
            .store
            .try_update(|s| s.add_product(dto).map(drop))
            .unwrap_or(Ok(()));
        if result.is_ok() {
            self.reset_page();
        }
        result
    }

    pub fn update_product(&self, id: &ProductId, dto: &ProductDto) -> Result<bool, ValidationError> {
        let result = self
            .store
            .try_update(|s| s.update_product(id, dto))
            .unwrap_or(Ok(false));
        if matches!(result, Ok(true)) {
            self.reset_page();
        }
        result
    }

    pub fn delete_products(&self, ids: &[ProductId]) -> usize {
        let removed = self
            .store
            .try_update(|s| s.delete_products(ids))
            .unwrap_or(0);
        if removed > 0 {
            self.reset_page();
        }
        removed
    }

    pub fn add_category(&self, name: &str) -> Result<bool, ValidationError> {
        self.store
            .try_update(|s| s.add_category(name))
            .unwrap_or(Ok(false))
    }

    pub fn pending_delete_count(&self, ids: &[ProductId]) -> usize {
        self.store.with(|s| s.pending_delete_count(ids))
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn toggle_selected(&self, id: &ProductId) {
        self.store.update(|s| s.toggle_selected(id));
    }

    /// Header checkbox: select or deselect every row of the current page
    pub fn select_current_page(&self, checked: bool) {
        let ids = self.view.with_untracked(|v| v.ids());
        self.store.update(|s| s.select_page(&ids, checked));
    }

    pub fn page_selection_state(&self) -> PageSelectionState {
        let ids = self.view.with(|v| v.ids());
        self.store.with(|s| s.selection().page_state(&ids))
    }

    pub fn is_selected(&self, id: &ProductId) -> bool {
        self.store.with(|s| s.selection().contains(id))
    }

    pub fn selected_ids(&self) -> Vec<ProductId> {
        self.store.with(|s| s.selection().ids())
    }

    pub fn selected_count(&self) -> usize {
        self.store.with(|s| s.selection().len())
    }

    pub fn clear_selection(&self) {
        self.store.update(|s| s.clear_selection());
    }
}

/// `?page_size=14&low_stock_threshold=5`
fn read_query_overrides() -> ConfigOverrides {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_else(|e| {
        log::warn!("Malformed query string '{}': {}", search, e);
        ConfigOverrides::default()
    })
}

fn log_event(event: &StoreEvent) {
    match event {
        StoreEvent::SelectionChanged { selected } => log::debug!("selection: {} item(s)", selected),
        other => log::info!("store event: {:?}", other),
    }
}

fn toast_message(event: &StoreEvent) -> Option<String> {
    match event {
        StoreEvent::ProductAdded(_) => Some("Product added successfully!".to_string()),
        StoreEvent::ProductUpdated(_) => Some("Product updated successfully!".to_string()),
        StoreEvent::ProductsDeleted { ids } => {
            Some(format!("{} product(s) deleted successfully!", ids.len()))
        }
        StoreEvent::CategoryAdded(name) => Some(format!("Category \"{}\" added", name)),
        StoreEvent::SelectionChanged { .. } => None,
    }
}
