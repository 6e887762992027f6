//! In-memory product store.
//!
//! Owns the canonical product list, the category catalog and the selection
//! set. Every successful mutation notifies subscribers synchronously; rejected
//! or no-op mutations leave the store untouched and stay silent.

use super::aggregate::{Product, ProductDto, ProductId};
use super::seed::load_seed;
use crate::domain::a002_category::CategoryCatalog;
use crate::domain::common::ValidationError;
use crate::shared::selection::Selection;
use std::collections::HashSet;
use std::fmt;

/// Change notification delivered to subscribers
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    ProductAdded(Product),
    ProductUpdated(Product),
    /// Ids that were actually removed
    ProductsDeleted { ids: Vec<ProductId> },
    CategoryAdded(String),
    SelectionChanged { selected: usize },
}

/// Handle returned by [`ProductStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Listeners run while the store is mutably borrowed and must not read it back.
pub type StoreListener = Box<dyn Fn(&StoreEvent) + Send + Sync>;

pub struct ProductStore {
    products: Vec<Product>,
    categories: CategoryCatalog,
    selection: Selection,
    listeners: Vec<(SubscriptionId, StoreListener)>,
    next_subscription: u64,
}

impl ProductStore {
    pub fn new(products: Vec<Product>, categories: CategoryCatalog) -> Self {
        Self {
            products,
            categories,
            selection: Selection::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Store filled from the embedded mock dataset
    pub fn seeded() -> anyhow::Result<Self> {
        let seed = load_seed()?;
        Ok(Self::new(seed.products, CategoryCatalog::new(seed.categories)))
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &CategoryCatalog {
        &self.categories
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// How many of `ids` currently exist; used for delete confirmations
    pub fn pending_delete_count(&self, ids: &[ProductId]) -> usize {
        let wanted: HashSet<&ProductId> = ids.iter().collect();
        self.products.iter().filter(|p| wanted.contains(&p.id)).count()
    }

    // ------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------

    /// Validate and append a new product with a store-generated id.
    /// `dto.id` is ignored.
    pub fn add_product(&mut self, dto: &ProductDto) -> Result<Product, ValidationError> {
        let fields = dto.validate(&self.categories).inspect_err(|e| {
            log::warn!("add_product rejected: {}", e);
        })?;

        let product = Product::from_fields(self.generate_id(), fields);
        self.products.push(product.clone());
        log::debug!("Product added: id={}, name='{}'", product.id, product.name);

        self.notify(&StoreEvent::ProductAdded(product.clone()));
        Ok(product)
    }

    /// Replace every field except the id of the product matching `id`.
    ///
    /// Returns `Ok(false)` without touching anything when no product has that
    /// id.
    pub fn update_product(
        &mut self,
        id: &ProductId,
        dto: &ProductDto,
    ) -> Result<bool, ValidationError> {
        let fields = dto.validate(&self.categories).inspect_err(|e| {
            log::warn!("update_product({}) rejected: {}", id, e);
        })?;

        let Some(product) = self.products.iter_mut().find(|p| &p.id == id) else {
            log::debug!("update_product: id={} not found, ignoring", id);
            return Ok(false);
        };
        product.apply(fields);
        let updated = product.clone();
        log::debug!("Product updated: id={}", updated.id);

        self.notify(&StoreEvent::ProductUpdated(updated));
        Ok(true)
    }

    /// Remove every product whose id is in `ids` and drop those ids from the
    /// selection. Unknown ids are ignored. Returns the number of products
    /// removed.
    pub fn delete_products(&mut self, ids: &[ProductId]) -> usize {
        let wanted: HashSet<&ProductId> = ids.iter().collect();
        let mut removed = Vec::new();
        self.products.retain(|p| {
            if wanted.contains(&p.id) {
                removed.push(p.id.clone());
                false
            } else {
                true
            }
        });

        let deselected = self.selection.remove_all(ids);
        log::debug!(
            "delete_products: requested={}, removed={}, deselected={}",
            ids.len(),
            removed.len(),
            deselected
        );

        let count = removed.len();
        if count > 0 {
            self.notify(&StoreEvent::ProductsDeleted { ids: removed });
        }
        if deselected > 0 {
            self.notify_selection();
        }
        count
    }

    /// Append a category unless it already exists (exact match after trim)
    pub fn add_category(&mut self, name: &str) -> Result<bool, ValidationError> {
        let added = self.categories.add(name).inspect_err(|e| {
            log::warn!("add_category rejected: {}", e);
        })?;

        if added {
            let name = name.trim().to_string();
            log::debug!("Category added: '{}'", name);
            self.notify(&StoreEvent::CategoryAdded(name));
        }
        Ok(added)
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn toggle_selected(&mut self, id: &ProductId) {
        self.selection.toggle(id);
        self.notify_selection();
    }

    pub fn select_page(&mut self, ids: &[ProductId], checked: bool) {
        let before = self.selection.len();
        self.selection.select_page(ids, checked);
        if self.selection.len() != before {
            self.notify_selection();
        }
    }

    pub fn is_page_fully_selected(&self, ids: &[ProductId]) -> bool {
        self.selection.is_page_fully_selected(ids)
    }

    pub fn clear_selection(&mut self) {
        if !self.selection.is_empty() {
            self.selection.clear();
            self.notify_selection();
        }
    }

    // ------------------------------------------------------------------
    // Subscriptions
    // ------------------------------------------------------------------

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&StoreEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if the subscription was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn notify(&self, event: &StoreEvent) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }

    fn notify_selection(&self) {
        self.notify(&StoreEvent::SelectionChanged {
            selected: self.selection.len(),
        });
    }

    fn generate_id(&self) -> ProductId {
        loop {
            let id = ProductId::new_v4();
            if self.product(&id).is_none() {
                return id;
            }
        }
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new(Vec::new(), CategoryCatalog::default())
    }
}

impl fmt::Debug for ProductStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductStore")
            .field("products", &self.products.len())
            .field("categories", &self.categories.as_slice())
            .field("selection", &self.selection.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
