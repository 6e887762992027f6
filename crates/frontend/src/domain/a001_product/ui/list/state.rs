use contracts::domain::a001_product::ProductId;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct ProductListState {
    // rows waiting for the delete confirmation
    pub pending_delete: Vec<ProductId>,
    // how many of them still exist
    pub pending_count: usize,
}

impl ProductListState {
    pub fn confirm_message(&self) -> String {
        match self.pending_count {
            1 => "Are you sure you want to delete this product?".to_string(),
            n => format!("Are you sure you want to delete {} products?", n),
        }
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}
