//! Top navigation bar with the application title.

use crate::layout::global_context::InventoryContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn MainNav() -> impl IntoView {
    let ctx = use_context::<InventoryContext>().expect("InventoryContext not found");

    let product_count = move || ctx.summary.with(|s| s.total_products);

    view! {
        <nav class="top-header">
            <div class="top-header__brand">
                {icon("inventory")}
                <span class="top-header__title">"Inventory Dashboard"</span>
            </div>
            <div class="top-header__actions">
                <span class="top-header__meta">
                    {icon("products")}
                    {move || format!("{} products", product_count())}
                </span>
            </div>
        </nav>
    }
}
