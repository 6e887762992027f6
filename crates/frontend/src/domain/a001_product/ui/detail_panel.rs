//! Side panel with the full record of one product.

use crate::layout::global_context::InventoryContext;
use crate::shared::components::table::format_money;
use crate::shared::icons::icon;
use chrono::Local;
use contracts::dashboards::d400_inventory_summary::StockStatus;
use contracts::domain::a001_product::ProductId;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProductDetail(
    viewing_id: RwSignal<Option<ProductId>>,
    on_edit: Callback<ProductId>,
) -> impl IntoView {
    let ctx = use_context::<InventoryContext>().expect("InventoryContext not found");
    let viewed_at = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        if viewing_id.with(Option::is_some) {
            viewed_at.set(Some(Local::now().format("%Y-%m-%d %H:%M").to_string()));
        }
    });

    // None once the product is deleted
    let product = Memo::new(move |_| {
        viewing_id
            .get()
            .and_then(|id| ctx.store.with(|s| s.product(&id).cloned()))
    });

    view! {
        {move || product.get().map(|p| {
            let status = StockStatus::of(p.stock, ctx.low_stock_threshold());
            let status_class = match status {
                StockStatus::InStock => "stock-status stock-status--in",
                StockStatus::LowStock => "stock-status stock-status--low",
                StockStatus::OutOfStock => "stock-status stock-status--out",
            };
            let id_for_edit = p.id.clone();

            view! {
                <aside class="detail-panel">
                    <div class="detail-panel__header">
                        <h3 class="detail-panel__title">{p.name.clone()}</h3>
                        <button
                            class="detail-panel__close"
                            title="Close"
                            on:click=move |_| viewing_id.set(None)
                        >
                            {icon("x")}
                        </button>
                    </div>
                    <div class="detail-panel__id">{format!("ID: {}", p.id.short())}</div>
                    <dl class="detail-panel__fields">
                        <dt>"SKU"</dt>
                        <dd>{p.id.sku()}</dd>
                        <dt>"Category"</dt>
                        <dd>{p.category.clone()}</dd>
                        <dt>"Price"</dt>
                        <dd>{format_money(p.price)}</dd>
                        <dt>"Stock"</dt>
                        <dd>
                            {p.stock.to_string()}
                            " "
                            <span class=status_class>{status.label()}</span>
                        </dd>
                        <dt>"Total value"</dt>
                        <dd>{format_money(p.total_value())}</dd>
                        <dt>"Last viewed"</dt>
                        <dd>{move || viewed_at.get().unwrap_or_default()}</dd>
                    </dl>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_edit.run(id_for_edit.clone())
                    >
                        {icon("edit")}
                        "Edit"
                    </Button>
                </aside>
            }
        })}
    }
}
