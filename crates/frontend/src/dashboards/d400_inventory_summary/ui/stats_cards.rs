use crate::layout::global_context::InventoryContext;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::table::{format_money, format_number_int};
use leptos::prelude::*;

#[component]
pub fn StatsCards() -> impl IntoView {
    let ctx = use_context::<InventoryContext>().expect("InventoryContext not found");
    let summary = ctx.summary;

    let low_stock_tone = move || {
        if summary.with(|s| s.low_stock_count) > 0 {
            StatTone::Warning
        } else {
            StatTone::Success
        }
    };
    let out_of_stock_tone = move || {
        if summary.with(|s| s.out_of_stock_count) > 0 {
            StatTone::Error
        } else {
            StatTone::Success
        }
    };

    view! {
        <div class="stats-cards">
            <StatCard
                label="Total Products"
                icon_name="products"
                value=Signal::derive(move || format_number_int(summary.with(|s| s.total_products) as f64))
                tone=StatTone::Neutral
            />
            <StatCard
                label="Total Inventory Value"
                icon_name="dollar"
                value=Signal::derive(move || format_money(summary.with(|s| s.total_value)))
                tone=StatTone::Neutral
            />
            <StatCard
                label="Low Stock Items"
                icon_name="alert-triangle"
                value=Signal::derive(move || summary.with(|s| s.low_stock_count).to_string())
                tone=Signal::derive(low_stock_tone)
                subtitle=Signal::derive(move || Some(format!("Below {} units", ctx.low_stock_threshold())))
            />
            <StatCard
                label="Out of Stock"
                icon_name="package-x"
                value=Signal::derive(move || summary.with(|s| s.out_of_stock_count).to_string())
                tone=Signal::derive(out_of_stock_tone)
            />
        </div>
    }
}
