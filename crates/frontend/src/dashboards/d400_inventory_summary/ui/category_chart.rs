//! Horizontal bar chart of products per category, largest first.

use crate::layout::global_context::InventoryContext;
use contracts::dashboards::d400_inventory_summary::{sorted_by_count_desc, CategoryCount};
use leptos::prelude::*;

const LABEL_WIDTH: f64 = 130.0;
const BAR_AREA: f64 = 240.0;
const ROW_HEIGHT: f64 = 28.0;
const BAR_HEIGHT: f64 = 18.0;

#[derive(Debug, Clone, PartialEq)]
struct Bar {
    label: String,
    count: usize,
    y: f64,
    width: f64,
}

/// Bar geometry scaled so the largest count fills the bar area
fn layout_bars(counts: &[CategoryCount]) -> Vec<Bar> {
    let max = counts.iter().map(|c| c.count).max().unwrap_or(0).max(1) as f64;
    sorted_by_count_desc(counts)
        .into_iter()
        .enumerate()
        .map(|(i, c)| Bar {
            width: BAR_AREA * c.count as f64 / max,
            y: i as f64 * ROW_HEIGHT,
            label: c.name,
            count: c.count,
        })
        .collect()
}

#[component]
pub fn CategoryChart() -> impl IntoView {
    let ctx = use_context::<InventoryContext>().expect("InventoryContext not found");
    let bars = Memo::new(move |_| ctx.summary.with(|s| layout_bars(&s.category_counts)));

    view! {
        <div class="category-chart">
            <div class="category-chart__title">"Products by Category"</div>
            {move || {
                let bars = bars.get();
                let height = (bars.len() as f64 * ROW_HEIGHT).max(ROW_HEIGHT);
                let total_width = LABEL_WIDTH + BAR_AREA + 40.0;
                view! {
                    <svg
                        class="category-chart__svg"
                        width=total_width
                        height=height
                        viewBox=format!("0 0 {} {}", total_width, height)
                        role="img"
                        aria-label="Products by category"
                    >
                        {bars.into_iter().map(|bar| {
                            let text_y = bar.y + BAR_HEIGHT * 0.75;
                            view! {
                                <g>
                                    <text x={LABEL_WIDTH - 8.0} y=text_y text-anchor="end" class="category-chart__label">
                                        {bar.label}
                                    </text>
                                    <rect
                                        x=LABEL_WIDTH
                                        y=bar.y
                                        width=bar.width
                                        height=BAR_HEIGHT
                                        rx="3"
                                        class="category-chart__bar"
                                    />
                                    <text x={LABEL_WIDTH + bar.width + 6.0} y=text_y class="category-chart__value">
                                        {bar.count}
                                    </text>
                                </g>
                            }
                        }).collect_view()}
                    </svg>
                }
            }}
        </div>
    }
}
