use crate::layout::global_context::InventoryContext;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Category, stock and search filters plus the create actions
#[component]
pub fn ProductFilterPanel(
    on_add_product: Callback<()>,
    on_add_category: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<InventoryContext>().expect("InventoryContext not found");
    let is_expanded = RwSignal::new(true);
    let in_stock_only = RwSignal::new(false);

    Effect::new(move |_| {
        let value = in_stock_only.get();
        if ctx.query.with_untracked(|q| q.criteria.in_stock_only) != value {
            ctx.set_in_stock_only(value);
        }
    });

    let active_count = Signal::derive(move || ctx.query.with(|q| q.criteria.active_count()));

    let clear = Callback::new(move |_: ()| {
        in_stock_only.set(false);
        ctx.clear_filters();
    });

    let category_list = move || {
        ctx.summary.with(|s| {
            s.category_counts
                .iter()
                .map(|entry| {
                    let name = entry.name.clone();
                    let name_for_checked = name.clone();
                    let name_for_toggle = name.clone();
                    view! {
                        <label class="filter-panel__option">
                            <input
                                type="checkbox"
                                prop:checked=move || {
                                    ctx.query.with(|q| q.criteria.selected_categories.contains(&name_for_checked))
                                }
                                on:change=move |_| ctx.toggle_category(&name_for_toggle)
                            />
                            <span class="filter-panel__option-label">{name}</span>
                            <span class="filter-panel__option-count">{entry.count}</span>
                        </label>
                    }
                })
                .collect_view()
        })
    };

    let tags = move || {
        let criteria = ctx.query.with(|q| q.criteria.clone());
        let mut views: Vec<AnyView> = criteria
            .selected_categories
            .iter()
            .map(|name| {
                let name_for_remove = name.clone();
                view! {
                    <FilterTag
                        label=name.clone()
                        on_remove=Callback::new(move |_| ctx.toggle_category(&name_for_remove))
                    />
                }
                .into_any()
            })
            .collect();
        if criteria.in_stock_only {
            views.push(
                view! {
                    <FilterTag
                        label="In stock"
                        on_remove=Callback::new(move |_| in_stock_only.set(false))
                    />
                }
                .into_any(),
            );
        }
        let term = criteria.search_term.trim().to_string();
        if !term.is_empty() {
            views.push(
                view! {
                    <FilterTag
                        label=format!("\"{}\"", term)
                        on_remove=Callback::new(move |_| ctx.set_search(String::new()))
                    />
                }
                .into_any(),
            );
        }
        views
    };

    view! {
        <div class="product-filters">
            <div class="product-filters__actions">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_add_product.run(())>
                    {icon("plus")}
                    "Add Product"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_add_category.run(())>
                    {icon("tag")}
                    "Add Category"
                </Button>
            </div>

            <FilterPanel
                is_expanded=is_expanded
                active_filters_count=active_count
                on_clear=clear
            >
                <div class="filter-panel__section">
                    <div class="filter-panel__section-title">"Categories"</div>
                    {category_list}
                </div>
                <div class="filter-panel__section">
                    <Switch checked=in_stock_only label="In stock only" />
                </div>
                <div class="filter-panel__tags">{tags}</div>
            </FilterPanel>
        </div>
    }
}
