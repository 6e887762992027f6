pub mod state;

use crate::layout::global_context::InventoryContext;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{
    format_money, SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox,
};
use crate::shared::icons::icon;
use contracts::dashboards::d400_inventory_summary::StockStatus;
use contracts::domain::a001_product::{Product, ProductId};
use contracts::projections::p900_product_list::SortField;
use leptos::prelude::*;
use state::create_state;
use thaw::*;

fn stock_badge_color(status: StockStatus) -> BadgeColor {
    match status {
        StockStatus::InStock => BadgeColor::Success,
        StockStatus::LowStock => BadgeColor::Warning,
        StockStatus::OutOfStock => BadgeColor::Danger,
    }
}

#[component]
pub fn ProductTable(
    /// Opens the edit form for a row
    on_edit: Callback<ProductId>,
    /// Shows a row in the detail panel
    on_view: Callback<ProductId>,
) -> impl IntoView {
    let ctx = use_context::<InventoryContext>().expect("InventoryContext not found");
    let state = create_state();
    let confirm_open = RwSignal::new(false);

    let request_delete = move |ids: Vec<ProductId>| {
        let count = ctx.pending_delete_count(&ids);
        if count == 0 {
            return;
        }
        state.update(|s| {
            s.pending_delete = ids;
            s.pending_count = count;
        });
        confirm_open.set(true);
    };

    let confirm_delete = move |_: leptos::ev::MouseEvent| {
        let ids = state.with_untracked(|s| s.pending_delete.clone());
        let removed = ctx.delete_products(&ids);
        log::debug!("deleted {} of {} requested product(s)", removed, ids.len());
        state.set(Default::default());
        confirm_open.set(false);
    };

    let cancel_delete = move |_: leptos::ev::MouseEvent| {
        state.set(Default::default());
        confirm_open.set(false);
    };

    let current_sort = Signal::derive(move || ctx.query.with(|q| q.sort));
    let on_sort = Callback::new(move |field: SortField| ctx.toggle_sort(field));
    let on_toggle = Callback::new(move |id: ProductId| ctx.toggle_selected(&id));

    let render_row = move |product: Product| {
        let threshold = ctx.low_stock_threshold();
        let status = StockStatus::of(product.stock, threshold);
        let low_stock = product.stock < threshold;

        let id = product.id.clone();
        let id_for_checked = id.clone();
        let id_for_view = id.clone();
        let id_for_view_button = id.clone();
        let id_for_edit = id.clone();
        let id_for_delete = id.clone();
        let view_label = format!("View {}", product.name);
        let edit_label = format!("Edit {}", product.name);
        let delete_label = format!("Delete {}", product.name);

        let row_class = if low_stock {
            "table__row table__row--low-stock"
        } else {
            "table__row"
        };

        view! {
            <TableRow class=row_class>
                <TableCellCheckbox
                    item_id=id
                    checked=Signal::derive(move || ctx.is_selected(&id_for_checked))
                    on_toggle=on_toggle
                />
                <TableCell>
                    <TableCellLayout>
                        <a
                            href="#"
                            class="table__link"
                            on:click=move |e| {
                                e.prevent_default();
                                on_view.run(id_for_view.clone());
                            }
                        >
                            {product.name.clone()}
                        </a>
                        {low_stock.then(|| view! {
                            <span class="low-stock-marker" title=status.label()>
                                {icon("alert-triangle")}
                            </span>
                        })}
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>{product.category.clone()}</TableCellLayout>
                </TableCell>
                <TableCell class="table__cell--right">
                    <TableCellLayout>{format_money(product.price)}</TableCellLayout>
                </TableCell>
                <TableCell class="table__cell--right">
                    <TableCellLayout>
                        <Badge appearance=BadgeAppearance::Tint color=stock_badge_color(status)>
                            {product.stock.to_string()}
                        </Badge>
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            attr:aria-label=view_label
                            on_click=move |_| on_view.run(id_for_view_button.clone())
                        >
                            {icon("eye")}
                        </Button>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            attr:aria-label=edit_label
                            on_click=move |_| on_edit.run(id_for_edit.clone())
                        >
                            {icon("edit")}
                        </Button>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            attr:aria-label=delete_label
                            on_click=move |_| request_delete(vec![id_for_delete.clone()])
                        >
                            {icon("delete")}
                        </Button>
                    </TableCellLayout>
                </TableCell>
            </TableRow>
        }
    };

    view! {
        <div class="product-table">
            <div class="product-table__toolbar">
                <span class="product-table__count">
                    {move || format!("{} product(s)", ctx.view.with(|v| v.total_count))}
                </span>
                <Show when=move || { ctx.selected_count() > 0 }>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| request_delete(ctx.selected_ids())
                    >
                        {icon("delete")}
                        {move || format!("Delete selected ({})", ctx.selected_count())}
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| ctx.clear_selection()>
                        "Clear selection"
                    </Button>
                </Show>
            </div>

            <Show
                when=move || !ctx.view.with(|v| v.is_empty())
                fallback=|| view! {
                    <div class="empty-state">
                        <p>"No products match the current filters"</p>
                    </div>
                }
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCheckbox
                                state=Signal::derive(move || ctx.page_selection_state())
                                disabled=Signal::derive(move || ctx.view.with(|v| v.items.is_empty()))
                                on_change=Callback::new(move |checked| ctx.select_current_page(checked))
                            />
                            {SortField::ALL
                                .into_iter()
                                .map(|field| {
                                    let align = if field.is_numeric() { "right" } else { "left" };
                                    view! {
                                        <SortableHeaderCell
                                            field=field
                                            current_sort=current_sort
                                            on_sort=on_sort
                                            align=align
                                        />
                                    }
                                })
                                .collect_view()}
                            <TableHeaderCell min_width=130.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            ctx.view
                                .get()
                                .items
                                .into_iter()
                                .map(render_row)
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
            </Show>

            <PaginationControls
                current_page=Signal::derive(move || ctx.view.with(|v| v.effective_page()))
                total_pages=Signal::derive(move || ctx.view.with(|v| v.total_pages))
                total_count=Signal::derive(move || ctx.view.with(|v| v.total_count))
                page_size=Signal::derive(move || ctx.query.with(|q| q.page_size))
                on_page_change=Callback::new(move |page| ctx.set_page(page))
                on_page_size_change=Callback::new(move |size| ctx.set_page_size(size))
                page_size_options=Signal::derive(move || {
                    ctx.config.with(|c| c.inventory.page_size_options.clone())
                })
            />

            <Dialog open=confirm_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Confirm delete"</DialogTitle>
                        <DialogContent>
                            {move || state.with(|s| s.confirm_message())}
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Primary on_click=confirm_delete>
                                "Delete"
                            </Button>
                            <Button appearance=ButtonAppearance::Subtle on_click=cancel_delete>
                                "Cancel"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </div>
    }
}
