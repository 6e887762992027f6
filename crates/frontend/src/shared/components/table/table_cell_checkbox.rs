use contracts::domain::a001_product::ProductId;
use leptos::prelude::*;
use thaw::*;

/// Row checkbox. Clicks do not reach the row.
#[component]
pub fn TableCellCheckbox(
    item_id: ProductId,

    #[prop(into)]
    checked: Signal<bool>,

    on_toggle: Callback<ProductId>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                aria-label="Select product"
                prop:checked=move || checked.get()
                on:change=move |_| on_toggle.run(item_id.clone())
            />
        </TableCell>
    }
}
