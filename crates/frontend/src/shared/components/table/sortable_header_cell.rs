//! Sortable table header cell
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     field=SortField::Price
//!     current_sort=Signal::derive(move || ctx.query.with(|q| q.sort))
//!     on_sort=Callback::new(move |field| ctx.toggle_sort(field))
//!     align="right"
//! />
//! ```

use crate::shared::list_utils::{get_aria_sort, get_sort_class, get_sort_indicator};
use contracts::projections::p900_product_list::{SortCriteria, SortField};
use leptos::prelude::*;
use thaw::*;

/// Header cell that shows the column label with a ▲/▼/⇅ indicator and
/// reports clicks as sort requests
#[component]
pub fn SortableHeaderCell(
    /// Column being sorted
    field: SortField,

    /// Active sort
    #[prop(into)]
    current_sort: Signal<SortCriteria>,

    /// Callback on header click
    on_sort: Callback<SortField>,

    /// Minimum column width
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Header alignment (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                aria-sort=move || get_aria_sort(current_sort.get(), field)
                on:click=move |_| on_sort.run(field)
            >
                {field.label()}
                <span class=move || get_sort_class(current_sort.get(), field)>
                    {move || get_sort_indicator(current_sort.get(), field)}
                </span>
            </div>
        </TableHeaderCell>
    }
}
