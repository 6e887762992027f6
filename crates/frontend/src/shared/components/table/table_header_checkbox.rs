//! Header checkbox that selects or clears the rows of the current page

use contracts::shared::selection::PageSelectionState;
use leptos::prelude::*;
use thaw::*;

/// Three states: unchecked, checked, indeterminate (some rows selected).
/// Clicking selects the whole page unless it is already fully selected.
#[component]
pub fn TableHeaderCheckbox(
    /// Selection state of the visible rows
    #[prop(into)]
    state: Signal<PageSelectionState>,

    /// Disabled while the page is empty
    #[prop(into)]
    disabled: Signal<bool>,

    /// Callback on change (true = select all, false = clear)
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // `indeterminate` is a DOM property only
    Effect::new(move |_| {
        let indeterminate = matches!(state.get(), PageSelectionState::Indeterminate);
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(indeterminate);
        }
    });

    view! {
        <TableHeaderCell class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                aria-label="Select all products on this page"
                prop:checked=move || matches!(state.get(), PageSelectionState::Checked)
                disabled=move || disabled.get()
                on:change=move |ev| {
                    on_change.run(event_target_checked(&ev));
                }
            />
        </TableHeaderCell>
    }
}
