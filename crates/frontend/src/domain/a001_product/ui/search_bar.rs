use crate::layout::global_context::InventoryContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Search box. The term is applied on submit, not while typing.
#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_context::<InventoryContext>().expect("InventoryContext not found");
    let text = RwSignal::new(String::new());

    // Only the applied term; paging and sorting leave typed text alone
    let applied = Memo::new(move |_| ctx.query.with(|q| q.criteria.search_term.clone()));

    Effect::new(move |previous: Option<String>| {
        let current = applied.get();
        if applied_term_cleared(previous.as_deref(), &current) {
            text.set(String::new());
        }
        current
    });

    let is_active = move || ctx.query.with(|q| !q.criteria.search_term.trim().is_empty());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ctx.set_search(text.get_untracked());
    };

    let clear = move |_| {
        text.set(String::new());
        ctx.set_search(String::new());
    };

    view! {
        <form class="search-bar" role="search" on:submit=submit>
            <span class="search-bar__icon">{icon("search")}</span>
            <input
                type="search"
                class=move || if is_active() { "search-bar__input search-bar__input--active" } else { "search-bar__input" }
                placeholder="Search by name, category or price..."
                aria-label="Search products"
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            />
            <button type="submit" class="button button--primary">"Search"</button>
            <Show when=move || !text.with(String::is_empty) || is_active()>
                <button type="button" class="search-bar__clear" title="Clear search" on:click=clear>
                    {icon("x")}
                </button>
            </Show>
        </form>
    }
}

/// True when an applied term was removed (clear button, clear filters).
/// The first run and unrelated query changes keep the typed text.
fn applied_term_cleared(previous: Option<&str>, current: &str) -> bool {
    current.is_empty() && previous.is_some_and(|p| !p.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unapplied_text_survives_query_changes() {
        // nothing applied yet: paging, sorting and category toggles
        assert!(!applied_term_cleared(None, ""));
        assert!(!applied_term_cleared(Some(""), ""));
        // applied term unchanged
        assert!(!applied_term_cleared(Some("lap"), "lap"));
    }

    #[test]
    fn test_removed_term_clears_box() {
        assert!(applied_term_cleared(Some("lap"), ""));
        assert!(!applied_term_cleared(Some("lap"), "desk"));
    }
}
