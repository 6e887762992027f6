use crate::layout::global_context::InventoryContext;
use crate::layout::Shell;
use crate::shared::toast::ToastService;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let toasts = ToastService::new();
    provide_context(toasts);

    // Store, view state and config for the whole app
    provide_context(InventoryContext::new(toasts));

    view! {
        <ConfigProvider>
            <Shell />
        </ConfigProvider>
    }
}
