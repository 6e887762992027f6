pub mod global_context;
pub mod main_nav;

use crate::dashboards::d400_inventory_summary::ui::{CategoryChart, StatsCards};
use crate::domain::a001_product::ui::{
    ProductDetail, ProductFilterPanel, ProductFormDialog, ProductTable, SearchBar,
};
use crate::domain::a002_category::ui::CategoryFormDialog;
use crate::shared::toast::ToastHost;
use contracts::domain::a001_product::ProductId;
use leptos::prelude::*;
use main_nav::MainNav;

/// Dashboard page.
///
/// ```text
/// +------------------------------------------+
/// |                MainNav                   |
/// +------------------------------------------+
/// |  StatsCards              | CategoryChart |
/// +------------------------------------------+
/// |  Filters  |  SearchBar                   |
/// |           |  ProductTable  | Detail      |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    // Dialog and panel state shared by the page sections
    let product_form_open = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<ProductId>);
    let category_form_open = RwSignal::new(false);
    let viewing_id = RwSignal::new(None::<ProductId>);

    let open_create = Callback::new(move |_: ()| {
        editing_id.set(None);
        product_form_open.set(true);
    });
    let open_edit = Callback::new(move |id: ProductId| {
        editing_id.set(Some(id));
        product_form_open.set(true);
    });
    let open_category = Callback::new(move |_: ()| category_form_open.set(true));
    let open_detail = Callback::new(move |id: ProductId| viewing_id.set(Some(id)));

    view! {
        <div class="app-layout">
            <MainNav />

            <main class="app-main">
                <section class="dashboard-summary">
                    <StatsCards />
                    <CategoryChart />
                </section>

                <section class="dashboard-body">
                    <aside class="dashboard-body__filters">
                        <ProductFilterPanel on_add_product=open_create on_add_category=open_category />
                    </aside>

                    <div class="dashboard-body__content">
                        <SearchBar />
                        <ProductTable on_edit=open_edit on_view=open_detail />
                    </div>

                    <ProductDetail viewing_id=viewing_id on_edit=open_edit />
                </section>
            </main>

            <ProductFormDialog open=product_form_open editing_id=editing_id />
            <CategoryFormDialog open=category_form_open />
            <ToastHost />
        </div>
    }
}
