use super::view_model::ProductFormViewModel;
use crate::layout::global_context::InventoryContext;
use crate::shared::icons::icon;
use contracts::domain::a001_product::ProductId;
use leptos::prelude::*;
use thaw::*;

/// Create/edit dialog. `editing_id = None` opens an empty form.
#[component]
pub fn ProductFormDialog(
    open: RwSignal<bool>,
    editing_id: RwSignal<Option<ProductId>>,
) -> impl IntoView {
    let ctx = use_context::<InventoryContext>().expect("InventoryContext not found");
    let vm = ProductFormViewModel::new();

    // Reload the form every time the dialog opens
    Effect::new(move |_| {
        if open.get() {
            vm.load(&ctx, editing_id.get_untracked());
        }
    });

    let save = move |_: leptos::ev::MouseEvent| {
        if vm.save_command(&ctx) {
            open.set(false);
        }
    };

    let error_view = move |field: &'static str| {
        move || {
            vm.field_error(field)
                .map(|e| view! { <div class="form-error" role="alert">{e}</div> })
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || if vm.is_edit_mode() { "Edit Product" } else { "Add Product" }}
                    </DialogTitle>
                    <DialogContent>
                        <div class="details-form">
                            <div class="form-group">
                                <label for="product-name">"Name"</label>
                                <input
                                    type="text"
                                    id="product-name"
                                    prop:value=move || vm.form.with(|f| f.name.clone())
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.name = event_target_value(&ev));
                                    }
                                    placeholder="Product name"
                                />
                                {error_view("name")}
                            </div>

                            <div class="form-group">
                                <label for="product-category">"Category"</label>
                                <select
                                    id="product-category"
                                    prop:value=move || vm.form.with(|f| f.category.clone())
                                    on:change=move |ev| {
                                        vm.form.update(|f| f.category = event_target_value(&ev));
                                    }
                                >
                                    {move || {
                                        ctx.store.with(|s| {
                                            s.categories()
                                                .iter()
                                                .map(|name| {
                                                    let name = name.to_string();
                                                    let selected_name = name.clone();
                                                    view! {
                                                        <option
                                                            value=name.clone()
                                                            selected=move || vm.form.with(|f| f.category == selected_name)
                                                        >
                                                            {name}
                                                        </option>
                                                    }
                                                })
                                                .collect_view()
                                        })
                                    }}
                                </select>
                                {error_view("category")}
                            </div>

                            <div class="form-group">
                                <label for="product-price">"Price ($)"</label>
                                <input
                                    type="number"
                                    id="product-price"
                                    min="0"
                                    step="0.01"
                                    prop:value=move || vm.form.with(|f| f.price.clone())
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.price = event_target_value(&ev));
                                    }
                                    placeholder="0.00"
                                />
                                {error_view("price")}
                            </div>

                            <div class="form-group">
                                <label for="product-stock">"Stock"</label>
                                <input
                                    type="number"
                                    id="product-stock"
                                    min="0"
                                    step="1"
                                    prop:value=move || vm.form.with(|f| f.stock.clone())
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.stock = event_target_value(&ev));
                                    }
                                    placeholder="0"
                                />
                                {error_view("stock")}
                            </div>
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Primary on_click=save>
                            {icon("plus")}
                            {move || if vm.is_edit_mode() { "Save" } else { "Add" }}
                        </Button>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| open.set(false)>
                            "Cancel"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
