use crate::layout::global_context::InventoryContext;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CategoryFormDialog(open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_context::<InventoryContext>().expect("InventoryContext not found");
    let name = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        if open.get() {
            name.set(String::new());
            error.set(None);
        }
    });

    let save = move |_: leptos::ev::MouseEvent| match ctx.add_category(&name.get_untracked()) {
        Ok(added) => {
            if !added {
                log::debug!("category '{}' already exists", name.get_untracked().trim());
            }
            open.set(false);
        }
        Err(e) => error.set(Some(e.to_string())),
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Add Category"</DialogTitle>
                    <DialogContent>
                        <div class="form-group">
                            <label for="category-name">"Category name"</label>
                            <input
                                type="text"
                                id="category-name"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                                placeholder="e.g. Garden"
                            />
                            {move || error.get().map(|e| view! { <div class="form-error" role="alert">{e}</div> })}
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Primary on_click=save>"Add"</Button>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| open.set(false)>
                            "Cancel"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
