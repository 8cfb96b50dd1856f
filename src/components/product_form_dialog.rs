//! Modal dialog for adding or editing a product.
//!
//! DESIGN
//! ======
//! Both modes drive the same [`ProductForm`] model and the same
//! validation; the mode only decides how the form is seeded and which
//! endpoint the submit hits. Image slots hold a local preview URL next to
//! the picked `File`, so the dialog shows the pending image before any
//! upload happens.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::state::notifications::NotificationsState;
use crate::state::product_form::{ProductForm, parse_number};
use crate::state::products::{CATEGORIES, ProductsState};
use crate::util::image_url;

const SLOT_LABELS: [&str; 4] = ["Main Image", "Image 2", "Image 3", "Image 4"];

/// Whether the dialog creates a new product or edits an existing one.
#[derive(Clone, Debug)]
pub enum FormMode {
    Add,
    Edit(Product),
}

#[component]
pub fn ProductFormDialog(mode: FormMode, on_close: Callback<()>) -> impl IntoView {
    let products = expect_context::<RwSignal<ProductsState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    let form = RwSignal::new(match &mode {
        FormMode::Add => ProductForm::default(),
        FormMode::Edit(product) => ProductForm::from_product(product),
    });
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // One preview URL per image slot; edit mode starts from the stored images.
    let previews = RwSignal::new(match &mode {
        FormMode::Add => vec![String::new(); 4],
        FormMode::Edit(product) => product
            .images()
            .iter()
            .map(|path| {
                if image_url::has_image(path) {
                    image_url::normalize(path)
                } else {
                    String::new()
                }
            })
            .collect(),
    });

    #[cfg(feature = "hydrate")]
    let files: RwSignal<Vec<Option<web_sys::File>>> = RwSignal::new(vec![None; 4]);

    let on_file = move |slot: usize, ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
                previews.update(|p| p[slot] = url);
            }
            files.update(|f| f[slot] = Some(file));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (slot, &ev);
        }
    };

    let is_add = matches!(mode, FormMode::Add);
    let title = if is_add { "Add Product" } else { "Edit Product" };
    let submit_label = if is_add { "Add" } else { "Update" };

    let mode_submit = mode.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let current = form.get();
        if let Some(message) = current.validate() {
            error.set(message.to_owned());
            return;
        }
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let picked = files.get();
            if matches!(mode_submit, FormMode::Add) && picked[0].is_none() {
                error.set("Main image is required".to_owned());
                return;
            }
            busy.set(true);
            let mode_task = mode_submit.clone();
            leptos::task::spawn_local(async move {
                let result = match &mode_task {
                    FormMode::Add => crate::net::api::add_product(&current, &picked).await,
                    FormMode::Edit(product) => {
                        crate::net::api::update_product(&product.id, &current, &picked, product).await
                    }
                };
                match result {
                    Ok(()) => {
                        crate::pages::products_list::fetch_products(products, notifications);
                        let text = if matches!(mode_task, FormMode::Add) {
                            "Product added successfully"
                        } else {
                            "Product updated successfully"
                        };
                        notifications.update(|state| state.success(text));
                        on_close.run(());
                    }
                    Err(err) => {
                        error.set(err.to_string());
                        notifications.update(|state| state.danger("Could not save the product"));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&mode_submit, &current, products, notifications);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--product-form" on:click=move |ev| ev.stop_propagation()>
                <h2 class="dialog__title">{title}</h2>
                <form class="product-form" on:submit=on_submit>
                    <label class="dialog__label">
                        "Title"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || form.get().title
                            on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                        />
                    </label>
                    <div class="product-form__row">
                        <label class="dialog__label">
                            "Price"
                            <input
                                class="dialog__input"
                                type="number"
                                step="any"
                                on:input=move |ev| {
                                    form.update(|f| f.price = parse_number(&event_target_value(&ev)));
                                }
                                prop:value=move || number_text(form.get().price)
                            />
                        </label>
                        <label class="dialog__label">
                            "Discount %"
                            <input
                                class="dialog__input"
                                type="number"
                                step="any"
                                on:input=move |ev| {
                                    form.update(|f| f.discount = parse_number(&event_target_value(&ev)));
                                }
                                prop:value=move || number_text(form.get().discount)
                            />
                        </label>
                        <label class="dialog__label">
                            "Quantity"
                            <input
                                class="dialog__input"
                                type="number"
                                step="any"
                                on:input=move |ev| {
                                    form.update(|f| f.quantity = parse_number(&event_target_value(&ev)));
                                }
                                prop:value=move || number_text(form.get().quantity)
                            />
                        </label>
                    </div>
                    <label class="dialog__label">
                        "Category"
                        <select
                            class="dialog__input"
                            on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                            prop:value=move || form.get().category
                        >
                            <option value="">"Select a category"</option>
                            {CATEGORIES
                                .into_iter()
                                .map(|category| {
                                    view! { <option value=category>{category}</option> }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Description"
                        <textarea
                            class="dialog__textarea"
                            prop:value=move || form.get().description
                            on:input=move |ev| {
                                form.update(|f| f.description = event_target_value(&ev));
                            }
                        ></textarea>
                    </label>
                    <div class="product-form__images">
                        {(0..SLOT_LABELS.len())
                            .map(|slot| {
                                view! {
                                    <label class="image-slot">
                                        <span class="image-slot__label">{SLOT_LABELS[slot]}</span>
                                        <Show
                                            when=move || !previews.get()[slot].is_empty()
                                            fallback=|| {
                                                view! {
                                                    <span class="image-slot__placeholder">"+"</span>
                                                }
                                            }
                                        >
                                            <img
                                                class="image-slot__preview"
                                                src=move || previews.get()[slot].clone()
                                            />
                                        </Show>
                                        <input
                                            class="image-slot__input"
                                            type="file"
                                            accept="image/*"
                                            on:change=move |ev| on_file(slot, ev)
                                        />
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                    <Show when=move || !error.get().is_empty()>
                        <p class="dialog__error">{move || error.get()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {submit_label}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn number_text(value: Option<f64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}
