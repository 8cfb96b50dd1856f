//! Product detail page with image gallery, edit dialog, and delete.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::product_form_dialog::{FormMode, ProductFormDialog};
use crate::net::types::Product;
use crate::state::auth::SessionState;
use crate::state::notifications::NotificationsState;
use crate::state::products::ProductsState;
use crate::util::auth::install_admin_redirect;
use crate::util::format::{capitalize, capitalize_first, capitalize_words, format_date};
use crate::util::image_url;

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let products = expect_context::<RwSignal<ProductsState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    install_admin_redirect(session);

    let product = RwSignal::new(None::<Product>);
    let missing = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let shown_image = RwSignal::new(String::new());
    let confirming = RwSignal::new(false);
    let editing = RwSignal::new(false);

    let product_id = Memo::new(move |_| params.get().get("id").unwrap_or_default());

    // Re-fetch when the route parameter changes.
    let fetched_for = RwSignal::new(None::<String>);
    Effect::new(move || {
        let id = product_id.get();
        if id.is_empty() || fetched_for.get() == Some(id.clone()) {
            return;
        }
        fetched_for.set(Some(id.clone()));
        missing.set(String::new());
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_product(&id).await {
                Ok(found) => {
                    shown_image.set(found.main_image.clone());
                    product.set(Some(found));
                }
                Err(err) if err.is_not_found() => {
                    product.set(None);
                    missing.set(format!("Product with ID {id} not found"));
                }
                Err(_) => {
                    product.set(None);
                    notifications.update(|state| state.danger("Could not load the product"));
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            loading.set(false);
        }
    });

    let navigate_after_delete = navigate;
    let on_delete = Callback::new(move |()| {
        if !confirming.get() {
            confirming.set(true);
            return;
        }
        let id = product_id.get_untracked();
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_after_delete.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_product(&id).await {
                    Ok(()) => {
                        crate::pages::products_list::fetch_products(products, notifications);
                        notifications.update(|state| state.success("Product deleted successfully"));
                        navigate("/products-list", NavigateOptions::default());
                    }
                    Err(_) => {
                        notifications.update(|state| state.danger("Could not delete the product"));
                    }
                }
                confirming.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&id, &navigate_after_delete, products, notifications);
        }
    });

    let on_back = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.history().and_then(|h| h.back());
            }
        }
    };

    let on_edit_close = Callback::new(move |()| {
        editing.set(false);
        // The collection was re-fetched on save; pull the fresh copy in.
        fetched_for.set(None);
    });

    view! {
        <section class="page page--product-detail">
            <button class="btn btn--back" on:click=on_back>
                "Go Back"
            </button>
            <Show
                when=move || missing.get().is_empty()
                fallback=move || {
                    view! { <p class="page__missing">{move || missing.get()}</p> }
                }
            >
                <Show
                    when=move || !loading.get() && product.get().is_some()
                    fallback=|| view! { <p class="page__loading">"Loading..."</p> }
                >
                    {move || {
                        product
                            .get()
                            .map(|found| {
                                let thumbs: Vec<String> =
                                    found.images().iter().map(|path| (*path).to_owned()).collect();
                                view! {
                                    <div class="product-detail">
                                        <div class="product-detail__gallery">
                                            <img
                                                class="product-detail__main"
                                                src=move || image_url::normalize(&shown_image.get())
                                            />
                                            <div class="product-detail__thumbs">
                                                {thumbs
                                                    .into_iter()
                                                    .map(|path| {
                                                        if image_url::has_image(&path) {
                                                            let src = image_url::normalize(&path);
                                                            view! {
                                                                <img
                                                                    class="product-detail__thumb"
                                                                    src=src
                                                                    on:click=move |_| {
                                                                        shown_image.set(path.clone());
                                                                    }
                                                                />
                                                            }
                                                                .into_any()
                                                        } else {
                                                            view! {
                                                                <span class="product-detail__thumb product-detail__thumb--empty">
                                                                    "No image"
                                                                </span>
                                                            }
                                                                .into_any()
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                        <div class="product-detail__info">
                                            <h1>{capitalize_words(&found.title)}</h1>
                                            <p class="product-detail__category">
                                                {capitalize(&found.kind)}
                                            </p>
                                            <p class="product-detail__price">
                                                {format!("${}", found.price)}
                                            </p>
                                            <p class="product-detail__discount">
                                                {format!("{}% off", found.discount)}
                                            </p>
                                            <p class="product-detail__quantity">
                                                {format!("{} in stock", found.quantity)}
                                            </p>
                                            <p class="product-detail__description">
                                                {capitalize_first(&found.description)}
                                            </p>
                                            <p class="product-detail__created">
                                                {format!("Added {}", format_date(&found.created_at))}
                                            </p>
                                            <div class="product-detail__actions">
                                                <button
                                                    class="btn btn--primary"
                                                    on:click=move |_| editing.set(true)
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| on_delete.run(())
                                                >
                                                    {move || {
                                                        if confirming.get() {
                                                            "Confirm Delete"
                                                        } else {
                                                            "Delete"
                                                        }
                                                    }}
                                                </button>
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                    }}
                </Show>
            </Show>
            {move || {
                if editing.get() {
                    product
                        .get()
                        .map(|found| {
                            view! {
                                <ProductFormDialog
                                    mode=FormMode::Edit(found)
                                    on_close=on_edit_close
                                />
                            }
                        })
                } else {
                    None
                }
            }}
        </section>
    }
}
