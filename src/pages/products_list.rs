//! Product inventory page: filterable table, add/edit dialog, export.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the dashboard landing page after login. The product collection
//! is fetched once per visit; search, category, and price filtering all
//! happen client-side against the cached collection.

use leptos::prelude::*;

use crate::components::product_form_dialog::{FormMode, ProductFormDialog};
use crate::components::skeleton_rows::SkeletonRows;
use crate::state::auth::SessionState;
use crate::state::notifications::NotificationsState;
use crate::state::products::{CATEGORIES, PRICE_RANGES, ProductsState};
use crate::util::auth::install_admin_redirect;
use crate::util::format::{capitalize, capitalize_first};
use crate::util::image_url;

const TABLE_COLS: usize = 8;

/// Fetch the product collection into shared state, re-applying whatever
/// filters are active. Shared with the form dialog and the detail page so
/// every mutation path refreshes the same cache.
pub(crate) fn fetch_products(
    products: RwSignal<ProductsState>,
    notifications: RwSignal<NotificationsState>,
) {
    products.update(|state| state.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_products().await {
            Ok(items) => {
                products.update(|state| {
                    state.set_items(items);
                    state.apply_filters();
                    state.loading = false;
                });
            }
            Err(_) => {
                notifications.update(|state| state.danger("Could not load products"));
                products.update(|state| state.loading = false);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = notifications;
        products.update(|state| state.loading = false);
    }
}

#[component]
pub fn ProductsListPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let products = expect_context::<RwSignal<ProductsState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    install_admin_redirect(session);

    // Fetch once per visit, after the session restore settles.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        let state = session.get();
        if state.loading || !state.is_admin() {
            return;
        }
        requested.set(true);
        fetch_products(products, notifications);
    });

    let dialog = RwSignal::new(None::<FormMode>);
    let on_dialog_close = Callback::new(move |()| dialog.set(None));

    let on_filter = move |_| products.update(ProductsState::apply_filters);
    let on_reset = move |_| products.update(ProductsState::reset_filters);

    let on_export = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let items = products.get_untracked().filtered;
            match crate::util::export::products_workbook(&items) {
                Ok(bytes) => crate::util::export::download("products_list.xlsx", &bytes),
                Err(_) => notifications.update(|state| state.danger("Could not export products")),
            }
        }
    };

    view! {
        <section class="page page--products">
            <header class="page__header">
                <h1>"Products"</h1>
                <div class="page__header-actions">
                    <button class="btn" on:click=on_export>
                        "Export"
                    </button>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| dialog.set(Some(FormMode::Add))
                    >
                        "Add Product"
                    </button>
                </div>
            </header>

            <div class="filter-bar">
                <input
                    class="filter-bar__search"
                    type="text"
                    placeholder="Search by title"
                    prop:value=move || products.get().search
                    on:input=move |ev| {
                        products.update(|state| state.search = event_target_value(&ev));
                    }
                />
                <select
                    class="filter-bar__select"
                    prop:value=move || products.get().category
                    on:change=move |ev| {
                        products.update(|state| state.category = event_target_value(&ev));
                    }
                >
                    <option value="">"All categories"</option>
                    {CATEGORIES
                        .into_iter()
                        .map(|category| {
                            view! { <option value=category>{capitalize(category)}</option> }
                        })
                        .collect_view()}
                </select>
                <select
                    class="filter-bar__select"
                    prop:value=move || products.get().price_filter
                    on:change=move |ev| {
                        products.update(|state| state.price_filter = event_target_value(&ev));
                    }
                >
                    <option value="">"Any price"</option>
                    {PRICE_RANGES
                        .into_iter()
                        .map(|range| {
                            view! { <option value=range>{format!("${range}")}</option> }
                        })
                        .collect_view()}
                </select>
                <button class="btn btn--primary" on:click=on_filter>
                    "Filter"
                </button>
                <button class="btn" on:click=on_reset>
                    "Reset"
                </button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"No"</th>
                        <th>"Image"</th>
                        <th>"Title"</th>
                        <th>"Category"</th>
                        <th>"Price"</th>
                        <th>"Discount"</th>
                        <th>"Quantity"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || !products.get().loading
                        fallback=|| view! { <SkeletonRows cols=TABLE_COLS /> }
                    >
                        <Show
                            when=move || !products.get().filtered.is_empty()
                            fallback=|| {
                                view! {
                                    <tr>
                                        <td class="data-table__empty" colspan="8">
                                            "No products found"
                                        </td>
                                    </tr>
                                }
                            }
                        >
                            <For
                                each=move || {
                                    products.get().filtered.into_iter().enumerate().collect::<Vec<_>>()
                                }
                                key=|(_, product)| product.id.clone()
                                children=move |(index, product)| {
                                    let detail_href = format!("/product-detail/{}", product.id);
                                    let edit_product = product.clone();
                                    view! {
                                        <tr class="data-table__row">
                                            <td>{index + 1}</td>
                                            <td>
                                                <Show
                                                    when={
                                                        let main = product.main_image.clone();
                                                        move || image_url::has_image(&main)
                                                    }
                                                    fallback=|| {
                                                        view! {
                                                            <span class="thumb thumb--missing">
                                                                "No Image"
                                                            </span>
                                                        }
                                                    }
                                                >
                                                    <img
                                                        class="thumb"
                                                        src=image_url::normalize(&product.main_image)
                                                    />
                                                </Show>
                                            </td>
                                            <td>
                                                <a href=detail_href.clone() class="data-table__link">
                                                    {capitalize_first(&product.title)}
                                                </a>
                                            </td>
                                            <td>{capitalize(&product.kind)}</td>
                                            <td>{format!("{}$", product.price)}</td>
                                            <td>{format!("{}%", product.discount)}</td>
                                            <td>{product.quantity}</td>
                                            <td>
                                                <button
                                                    class="btn btn--small"
                                                    on:click=move |_| {
                                                        dialog.set(
                                                            Some(FormMode::Edit(edit_product.clone())),
                                                        );
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                                <a class="btn btn--small" href=detail_href.clone()>
                                                    "View"
                                                </a>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </Show>
                    </Show>
                </tbody>
            </table>

            {move || {
                dialog
                    .get()
                    .map(|mode| {
                        view! { <ProductFormDialog mode on_close=on_dialog_close /> }
                    })
            }}
        </section>
    }
}
