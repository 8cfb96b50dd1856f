//! Navigation sidebar shown on every authenticated route.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::SessionState;
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::format::capitalize;

const NAV_LINKS: [(&str, &str); 3] = [
    ("/products-list", "Products"),
    ("/users-list", "Users"),
    ("/emails", "Inbox"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let pathname = Memo::new(move |_| location.pathname.get());

    let admin_name = move || {
        session
            .get()
            .user
            .map(|user| capitalize(&user.first_name))
            .unwrap_or_default()
    };

    let on_toggle_dark = move |_| {
        ui.update(|state| state.dark_mode = dark_mode::toggle(state.dark_mode));
    };

    let on_logout = move |_| {
        crate::util::session::clear();
        session.update(|state| {
            state.user = None;
            state.token = None;
        });
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__logo">"FurniMall"</span>
                <span class="sidebar__admin">{admin_name}</span>
            </div>
            <nav class="sidebar__nav">
                {NAV_LINKS
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <a
                                href=href
                                class=move || {
                                    let path = pathname.get();
                                    if is_active(&path, href) {
                                        "sidebar__link sidebar__link--active"
                                    } else {
                                        "sidebar__link"
                                    }
                                }
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="sidebar__footer">
                <button class="sidebar__toggle" on:click=on_toggle_dark>
                    {move || if ui.get().dark_mode { "Light Mode" } else { "Dark Mode" }}
                </button>
                <button class="sidebar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </aside>
    }
}

/// A link is active on its own route and on the detail routes it owns.
fn is_active(pathname: &str, href: &str) -> bool {
    match href {
        "/products-list" => pathname.starts_with("/products-list") || pathname.starts_with("/product-detail"),
        "/users-list" => pathname.starts_with("/users-list") || pathname.starts_with("/user-detail"),
        _ => pathname.starts_with(href),
    }
}
