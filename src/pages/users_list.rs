//! Registered users page: live-search table and export.
//!
//! Unlike the product filters, the user search applies on every keystroke;
//! there is no explicit filter button.

use leptos::prelude::*;

use crate::components::skeleton_rows::SkeletonRows;
use crate::state::auth::SessionState;
use crate::state::notifications::NotificationsState;
use crate::state::users::UsersState;
use crate::util::auth::install_admin_redirect;
use crate::util::format::{capitalize, format_date, format_phone};

const TABLE_COLS: usize = 6;

#[component]
pub fn UsersListPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let users = expect_context::<RwSignal<UsersState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    install_admin_redirect(session);

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
        users.update(|state| state.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_users().await {
                Ok(items) => {
                    users.update(|state| {
                        state.items = items;
                        state.loading = false;
                    });
                }
                Err(_) => {
                    notifications.update(|state| state.danger("Could not load users"));
                    users.update(|state| state.loading = false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = notifications;
            users.update(|state| state.loading = false);
        }
    });

    let on_export = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let items = users.get_untracked().filtered();
            match crate::util::export::users_workbook(&items) {
                Ok(bytes) => crate::util::export::download("users_list.xlsx", &bytes),
                Err(_) => notifications.update(|state| state.danger("Could not export users")),
            }
        }
    };

    view! {
        <section class="page page--users">
            <header class="page__header">
                <h1>"Users"</h1>
                <div class="page__header-actions">
                    <input
                        class="filter-bar__search"
                        type="text"
                        placeholder="Search by name, email, or phone"
                        prop:value=move || users.get().search
                        on:input=move |ev| {
                            users.update(|state| state.search = event_target_value(&ev));
                        }
                    />
                    <button class="btn" on:click=on_export>
                        "Export"
                    </button>
                </div>
            </header>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"No"</th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Phone"</th>
                        <th>"Joined"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || !users.get().loading
                        fallback=|| view! { <SkeletonRows cols=TABLE_COLS /> }
                    >
                        <Show
                            when=move || !users.get().filtered().is_empty()
                            fallback=|| {
                                view! {
                                    <tr>
                                        <td class="data-table__empty" colspan="6">
                                            "No users found"
                                        </td>
                                    </tr>
                                }
                            }
                        >
                            <For
                                each=move || {
                                    users.get().filtered().into_iter().enumerate().collect::<Vec<_>>()
                                }
                                key=|(_, user)| user.id.clone()
                                children=move |(index, user)| {
                                    let href = format!("/user-detail/{}", user.id);
                                    let name = format!(
                                        "{} {}",
                                        capitalize(&user.first_name),
                                        capitalize(&user.last_name),
                                    );
                                    view! {
                                        <tr class="data-table__row">
                                            <td>{index + 1}</td>
                                            <td>
                                                <a href=href.clone() class="data-table__link">
                                                    {name}
                                                </a>
                                            </td>
                                            <td>{user.email.clone()}</td>
                                            <td>{format_phone(&user.number)}</td>
                                            <td>{format_date(&user.created_at)}</td>
                                            <td>
                                                <a class="btn btn--small" href=href>
                                                    "More"
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
        </section>
    }
}
