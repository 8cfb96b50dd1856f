//! User detail page with account removal.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::User;
use crate::state::auth::SessionState;
use crate::state::notifications::NotificationsState;
use crate::state::users::UsersState;
use crate::util::auth::install_admin_redirect;
use crate::util::format::{capitalize, capitalize_words, format_date, format_phone};

#[component]
pub fn UserDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let users = expect_context::<RwSignal<UsersState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    install_admin_redirect(session);

    let user = RwSignal::new(None::<User>);
    let missing = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let confirming = RwSignal::new(false);

    let user_id = Memo::new(move |_| params.get().get("id").unwrap_or_default());

    let fetched_for = RwSignal::new(None::<String>);
    Effect::new(move || {
        let id = user_id.get();
        if id.is_empty() || fetched_for.get() == Some(id.clone()) {
            return;
        }
        fetched_for.set(Some(id.clone()));
        missing.set(String::new());
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_user(&id).await {
                Ok(found) => user.set(Some(found)),
                Err(err) if err.is_not_found() => {
                    user.set(None);
                    missing.set(format!("User with ID {id} not found"));
                }
                Err(_) => {
                    user.set(None);
                    notifications.update(|state| state.danger("Could not load the user"));
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
        let id = user_id.get_untracked();
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_after_delete.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_user(&id).await {
                    Ok(()) => {
                        users.update(|state| state.items.retain(|u| u.id != id));
                        notifications.update(|state| state.success("User deleted successfully"));
                        navigate("/users-list", NavigateOptions::default());
                    }
                    Err(_) => {
                        notifications.update(|state| state.danger("Could not delete the user"));
                    }
                }
                confirming.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&id, &navigate_after_delete, users, notifications);
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

    view! {
        <section class="page page--user-detail">
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
                    when=move || !loading.get() && user.get().is_some()
                    fallback=|| view! { <p class="page__loading">"Loading..."</p> }
                >
                    {move || {
                        user.get()
                            .map(|found| {
                                view! {
                                    <div class="user-detail">
                                        <h1>
                                            {format!(
                                                "{} {}",
                                                capitalize(&found.first_name),
                                                capitalize(&found.last_name),
                                            )}
                                        </h1>
                                        <dl class="user-detail__fields">
                                            <dt>"Email"</dt>
                                            <dd>{found.email.clone()}</dd>
                                            <dt>"Phone"</dt>
                                            <dd>{format_phone(&found.number)}</dd>
                                            <dt>"Address"</dt>
                                            <dd>{capitalize_words(&found.address)}</dd>
                                            <dt>"Role"</dt>
                                            <dd>{capitalize(&found.role)}</dd>
                                            <dt>"Joined"</dt>
                                            <dd>{format_date(&found.created_at)}</dd>
                                        </dl>
                                        <button
                                            class="btn btn--danger"
                                            on:click=move |_| on_delete.run(())
                                        >
                                            {move || {
                                                if confirming.get() {
                                                    "Confirm Delete"
                                                } else {
                                                    "Delete User"
                                                }
                                            }}
                                        </button>
                                    </div>
                                }
                            })
                    }}
                </Show>
            </Show>
        </section>
    }
}
