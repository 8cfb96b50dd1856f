//! Toast shelf rendered above every page.
//!
//! Each toast schedules its own auto-dismiss; dismissal goes through
//! [`NotificationsState::dismiss`] by key, so a manual close and the timer
//! racing each other is harmless.

use leptos::prelude::*;

use crate::state::notifications::{Notification, NotificationKind, NotificationsState};

#[component]
pub fn ToastShelf() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    view! {
        <div class="toast-shelf">
            <For
                each=move || notifications.get().items
                key=|toast| toast.id.clone()
                children=move |toast| {
                    view! { <Toast toast /> }
                }
            />
        </div>
    }
}

#[component]
fn Toast(toast: Notification) -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let kind_class = match toast.kind {
        NotificationKind::Success => "toast--success",
        NotificationKind::Danger => "toast--danger",
    };

    #[cfg(feature = "hydrate")]
    {
        let id = toast.id.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(2000)).await;
            notifications.update(|state| state.dismiss(&id));
        });
    }

    let dismiss_id = toast.id.clone();
    view! {
        <div class=format!("toast {kind_class}")>
            <span class="toast__text">{toast.text.clone()}</span>
            <button
                class="toast__close"
                on:click=move |_| {
                    let id = dismiss_id.clone();
                    notifications.update(|state| state.dismiss(&id));
                }
            >
                "\u{d7}"
            </button>
        </div>
    }
}
