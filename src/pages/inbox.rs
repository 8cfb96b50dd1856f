//! Inbox page: message list beside the reading pane.
//!
//! The selected message comes from the route (`/emails/:id`), so a deep
//! link opens with that message already highlighted and fetched.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::message_content::MessageContent;
use crate::components::message_list::MessageList;
use crate::state::auth::SessionState;
use crate::state::messages::MessagesState;
use crate::state::notifications::NotificationsState;
use crate::util::auth::install_admin_redirect;

#[component]
pub fn InboxPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let messages = expect_context::<RwSignal<MessagesState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let params = use_params_map();

    install_admin_redirect(session);

    // Keep the highlighted row in step with the route.
    Effect::new(move || {
        let id = params.get().get("id");
        messages.update(|state| state.selected_id = id.filter(|id| !id.is_empty()));
    });

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
        messages.update(|state| state.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_messages().await {
                Ok(items) => {
                    messages.update(|state| {
                        state.set_items(items);
                        state.loading = false;
                    });
                }
                Err(_) => {
                    notifications.update(|state| state.danger("Could not load messages"));
                    messages.update(|state| state.loading = false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = notifications;
            messages.update(|state| state.loading = false);
        }
    });

    view! {
        <section class="page page--inbox">
            <header class="page__header">
                <h1>"Inbox"</h1>
            </header>
            <div class="inbox-panes">
                <MessageList />
                <MessageContent />
            </div>
        </section>
    }
}
