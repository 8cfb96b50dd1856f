//! Inbox reading pane: fetches and renders the selected message.
//!
//! The pane re-fetches whenever the selected identifier changes. A missing
//! message renders an inline notice instead of a toast, so a stale deep
//! link explains itself.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::reply_dialog::ReplyDialog;
use crate::net::types::Message;
use crate::state::messages::MessagesState;
use crate::state::notifications::NotificationsState;
use crate::util::format::{capitalize_words, format_date_time};

#[component]
pub fn MessageContent() -> impl IntoView {
    let messages = expect_context::<RwSignal<MessagesState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let navigate = use_navigate();
    let message = RwSignal::new(None::<Message>);
    let missing = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let confirming = RwSignal::new(false);
    let replying = RwSignal::new(false);

    // Re-fetch when the selection changes; the latch keeps one request per id.
    let fetched_for = RwSignal::new(None::<String>);
    Effect::new(move || {
        let Some(id) = messages.get().selected_id else {
            message.set(None);
            missing.set(String::new());
            fetched_for.set(None);
            return;
        };
        if fetched_for.get() == Some(id.clone()) {
            return;
        }
        fetched_for.set(Some(id.clone()));
        confirming.set(false);
        replying.set(false);
        missing.set(String::new());
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_message(&id).await {
                Ok(found) => message.set(Some(found)),
                Err(err) if err.is_not_found() => {
                    message.set(None);
                    missing.set(format!("Message with ID {id} not found"));
                }
                Err(_) => {
                    message.set(None);
                    notifications.update(|state| state.danger("Could not load the message"));
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
        let Some(id) = messages.get_untracked().selected_id else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_after_delete.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_message(&id).await {
                    Ok(()) => {
                        messages.update(|state| state.items.retain(|m| m.id != id));
                        notifications.update(|state| state.success("Message deleted successfully"));
                        // Leave the toast on screen before falling back to the inbox.
                        gloo_timers::future::sleep(std::time::Duration::from_millis(1500)).await;
                        navigate("/emails", NavigateOptions::default());
                    }
                    Err(_) => {
                        notifications.update(|state| state.danger("Could not delete the message"));
                    }
                }
                confirming.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&id, &navigate_after_delete, notifications);
        }
    });

    view! {
        <div class="message-content">
            <Show
                when=move || messages.get().selected_id.is_some()
                fallback=|| {
                    view! { <p class="message-content__empty">"Select a message to read"</p> }
                }
            >
                <Show
                    when=move || missing.get().is_empty()
                    fallback=move || {
                        view! { <p class="message-content__missing">{move || missing.get()}</p> }
                    }
                >
                    <Show
                        when=move || !loading.get() && message.get().is_some()
                        fallback=|| {
                            view! { <p class="message-content__loading">"Loading..."</p> }
                        }
                    >
                        {move || {
                            message
                                .get()
                                .map(|found| {
                                    let email = found.email.clone();
                                    view! {
                                        <div class="message-content__body">
                                            <div class="message-content__header">
                                                <h2>{capitalize_words(&found.name)}</h2>
                                                <span class="message-content__email">
                                                    {found.email.clone()}
                                                </span>
                                                <span class="message-content__date">
                                                    {format_date_time(&found.created_at)}
                                                </span>
                                            </div>
                                            <p class="message-content__text">{found.body.clone()}</p>
                                            <div class="message-content__actions">
                                                <button
                                                    class="btn btn--primary"
                                                    on:click=move |_| replying.set(true)
                                                >
                                                    "Reply"
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
                                            <Show when=move || replying.get()>
                                                <ReplyDialog
                                                    to=email.clone()
                                                    on_close=Callback::new(move |()| replying.set(false))
                                                    on_send=Callback::new(move |()| {
                                                        replying.set(false);
                                                        notifications
                                                            .update(|state| state.success("Message sent"));
                                                    })
                                                />
                                            </Show>
                                        </div>
                                    }
                                })
                        }}
                    </Show>
                </Show>
            </Show>
        </div>
    }
}
