//! Inbox message list pane.

use leptos::prelude::*;

use crate::state::messages::MessagesState;
use crate::util::format::{capitalize_words, format_date, preview};

const PREVIEW_CHARS: usize = 45;

#[component]
pub fn MessageList() -> impl IntoView {
    let messages = expect_context::<RwSignal<MessagesState>>();

    view! {
        <div class="message-list">
            <Show
                when=move || !messages.get().items.is_empty() || messages.get().loading
                fallback=|| {
                    view! { <p class="message-list__empty">"No messages yet"</p> }
                }
            >
                <For
                    each=move || messages.get().items
                    key=|message| message.id.clone()
                    children=move |message| {
                        let id = message.id.clone();
                        let selected = {
                            let id = id.clone();
                            move || messages.get().is_selected(&id)
                        };
                        view! {
                            <a
                                href=format!("/emails/{id}")
                                class=move || {
                                    if selected() {
                                        "message-row message-row--selected"
                                    } else {
                                        "message-row"
                                    }
                                }
                            >
                                <div class="message-row__top">
                                    <span class="message-row__name">
                                        {capitalize_words(&message.name)}
                                    </span>
                                    <span class="message-row__date">
                                        {format_date(&message.created_at)}
                                    </span>
                                </div>
                                <p class="message-row__preview">
                                    {preview(&message.body, PREVIEW_CHARS)}
                                </p>
                            </a>
                        }
                    }
                />
            </Show>
        </div>
    }
}
