//! Reply composer dialog for inbox messages.
//!
//! There is no outbound mail endpoint; Send simply hands the draft back
//! through `on_send` and the caller closes the dialog.

use leptos::prelude::*;

#[component]
pub fn ReplyDialog(to: String, on_close: Callback<()>, on_send: Callback<()>) -> impl IntoView {
    let to = RwSignal::new(to);
    let cc = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--reply" on:click=move |ev| ev.stop_propagation()>
                <h2 class="dialog__title">"Reply"</h2>
                <label class="dialog__label">
                    "To"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || to.get()
                        on:input=move |ev| to.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Cc"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || cc.get()
                        on:input=move |ev| cc.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Subject"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || subject.get()
                        on:input=move |ev| subject.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Message"
                    <textarea
                        class="dialog__textarea"
                        prop:value=move || body.get()
                        on:input=move |ev| body.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_send.run(())>
                        "Send"
                    </button>
                </div>
            </div>
        </div>
    }
}
