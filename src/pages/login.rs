//! Admin login page.
//!
//! Login succeeds only for accounts with the admin role; any other account
//! is rejected client-side even when the credentials are valid, since the
//! dashboard has nothing to show them.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{ADMIN_ROLE, SessionState};
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::session::{self, Session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in as admin: skip the form.
    let navigate_signed_in = navigate.clone();
    Effect::new(move || {
        let state = session_state.get();
        if !state.loading && state.is_admin() {
            navigate_signed_in("/products-list", NavigateOptions::default());
        }
    });

    let navigate_after_login = navigate;
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            info.set("Enter both email and password.".to_owned());
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_after_login.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(response) if response.user.role == ADMIN_ROLE => {
                        let persisted = Session {
                            token: response.token.clone(),
                            user: response.user.clone(),
                        };
                        session::save(&persisted);
                        session_state.update(|state| {
                            state.user = Some(response.user);
                            state.token = Some(response.token);
                            state.loading = false;
                        });
                        navigate("/products-list", NavigateOptions::default());
                    }
                    Ok(_) => {
                        info.set("You are not authorized to access the dashboard.".to_owned());
                    }
                    Err(err) => {
                        info.set(format!("Login failed: {err}"));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&email_value, &password_value, &navigate_after_login);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"FurniMall Admin"</h1>
                <p class="login-card__subtitle">"Sign in to manage the store"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="admin@furnimall.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <button
                    class="login-theme-toggle"
                    type="button"
                    on:click=move |_| {
                        ui.update(|state| state.dark_mode = dark_mode::toggle(state.dark_mode));
                    }
                >
                    {move || if ui.get().dark_mode { "Light Mode" } else { "Dark Mode" }}
                </button>
            </div>
        </div>
    }
}
