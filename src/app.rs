//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::sidebar::Sidebar;
use crate::components::toast_shelf::ToastShelf;
use crate::pages::{
    inbox::InboxPage, login::LoginPage, product_detail::ProductDetailPage,
    products_list::ProductsListPage, user_detail::UserDetailPage, users_list::UsersListPage,
};
use crate::state::{
    auth::SessionState, messages::MessagesState, notifications::NotificationsState,
    products::ProductsState, ui::UiState, users::UsersState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and shared list/notification state, restores
/// the persisted session and theme once on mount, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let products = RwSignal::new(ProductsState::default());
    let users = RwSignal::new(UsersState::default());
    let messages = RwSignal::new(MessagesState::default());
    let notifications = RwSignal::new(NotificationsState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(products);
    provide_context(users);
    provide_context(messages);
    provide_context(notifications);
    provide_context(ui);

    // Restore the persisted session with a typed decode; malformed or absent
    // storage leaves the user logged out. Theme preference is applied here
    // too so guarded pages render with the right scheme immediately.
    Effect::new(move || {
        let stored = crate::util::session::load();
        session.update(|s| {
            s.user = stored.as_ref().map(|found| found.user.clone());
            s.token = stored.map(|found| found.token);
            s.loading = false;
        });

        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/furnimall-admin.css"/>
        <Title text="Furnimall Admin"/>

        <Router>
            <AppShell/>
        </Router>
    }
}

/// Application chrome: sidebar (hidden on the login route), routed content,
/// and the notification shelf.
#[component]
fn AppShell() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;
    let on_login = move || pathname.get() == "/";

    view! {
        <div class="app-shell">
            <Show when=move || !on_login()>
                <Sidebar/>
            </Show>
            <main class="app-shell__content">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LoginPage/>
                    <Route path=StaticSegment("products-list") view=ProductsListPage/>
                    <Route
                        path=(StaticSegment("product-detail"), ParamSegment("id"))
                        view=ProductDetailPage
                    />
                    <Route path=StaticSegment("users-list") view=UsersListPage/>
                    <Route path=(StaticSegment("user-detail"), ParamSegment("id")) view=UserDetailPage/>
                    <Route path=StaticSegment("emails") view=InboxPage/>
                    <Route path=(StaticSegment("emails"), ParamSegment("id")) view=InboxPage/>
                </Routes>
            </main>
            <ToastShelf/>
        </div>
    }
}
