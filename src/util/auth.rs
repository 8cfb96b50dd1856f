//! Admin route guard.
//!
//! Every authenticated page installs the same redirect: wait for session
//! restore to finish, then bounce non-admins to the login route. The guard
//! never fires while the session is still loading, so a hard refresh on a
//! deep link does not flash back to login.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::SessionState;

/// Redirect to `/` whenever the restored session is not an admin.
///
/// Call once from a page component's body.
pub fn install_admin_redirect(session: RwSignal<SessionState>) {
    let navigate = use_navigate();
    Effect::new(move || {
        let state = session.get();
        if !state.loading && !state.is_admin() {
            navigate("/", NavigateOptions::default());
        }
    });
}
