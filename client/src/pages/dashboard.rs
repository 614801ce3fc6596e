//! Dashboard route targeted by signed-in calls-to-action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Journal features live elsewhere; this route only confirms the session and
//! sends signed-out visitors back to the landing page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Dashboard page. Redirects to `/` once the session settles as signed out.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    view! {
        <Title text="MindInk | Dashboard"/>
        <main class="dashboard">
            <Show
                when=move || session.get() == SessionState::SignedIn
                fallback=|| view! { <p class="dashboard__status">"Checking your session..."</p> }
            >
                <h1 class="dashboard__heading">"Your Journal"</h1>
                <p class="dashboard__body">"Your entries will appear here."</p>
                <a class="btn btn--outline" href="/">"Back to home"</a>
            </Show>
        </main>
    }
}
