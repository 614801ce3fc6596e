//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, landing::LandingPage};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The session resolved for this request (if the server provided one) is
/// written to `<body>` as
/// [`SESSION_ATTR`](crate::state::session::SESSION_ATTR) for the browser to pick up.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let session = use_context::<SessionState>().unwrap_or_default();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content={crate::content::TAGLINE}/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body data-session=session.as_attr()>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the visitor's session state. It starts from the server-resolved
/// value; if there is none, it starts `Pending` and is resolved from the auth
/// adapter once the app is running in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(initial_session());
    provide_context(session);

    #[cfg(feature = "hydrate")]
    {
        if session.get_untracked().is_pending() {
            leptos::task::spawn_local(async move {
                let state = SessionState::from_probe(crate::net::api::fetch_session().await);
                log::info!("session resolved: {state:?}");
                session.set(state);
            });
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(
                    crate::state::session::SESSION_PROBE_TIMEOUT_MS,
                ))
                .await;
                if session.get_untracked().is_pending() {
                    log::warn!("session probe timed out; showing signed-out view");
                    session.update(|s| *s = s.settle_after_timeout());
                }
            });
        }
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/mindink.css"/>
        <Title text="MindInk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}

/// Session state the first render starts from.
///
/// On the server this is the value provided for the current request. In the
/// browser it is read back from the shell's `<body>` so hydration renders the
/// same branch the server did.
fn initial_session() -> SessionState {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|body| body.get_attribute(crate::state::session::SESSION_ATTR))
            .and_then(|raw| SessionState::from_attr(&raw))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use_context::<SessionState>().unwrap_or_default()
    }
}
