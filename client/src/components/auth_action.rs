//! Session-aware call-to-action.
//!
//! DESIGN
//! ======
//! The control receives an already-resolved [`CtaVariant`] from its page
//! instead of reading session context itself, so every CTA in one render pass
//! shows the same branch. A signed-in visitor gets a link to the dashboard;
//! everyone else gets a link to the sign-in entry point. Both are real links
//! so they work before or without hydration; once hydrated, clicks are routed
//! through [`activate`]. While the session is still pending the control
//! renders a disabled placeholder in the same style instead of guessing a
//! branch.

#[cfg(test)]
#[path = "auth_action_test.rs"]
mod auth_action_test;

use leptos::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::content::{CtaCopy, DASHBOARD_PATH};
use crate::net::api::SIGN_IN_PATH;
use crate::state::session::CtaVariant;

/// What activating a CTA does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CtaAction {
    /// Client-side navigation to an in-app path.
    Navigate(String),
    /// Defer to the auth provider's sign-in entry point.
    SignIn,
}

/// Side effects a CTA may trigger when activated.
pub trait CtaEffects {
    fn navigate_to(&self, path: &str);
    fn begin_sign_in(&self);
}

/// Resolve the action for a variant. `destination` only applies to the
/// authenticated branch.
#[must_use]
pub fn resolve_action(variant: CtaVariant, destination: &str) -> CtaAction {
    match variant {
        CtaVariant::Authenticated => CtaAction::Navigate(destination.to_owned()),
        CtaVariant::Anonymous => CtaAction::SignIn,
    }
}

/// Run exactly one effect for `action`.
pub fn activate(action: &CtaAction, effects: &impl CtaEffects) {
    match action {
        CtaAction::Navigate(path) => effects.navigate_to(path),
        CtaAction::SignIn => effects.begin_sign_in(),
    }
}

/// Browser effects: router navigation and the sign-in redirect.
#[cfg(feature = "hydrate")]
struct RouterEffects<F> {
    navigate: F,
}

#[cfg(feature = "hydrate")]
impl<F> CtaEffects for RouterEffects<F>
where
    F: Fn(&str, leptos_router::NavigateOptions),
{
    fn navigate_to(&self, path: &str) {
        (self.navigate)(path, leptos_router::NavigateOptions::default());
    }

    fn begin_sign_in(&self) {
        crate::net::api::begin_sign_in();
    }
}

/// `href` of the rendered link for a variant.
fn variant_href(variant: CtaVariant, destination: &'static str) -> &'static str {
    match variant {
        CtaVariant::Authenticated => destination,
        CtaVariant::Anonymous => SIGN_IN_PATH,
    }
}

/// Variant-specific modifier class appended to the caller's style.
fn variant_class(variant: Option<CtaVariant>) -> &'static str {
    match variant {
        None => "cta--pending",
        Some(CtaVariant::Authenticated) => "cta--authenticated",
        Some(CtaVariant::Anonymous) => "cta--anonymous",
    }
}

/// A call-to-action whose label and destination follow the session.
///
/// `class` is passed through verbatim; the component only appends a
/// `cta--*` modifier for the active branch.
#[component]
pub fn AuthAwareAction(
    /// Branch resolved by the page for this render pass; `None` while pending.
    #[prop(into)]
    variant: Signal<Option<CtaVariant>>,
    labels: CtaCopy,
    #[prop(default = "")] class: &'static str,
    #[prop(default = DASHBOARD_PATH)] destination: &'static str,
    #[prop(optional)] icon: Option<Glyph>,
) -> impl IntoView {
    // Activation is queued here and performed by an effect, which owns the
    // router handle for the lifetime of the component. Nothing can be
    // activated during SSR.
    let requested = RwSignal::new(None::<CtaAction>);
    #[cfg(feature = "hydrate")]
    {
        let effects = RouterEffects { navigate: leptos_router::hooks::use_navigate() };
        Effect::new(move || {
            if let Some(action) = requested.get() {
                requested.set(None);
                activate(&action, &effects);
            }
        });
    }

    move || {
        let current = variant.get();
        let class = format!("cta {class} {}", variant_class(current));
        let icon_view = icon.map(|glyph| view! { <Icon glyph=glyph size="18" class="cta__icon"/> });

        let Some(current) = current else {
            return view! {
                <button type="button" class=class disabled=true aria-busy="true">
                    {icon_view}
                    <span class="cta__label"></span>
                </button>
            }
            .into_any();
        };

        let label = labels.pick(current);
        let href = variant_href(current, destination);
        let action = resolve_action(current, destination);
        let branch = match current {
            CtaVariant::Authenticated => "authenticated",
            CtaVariant::Anonymous => "anonymous",
        };

        view! {
            <a
                class=class
                href=href
                data-cta=branch
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    requested.set(Some(action.clone()));
                }
            >
                {icon_view}
                <span class="cta__label">{label}</span>
            </a>
        }
        .into_any()
    }
}
