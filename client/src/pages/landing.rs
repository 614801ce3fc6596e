//! Public landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fixed section order: hero, divider, feature grid, testimonial, closing
//! CTA. The page owns no state; it reads the session from context once per
//! render pass and hands the resulting variant to both CTAs.

#[cfg(all(test, feature = "ssr"))]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::auth_action::AuthAwareAction;
use crate::components::feature_card::FeatureGrid;
use crate::components::icons::Glyph;
use crate::components::section_scroller::SectionScroller;
use crate::content::{
    FEATURES, FEATURES_HEADING, FEATURES_SUBHEADING, FINAL_CTA_BODY, FINAL_CTA_HEADING, FINAL_LABELS, HERO_LABELS,
    LEARN_MORE_LABEL, PRODUCT_NAME, TAGLINE, TESTIMONIAL,
};
use crate::state::session::SessionState;

/// Landing page composing the marketing sections.
#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let variant = Memo::new(move |_| session.get().cta_variant());
    let features_ref = NodeRef::<leptos::html::Section>::new();

    view! {
        <Title text=PRODUCT_NAME/>
        <div class="landing">
            <section class="hero">
                <div class="hero__inner">
                    <h1 class="hero__title">
                        "Mind"<span class="hero__title-accent">"Ink"</span>
                    </h1>
                    <p class="hero__tagline">{TAGLINE}</p>
                    <div class="hero__actions">
                        <AuthAwareAction
                            variant=variant
                            labels=HERO_LABELS
                            class="btn btn--primary btn--lg"
                            icon=Glyph::PenBox
                        />
                        <SectionScroller
                            target=features_ref
                            label=LEARN_MORE_LABEL
                            class="btn btn--outline btn--lg"
                        />
                    </div>
                </div>
            </section>

            <div class="divider" aria-hidden="true"></div>

            <section class="features" id="features" node_ref=features_ref>
                <div class="features__inner">
                    <div class="features__intro">
                        <h2 class="features__heading">{FEATURES_HEADING}</h2>
                        <p class="features__subheading">{FEATURES_SUBHEADING}</p>
                    </div>
                    <FeatureGrid features=&FEATURES/>
                </div>
            </section>

            <section class="testimonial">
                <blockquote class="testimonial__quote">
                    <p class="testimonial__text">{format!("\u{201c}{}\u{201d}", TESTIMONIAL.quote)}</p>
                    <footer class="testimonial__author">
                        {format!("\u{2014} {}, {}", TESTIMONIAL.author, TESTIMONIAL.role)}
                    </footer>
                </blockquote>
            </section>

            <section class="final-cta">
                <div class="final-cta__panel">
                    <h2 class="final-cta__heading">{FINAL_CTA_HEADING}</h2>
                    <p class="final-cta__body">{FINAL_CTA_BODY}</p>
                    <AuthAwareAction variant=variant labels=FINAL_LABELS class="btn btn--primary btn--block-sm"/>
                </div>
            </section>
        </div>
    }
}
