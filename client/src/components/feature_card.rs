//! Feature grid cards.
//!
//! DESIGN
//! ======
//! The grid renders one card per descriptor in source order. The mapping is
//! kept in [`feature_cards`] so ordering can be checked without a DOM.

#[cfg(test)]
#[path = "feature_card_test.rs"]
mod feature_card_test;

use leptos::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::content::FeatureDescriptor;

/// Render model for a single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureCardModel {
    /// Zero-based slot in the grid; doubles as the render key.
    pub position: usize,
    pub icon: Glyph,
    pub title: &'static str,
    pub description: &'static str,
}

/// Map descriptors to cards one-to-one, preserving order.
#[must_use]
pub fn feature_cards(features: &[FeatureDescriptor]) -> Vec<FeatureCardModel> {
    features
        .iter()
        .enumerate()
        .map(|(position, f)| FeatureCardModel { position, icon: f.icon, title: f.title, description: f.description })
        .collect()
}

/// A single feature card: icon badge, title, and description.
#[component]
pub fn FeatureCard(card: FeatureCardModel) -> impl IntoView {
    view! {
        <article class="card feature-card">
            <header class="feature-card__header">
                <div class="feature-card__badge">
                    <Icon glyph=card.icon size="32" class="feature-card__icon"/>
                </div>
                <div>
                    <h3 class="card__title feature-card__title">{card.title}</h3>
                    <p class="card__description feature-card__description">{card.description}</p>
                </div>
            </header>
        </article>
    }
}

/// The full grid for a descriptor table.
#[component]
pub fn FeatureGrid(features: &'static [FeatureDescriptor]) -> impl IntoView {
    view! {
        <div class="feature-grid">
            <For
                each=move || feature_cards(features)
                key=|card| card.position
                children=|card| view! { <FeatureCard card=card/> }
            />
        </div>
    }
}
