//! Static marketing copy for the landing page.
//!
//! Everything here is fixed at compile time; the page renders it in the order
//! declared and never mutates it.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::components::icons::Glyph;
use crate::state::session::CtaVariant;

pub const PRODUCT_NAME: &str = "MindInk";
pub const TAGLINE: &str = "The professional's choice for AI-powered journaling and self-reflection.";

pub const FEATURES_HEADING: &str = "Professional Journaling Tools";
pub const FEATURES_SUBHEADING: &str = "Designed for those who take self-reflection seriously";

pub const FINAL_CTA_HEADING: &str = "Ready to elevate your journaling practice?";
pub const FINAL_CTA_BODY: &str = "Join professionals who use MindInk for meaningful self-discovery.";

/// Authenticated destination for every call-to-action on the page.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Labels for the hero call-to-action.
pub const HERO_LABELS: CtaCopy = CtaCopy { authenticated: "Continue Journaling", anonymous: "Get Started" };

/// Labels for the closing call-to-action.
pub const FINAL_LABELS: CtaCopy = CtaCopy { authenticated: "Open Dashboard", anonymous: "Start Your 30-Day Trial" };

pub const LEARN_MORE_LABEL: &str = "Learn More";

/// Label pair for a call-to-action, one per session branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CtaCopy {
    pub authenticated: &'static str,
    pub anonymous: &'static str,
}

/// One entry in the feature grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureDescriptor {
    pub icon: Glyph,
    pub title: &'static str,
    pub description: &'static str,
}

/// Feature grid entries, in display order.
pub static FEATURES: [FeatureDescriptor; 5] = [
    FeatureDescriptor {
        icon: Glyph::Brain,
        title: "Advanced Mood Analytics",
        description: "AI-powered emotional pattern recognition with professional-grade insights and reporting.",
    },
    FeatureDescriptor {
        icon: Glyph::Sparkles,
        title: "Intelligent Summaries",
        description: "Concise executive summaries of your journal entries with key takeaways.",
    },
    FeatureDescriptor {
        icon: Glyph::Cloud,
        title: "Secure Cloud Sync",
        description: "Enterprise-grade encryption with seamless cross-device synchronization.",
    },
    FeatureDescriptor {
        icon: Glyph::BookOpen,
        title: "Privacy First",
        description: "Zero-knowledge architecture ensures your thoughts remain completely private.",
    },
    FeatureDescriptor {
        icon: Glyph::Cherry,
        title: "Minimalist Design",
        description: "Distraction-free interface optimized for focused writing sessions.",
    },
];

/// Customer quote shown between the feature grid and the closing CTA.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIAL: Testimonial = Testimonial {
    quote: "MindInk has transformed my daily reflection practice. The analytics provide insights I never would have noticed on my own.",
    author: "Dr. Sarah Chen",
    role: "Clinical Psychologist",
};

impl CtaCopy {
    /// The label for one session branch; the other label is never shown.
    #[must_use]
    pub fn pick(self, variant: CtaVariant) -> &'static str {
        match variant {
            CtaVariant::Authenticated => self.authenticated,
            CtaVariant::Anonymous => self.anonymous,
        }
    }
}
