//! In-page "jump to section" control.
//!
//! DESIGN
//! ======
//! The control holds a `NodeRef` to a section on the same page. Activation
//! smoothly scrolls that section's top edge to the top of the viewport. If
//! the section is not mounted yet the click is ignored; an in-flight scroll is
//! simply superseded by the browser when clicked again.

#[cfg(test)]
#[path = "section_scroller_test.rs"]
mod section_scroller_test;

use leptos::prelude::*;

/// Something the viewport can be smoothly scrolled to.
pub trait ScrollAnchor {
    /// Request a smooth scroll aligning this anchor's top with the viewport top.
    fn scroll_to_top_smooth(&self);
}

impl<A: ScrollAnchor + ?Sized> ScrollAnchor for &A {
    fn scroll_to_top_smooth(&self) {
        (**self).scroll_to_top_smooth();
    }
}

#[cfg(feature = "hydrate")]
impl ScrollAnchor for web_sys::HtmlElement {
    fn scroll_to_top_smooth(&self) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Scroll to `anchor` if present. Returns whether a scroll was requested.
pub fn scroll_to_anchor<A: ScrollAnchor>(anchor: Option<A>) -> bool {
    match anchor {
        Some(anchor) => {
            anchor.scroll_to_top_smooth();
            true
        }
        None => false,
    }
}

/// Button that scrolls to `target` without leaving the page.
#[component]
pub fn SectionScroller(
    target: NodeRef<leptos::html::Section>,
    label: &'static str,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let on_click = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            if !scroll_to_anchor(target.get_untracked()) {
                log::debug!("scroll target not mounted; ignoring");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = target;
        }
    };

    view! {
        <button type="button" class=format!("scroller {class}") on:click=on_click>
            {label}
        </button>
    }
}
