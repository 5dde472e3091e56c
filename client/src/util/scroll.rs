//! Scroll-position helpers: navbar state, active section, anchor scrolling.
//!
//! DESIGN
//! ======
//! The geometry rules are pure functions over plain numbers so they run in
//! native tests. The `hydrate`-only functions below read layout from the DOM
//! and feed it through the same rules.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Vertical offset past which the navbar switches to its `scrolled` style.
pub const NAVBAR_SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// How far ahead of a section's top the matching nav link becomes active.
pub const ACTIVE_LINK_LOOKAHEAD_PX: f64 = 100.0;

/// Quiet period before the settled-scroll callback runs.
pub const SCROLL_SETTLE_MS: u32 = 100;

/// Element ids of the page sections, in document order.
pub const SECTION_IDS: [&str; 6] = ["home", "about", "skills", "projects", "services", "contact"];

/// Vertical extent of one `section[id]` in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_THRESHOLD_PX
}

/// Pick the section whose look-ahead span contains `scroll_y`.
///
/// A span covers `[top - 100, top - 100 + height]`, both ends inclusive. When
/// spans touch, the later section wins. Returns `None` when no span matches so
/// the caller can keep the previous active link.
#[must_use]
pub fn active_section(scroll_y: f64, spans: &[SectionSpan]) -> Option<&str> {
    spans
        .iter()
        .rev()
        .find(|span| {
            let start = span.top - ACTIVE_LINK_LOOKAHEAD_PX;
            scroll_y >= start && scroll_y <= start + span.height
        })
        .map(|span| span.id.as_str())
}

/// Fragment id targeted by an in-page link, or `None` for the bare `#` link
/// and for anything that is not a fragment.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll destination that keeps the target clear of the fixed navbar.
#[must_use]
pub fn smooth_scroll_offset(target_top: f64, navbar_height: f64) -> f64 {
    target_top - navbar_height
}

#[must_use]
pub fn nav_href(section_id: &str) -> String {
    format!("#{section_id}")
}

/// Current vertical scroll offset of the window.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Measure every `section[id]` currently in the document.
pub fn section_spans() -> Vec<SectionSpan> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        let Ok(nodes) = document.query_selector_all("section[id]") else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
            .map(|el| SectionSpan {
                id: el.id(),
                top: f64::from(el.offset_top()),
                height: f64::from(el.offset_height()),
            })
            .collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Smoothly scroll to the element with `id`, offset by the navbar height.
///
/// Returns `false` when the target does not exist.
pub fn scroll_to_section(id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return false;
        };
        let Some(document) = window.document() else {
            return false;
        };
        let Some(target) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return false;
        };
        let navbar_height = document
            .get_element_by_id("navbar")
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .map_or(0.0, |nav| f64::from(nav.offset_height()));

        let options = web_sys::ScrollToOptions::new();
        options.set_top(smooth_scroll_offset(f64::from(target.offset_top()), navbar_height));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        false
    }
}
