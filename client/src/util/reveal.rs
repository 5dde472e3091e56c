//! Scroll-in reveal for content cards.
//!
//! Cards start transparent and shifted down, then settle into place the first
//! time at least 10% of them is inside the viewport (shrunk by 50px at the
//! bottom). Once revealed an element is unobserved, so it never hides again.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Classes of the elements that animate in.
pub const REVEAL_CLASSES: [&str; 7] = [
    "skill-category",
    "project-card",
    "service-card",
    "about-text",
    "about-image",
    "contact-info",
    "contact-form-wrapper",
];

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(30px)";
pub const SHOWN_OPACITY: &str = "1";
pub const SHOWN_TRANSFORM: &str = "translateY(0)";
pub const TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// CSS selector list matching every revealable element.
#[must_use]
pub fn reveal_selector() -> String {
    REVEAL_CLASSES
        .iter()
        .map(|class| format!(".{class}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Hide all revealable elements and start observing them.
///
/// The observer and its callback live for the rest of the page, so both are
/// intentionally leaked to JS ownership.
pub fn install() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(nodes) = document.query_selector_all(&reveal_selector()) else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Some(el) = target.dyn_ref::<web_sys::HtmlElement>() {
                        set_style(el, SHOWN_OPACITY, SHOWN_TRANSFORM);
                    }
                    observer.unobserve(&target);
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer = match web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("reveal observer unavailable: {err:?}");
                return;
            }
        };
        callback.forget();

        for i in 0..nodes.length() {
            let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok()) else {
                continue;
            };
            let _ = el.style().set_property("transition", TRANSITION);
            set_style(&el, HIDDEN_OPACITY, HIDDEN_TRANSFORM);
            observer.observe(&el);
        }
    }
}

#[cfg(feature = "hydrate")]
fn set_style(el: &web_sys::HtmlElement, opacity: &str, transform: &str) {
    let style = el.style();
    let _ = style.set_property("opacity", opacity);
    let _ = style.set_property("transform", transform);
}
