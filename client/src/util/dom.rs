//! Small document-level side effects.
//!
//! Every function here is a no-op outside the browser.

/// Class added to `<body>` once the app has hydrated.
pub const LOADED_CLASS: &str = "loaded";

/// `overflow` value for `<body>` while the mobile menu is open or closed.
#[must_use]
pub fn body_overflow(menu_open: bool) -> &'static str {
    if menu_open { "hidden" } else { "" }
}

/// Lock or release page scrolling behind the mobile menu.
pub fn set_scroll_locked(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.style().set_property("overflow", body_overflow(locked));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}

pub fn mark_body_loaded() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().add_1(LOADED_CLASS);
        }
    }
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Scroll the element with `id` into the middle of the viewport and focus it.
pub fn focus_element(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Center);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        let _ = el.focus();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Log the greeting shown to visitors who open the developer console.
pub fn console_greeting(name: &str, email: &str, phone: &str) {
    log::info!("👋 Hello there! This is {name}'s portfolio.");
    log::info!("Feel free to reach out if you'd like to work together!");
    log::info!("📧 Email: {email}");
    log::info!("💬 WhatsApp: {phone}");
}
