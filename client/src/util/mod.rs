//! Utility helpers shared across page and component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns from component logic. Pure rules
//! live beside `hydrate`-gated DOM helpers that compile to no-ops on the
//! server and in native tests.

pub mod debounce;
pub mod dom;
pub mod image_fallback;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod validation;
