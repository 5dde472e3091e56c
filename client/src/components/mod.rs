//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interactive surfaces while reading and
//! writing shared state from Leptos context providers.

pub mod contact_form;
pub mod navbar;
pub mod profile_image;
pub mod project_card;
