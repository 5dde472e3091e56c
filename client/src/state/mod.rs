//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so components depend on small focused models:
//! page chrome (`ui`) and the contact form (`contact`). Both are provided as
//! `RwSignal` context by `App`.

pub mod contact;
pub mod ui;
