//! Routed page modules.

pub mod home;
