//! Outbound network clients.

pub mod relay;
