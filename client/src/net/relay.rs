//! Mail-relay client for the contact form.
//!
//! Delivers validated form contents to a hosted email relay so the page needs
//! no backend of its own. The relay takes a service id, a template id, and the
//! template parameters `{from_name, from_email, message}`.
//!
//! Client-side (hydrate): a real `POST` through `gloo-net`.
//! Server-side (SSR): sending is unavailable and reports an error.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `Result`; the form turns any error into a blocking alert and
//! keeps the typed values so the visitor can retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use serde::Serialize;

use crate::state::contact::ContactMessage;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_SERVICE_ID: &str = "service_23xk5bg";
pub const DEFAULT_TEMPLATE_ID: &str = "t_FhfC7p5kmsZAkoV";

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("mail relay is not configured")]
    Disabled,
    #[error("mail relay unreachable: {0}")]
    Transport(String),
    #[error("mail relay rejected message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("mail relay unavailable outside the browser")]
    Unavailable,
}

/// Relay account settings, fixed at build time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    /// Build the config from compile-time environment overrides.
    ///
    /// Optional:
    /// - `PORTFOLIO_RELAY_ENDPOINT`: default relay send URL
    /// - `PORTFOLIO_RELAY_SERVICE_ID`
    /// - `PORTFOLIO_RELAY_TEMPLATE_ID`
    /// - `PORTFOLIO_RELAY_PUBLIC_KEY`: empty disables delivery
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("PORTFOLIO_RELAY_ENDPOINT"),
            option_env!("PORTFOLIO_RELAY_SERVICE_ID"),
            option_env!("PORTFOLIO_RELAY_TEMPLATE_ID"),
            option_env!("PORTFOLIO_RELAY_PUBLIC_KEY"),
        )
    }

    fn from_values(
        endpoint: Option<&str>,
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Self {
        Self {
            endpoint: endpoint.unwrap_or(DEFAULT_ENDPOINT).trim().to_owned(),
            service_id: service_id.unwrap_or(DEFAULT_SERVICE_ID).trim().to_owned(),
            template_id: template_id.unwrap_or(DEFAULT_TEMPLATE_ID).trim().to_owned(),
            public_key: public_key.unwrap_or_default().trim().to_owned(),
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        !self.public_key.is_empty() && !self.endpoint.is_empty()
    }
}

/// JSON body accepted by the relay's send endpoint.
#[derive(Debug, Serialize)]
pub struct RelayRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a ContactMessage,
}

impl<'a> RelayRequest<'a> {
    #[must_use]
    pub fn new(config: &'a RelayConfig, message: &'a ContactMessage) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: message,
        }
    }
}

/// Send one contact message through the relay.
///
/// # Errors
///
/// Returns [`RelayError::Disabled`] without a public key, a transport error if
/// the request never completes, and [`RelayError::Rejected`] for non-2xx
/// responses.
pub async fn send(config: &RelayConfig, message: &ContactMessage) -> Result<(), RelayError> {
    if !config.enabled() {
        return Err(RelayError::Disabled);
    }
    #[cfg(feature = "hydrate")]
    {
        let request = RelayRequest::new(config, message);
        let resp = gloo_net::http::Request::post(&config.endpoint)
            .json(&request)
            .map_err(|e| RelayError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RelayError::Rejected { status: resp.status(), body });
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        Err(RelayError::Unavailable)
    }
}
