use super::*;

fn message() -> ContactMessage {
    ContactMessage {
        from_name: "Ali".to_owned(),
        from_email: "a@b.com".to_owned(),
        message: "Hello there!".to_owned(),
    }
}

fn enabled_config() -> RelayConfig {
    RelayConfig::from_values(None, None, None, Some("pk_test"))
}

#[test]
fn defaults_fill_missing_values() {
    let config = RelayConfig::from_values(None, None, None, None);
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.service_id, DEFAULT_SERVICE_ID);
    assert_eq!(config.template_id, DEFAULT_TEMPLATE_ID);
    assert!(config.public_key.is_empty());
    assert!(!config.enabled());
}

#[test]
fn overrides_are_trimmed() {
    let config = RelayConfig::from_values(
        Some(" https://relay.test/send "),
        Some(" svc "),
        Some("tpl"),
        Some(" key "),
    );
    assert_eq!(config.endpoint, "https://relay.test/send");
    assert_eq!(config.service_id, "svc");
    assert_eq!(config.public_key, "key");
    assert!(config.enabled());
}

#[test]
fn request_envelope_carries_template_params() {
    let config = enabled_config();
    let message = message();
    let body = serde_json::to_value(RelayRequest::new(&config, &message)).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "service_id": DEFAULT_SERVICE_ID,
            "template_id": DEFAULT_TEMPLATE_ID,
            "user_id": "pk_test",
            "template_params": {
                "from_name": "Ali",
                "from_email": "a@b.com",
                "message": "Hello there!",
            },
        })
    );
}

#[test]
fn send_without_key_is_disabled() {
    let config = RelayConfig::from_values(None, None, None, None);
    let result = poll_once(send(&config, &message()));
    assert!(matches!(result, Err(RelayError::Disabled)));
}

#[test]
fn send_outside_browser_is_unavailable() {
    let result = poll_once(send(&enabled_config(), &message()));
    assert!(matches!(result, Err(RelayError::Unavailable)));
}

#[test]
fn errors_render_readable_messages() {
    let err = RelayError::Rejected { status: 400, body: "bad template".to_owned() };
    assert_eq!(err.to_string(), "mail relay rejected message (400): bad template");
}

/// `send` never awaits anything outside the browser, so one poll completes it.
fn poll_once<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("relay send should resolve immediately outside the browser"),
    }
}
