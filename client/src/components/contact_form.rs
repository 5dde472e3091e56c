//! Contact form with inline validation and mail-relay delivery.
//!
//! SYSTEM CONTEXT
//! ==============
//! Field rules and submit sequencing live in `ContactFormState`; this
//! component wires DOM events to it and performs the side effects: focusing
//! the first invalid field, sending through the relay, showing the success
//! banner for five seconds, and alerting on delivery failure.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::contact::{ContactFormState, SubmitOutcome};
use crate::util::validation::Field;

#[cfg(feature = "hydrate")]
use crate::net::relay::{self, RelayConfig};
#[cfg(feature = "hydrate")]
use crate::state::contact::{ContactMessage, SUCCESS_BANNER_MS};

/// Shown when the relay reports a failure.
pub const SEND_FAILED_ALERT: &str = "Message not sent. Please try again later.";

#[cfg(feature = "hydrate")]
fn finish_success(form: RwSignal<ContactFormState>) {
    form.update(ContactFormState::mark_sent);
    gloo_timers::callback::Timeout::new(SUCCESS_BANNER_MS, move || {
        form.update(ContactFormState::hide_success);
    })
    .forget();
}

#[cfg(feature = "hydrate")]
fn deliver(form: RwSignal<ContactFormState>, message: ContactMessage) {
    log::info!(
        "contact form submitted: name={} email={} message={}",
        message.from_name,
        message.from_email,
        message.message
    );
    let config = RelayConfig::from_build_env();
    if !config.enabled() {
        finish_success(form);
        return;
    }
    leptos::task::spawn_local(async move {
        match relay::send(&config, &message).await {
            Ok(()) => finish_success(form),
            Err(e) => {
                log::error!("contact form delivery failed: {e}");
                form.update(ContactFormState::mark_failed);
                crate::util::dom::alert(SEND_FAILED_ALERT);
            }
        }
    });
}

#[component]
fn FormField(field: Field, label: &'static str, placeholder: &'static str) -> impl IntoView {
    let form = expect_context::<RwSignal<ContactFormState>>();

    let value = move || form.with(|f| f.value(field).to_owned());
    let group_class = move || form.with(|f| f.status(field).group_class());
    let error_text = move || form.with(|f| f.error(field).map(ToString::to_string).unwrap_or_default());
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.set_value(field, event_target_value(&ev)));
    let on_blur = move |_: leptos::ev::FocusEvent| {
        form.update(|f| {
            f.blur(field);
        });
    };

    let input_type = if field == Field::Email { "email" } else { "text" };
    let input = if field == Field::Message {
        view! {
            <textarea
                id=field.id()
                name=field.id()
                rows="5"
                placeholder=placeholder
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=field.id()
                name=field.id()
                type=input_type
                placeholder=placeholder
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            />
        }
        .into_any()
    };

    view! {
        <div class=group_class>
            <label for=field.id()>{label}</label>
            {input}
            <span class="error-message" id=format!("{}Error", field.id())>{error_text}</span>
        </div>
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = expect_context::<RwSignal<ContactFormState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(outcome) = form.try_update(ContactFormState::submit) else {
            return;
        };
        match outcome {
            SubmitOutcome::Busy => {}
            SubmitOutcome::Invalid { first } => {
                log::debug!("contact form rejected; first invalid field: {}", first.id());
                crate::util::dom::focus_element(first.id());
            }
            SubmitOutcome::Ready(message) => {
                #[cfg(feature = "hydrate")]
                deliver(form, message);
                #[cfg(not(feature = "hydrate"))]
                let _ = message;
            }
        }
    };

    let success_class = move || {
        if form.with(|f| f.success_visible) { "form-success show" } else { "form-success" }
    };

    view! {
        <div class="contact-form-wrapper">
            <form class="contact-form" id="contactForm" novalidate=true on:submit=on_submit>
                <FormField field=Field::Name label="Name" placeholder="Your name"/>
                <FormField field=Field::Email label="Email" placeholder="you@example.com"/>
                <FormField field=Field::Message label="Message" placeholder="Tell me about your project"/>
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || form.with(|f| f.submitting)
                >
                    "Send Message"
                </button>
            </form>
            <div class=success_class id="formSuccess" role="status">
                <i class="fas fa-check-circle"></i>
                " Thank you! Your message has been sent."
            </div>
        </div>
    }
}
