use super::*;

fn filled(name: &str, email: &str, message: &str) -> ContactFormState {
    let mut form = ContactFormState::default();
    form.set_value(Field::Name, name.to_owned());
    form.set_value(Field::Email, email.to_owned());
    form.set_value(Field::Message, message.to_owned());
    form
}

// =============================================================
// Field feedback
// =============================================================

#[test]
fn untouched_fields_show_no_feedback() {
    let form = ContactFormState::default();
    for field in Field::ALL {
        assert_eq!(form.status(field), FieldStatus::Untouched);
        assert!(form.error(field).is_none());
    }
}

#[test]
fn typing_validates_non_empty_values() {
    let mut form = ContactFormState::default();
    form.set_value(Field::Email, "x@y".to_owned());
    assert_eq!(form.status(Field::Email), FieldStatus::Invalid);
    form.set_value(Field::Email, "x@y.io".to_owned());
    assert_eq!(form.status(Field::Email), FieldStatus::Valid);
}

#[test]
fn clearing_a_field_keeps_last_feedback_until_blur() {
    let mut form = ContactFormState::default();
    form.set_value(Field::Name, "Ali".to_owned());
    form.set_value(Field::Name, String::new());
    assert_eq!(form.status(Field::Name), FieldStatus::Valid);
    assert!(!form.blur(Field::Name));
    assert_eq!(form.error(Field::Name), Some(&FieldError("Name is required")));
}

#[test]
fn blur_on_empty_field_reports_required() {
    let mut form = ContactFormState::default();
    assert!(!form.blur(Field::Message));
    assert_eq!(form.status(Field::Message), FieldStatus::Invalid);
    assert_eq!(form.status(Field::Message).group_class(), "form-group form-group--error");
}

// =============================================================
// Submit
// =============================================================

#[test]
fn invalid_submission_reports_all_errors_without_reset() {
    let mut form = filled("A", "x@y", "hello");
    assert_eq!(form.submit(), SubmitOutcome::Invalid { first: Field::Name });
    for field in Field::ALL {
        assert!(form.error(field).is_some());
    }
    assert!(!form.success_visible);
    assert!(!form.submitting);
    assert_eq!(form.value(Field::Name), "A");
    assert_eq!(form.value(Field::Message), "hello");
}

#[test]
fn first_invalid_field_follows_form_order() {
    let mut form = filled("Ali", "bad", "short");
    assert_eq!(form.submit(), SubmitOutcome::Invalid { first: Field::Email });
    let mut form = filled("Ali", "a@b.com", "short");
    assert_eq!(form.submit(), SubmitOutcome::Invalid { first: Field::Message });
}

#[test]
fn valid_submission_clears_errors_and_resets_after_send() {
    let mut form = filled("Ali", "a@b.com", "Hello there!");
    form.blur(Field::Name);
    let outcome = form.submit();
    assert_eq!(
        outcome,
        SubmitOutcome::Ready(ContactMessage {
            from_name: "Ali".to_owned(),
            from_email: "a@b.com".to_owned(),
            message: "Hello there!".to_owned(),
        })
    );
    for field in Field::ALL {
        assert!(form.error(field).is_none());
    }

    form.mark_sent();
    assert!(form.success_visible);
    assert!(!form.submitting);
    for field in Field::ALL {
        assert_eq!(form.value(field), "");
        assert_eq!(form.status(field), FieldStatus::Untouched);
    }

    form.hide_success();
    assert!(!form.success_visible);
}

#[test]
fn submit_while_sending_is_busy() {
    let mut form = filled("Ali", "a@b.com", "Hello there!");
    assert!(matches!(form.submit(), SubmitOutcome::Ready(_)));
    assert_eq!(form.submit(), SubmitOutcome::Busy);
}

#[test]
fn failed_send_keeps_values_for_retry() {
    let mut form = filled("Ali", "a@b.com", "Hello there!");
    assert!(matches!(form.submit(), SubmitOutcome::Ready(_)));
    form.mark_failed();
    assert!(!form.success_visible);
    assert_eq!(form.value(Field::Email), "a@b.com");
    assert!(matches!(form.submit(), SubmitOutcome::Ready(_)));
}

#[test]
fn banner_hides_without_touching_fresh_form() {
    let mut form = filled("Ali", "a@b.com", "Hello there!");
    assert!(matches!(form.submit(), SubmitOutcome::Ready(_)));
    form.mark_sent();
    form.set_value(Field::Name, "Bo".to_owned());
    form.hide_success();
    assert!(!form.success_visible);
    assert_eq!(form.value(Field::Name), "Bo");
}
