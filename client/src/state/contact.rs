//! Contact form state machine.
//!
//! DESIGN
//! ======
//! Field feedback follows two triggers: leaving a field validates it, and
//! typing re-validates it once the value is non-empty. Submission validates
//! every field; only a fully valid form produces a `ContactMessage` for
//! delivery. The banner/reset step runs after delivery succeeds.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

use crate::util::validation::{Field, FieldError, validate};

/// How long the success banner stays visible.
pub const SUCCESS_BANNER_MS: u32 = 5_000;

/// Validated form contents, in the relay's template-parameter shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

/// Result of a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed; `first` is the earliest in form order.
    Invalid { first: Field },
    /// Every field passed and the message is ready to send.
    Ready(ContactMessage),
    /// A previous submission is still in flight.
    Busy,
}

/// Border feedback for one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldStatus {
    Untouched,
    Valid,
    Invalid,
}

impl FieldStatus {
    #[must_use]
    pub fn group_class(self) -> &'static str {
        match self {
            Self::Untouched => "form-group",
            Self::Valid => "form-group form-group--valid",
            Self::Invalid => "form-group form-group--error",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct FieldState {
    value: String,
    checked: bool,
    error: Option<FieldError>,
}

impl FieldState {
    fn check(&mut self, field: Field) -> bool {
        self.checked = true;
        self.error = validate(field, &self.value).err();
        self.error.is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    name: FieldState,
    email: FieldState,
    message: FieldState,
    pub submitting: bool,
    pub success_visible: bool,
}

impl ContactFormState {
    fn slot(&self, field: Field) -> &FieldState {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        &self.slot(field).value
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.slot(field).error.as_ref()
    }

    #[must_use]
    pub fn status(&self, field: Field) -> FieldStatus {
        let slot = self.slot(field);
        match (slot.checked, &slot.error) {
            (false, _) => FieldStatus::Untouched,
            (true, None) => FieldStatus::Valid,
            (true, Some(_)) => FieldStatus::Invalid,
        }
    }

    /// Input handler: store the value and re-validate once it is non-empty.
    pub fn set_value(&mut self, field: Field, value: String) {
        let slot = self.slot_mut(field);
        slot.value = value;
        if !slot.value.is_empty() {
            slot.check(field);
        }
    }

    /// Blur handler.
    pub fn blur(&mut self, field: Field) -> bool {
        self.slot_mut(field).check(field)
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::Busy;
        }
        let mut first = None;
        for field in Field::ALL {
            if !self.slot_mut(field).check(field) && first.is_none() {
                first = Some(field);
            }
        }
        if let Some(first) = first {
            return SubmitOutcome::Invalid { first };
        }
        self.submitting = true;
        SubmitOutcome::Ready(ContactMessage {
            from_name: self.name.value.trim().to_owned(),
            from_email: self.email.value.trim().to_owned(),
            message: self.message.value.trim().to_owned(),
        })
    }

    /// Delivery succeeded: show the banner and reset every field.
    pub fn mark_sent(&mut self) {
        *self = Self { success_visible: true, ..Self::default() };
    }

    /// Delivery failed: allow another attempt with the same values.
    pub fn mark_failed(&mut self) {
        self.submitting = false;
    }

    pub fn hide_success(&mut self) {
        self.success_visible = false;
    }
}
