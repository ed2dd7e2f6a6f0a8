//! Form Submission Pipeline
//!
//! Gates submission behind per-field validation, hands accepted data to the
//! [`Submitter`] and renders the outcome. One pipeline per form; its
//! in-flight flag is the only thing that keeps a form from submitting twice.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::FormMessages;

use super::submitter::{FormData, Submitter};
use super::surface::{FormField, FormSurface, StatusKind};
use super::validation::validate;

/// What one submit attempt did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Some fields failed validation; nothing was sent
    Invalid { invalid_fields: usize },
    /// A previous submission of this form has not settled yet
    AlreadySending,
    Sent,
    Failed,
}

/// Clears the in-flight flag when the submission settles
struct InFlight<'a>(&'a Cell<bool>);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        InFlight(flag)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

pub struct FormPipeline<S: FormSurface> {
    surface: S,
    submitter: Rc<dyn Submitter>,
    messages: FormMessages,
    in_flight: Cell<bool>,
}

impl<S: FormSurface> FormPipeline<S> {
    pub fn new(surface: S, submitter: Rc<dyn Submitter>, messages: FormMessages) -> Self {
        Self {
            surface,
            submitter,
            messages,
            in_flight: Cell::new(false),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[cfg(test)]
    pub fn is_sending(&self) -> bool {
        self.in_flight.get()
    }

    /// Re-render one field's validity. Returns whether it is valid.
    pub fn validate_field(&self, field: &S::Field) -> bool {
        field.clear_error();
        match validate(&field.value(), field.kind(), field.is_required()) {
            Ok(()) => true,
            Err(err) => {
                tracing::trace!(field = %field.name(), %err, "field invalid");
                field.mark_invalid(err.message(&self.messages));
                false
            }
        }
    }

    /// Leaving a field always revalidates it
    pub fn on_blur(&self, field: &S::Field) {
        self.validate_field(field);
    }

    /// Typing only revalidates a field that is already flagged
    pub fn on_input(&self, field: &S::Field) {
        if field.is_marked_invalid() {
            self.validate_field(field);
        }
    }

    /// Validate every field, rendering each result. Returns the invalid count.
    pub fn validate_all(&self) -> usize {
        self.surface
            .fields()
            .iter()
            .filter(|field| !self.validate_field(field))
            .count()
    }

    pub fn form_data(&self) -> FormData {
        self.surface
            .fields()
            .iter()
            .filter_map(FormField::entry)
            .collect()
    }

    pub async fn submit(&self) -> SubmitOutcome {
        if self.in_flight.get() {
            tracing::debug!("submit ignored, previous submission still in flight");
            return SubmitOutcome::AlreadySending;
        }

        let invalid_fields = self.validate_all();
        if invalid_fields > 0 {
            // Per-field annotations are the only feedback here
            tracing::debug!(invalid_fields, "submit blocked by invalid fields");
            return SubmitOutcome::Invalid { invalid_fields };
        }

        let _in_flight = InFlight::acquire(&self.in_flight);
        let original_label = self.surface.begin_sending(&self.messages.sending);
        let data = self.form_data();

        let outcome = match self.submitter.submit(&data).await {
            Ok(()) => {
                tracing::info!(fields = data.len(), "form submitted");
                self.surface.show_status(StatusKind::Success, &self.messages.success);
                self.surface.reset();
                SubmitOutcome::Sent
            }
            Err(err) => {
                tracing::warn!(error = %err, "form submission failed");
                self.surface.show_status(StatusKind::Error, &self.messages.failure);
                SubmitOutcome::Failed
            }
        };

        self.surface.end_sending(original_label);
        outcome
    }
}
