//! Form Surface
//!
//! What the pipeline needs from a rendered form. The browser implementation
//! lives in `dom_form`; tests use an in-memory one.

use super::validation::FieldKind;

/// One input, select or textarea
pub trait FormField {
    fn name(&self) -> String;
    fn value(&self) -> String;
    fn kind(&self) -> FieldKind;
    fn is_required(&self) -> bool;

    /// Whether the field currently carries the invalid marker
    fn is_marked_invalid(&self) -> bool;
    /// Add the invalid marker and one error annotation with `message`
    fn mark_invalid(&self, message: &str);
    /// Remove the invalid marker and this field's error annotation, if any
    fn clear_error(&self);

    /// Name/value pair this field contributes to the submitted data.
    ///
    /// `None` for unnamed, disabled, button-like and unchecked fields.
    fn entry(&self) -> Option<(String, String)>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    /// Class list applied to the status region
    pub fn class_name(self) -> &'static str {
        match self {
            StatusKind::Success => "form-message form-message--success",
            StatusKind::Error => "form-message form-message--error",
        }
    }
}

pub trait FormSurface {
    type Field: FormField + Clone + 'static;

    /// Fields in document order
    fn fields(&self) -> Vec<Self::Field>;

    /// Disable the submit control and show the sending label.
    ///
    /// Returns the control's previous label markup, or `None` when the
    /// form has no submit control.
    fn begin_sending(&self, sending_label: &str) -> Option<String>;

    /// Re-enable the submit control and put `original_label` back
    fn end_sending(&self, original_label: Option<String>);

    /// Replace the status region content and make it visible.
    /// No-op without a status region.
    fn show_status(&self, kind: StatusKind, message: &str);

    /// Restore every field to its default value
    fn reset(&self);
}
