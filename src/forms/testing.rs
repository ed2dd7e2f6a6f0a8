//! In-memory form surface and submitter for pipeline tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use tokio::sync::oneshot;

use super::submitter::{FormData, SubmitError, Submitter};
use super::surface::{FormField, FormSurface, StatusKind};
use super::validation::FieldKind;

pub const ORIGINAL_LABEL: &str = "<span>Send</span>";

struct FieldState {
    name: String,
    kind: FieldKind,
    required: bool,
    default: String,
    value: RefCell<String>,
    invalid: Cell<bool>,
    /// Rendered error annotations, oldest first
    annotations: RefCell<Vec<String>>,
}

#[derive(Clone)]
pub struct MemoryField(Rc<FieldState>);

impl MemoryField {
    pub fn new(name: &str, kind: FieldKind, required: bool, value: &str) -> Self {
        Self(Rc::new(FieldState {
            name: name.to_string(),
            kind,
            required,
            default: String::new(),
            value: RefCell::new(value.to_string()),
            invalid: Cell::new(false),
            annotations: RefCell::new(Vec::new()),
        }))
    }

    pub fn set_value(&self, value: &str) {
        *self.0.value.borrow_mut() = value.to_string();
    }

    pub fn annotations(&self) -> Vec<String> {
        self.0.annotations.borrow().clone()
    }
}

impl FormField for MemoryField {
    fn name(&self) -> String {
        self.0.name.clone()
    }

    fn value(&self) -> String {
        self.0.value.borrow().clone()
    }

    fn kind(&self) -> FieldKind {
        self.0.kind
    }

    fn is_required(&self) -> bool {
        self.0.required
    }

    fn is_marked_invalid(&self) -> bool {
        self.0.invalid.get()
    }

    fn mark_invalid(&self, message: &str) {
        self.0.invalid.set(true);
        self.0.annotations.borrow_mut().push(message.to_string());
    }

    fn clear_error(&self) {
        self.0.invalid.set(false);
        self.0.annotations.borrow_mut().clear();
    }

    fn entry(&self) -> Option<(String, String)> {
        if self.0.name.is_empty() {
            return None;
        }
        Some((self.name(), self.value()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub disabled: bool,
    pub label: String,
}

pub struct MemoryForm {
    fields: Vec<MemoryField>,
    pub button: RefCell<Button>,
    pub status: RefCell<Option<(StatusKind, String)>>,
    pub sending_started: Cell<usize>,
    /// False for a form without a submit control or status region
    has_controls: bool,
}

impl MemoryForm {
    pub fn new(fields: Vec<MemoryField>) -> Self {
        Self {
            fields,
            button: RefCell::new(Button { disabled: false, label: ORIGINAL_LABEL.to_string() }),
            status: RefCell::new(None),
            sending_started: Cell::new(0),
            has_controls: true,
        }
    }

    /// A form with fields only: no submit control, no status region
    pub fn bare(fields: Vec<MemoryField>) -> Self {
        Self { has_controls: false, ..Self::new(fields) }
    }

    pub fn button(&self) -> Button {
        self.button.borrow().clone()
    }

    pub fn status(&self) -> Option<(StatusKind, String)> {
        self.status.borrow().clone()
    }
}

impl FormSurface for MemoryForm {
    type Field = MemoryField;

    fn fields(&self) -> Vec<MemoryField> {
        self.fields.clone()
    }

    fn begin_sending(&self, sending_label: &str) -> Option<String> {
        self.sending_started.set(self.sending_started.get() + 1);
        if !self.has_controls {
            return None;
        }
        let mut button = self.button.borrow_mut();
        button.disabled = true;
        let original = std::mem::replace(&mut button.label, format!("<span class=\"loading\"></span> {}", sending_label));
        Some(original)
    }

    fn end_sending(&self, original_label: Option<String>) {
        if !self.has_controls {
            return;
        }
        let mut button = self.button.borrow_mut();
        button.disabled = false;
        if let Some(label) = original_label {
            button.label = label;
        }
    }

    fn show_status(&self, kind: StatusKind, message: &str) {
        if !self.has_controls {
            return;
        }
        *self.status.borrow_mut() = Some((kind, message.to_string()));
    }

    fn reset(&self) {
        for field in &self.fields {
            field.set_value(&field.0.default);
        }
    }
}

/// Records every call; fails or waits on a gate when asked to
pub struct MockSubmitter {
    pub calls: RefCell<Vec<FormData>>,
    fail: bool,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl MockSubmitter {
    pub fn succeeding() -> Self {
        Self { calls: RefCell::new(Vec::new()), fail: false, gate: RefCell::new(None) }
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::succeeding() }
    }

    /// Succeeds only after the returned sender fires
    pub fn gated() -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        let mock = Self { gate: RefCell::new(Some(rx)), ..Self::succeeding() };
        (mock, tx)
    }

    pub fn calls(&self) -> Vec<FormData> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Submitter for MockSubmitter {
    async fn submit(&self, data: &FormData) -> Result<(), SubmitError> {
        self.calls.borrow_mut().push(data.clone());
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if self.fail {
            Err(SubmitError::Transport("connection reset".to_string()))
        } else {
            Ok(())
        }
    }
}
