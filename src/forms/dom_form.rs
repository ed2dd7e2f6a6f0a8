//! Browser Form Surface
//!
//! [`FormSurface`] over a live `<form data-validate>` element.

use std::any::Any;
use std::cell::RefCell;

use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement,
};

use crate::dom::{self, DomError, DomResult};

use super::status::render_status;
use super::surface::{FormField, FormSurface, StatusKind};
use super::validation::FieldKind;

const FIELD_SELECTOR: &str = "input, select, textarea";
const SUBMIT_SELECTOR: &str = "button[type=\"submit\"]";
const STATUS_SELECTOR: &str = ".form-message";
const INVALID_CLASS: &str = "invalid";
const ERROR_CLASS: &str = "field-error";
const ERROR_STYLE: &str = "color: #DC2626; font-size: 0.875rem; margin-top: 0.25rem; display: block;";

/// Input types that never contribute a value
const BUTTON_LIKE_TYPES: &[&str] = &["submit", "reset", "button", "image", "file"];

/// Whether a control takes part in the form data, following the browser's
/// form-data rules for unnamed, disabled, button-like and unchecked controls.
fn contributes(name: &str, disabled: bool, type_attr: &str, checked: bool) -> bool {
    if name.is_empty() || disabled {
        return false;
    }
    let type_attr = type_attr.to_ascii_lowercase();
    if BUTTON_LIKE_TYPES.contains(&type_attr.as_str()) {
        return false;
    }
    !matches!(type_attr.as_str(), "checkbox" | "radio") || checked
}

/// The three element kinds a field can be
#[derive(Clone)]
enum Control {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
    TextArea(HtmlTextAreaElement),
}

#[derive(Clone)]
pub struct DomField {
    element: Element,
    control: Control,
}

impl DomField {
    fn from_element(element: Element) -> Option<Self> {
        let control = if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            Control::Input(input.clone())
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            Control::Select(select.clone())
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            Control::TextArea(area.clone())
        } else {
            return None;
        };
        Some(Self { element, control })
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    fn type_attr(&self) -> String {
        match &self.control {
            Control::Input(input) => input.type_(),
            Control::Select(select) => select.type_(),
            Control::TextArea(area) => area.type_(),
        }
    }

    fn is_checked(&self) -> bool {
        match &self.control {
            Control::Input(input) => input.checked(),
            _ => false,
        }
    }

    fn is_disabled(&self) -> bool {
        match &self.control {
            Control::Input(input) => input.disabled(),
            Control::Select(select) => select.disabled(),
            Control::TextArea(area) => area.disabled(),
        }
    }

    /// The error node rendered for this field, if any
    fn error_node(&self) -> Option<Element> {
        self.element
            .next_element_sibling()
            .filter(|next| dom::has_class(next, ERROR_CLASS))
    }
}

impl FormField for DomField {
    fn name(&self) -> String {
        self.element.get_attribute("name").unwrap_or_default()
    }

    fn value(&self) -> String {
        match &self.control {
            Control::Input(input) => input.value(),
            Control::Select(select) => select.value(),
            Control::TextArea(area) => area.value(),
        }
    }

    fn kind(&self) -> FieldKind {
        FieldKind::from_type_attr(&self.type_attr())
    }

    fn is_required(&self) -> bool {
        self.element.has_attribute("required")
    }

    fn is_marked_invalid(&self) -> bool {
        dom::has_class(&self.element, INVALID_CLASS)
    }

    fn mark_invalid(&self, message: &str) {
        dom::set_class(&self.element, INVALID_CLASS, true);

        let Ok(document) = dom::document() else { return };
        let Ok(error) = document.create_element("span") else { return };
        error.set_class_name(ERROR_CLASS);
        error.set_text_content(Some(message));
        dom::set_attribute(&error, "style", ERROR_STYLE);
        if let Err(e) = self.element.after_with_node_1(&error) {
            tracing::warn!(error = %DomError::js("after", e), "could not render field error");
        }
    }

    fn clear_error(&self) {
        dom::set_class(&self.element, INVALID_CLASS, false);
        if let Some(error) = self.error_node() {
            error.remove();
        }
    }

    fn entry(&self) -> Option<(String, String)> {
        let name = self.name();
        contributes(&name, self.is_disabled(), &self.type_attr(), self.is_checked())
            .then(|| (name, self.value()))
    }
}

pub struct DomForm {
    form: HtmlFormElement,
    submit: Option<HtmlButtonElement>,
    status: Option<HtmlElement>,
    /// Keeps the mounted status view alive; dropping it unmounts the view
    status_view: RefCell<Option<Box<dyn Any>>>,
}

impl DomForm {
    pub fn new(form: HtmlFormElement) -> DomResult<Self> {
        let submit = dom::query(&form, SUBMIT_SELECTOR)?
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        let status = dom::query(&form, STATUS_SELECTOR)?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        Ok(Self {
            form,
            submit,
            status,
            status_view: RefCell::new(None),
        })
    }

    /// Short label for log lines
    pub fn label(&self) -> String {
        let id = self.form.id();
        if id.is_empty() { self.form.name() } else { id }
    }

    fn set_sending_label(button: &HtmlButtonElement, sending_label: &str) -> DomResult<()> {
        let document = dom::document()?;
        let spinner = document
            .create_element("span")
            .map_err(|e| DomError::js("createElement", e))?;
        spinner.set_class_name("loading");
        let text = document.create_text_node(&format!(" {}", sending_label));

        button.set_inner_html("");
        button
            .append_child(&spinner)
            .and_then(|_| button.append_child(&text))
            .map_err(|e| DomError::js("appendChild", e))?;
        Ok(())
    }
}

impl FormSurface for DomForm {
    type Field = DomField;

    fn fields(&self) -> Vec<DomField> {
        dom::query_all(&self.form, FIELD_SELECTOR)
            .unwrap_or_default()
            .into_iter()
            .filter_map(DomField::from_element)
            .collect()
    }

    fn begin_sending(&self, sending_label: &str) -> Option<String> {
        let button = self.submit.as_ref()?;
        let original = button.inner_html();
        button.set_disabled(true);
        if let Err(e) = Self::set_sending_label(button, sending_label) {
            tracing::warn!(error = %e, "could not render sending label");
        }
        Some(original)
    }

    fn end_sending(&self, original_label: Option<String>) {
        let Some(button) = &self.submit else { return };
        button.set_disabled(false);
        if let Some(label) = original_label {
            button.set_inner_html(&label);
        }
    }

    fn show_status(&self, kind: StatusKind, message: &str) {
        let Some(status) = &self.status else { return };

        // Unmount the previous message before replacing the content
        self.status_view.borrow_mut().take();
        status.set_inner_html("");
        status.set_class_name(kind.class_name());

        let view = render_status(status.clone(), kind, message.to_string());
        *self.status_view.borrow_mut() = Some(view);
        dom::set_style(status, "display", "flex");
    }

    fn reset(&self) {
        self.form.reset();
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn input(document: &web_sys::Document, parent: &Element, html: &str) -> DomField {
        let wrapper = document.create_element("div").unwrap();
        wrapper.set_inner_html(html);
        let element = wrapper.first_element_child().unwrap();
        parent.append_child(&element).unwrap();
        DomField::from_element(element).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_error_node_sits_after_its_own_field() {
        let document = dom::document().unwrap();
        let wrapper = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&wrapper).unwrap();

        let first = input(&document, &wrapper, r#"<input name="first" required>"#);
        let second = input(&document, &wrapper, r#"<input name="second" required>"#);

        first.mark_invalid("Feltet er påkrevd");
        second.mark_invalid("Feltet er påkrevd");
        assert_eq!(wrapper.query_selector_all(".field-error").unwrap().length(), 2);

        first.clear_error();
        assert!(!first.is_marked_invalid());
        assert!(second.is_marked_invalid());
        assert!(second.error_node().is_some());
        assert_eq!(wrapper.query_selector_all(".field-error").unwrap().length(), 1);

        // A non-error sibling is never removed
        first.clear_error();
        assert_eq!(wrapper.child_element_count(), 3);
        wrapper.remove();
    }

    #[wasm_bindgen_test]
    fn test_entry_reads_live_controls() {
        let document = dom::document().unwrap();
        let wrapper = document.create_element("div").unwrap();

        let named = input(&document, &wrapper, r#"<input name="phone" value="12345678">"#);
        let unnamed = input(&document, &wrapper, r#"<input value="x">"#);
        let disabled = input(&document, &wrapper, r#"<input name="d" value="x" disabled>"#);
        let unchecked = input(&document, &wrapper, r#"<input type="checkbox" name="c" value="on">"#);
        let checked = input(&document, &wrapper, r#"<input type="checkbox" name="c" value="on" checked>"#);

        assert_eq!(named.entry(), Some(("phone".to_string(), "12345678".to_string())));
        assert_eq!(unnamed.entry(), None);
        assert_eq!(disabled.entry(), None);
        assert_eq!(unchecked.entry(), None);
        assert_eq!(checked.entry(), Some(("c".to_string(), "on".to_string())));
    }
}
