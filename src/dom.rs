//! DOM Helpers
//!
//! Thin wrappers over `web-sys` shared by the page handlers.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("invalid selector `{0}`")]
    Selector(String),
    #[error("DOM call `{call}` failed: {detail}")]
    Js { call: &'static str, detail: String },
}

impl DomError {
    pub fn js(call: &'static str, err: wasm_bindgen::JsValue) -> Self {
        DomError::Js {
            call,
            detail: err.as_string().unwrap_or_else(|| format!("{:?}", err)),
        }
    }
}

pub type DomResult<T> = Result<T, DomError>;

pub fn window() -> DomResult<Window> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> DomResult<Document> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// First match of `selector` under `root`
pub fn query(root: &Element, selector: &str) -> DomResult<Option<Element>> {
    root.query_selector(selector)
        .map_err(|_| DomError::Selector(selector.to_string()))
}

/// First match of `selector` in the document
pub fn query_document(selector: &str) -> DomResult<Option<Element>> {
    document()?
        .query_selector(selector)
        .map_err(|_| DomError::Selector(selector.to_string()))
}

/// All matches of `selector` in the document, in document order
pub fn query_all_document(selector: &str) -> DomResult<Vec<Element>> {
    let list = document()?
        .query_selector_all(selector)
        .map_err(|_| DomError::Selector(selector.to_string()))?;
    Ok(collect_elements(&list))
}

/// All matches of `selector` under `root`, in document order
pub fn query_all(root: &Element, selector: &str) -> DomResult<Vec<Element>> {
    let list = root
        .query_selector_all(selector)
        .map_err(|_| DomError::Selector(selector.to_string()))?;
    Ok(collect_elements(&list))
}

fn collect_elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Add or remove a single class
pub fn set_class(el: &Element, class: &str, on: bool) {
    let classes = el.class_list();
    let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
    if let Err(e) = result {
        tracing::warn!(error = %DomError::js("classList", e), class, "could not toggle class");
    }
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub fn set_attribute(el: &Element, name: &str, value: &str) {
    if let Err(e) = el.set_attribute(name, value) {
        tracing::warn!(error = %DomError::js("setAttribute", e), attribute = name, "could not set attribute");
    }
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        tracing::warn!(error = %DomError::js("setProperty", e), property, "could not set style");
    }
}

/// Vertical scroll offset of the page
pub fn page_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

/// Attach a listener that lives as long as the page.
///
/// Page handlers are never detached, so the closure is leaked.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> DomResult<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| DomError::js("addEventListener", e))?;
    closure.forget();
    Ok(())
}

/// Like [`listen`] but registered as `{ passive: true }`
pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F) -> DomResult<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = web_sys::AddEventListenerOptions::new();
    options.set_passive(true);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| DomError::js("addEventListener", e))?;
    closure.forget();
    Ok(())
}

/// Smooth-scroll the window to an absolute vertical position
pub fn smooth_scroll_to(top: f64) {
    let Some(win) = web_sys::window() else { return };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use console_logger::{ConsoleLayer, LogBuffer};
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::layer::SubscriberExt;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_rejected_attribute_is_logged() {
        let buffer = LogBuffer::new(10);
        let subscriber = tracing_subscriber::registry()
            .with(LevelFilter::WARN)
            .with(ConsoleLayer::new(buffer.clone()));
        let el = document().unwrap().create_element("button").unwrap();

        tracing::subscriber::with_default(subscriber, || {
            set_attribute(&el, "aria-expanded", "true");
            set_attribute(&el, "1 not a name", "x");
        });

        assert_eq!(el.get_attribute("aria-expanded").as_deref(), Some("true"));
        let lines = buffer.snapshot();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("could not set attribute"));
        assert!(lines[0].contains("setAttribute"));
    }
}
