//! Reveal Animations
//!
//! Adds `animated` to `[data-animate]` elements the first time they
//! scroll into view.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::RevealConfig;
use crate::dom::{self, DomError, DomResult};

const ANIMATE_SELECTOR: &str = "[data-animate]";
const ANIMATED_CLASS: &str = "animated";

pub fn init_scroll_animations(config: &RevealConfig) -> DomResult<()> {
    let targets = dom::query_all_document(ANIMATE_SELECTOR)?;
    if targets.is_empty() {
        return Ok(());
    }

    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else { continue };
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom::set_class(&target, ANIMATED_CLASS, true);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&config.root_margin);
    options.set_threshold(&config.threshold.into());

    let observer = IntersectionObserver::new_with_options(
        on_intersect.as_ref().unchecked_ref(),
        &options,
    )
    .map_err(|e| DomError::js("IntersectionObserver", e))?;
    on_intersect.forget();

    for target in &targets {
        observer.observe(target);
    }
    tracing::debug!(count = targets.len(), "reveal targets observed");
    Ok(())
}
