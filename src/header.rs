//! Header Scroll State
//!
//! Marks the sticky header once the page has scrolled past a threshold.

use crate::config::HeaderConfig;
use crate::dom::{self, DomResult};

const HEADER_SELECTOR: &str = ".header";
const SCROLLED_CLASS: &str = "header--scrolled";

/// Strictly past the threshold counts as scrolled
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

pub fn init_header(config: &HeaderConfig) -> DomResult<()> {
    let Some(header) = dom::query_document(HEADER_SELECTOR)? else {
        tracing::debug!("no header on page");
        return Ok(());
    };
    let threshold = config.scrolled_threshold;

    let apply = move || {
        dom::set_class(&header, SCROLLED_CLASS, is_scrolled(dom::page_offset(), threshold));
    };
    apply();

    let window = dom::window()?;
    dom::listen_passive(&window, "scroll", move |_| apply())
}
