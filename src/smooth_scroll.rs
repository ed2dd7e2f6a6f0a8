//! Smooth Anchor Scrolling
//!
//! In-page `#fragment` links scroll smoothly and stop below the sticky
//! header instead of jumping under it.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::config::SmoothScrollConfig;
use crate::dom::{self, DomResult};

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
const HEADER_SELECTOR: &str = ".header";

/// Selector for the element an anchor points at.
///
/// `None` for a bare `#` and for anything that is not a fragment.
pub fn anchor_selector(href: &str) -> Option<&str> {
    match href {
        "#" => None,
        h if h.starts_with('#') => Some(h),
        _ => None,
    }
}

/// Absolute scroll position that puts the target `gap` px below the header
pub fn scroll_target(rect_top: f64, page_offset: f64, header_height: f64, gap: f64) -> f64 {
    rect_top + page_offset - header_height - gap
}

fn header_height() -> f64 {
    dom::query_document(HEADER_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| f64::from(el.offset_height()))
        .unwrap_or(0.0)
}

fn target_for(link: &Element) -> Option<Element> {
    let href = link.get_attribute("href")?;
    let selector = anchor_selector(&href)?;
    // "#1st" and similar are not valid selectors; treat them as no target
    dom::query_document(selector).ok().flatten()
}

pub fn init_smooth_scroll(config: &SmoothScrollConfig) -> DomResult<()> {
    let gap = config.gap;
    for link in dom::query_all_document(ANCHOR_SELECTOR)? {
        let l = link.clone();
        dom::listen(&link, "click", move |ev| {
            let Some(target) = target_for(&l) else { return };
            ev.prevent_default();
            let top = scroll_target(
                target.get_bounding_client_rect().top(),
                dom::page_offset(),
                header_height(),
                gap,
            );
            dom::smooth_scroll_to(top);
        })?;
    }
    Ok(())
}
