//! Scroll-to-Top Control

use crate::config::ScrollTopConfig;
use crate::dom::{self, DomResult};

const BUTTON_SELECTOR: &str = ".scroll-top";
const VISIBLE_CLASS: &str = "scroll-top--visible";

pub fn is_visible(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

pub fn init_scroll_to_top(config: &ScrollTopConfig) -> DomResult<()> {
    let Some(button) = dom::query_document(BUTTON_SELECTOR)? else {
        return Ok(());
    };
    let threshold = config.show_threshold;

    let window = dom::window()?;
    let b = button.clone();
    dom::listen_passive(&window, "scroll", move |_| {
        dom::set_class(&b, VISIBLE_CLASS, is_visible(dom::page_offset(), threshold));
    })?;

    dom::listen(&button, "click", |_| dom::smooth_scroll_to(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_threshold() {
        assert!(!is_visible(0.0, 400.0));
        assert!(!is_visible(400.0, 400.0));
        assert!(is_visible(401.0, 400.0));
    }
}
