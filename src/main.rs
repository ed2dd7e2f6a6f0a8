#![allow(warnings)]
//! Site Interactivity Entry Point
//!
//! Composition root: loads config, installs logging, then runs every page
//! initializer once the document is parsed.

mod config;
mod dom;
mod forms;
mod header;
mod nav;
mod reveal;
mod scroll_top;
mod smooth_scroll;

use console_logger::LogBuffer;
use wasm_bindgen::prelude::*;

use config::SiteConfig;
use dom::DomResult;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = SiteConfig::load();
    match console_logger::init(config.logging.max_level(), config.logging.capacity) {
        Ok(buffer) => expose_logs(buffer),
        Err(e) => web_sys::console::warn_1(&e.to_string().into()),
    }
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "falling back to default site config");
    }

    when_ready(move || init_page(&config));
}

/// Each initializer owns its own state; a failing one is logged and skipped.
fn init_page(config: &SiteConfig) {
    report("header", header::init_header(&config.header));
    report("mobile nav", nav::init_mobile_nav());
    report("reveal", reveal::init_scroll_animations(&config.reveal));
    report("scroll to top", scroll_top::init_scroll_to_top(&config.scroll_top));
    report("forms", forms::init_form_validation(&config.forms));
    report("smooth scroll", smooth_scroll::init_smooth_scroll(&config.smooth_scroll));
    tracing::info!("page interactivity ready");
}

fn report(handler: &str, result: DomResult<()>) {
    match result {
        Ok(()) => tracing::debug!(handler, "initialized"),
        Err(e) => tracing::warn!(handler, error = %e, "initializer failed"),
    }
}

/// Run `init` now if the document is parsed, else on `DOMContentLoaded`
fn when_ready<F: FnOnce() + 'static>(init: F) {
    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            tracing::error!(error = %e, "no document to initialize");
            return;
        }
    };

    if document.ready_state() != "loading" {
        init();
        return;
    }

    let mut init = Some(init);
    let result = dom::listen(&document, "DOMContentLoaded", move |_| {
        if let Some(init) = init.take() {
            init();
        }
    });
    if let Err(e) = result {
        tracing::error!(error = %e, "could not wait for DOMContentLoaded");
    }
}

/// `window.siteLogs()` returns the recent log lines for debugging in devtools
fn expose_logs(buffer: LogBuffer) {
    let Some(window) = web_sys::window() else { return };
    let dump = Closure::<dyn Fn() -> js_sys::Array>::new(move || {
        buffer.snapshot().into_iter().map(JsValue::from).collect::<js_sys::Array>()
    });
    if js_sys::Reflect::set(&window, &JsValue::from_str("siteLogs"), dump.as_ref()).is_err() {
        tracing::warn!("could not expose window.siteLogs");
    }
    dump.forget();
}
