//! Status Message
//!
//! Leptos view rendered into a form's `.form-message` region after a
//! submission settles.

use std::any::Any;

use leptos::prelude::*;

use super::surface::StatusKind;

#[component]
fn StatusIcon(kind: StatusKind) -> impl IntoView {
    match kind {
        StatusKind::Success => view! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/>
                <polyline points="22,4 12,14.01 9,11.01"/>
            </svg>
        }
        .into_any(),
        StatusKind::Error => view! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <circle cx="12" cy="12" r="10"/>
                <line x1="15" y1="9" x2="9" y2="15"/>
                <line x1="9" y1="9" x2="15" y2="15"/>
            </svg>
        }
        .into_any(),
    }
}

#[component]
pub fn StatusMessage(kind: StatusKind, message: String) -> impl IntoView {
    view! {
        <StatusIcon kind=kind/>
        <span>{message}</span>
    }
}

/// Mount the message into `region`.
///
/// The returned handle owns the mounted view; dropping it removes the view.
pub fn render_status(region: web_sys::HtmlElement, kind: StatusKind, message: String) -> Box<dyn Any> {
    let handle = leptos::mount::mount_to(region, move || view! { <StatusMessage kind=kind message=message/> });
    Box::new(handle)
}
