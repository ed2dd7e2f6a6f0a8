//! Mobile Navigation Drawer
//!
//! Open/close state for the off-canvas menu on small screens.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};

use crate::dom::{self, DomResult};

const TOGGLE_SELECTOR: &str = ".nav__toggle";
const MENU_SELECTOR: &str = ".nav__menu";
const OVERLAY_SELECTOR: &str = ".nav__overlay";
const LINK_SELECTOR: &str = ".nav__link";
const MENU_OPEN_CLASS: &str = "nav__menu--open";
const OVERLAY_VISIBLE_CLASS: &str = "nav__overlay--visible";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

/// Inputs the drawer reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    ToggleClicked,
    OverlayClicked,
    LinkClicked,
    EscapePressed,
}

impl NavState {
    pub fn is_open(self) -> bool {
        self == NavState::Open
    }

    pub fn next(self, event: NavEvent) -> NavState {
        match (self, event) {
            (NavState::Closed, NavEvent::ToggleClicked) => NavState::Open,
            (NavState::Open, NavEvent::ToggleClicked) => NavState::Closed,
            (_, NavEvent::OverlayClicked | NavEvent::LinkClicked | NavEvent::EscapePressed) => {
                NavState::Closed
            }
        }
    }

    /// Value for the toggle's `aria-expanded`
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }

    /// Value for `body.style.overflow`
    pub fn body_overflow(self) -> &'static str {
        if self.is_open() { "hidden" } else { "" }
    }
}

/// Elements of the drawer plus its current state
struct Drawer {
    toggle: Element,
    menu: Element,
    overlay: Option<Element>,
    state: Cell<NavState>,
}

impl Drawer {
    fn handle(&self, event: NavEvent) {
        let current = self.state.get();
        // Escape on a closed menu leaves the page untouched
        if event == NavEvent::EscapePressed && !current.is_open() {
            return;
        }
        self.apply(current.next(event));
    }

    fn apply(&self, state: NavState) {
        self.state.set(state);
        dom::set_class(&self.menu, MENU_OPEN_CLASS, state.is_open());
        if let Some(overlay) = &self.overlay {
            dom::set_class(overlay, OVERLAY_VISIBLE_CLASS, state.is_open());
        }
        if let Some(body) = dom::document().ok().and_then(|d| d.body()) {
            dom::set_style(&body, "overflow", state.body_overflow());
        }
        dom::set_attribute(&self.toggle, "aria-expanded", state.aria_expanded());
        tracing::debug!(?state, "nav drawer");
    }
}

pub fn init_mobile_nav() -> DomResult<()> {
    let (Some(toggle), Some(menu)) = (
        dom::query_document(TOGGLE_SELECTOR)?,
        dom::query_document(MENU_SELECTOR)?,
    ) else {
        tracing::debug!("no mobile nav on page");
        return Ok(());
    };

    let drawer = Rc::new(Drawer {
        toggle: toggle.clone(),
        menu: menu.clone(),
        overlay: dom::query_document(OVERLAY_SELECTOR)?,
        state: Cell::new(NavState::Closed),
    });

    let d = drawer.clone();
    dom::listen(&toggle, "click", move |_| d.handle(NavEvent::ToggleClicked))?;

    if let Some(overlay) = &drawer.overlay {
        let d = drawer.clone();
        dom::listen(overlay, "click", move |_| d.handle(NavEvent::OverlayClicked))?;
    }

    let document = dom::document()?;
    let d = drawer.clone();
    dom::listen(&document, "keydown", move |ev| {
        if ev.dyn_ref::<KeyboardEvent>().is_some_and(|k| k.key() == "Escape") {
            d.handle(NavEvent::EscapePressed);
        }
    })?;

    for link in dom::query_all(&menu, LINK_SELECTOR)? {
        let d = drawer.clone();
        dom::listen(&link, "click", move |_| d.handle(NavEvent::LinkClicked))?;
    }

    Ok(())
}
