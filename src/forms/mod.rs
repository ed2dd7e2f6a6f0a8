//! Form Validation
//!
//! Binds every `form[data-validate]` on the page to its own
//! [`FormPipeline`].

mod dom_form;
mod pipeline;
mod status;
mod submitter;
mod surface;
mod validation;

#[cfg(test)]
mod testing;

use std::rc::Rc;

use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;

use crate::config::{FormConfig, FormMessages};
use crate::dom::{self, DomResult};

use dom_form::DomForm;
use pipeline::FormPipeline;
use submitter::{SimulatedSubmitter, Submitter};
use surface::FormSurface;

const FORM_SELECTOR: &str = "form[data-validate]";

pub fn init_form_validation(config: &FormConfig) -> DomResult<()> {
    let submitter: Rc<dyn Submitter> = Rc::new(SimulatedSubmitter::new(config.simulated_latency_ms));

    let forms = dom::query_all_document(FORM_SELECTOR)?;
    tracing::debug!(count = forms.len(), "binding validated forms");

    for element in forms {
        let Ok(form) = element.dyn_into::<HtmlFormElement>() else { continue };
        // One broken form must not keep the others unbound
        if let Err(e) = bind_form(form, submitter.clone(), &config.messages) {
            tracing::warn!(error = %e, "form not bound");
        }
    }
    Ok(())
}

fn bind_form(form: HtmlFormElement, submitter: Rc<dyn Submitter>, messages: &FormMessages) -> DomResult<()> {
    let pipeline = Rc::new(FormPipeline::new(DomForm::new(form.clone())?, submitter, messages.clone()));

    let p = pipeline.clone();
    dom::listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let p = p.clone();
        spawn_local(async move {
            let outcome = p.submit().await;
            tracing::debug!(form = %p.surface().label(), ?outcome, "submit settled");
        });
    })?;

    for field in pipeline.surface().fields() {
        let (p, f) = (pipeline.clone(), field.clone());
        dom::listen(field.element(), "blur", move |_| p.on_blur(&f))?;

        let (p, f) = (pipeline.clone(), field.clone());
        dom::listen(field.element(), "input", move |_| p.on_input(&f))?;
    }
    Ok(())
}
