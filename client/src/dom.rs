//! Slot loader binding for server-rendered pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages that are not built with Leptos still ship a `#date-input` and a
//! `#time-select`. `bind_document` attaches a `change` listener directly to
//! the input and hands back a guard that owns it. Both controls are looked
//! up again on every change, so replacing either element in the page does
//! not leave the loader writing to a detached node.

use std::rc::Rc;

use slots::{DateInput, SelectOption, SlotError, SlotLoader, SlotSource, TimeSelect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, HtmlInputElement, HtmlOptionElement, HtmlSelectElement};

use crate::components::slot_picker::{DATE_INPUT_ID, TIME_SELECT_ID};

/// `#date-input` as a [`DateInput`].
pub struct DomDateInput(HtmlInputElement);

impl DateInput for DomDateInput {
    fn value(&self) -> String {
        self.0.value()
    }
}

/// `#time-select` as a [`TimeSelect`].
pub struct DomTimeSelect(HtmlSelectElement);

impl TimeSelect for DomTimeSelect {
    fn replace_options(&self, options: &[SelectOption]) -> Result<(), SlotError> {
        self.0.set_inner_html("");
        for opt in options {
            let el = HtmlOptionElement::new_with_text_and_value(&opt.label, &opt.value).map_err(render_error)?;
            self.0.append_child(&el).map_err(render_error)?;
        }
        Ok(())
    }
}

fn render_error(err: JsValue) -> SlotError {
    SlotError::Render(format!("{err:?}"))
}

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn find<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Owns the `change` listener on `#date-input`. Dropping it unbinds the loader.
pub struct ChangeBinding {
    target: HtmlInputElement,
    callback: Closure<dyn FnMut(Event)>,
}

impl ChangeBinding {
    /// Keep the listener for the lifetime of the page.
    pub fn persist(self) {
        std::mem::forget(self);
    }
}

impl Drop for ChangeBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref());
    }
}

/// Run one load against the controls currently in the document.
///
/// A missing `#date-input` is a no-op (handled by the loader); a missing
/// `#time-select` is also skipped since there is nothing to render into.
pub async fn fetch_slots_in_document<S: SlotSource>(loader: &SlotLoader<S>) {
    let Some(document) = document() else {
        return;
    };
    let input = find::<HtmlInputElement>(&document, DATE_INPUT_ID).map(DomDateInput);
    let Some(select) = find::<HtmlSelectElement>(&document, TIME_SELECT_ID).map(DomTimeSelect) else {
        log::debug!("#{TIME_SELECT_ID} not found; skipping slot fetch");
        return;
    };
    loader.fetch_slots(input.as_ref(), &select).await;
}

/// Bind `loader` to changes of `#date-input`.
///
/// Returns `None` without touching the page when there is no date input.
pub fn bind_document<S: SlotSource + 'static>(loader: Rc<SlotLoader<S>>) -> Option<ChangeBinding> {
    let document = document()?;
    let target = find::<HtmlInputElement>(&document, DATE_INPUT_ID)?;

    let callback = Closure::<dyn FnMut(Event)>::new(move |_ev: Event| {
        let loader = Rc::clone(&loader);
        wasm_bindgen_futures::spawn_local(async move {
            fetch_slots_in_document(&loader).await;
        });
    });

    if let Err(err) = target.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref()) {
        log::warn!("failed to bind #{DATE_INPUT_ID}: {err:?}");
        return None;
    }
    Some(ChangeBinding { target, callback })
}
