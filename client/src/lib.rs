//! # client
//!
//! Leptos + WASM front end for the booking slot picker.
//!
//! Two ways in: [`mount`] renders the [`app::App`] form with the
//! [`components::slot_picker::SlotPicker`] component; [`bind_slot_loader`]
//! wires the same loader into a server-rendered page that already has
//! `#date-input` and `#time-select`.

pub mod app;
pub mod components;
#[cfg(feature = "csr")]
pub mod dom;
pub mod net;
pub mod state;

#[cfg(feature = "csr")]
fn init_browser_logging() {
    console_error_panic_hook::set_once();
    // A second entry point in the same page finds the logger already set.
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Mount the Leptos booking form into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    init_browser_logging();
    leptos::mount::mount_to_body(app::App);
}

/// Attach the slot loader to an existing server-rendered form.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn bind_slot_loader() {
    init_browser_logging();
    let loader = std::rc::Rc::new(slots::SlotLoader::new(net::api::GlooSlotSource::default()));
    match dom::bind_document(loader) {
        Some(binding) => binding.persist(),
        None => log::debug!("no #date-input on page; slot loader not bound"),
    }
}
