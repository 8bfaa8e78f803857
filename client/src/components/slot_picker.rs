//! Date input + dependent time select.
//!
//! The change handler is bound directly on the date input; each change runs
//! one `SlotLoader::fetch_slots` on the UI thread. The loader is shared across
//! changes so a slow response for an earlier date is discarded.

use leptos::prelude::*;

use crate::state::picker::SignalSelect;

/// Element id of the date input.
pub const DATE_INPUT_ID: &str = "date-input";
/// Element id of the time select.
pub const TIME_SELECT_ID: &str = "time-select";

/// Slot picker bound to `endpoint` (defaults to `/api/slots`).
#[component]
pub fn SlotPicker(#[prop(optional, into)] endpoint: Option<String>) -> impl IntoView {
    let select = SignalSelect::new();
    let options = select.options();

    #[cfg(feature = "csr")]
    let loader = {
        use crate::net::api::GlooSlotSource;
        let source = endpoint.map_or_else(GlooSlotSource::default, GlooSlotSource::new);
        std::rc::Rc::new(slots::SlotLoader::new(source))
    };
    #[cfg(not(feature = "csr"))]
    let _ = endpoint;

    let on_change = move |ev: leptos::ev::Event| {
        let date = event_target_value(&ev);
        #[cfg(feature = "csr")]
        {
            let loader = std::rc::Rc::clone(&loader);
            leptos::task::spawn_local(async move {
                loader.fetch_slots(Some(date.as_str()), &select).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (date, select);
    };

    view! {
        <div class="slot-picker">
            <label class="slot-picker__field">
                "Date"
                <input id=DATE_INPUT_ID class="slot-picker__date" type="date" name="date" on:change=on_change/>
            </label>
            <label class="slot-picker__field">
                "Time"
                <select id=TIME_SELECT_ID class="slot-picker__time" name="time">
                    {move || {
                        options
                            .get()
                            .into_iter()
                            .map(|opt| view! { <option value=opt.value>{opt.label}</option> })
                            .collect_view()
                    }}
                </select>
            </label>
        </div>
    }
}
