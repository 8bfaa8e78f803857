//! Root application component.

use leptos::prelude::*;

use crate::components::slot_picker::SlotPicker;

/// Booking form with the slot picker.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="booking">
            <h1>"Book a time"</h1>
            <form class="booking-form" method="post" action="/book">
                <SlotPicker/>
                <button class="booking-form__submit" type="submit">"Continue"</button>
            </form>
        </main>
    }
}
