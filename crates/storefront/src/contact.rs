use leptos::{ev::SubmitEvent, html, prelude::*};
use tracing::{debug, warn};

/// Acknowledgment for a submitted request. Nothing is sent anywhere.
pub const THANKS: &str = "Thanks! Your request has been received.";

#[cfg(target_arch = "wasm32")]
fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        warn!("window unavailable; skipping alert");
        return;
    };

    if let Err(error) = window.alert_with_message(message) {
        warn!(?error, "alert failed");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn alert(message: &str) {
    debug!(message, "alert");
}

/// Tree-planting request form.
#[component]
pub fn PlantForm() -> impl IntoView {
    let form_ref = NodeRef::<html::Form>::new();

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        debug!("plant request submitted");
        alert(THANKS);

        match form_ref.get() {
            Some(form) => form.reset(),
            None => warn!("plant form not mounted"),
        }
    };

    view! {
        <section class="mx-auto mt-10 max-w-6xl">
            <h2 class="panel-title">"Plant a Tree"</h2>
            <form id="plant-form" class="contact-form" node_ref=form_ref on:submit=on_submit>
                <label>
                    <span>"Name"</span>
                    <input type="text" name="name" required />
                </label>
                <label>
                    <span>"Email"</span>
                    <input type="email" name="email" required />
                </label>
                <label>
                    <span>"Number of trees"</span>
                    <input type="number" name="trees" min="1" value="1" />
                </label>
                <button type="submit" class="add-to-cart">"Donate Now"</button>
            </form>
        </section>
    }
}
