//! Verdant storefront
//!
//! Client-side rendered plant shop: categories, product grid, detail modal,
//! cart and contact form.

use leptos::prelude::*;

use verdant::prelude::*;

mod cart;
mod categories;
mod contact;
mod logging;
mod modal;
mod products;
mod state;

use state::Storefront;

/// API base baked in at build time, if any.
fn api_config() -> ApiConfig {
    let Some(base_url) = option_env!("VERDANT_API_BASE") else {
        return ApiConfig::default();
    };

    ApiConfig::new(base_url).unwrap_or_else(|error| {
        tracing::warn!(%error, "ignoring VERDANT_API_BASE");

        ApiConfig::default()
    })
}

/// Main storefront shell.
#[component]
fn App() -> impl IntoView {
    let storefront = Storefront::new(api_config());

    storefront.load();

    view! {
        <main class="min-h-screen bg-slate-50 px-4 py-6 text-slate-900">
            <p class="sr-only" role="status" aria-live="polite" aria-atomic="true">
                {move || storefront.live_message.get().1}
            </p>
            <div class="mx-auto mb-6 max-w-6xl">
                <h1 class="text-2xl font-semibold tracking-tight">"Green Earth"</h1>
                <p class="text-sm text-slate-600">"Plant a tree, grow a future."</p>
            </div>
            <div class="mx-auto grid max-w-6xl grid-cols-1 gap-6 md:grid-cols-[220px_1fr_260px]">
                <categories::CategoryPanel storefront=storefront />
                <products::ProductsPanel storefront=storefront />
                <cart::CartPanel storefront=storefront />
            </div>
            <contact::PlantForm />
            <modal::DetailModalView storefront=storefront />
            <products::CartToast storefront=storefront />
        </main>
    }
}

/// Storefront entry point.
fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    leptos::mount::mount_to_body(App);
}

fn announce(live_message: RwSignal<(u64, String)>, message: String) {
    live_message.update(|(id, text)| {
        *id = id.saturating_add(1);
        *text = message;
    });
}
