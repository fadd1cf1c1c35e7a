use leptos::prelude::*;

use verdant::prelude::*;

use crate::state::Storefront;

/// Placeholder while the detail request is in flight.
pub const LOADING_TEXT: &str = "Loading...";

/// Placeholder when the detail request fails.
pub const FAILED_TEXT: &str = "Failed to load details.";

#[component]
fn PlantDetail(plant: Plant, storefront: Storefront) -> impl IntoView {
    let entry = CartEntry::from(&plant);
    let price = format!("Price: {}", storefront.display_price(plant.price));
    let description = plant.detail_description().to_string();

    view! {
        <div class="modal-detail">
            <img src=plant.image_url alt=plant.name.clone() class="modal-image" />
            <div>
                <h2 class="modal-title">{plant.name}</h2>
                <p class="modal-description">{description}</p>
                <p class="modal-price">{price}</p>
            </div>
            <button
                type="button"
                id="modal-add"
                class="add-to-cart"
                on:click=move |_| {
                    storefront.add_to_cart(entry.clone());
                    storefront.close_detail();
                }
            >
                "Add to Cart"
            </button>
        </div>
    }
}

fn render_modal_body(state: ModalState, storefront: Storefront) -> AnyView {
    match state {
        ModalState::Closed => ().into_any(),
        ModalState::Loading { .. } => {
            view! { <div class="modal-placeholder">{LOADING_TEXT}</div> }.into_any()
        }
        ModalState::Failed { .. } => {
            view! { <div class="modal-placeholder">{FAILED_TEXT}</div> }.into_any()
        }
        ModalState::Populated(plant) => {
            view! { <PlantDetail plant=plant storefront=storefront /> }.into_any()
        }
    }
}

/// Plant detail modal.
///
/// The backdrop and the content are siblings, so clicks inside the content
/// never reach the backdrop's close handler.
#[component]
pub fn DetailModalView(
    /// Page state.
    storefront: Storefront,
) -> impl IntoView {
    move || {
        let state = storefront.modal.with(|modal| modal.state().clone());

        if state == ModalState::Closed {
            return ().into_any();
        }

        view! {
            <div id="modal" class="modal" role="dialog" aria-modal="true">
                <div
                    class="modal-backdrop"
                    aria-hidden="true"
                    on:click=move |_| storefront.close_detail()
                ></div>
                <div id="modal-content" class="modal-content">
                    <button
                        type="button"
                        id="modal-close"
                        class="modal-close"
                        aria-label="Close details"
                        on:click=move |_| storefront.close_detail()
                    >
                        "✕"
                    </button>
                    {render_modal_body(state, storefront)}
                </div>
            </div>
        }
        .into_any()
    }
}
