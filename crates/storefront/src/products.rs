use std::collections::BTreeSet;

use leptos::prelude::*;
use rusty_money::iso::Currency;

use verdant::prelude::*;

use crate::state::{LoadStatus, Storefront};

/// Shown when the active filter matches nothing.
pub const NO_PLANTS: &str = "No plants found.";

pub(crate) fn start_icon_confirmation(confirmed_icons: RwSignal<BTreeSet<String>>, icon_key: &str) {
    confirmed_icons.update(|states| {
        states.insert(icon_key.to_string());
    });
}

pub(crate) fn clear_icon_confirmation(confirmed_icons: RwSignal<BTreeSet<String>>, icon_key: &str) {
    confirmed_icons.update(|states| {
        states.remove(icon_key);
    });
}

fn item_count_text(count: usize) -> String {
    let label = if count == 1 { "item" } else { "items" };

    format!("{count} {label}")
}

/// Everything a product card needs, fixed when the card renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardModel {
    /// Plant id, used for the detail fetch.
    pub id: PlantId,

    /// Display name.
    pub name: String,

    /// Image URL.
    pub image_url: String,

    /// Description cut for the card.
    pub description: String,

    /// Category badge text.
    pub category: String,

    /// Formatted price.
    pub price: String,

    /// Cart entry appended by the add button.
    pub entry: CartEntry,
}

impl ProductCardModel {
    /// Build a card model for `plant`.
    pub fn new(plant: &Plant, currency: &'static Currency) -> Self {
        Self {
            id: plant.id.clone(),
            name: plant.name.clone(),
            image_url: plant.image_url.clone(),
            description: truncate_description(&plant.description).into_owned(),
            category: plant.category.clone(),
            price: format_price(plant.price, currency),
            entry: CartEntry::from(plant),
        }
    }
}

#[component]
fn ProductsHeading(storefront: Storefront) -> impl IntoView {
    view! {
        <div class="panel-header">
            <h2 class="panel-title panel-title-offset">"Trees"</h2>
            <span id="item-count" class="panel-meta">
                {move || item_count_text(storefront.visible_count())}
            </span>
            {move || {
                if storefront.plants_status.with(|status| *status == LoadStatus::Loading) {
                    view! {
                        <span class="panel-spinner" aria-live="polite">
                            <svg
                                xmlns="http://www.w3.org/2000/svg"
                                width="24"
                                height="24"
                                viewBox="0 0 24 24"
                                fill="none"
                                stroke="currentColor"
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                class="lucide lucide-loader-circle-icon lucide-loader-circle"
                                aria-hidden="true"
                            >
                                <path d="M21 12a9 9 0 1 1-6.219-8.56"></path>
                            </svg>
                            <span class="sr-only">"Loading plants"</span>
                        </span>
                    }
                        .into_any()
                } else {
                    ().into_any()
                }
            }}
        </div>
    }
}

#[component]
fn AddToCartButton(
    entry: CartEntry,
    icon_key: String,
    storefront: Storefront,
    add_icon_confirmations: RwSignal<BTreeSet<String>>,
) -> impl IntoView {
    let icon_key_for_class = icon_key.clone();
    let icon_key_for_click = icon_key.clone();
    let icon_key_for_animation_end = icon_key;

    let data_id = entry.id.to_string();
    let data_name = entry.name.clone();
    let data_price = entry.price.to_string();
    let add_button_label = format!(
        "Add {} ({}) to cart",
        entry.name,
        storefront.display_price(entry.price)
    );

    view! {
        <button
            type="button"
            data-id=data_id
            data-name=data_name
            data-price=data_price
            aria-label=add_button_label
            class=move || {
                if add_icon_confirmations.with(|states| states.contains(&icon_key_for_class)) {
                    "add-to-cart icon-button-confirmed"
                } else {
                    "add-to-cart"
                }
            }
            on:click=move |_| {
                start_icon_confirmation(add_icon_confirmations, &icon_key_for_click);
                storefront.add_to_cart(entry.clone());
            }
        >
            <span class="icon-button-icon-stack" aria-hidden="true">
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="24"
                    height="24"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class="icon-button-icon icon-button-icon-original lucide lucide-plus-icon lucide-plus"
                >
                    <path d="M5 12h14"></path>
                    <path d="M12 5v14"></path>
                </svg>
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="24"
                    height="24"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class="icon-button-icon icon-button-icon-check lucide lucide-check-icon lucide-check"
                    on:animationend=move |_| {
                        clear_icon_confirmation(add_icon_confirmations, &icon_key_for_animation_end);
                    }
                >
                    <path d="M20 6 9 17l-5-5"></path>
                </svg>
            </span>
            <span>"Add to Cart"</span>
        </button>
    }
}

#[component]
fn ProductCard(
    card: ProductCardModel,
    storefront: Storefront,
    add_icon_confirmations: RwSignal<BTreeSet<String>>,
) -> impl IntoView {
    let plant_id = card.id.clone();
    let data_id = card.id.to_string();
    let icon_key = format!("add:{}", card.id);

    view! {
        <article class="product-card">
            <img src=card.image_url alt=card.name.clone() class="product-image" />
            <h3 class="product-name">
                <button
                    type="button"
                    class="product-name-button"
                    data-id=data_id
                    on:click=move |_| storefront.open_detail(plant_id.clone())
                >
                    {card.name}
                </button>
            </h3>
            <p class="product-description">{card.description}</p>
            <div class="product-meta">
                <span class="category-badge">{card.category}</span>
                <span class="product-price">{card.price}</span>
            </div>
            <AddToCartButton
                entry=card.entry
                icon_key=icon_key
                storefront=storefront
                add_icon_confirmations=add_icon_confirmations
            />
        </article>
    }
}

#[component]
fn ProductGrid(
    storefront: Storefront,
    add_icon_confirmations: RwSignal<BTreeSet<String>>,
) -> impl IntoView {
    view! {
        <div id="tree-container" class="product-grid">
            <For
                each=move || storefront.keyed_visible_plants()
                key=|(key, _)| key.clone()
                children=move |(_, plant): ((usize, PlantId), Plant)| {
                    view! {
                        <ProductCard
                            card=ProductCardModel::new(&plant, storefront.currency)
                            storefront=storefront
                            add_icon_confirmations=add_icon_confirmations
                        />
                    }
                }
            />
        </div>
    }
}

/// Products panel component.
#[component]
pub fn ProductsPanel(
    /// Page state.
    storefront: Storefront,
) -> impl IntoView {
    let add_icon_confirmations = RwSignal::new(BTreeSet::<String>::new());
    let nothing_visible = Memo::new(move |_| storefront.visible_count() == 0);

    view! {
        <section class="products-panel">
            <ProductsHeading storefront=storefront />
            {move || match storefront.plants_status.get() {
                LoadStatus::Failed(message) => {
                    view! { <p class="error-text">{message}</p> }.into_any()
                }
                LoadStatus::Ready if nothing_visible.get() => {
                    view! { <p class="empty-text">{NO_PLANTS}</p> }.into_any()
                }
                LoadStatus::Loading | LoadStatus::Ready => {
                    view! {
                        <ProductGrid
                            storefront=storefront
                            add_icon_confirmations=add_icon_confirmations
                        />
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

/// Transient acknowledgment after an add; fades out on its own.
#[component]
pub fn CartToast(
    /// Page state.
    storefront: Storefront,
) -> impl IntoView {
    move || {
        let toast = storefront.toast.get();
        let id = toast.id;

        toast.message.map_or_else(
            || ().into_any(),
            |message| {
                view! {
                    <div
                        class="cart-toast"
                        role="status"
                        on:animationend=move |_| storefront.dismiss_toast(id)
                    >
                        {message}
                    </div>
                }
                .into_any()
            },
        )
    }
}
