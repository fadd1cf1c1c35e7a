//! Page state shared by every panel.

use leptos::{prelude::*, task};
use rusty_money::iso::Currency;
use tracing::{debug, error, info};

use verdant::prelude::*;

use crate::announce;

/// Shown in place of the grid when the plant listing fails.
pub const PLANTS_FAILED: &str = "Failed to load plants.";

/// Progress of the all-plants fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Fetch in flight.
    #[default]
    Loading,

    /// Catalog populated.
    Ready,

    /// Fetch failed; holds the user-facing message.
    Failed(String),
}

/// Transient acknowledgment shown after a cart change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toast {
    /// Bumped on every new message so repeated text still re-renders.
    pub id: u64,

    /// Message currently on screen.
    pub message: Option<String>,
}

/// Controller for the storefront page.
///
/// Every panel receives a copy and mutates state only through its methods.
#[derive(Debug, Clone, Copy)]
pub struct Storefront {
    /// Plants and categories fetched for this session.
    pub catalog: RwSignal<Catalog>,

    /// Progress of the all-plants fetch.
    pub plants_status: RwSignal<LoadStatus>,

    /// Category control currently active.
    pub selection: RwSignal<CategorySelection>,

    /// Plants passing the active filter, in fetched order.
    pub visible_plants: Memo<Vec<Plant>>,

    /// Session cart.
    pub cart: RwSignal<Cart>,

    /// Detail modal state.
    pub modal: RwSignal<DetailModal>,

    /// Live-region announcement.
    pub live_message: RwSignal<(u64, String)>,

    /// Add-to-cart acknowledgment.
    pub toast: RwSignal<Toast>,

    /// Display currency.
    pub currency: &'static Currency,

    config: StoredValue<ApiConfig>,
}

impl Storefront {
    /// Create the page state. Nothing is fetched until [`Storefront::load`].
    pub fn new(config: ApiConfig) -> Self {
        let catalog = RwSignal::new(Catalog::default());
        let selection = RwSignal::new(CategorySelection::default());

        let visible_plants = Memo::new(move |_| {
            let filter = selection.with(CategorySelection::effective);

            catalog.with(|catalog| catalog.filter(&filter).into_iter().cloned().collect())
        });

        Self {
            catalog,
            plants_status: RwSignal::new(LoadStatus::Loading),
            selection,
            visible_plants,
            cart: RwSignal::new(Cart::new()),
            modal: RwSignal::new(DetailModal::new()),
            live_message: RwSignal::new((0_u64, String::new())),
            toast: RwSignal::new(Toast::default()),
            currency: config.currency,
            config: StoredValue::new(config),
        }
    }

    /// Start the categories and plants fetches.
    ///
    /// The two requests are independent; either may land first.
    pub fn load(self) {
        let config = self.config.get_value();

        info!(base_url = %config.base_url, "loading catalog");

        task::spawn_local({
            let client = CatalogClient::new(&config);

            async move {
                let categories = or_empty(client.categories().await, "categories");

                self.set_categories(categories);
            }
        });

        task::spawn_local(async move {
            let client = CatalogClient::new(&config);
            let outcome = client.plants().await;

            self.set_plants(outcome);
        });
    }

    /// Store the fetched categories.
    pub fn set_categories(self, categories: Vec<Category>) {
        debug!(count = categories.len(), "categories loaded");

        self.catalog
            .update(|catalog| catalog.set_categories(categories));
    }

    /// Store the outcome of the all-plants fetch.
    pub fn set_plants(self, outcome: Result<Vec<Plant>, CatalogError>) {
        match outcome {
            Ok(plants) => {
                debug!(count = plants.len(), "plants loaded");

                self.catalog.update(|catalog| catalog.set_plants(plants));
                self.plants_status.set(LoadStatus::Ready);
            }
            Err(error) => {
                error!(%error, "failed to load plants");

                self.plants_status
                    .set(LoadStatus::Failed(PLANTS_FAILED.to_string()));
            }
        }
    }

    /// Activate a category control.
    pub fn select_category(self, filter: CategoryFilter) {
        debug!(%filter, "category selected");

        self.selection.update(|selection| selection.select(filter));
    }

    /// Number of plants passing the active filter.
    pub fn visible_count(self) -> usize {
        self.visible_plants.with(Vec::len)
    }

    /// Visible plants paired with a key unique within the list.
    ///
    /// Ids can repeat or be missing, so the position is part of the key.
    pub fn keyed_visible_plants(self) -> Vec<((usize, PlantId), Plant)> {
        self.visible_plants
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, plant)| ((index, plant.id.clone()), plant))
            .collect()
    }

    /// Append an entry to the cart and acknowledge it.
    pub fn add_to_cart(self, entry: CartEntry) {
        let message = format!("{} added to cart.", entry.name);

        self.cart.update(|cart| cart.add(entry));

        announce(
            self.live_message,
            format!("{message} Total {}.", self.formatted_total()),
        );

        self.show_toast(message);
    }

    /// Remove the cart entry at `index`. Out of range is a no-op.
    pub fn remove_from_cart(self, index: usize) {
        let removed = self
            .cart
            .try_update(|cart| cart.remove(index))
            .flatten();

        let Some(entry) = removed else {
            debug!(index, "cart index out of range");
            return;
        };

        announce(
            self.live_message,
            format!(
                "{} removed from cart. Total {}.",
                entry.name,
                self.formatted_total()
            ),
        );
    }

    /// Cart total in the display currency.
    pub fn formatted_total(self) -> String {
        format_price(self.cart.with_untracked(Cart::total), self.currency)
    }

    /// Format `price` in the display currency.
    pub fn display_price(self, price: Price) -> String {
        format_price(price, self.currency)
    }

    /// Open the detail modal and fetch the plant.
    pub fn open_detail(self, plant_id: PlantId) {
        let Some(ticket) = self.begin_detail(plant_id.clone()) else {
            return;
        };

        let config = self.config.get_value();

        task::spawn_local(async move {
            let client = CatalogClient::new(&config);
            let outcome = client.plant(&plant_id).await;

            if let Err(error) = &outcome {
                error!(%error, %plant_id, "failed to load plant detail");
            }

            self.finish_detail(ticket, outcome);
        });
    }

    /// Put the modal into its loading state and issue a ticket for the fetch.
    ///
    /// A plant without an id has nothing to fetch, so the modal stays shut.
    pub fn begin_detail(self, plant_id: PlantId) -> Option<RequestTicket> {
        if plant_id.is_empty() {
            debug!("plant has no id; detail not opened");
            return None;
        }

        self.modal.try_update(|modal| modal.open(plant_id))
    }

    /// Apply a detail response if its ticket is still current.
    pub fn finish_detail(
        self,
        ticket: RequestTicket,
        outcome: Result<Plant, CatalogError>,
    ) -> bool {
        let applied = self
            .modal
            .try_update(|modal| modal.resolve(ticket, outcome))
            .unwrap_or(false);

        if !applied {
            debug!(ticket = ticket.sequence(), "discarded stale plant detail");
        }

        applied
    }

    /// Close the modal and drop its content.
    pub fn close_detail(self) {
        self.modal.update(DetailModal::close);
    }

    fn show_toast(self, message: String) {
        self.toast.update(|toast| {
            toast.id = toast.id.saturating_add(1);
            toast.message = Some(message);
        });
    }

    /// Hide toast `id` once its animation ends, unless a newer one replaced it.
    pub fn dismiss_toast(self, id: u64) {
        self.toast.update(|toast| {
            if toast.id == id {
                toast.message = None;
            }
        });
    }
}
