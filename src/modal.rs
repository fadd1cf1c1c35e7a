//! Detail modal
//!
//! The modal moves `Closed -> Loading -> (Populated | Failed) -> Closed`.
//! Opening is re-entrant: opening while already open restarts at `Loading`.
//! Every open issues a [`RequestTicket`]; only the latest ticket may resolve
//! the modal, so a slow response for a product the user has already moved on
//! from is dropped instead of overwriting the newer one.

use std::mem;

use crate::records::{Plant, PlantId};

/// Tag identifying one detail request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    /// Sequence number of this request.
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// What the modal is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    /// Hidden, with no content.
    #[default]
    Closed,

    /// Waiting for a plant's detail.
    Loading {
        /// Plant being fetched.
        plant_id: PlantId,
    },

    /// Showing a plant's detail.
    Populated(Plant),

    /// The detail could not be fetched.
    Failed {
        /// Plant that failed to load.
        plant_id: PlantId,
    },
}

/// Detail modal state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailModal {
    state: ModalState,
    issued: u64,
    pending: Option<RequestTicket>,
}

impl DetailModal {
    /// Create a closed modal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading `plant_id`, superseding any outstanding request.
    pub fn open(&mut self, plant_id: PlantId) -> RequestTicket {
        self.issued = self.issued.saturating_add(1);

        let ticket = RequestTicket(self.issued);

        self.pending = Some(ticket);
        self.state = ModalState::Loading { plant_id };

        ticket
    }

    /// Apply the outcome of the request tagged `ticket`.
    ///
    /// Returns `false`, leaving the modal untouched, when the ticket has been
    /// superseded by a later open or the modal was closed in the meantime.
    pub fn resolve<E>(&mut self, ticket: RequestTicket, outcome: Result<Plant, E>) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }

        self.pending = None;

        let plant_id = match mem::take(&mut self.state) {
            ModalState::Loading { plant_id } | ModalState::Failed { plant_id } => plant_id,
            ModalState::Populated(plant) => plant.id,
            ModalState::Closed => PlantId::default(),
        };

        self.state = match outcome {
            Ok(plant) => ModalState::Populated(plant),
            Err(_) => ModalState::Failed { plant_id },
        };

        true
    }

    /// Hide the modal, dropping its content and any outstanding request.
    pub fn close(&mut self) {
        self.state = ModalState::Closed;
        self.pending = None;
    }

    /// Current state.
    pub fn state(&self) -> &ModalState {
        &self.state
    }

    /// Whether the modal is visible.
    pub fn is_open(&self) -> bool {
        !matches!(self.state, ModalState::Closed)
    }

    /// The plant on show, once populated.
    pub fn plant(&self) -> Option<&Plant> {
        match &self.state {
            ModalState::Populated(plant) => Some(plant),
            _ => None,
        }
    }
}
