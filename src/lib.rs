//! Verdant
//!
//! Catalog, cart and detail-view state for a plant storefront backed by a
//! remote JSON API. The browser page and the command line tool are both thin
//! front-ends over this crate.

pub mod cart;
pub mod catalog;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod extract;
pub mod modal;
pub mod prelude;
pub mod pricing;
pub mod records;
pub mod text;
