//! Verdant prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartEntry},
    catalog::{Catalog, CategoryFilter, CategorySelection},
    client::{CatalogClient, CatalogError, CatalogSource, or_empty},
    config::{ApiConfig, ConfigError},
    endpoints::{DEFAULT_API_BASE, Endpoint},
    extract::{extract_record, extract_records},
    modal::{DetailModal, ModalState, RequestTicket},
    pricing::{DEFAULT_CURRENCY, Price, format_price},
    records::{Category, CategoryId, Plant, PlantId},
    text::truncate_description,
};
