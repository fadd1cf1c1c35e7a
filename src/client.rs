//! Catalog HTTP client

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

use crate::{
    config::ApiConfig,
    endpoints::Endpoint,
    extract::{extract_record, extract_records},
    records::{Category, CategoryId, Plant, PlantId},
};

/// Errors that can occur while fetching from the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request could not be sent or its body could not be read.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("{endpoint} answered with status {status}")]
    UnexpectedStatus {
        /// Endpoint path that failed.
        endpoint: String,

        /// HTTP status code.
        status: u16,
    },

    /// The body was not valid JSON.
    #[error("malformed JSON body: {0}")]
    Json(#[from] serde_json::Error),

    /// The detail response held no plant record.
    #[error("plant {0} not found")]
    PlantNotFound(PlantId),
}

/// Something that can serve catalog records.
pub trait CatalogSource {
    /// Every category.
    async fn categories(&self) -> Result<Vec<Category>, CatalogError>;

    /// Every plant.
    async fn plants(&self) -> Result<Vec<Plant>, CatalogError>;

    /// Plants in one category, as filtered by the API.
    async fn plants_in_category(&self, id: &CategoryId) -> Result<Vec<Plant>, CatalogError>;

    /// A single plant's detail.
    async fn plant(&self, id: &PlantId) -> Result<Plant, CatalogError>;
}

/// HTTP client for the catalog API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    http: Client,
}

impl CatalogClient {
    /// Create a new client from the given configuration.
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_base_url(config.base_url.clone())
    }

    /// Create a new client for `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    /// The API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `endpoint` and parse its body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status or a body that
    /// is not JSON.
    pub async fn fetch_json(&self, endpoint: &Endpoint) -> Result<Value, CatalogError> {
        let url = endpoint.url(&self.base_url);

        debug!(%url, "fetching");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                endpoint: endpoint.path(),
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;

        Ok(serde_json::from_str(&text)?)
    }

    /// GET `endpoint` and extract its records, whatever the envelope.
    ///
    /// # Errors
    ///
    /// Returns an error when [`CatalogClient::fetch_json`] fails.
    pub async fn fetch_records(&self, endpoint: &Endpoint) -> Result<Vec<Value>, CatalogError> {
        let body = self.fetch_json(endpoint).await?;
        let records = extract_records(&body);

        debug!(%endpoint, count = records.len(), "extracted records");

        Ok(records)
    }

    async fn fetch_plants(&self, endpoint: &Endpoint) -> Result<Vec<Plant>, CatalogError> {
        Ok(self
            .fetch_records(endpoint)
            .await?
            .iter()
            .map(Plant::from_json)
            .collect())
    }
}

impl CatalogSource for CatalogClient {
    async fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        Ok(self
            .fetch_records(&Endpoint::Categories)
            .await?
            .iter()
            .map(Category::from_json)
            .collect())
    }

    async fn plants(&self) -> Result<Vec<Plant>, CatalogError> {
        self.fetch_plants(&Endpoint::Plants).await
    }

    async fn plants_in_category(&self, id: &CategoryId) -> Result<Vec<Plant>, CatalogError> {
        self.fetch_plants(&Endpoint::PlantsInCategory(id.clone()))
            .await
    }

    async fn plant(&self, id: &PlantId) -> Result<Plant, CatalogError> {
        let body = self.fetch_json(&Endpoint::Plant(id.clone())).await?;

        let mut plant = extract_record(&body)
            .map(|record| Plant::from_json(&record))
            .ok_or_else(|| CatalogError::PlantNotFound(id.clone()))?;

        if plant.id.is_empty() {
            plant.id = id.clone();
        }

        Ok(plant)
    }
}

/// Log a failed listing and fall back to no items.
///
/// The page treats a failed listing as an empty one; the failure only reaches
/// the diagnostic log.
pub fn or_empty<T>(result: Result<Vec<T>, CatalogError>, what: &str) -> Vec<T> {
    result.unwrap_or_else(|error| {
        error!(%error, "failed to load {what}");

        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_empty_passes_items_through() {
        let items = or_empty(Ok(vec![1, 2, 3]), "numbers");

        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_or_empty_swallows_errors() {
        let result: Result<Vec<u8>, CatalogError> = Err(CatalogError::UnexpectedStatus {
            endpoint: "/plants".to_string(),
            status: 500,
        });

        assert!(or_empty(result, "plants").is_empty());
    }

    #[test]
    fn test_error_messages() {
        let status = CatalogError::UnexpectedStatus {
            endpoint: "/categories".to_string(),
            status: 404,
        };

        assert_eq!(status.to_string(), "/categories answered with status 404");
        assert_eq!(
            CatalogError::PlantNotFound(PlantId::from("12")).to_string(),
            "plant 12 not found"
        );
    }

    #[test]
    fn test_client_base_url() {
        let client = CatalogClient::new(&ApiConfig::default());

        assert_eq!(client.base_url(), crate::endpoints::DEFAULT_API_BASE);
    }
}
