//! Endpoints

use std::fmt;

use crate::records::{CategoryId, PlantId};

/// Base URL of the public plant catalog API.
pub const DEFAULT_API_BASE: &str = "https://openapi.programming-hero.com/api";

/// A GET endpoint exposed by the catalog API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Every category.
    Categories,

    /// Every plant.
    Plants,

    /// Plants belonging to one category.
    PlantsInCategory(CategoryId),

    /// A single plant's detail.
    Plant(PlantId),
}

impl Endpoint {
    /// Path relative to the API base, always starting with `/`.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Categories => "/categories".to_string(),
            Endpoint::Plants => "/plants".to_string(),
            Endpoint::PlantsInCategory(id) => format!("/category/{id}"),
            Endpoint::Plant(id) => format!("/plant/{id}"),
        }
    }

    /// Absolute URL for this endpoint under `base`.
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Endpoint::Categories.path(), "/categories");
        assert_eq!(Endpoint::Plants.path(), "/plants");
        assert_eq!(
            Endpoint::PlantsInCategory(CategoryId::from("3")).path(),
            "/category/3"
        );
        assert_eq!(Endpoint::Plant(PlantId::from("17")).path(), "/plant/17");
    }

    #[test]
    fn test_url_joins_base() {
        let url = Endpoint::Plants.url(DEFAULT_API_BASE);

        assert_eq!(url, "https://openapi.programming-hero.com/api/plants");
    }

    #[test]
    fn test_url_tolerates_trailing_slash() {
        let url = Endpoint::Plant(PlantId::from("4")).url("http://localhost:8080/api/");

        assert_eq!(url, "http://localhost:8080/api/plant/4");
    }
}
