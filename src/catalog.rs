//! Catalog
//!
//! The plants and categories fetched for a session, and client-side filtering
//! over them.

use std::fmt;

use crate::records::{Category, CategoryId, Plant, PlantId};

/// Which slice of the catalog is on show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// Every plant.
    #[default]
    All,

    /// Plants in one category.
    Category(CategoryId),
}

impl CategoryFilter {
    /// Identifier carried by the synthetic "all" control.
    pub const ALL_ID: &'static str = "all";

    /// Parse the identifier carried by a category control.
    pub fn from_control_id(id: &str) -> Self {
        if id == Self::ALL_ID {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(CategoryId::from(id))
        }
    }

    /// Identifier carried by this filter's control.
    pub fn control_id(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL_ID,
            CategoryFilter::Category(id) => id.as_str(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.control_id())
    }
}

/// Plants and categories fetched for the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    plants: Vec<Plant>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Create a catalog from fetched records.
    pub fn new(plants: Vec<Plant>, categories: Vec<Category>) -> Self {
        Self { plants, categories }
    }

    /// Every plant, in fetched order.
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    /// Every category, in fetched order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Replace the plants, keeping categories.
    pub fn set_plants(&mut self, plants: Vec<Plant>) {
        self.plants = plants;
    }

    /// Replace the categories, keeping plants.
    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
    }

    /// Look up a category by id.
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| &category.id == id)
    }

    /// Look up a plant by id.
    pub fn plant(&self, id: &PlantId) -> Option<&Plant> {
        self.plants.iter().find(|plant| &plant.id == id)
    }

    /// Plants visible under `filter`, in fetched order.
    ///
    /// A plant belongs to a category when its category id matches. Plants
    /// that carry only a category name match on the category's display name,
    /// ignoring ASCII case.
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&Plant> {
        match filter {
            CategoryFilter::All => self.plants.iter().collect(),
            CategoryFilter::Category(id) => {
                let name = self.category(id).map(|category| category.name.as_str());

                self.plants
                    .iter()
                    .filter(|plant| in_category(plant, id, name))
                    .collect()
            }
        }
    }
}

fn in_category(plant: &Plant, id: &CategoryId, name: Option<&str>) -> bool {
    match &plant.category_id {
        Some(plant_category) => plant_category == id,
        None => name.is_some_and(|name| plant.category.eq_ignore_ascii_case(name)),
    }
}

/// Mutually exclusive selection of a category control.
///
/// Starts with no control active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySelection {
    active: Option<CategoryFilter>,
}

impl CategorySelection {
    /// Make `filter` the only active control.
    pub fn select(&mut self, filter: CategoryFilter) {
        self.active = Some(filter);
    }

    /// The active control, if any has been chosen.
    pub fn active(&self) -> Option<&CategoryFilter> {
        self.active.as_ref()
    }

    /// Whether `filter`'s control is the active one.
    pub fn is_active(&self, filter: &CategoryFilter) -> bool {
        self.active.as_ref() == Some(filter)
    }

    /// The filter to apply; everything until a control is chosen.
    pub fn effective(&self) -> CategoryFilter {
        self.active.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn plant(id: &str, category: &str, category_id: Option<&str>) -> Plant {
        let mut record = json!({"id": id, "name": id, "category": category});

        if let (Some(category_id), Some(fields)) = (category_id, record.as_object_mut()) {
            fields.insert("category_id".to_string(), json!(category_id));
        }

        Plant::from_json(&record)
    }

    fn category(id: &str, name: &str) -> Category {
        Category::from_json(&json!({"id": id, "category_name": name}))
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(
            vec![
                plant("mango", "Fruit Tree", None),
                plant("neem", "Medicinal Tree", None),
                plant("guava", "fruit tree", None),
                plant("rose", "Flowering Shrub", Some("3")),
            ],
            vec![
                category("1", "Fruit Tree"),
                category("2", "Medicinal Tree"),
                category("3", "Flowering Shrub"),
            ],
        )
    }

    fn ids(plants: &[&Plant]) -> Vec<String> {
        plants.iter().map(|plant| plant.id.to_string()).collect()
    }

    #[test]
    fn test_filter_all_keeps_order() {
        let catalog = sample_catalog();

        assert_eq!(
            ids(&catalog.filter(&CategoryFilter::All)),
            vec!["mango", "neem", "guava", "rose"]
        );
    }

    #[test]
    fn test_filter_by_category_name_match() {
        let catalog = sample_catalog();

        let fruit = catalog.filter(&CategoryFilter::Category(CategoryId::from("1")));

        assert_eq!(ids(&fruit), vec!["mango", "guava"]);
    }

    #[test]
    fn test_filter_by_category_id() {
        let catalog = sample_catalog();

        let shrubs = catalog.filter(&CategoryFilter::Category(CategoryId::from("3")));

        assert_eq!(ids(&shrubs), vec!["rose"]);
    }

    #[test]
    fn test_filter_unknown_category_is_empty() {
        let catalog = sample_catalog();

        assert!(
            catalog
                .filter(&CategoryFilter::Category(CategoryId::from("99")))
                .is_empty()
        );
    }

    #[test]
    fn test_all_after_category_restores_full_count() {
        let catalog = sample_catalog();
        let mut selection = CategorySelection::default();

        selection.select(CategoryFilter::Category(CategoryId::from("2")));
        assert_eq!(catalog.filter(&selection.effective()).len(), 1);

        selection.select(CategoryFilter::All);
        assert_eq!(
            catalog.filter(&selection.effective()).len(),
            catalog.plants().len()
        );
    }

    #[test]
    fn test_selection_starts_inactive() {
        let selection = CategorySelection::default();

        assert_eq!(selection.active(), None);
        assert!(!selection.is_active(&CategoryFilter::All));
        assert_eq!(selection.effective(), CategoryFilter::All);
    }

    #[test]
    fn test_selection_is_mutually_exclusive() {
        let mut selection = CategorySelection::default();
        let fruit = CategoryFilter::Category(CategoryId::from("1"));

        selection.select(CategoryFilter::All);
        selection.select(fruit.clone());

        assert!(selection.is_active(&fruit));
        assert!(!selection.is_active(&CategoryFilter::All));
    }

    #[test]
    fn test_control_id_round_trip() {
        assert_eq!(CategoryFilter::from_control_id("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_control_id("7").control_id(),
            "7"
        );
    }

    #[test]
    fn test_lookup_plant() {
        let catalog = sample_catalog();

        assert_eq!(
            catalog
                .plant(&PlantId::from("neem"))
                .map(|plant| plant.category.as_str()),
            Some("Medicinal Tree")
        );
        assert!(catalog.plant(&PlantId::from("oak")).is_none());
    }
}
