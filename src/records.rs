//! Records
//!
//! The catalog API names the same field differently from one response to the
//! next (`name`, `plant_name`, `title`, ...). Records are normalized once, at
//! ingestion, into fixed types with defaulted fields so nothing downstream has
//! to probe aliases again.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::pricing::Price;

/// Image shown when a plant record carries none.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x250?text=No+Image";

/// Name shown when a plant record carries none.
pub const DEFAULT_PLANT_NAME: &str = "No name";

/// Category badge shown when a plant record carries none.
pub const DEFAULT_PLANT_CATEGORY: &str = "General";

/// Name shown when a category record carries none.
pub const DEFAULT_CATEGORY_NAME: &str = "Category";

/// Price assumed when a plant record carries none.
pub const DEFAULT_PRICE: i64 = 500;

/// Detail text shown when a plant has no description.
pub const MISSING_DETAILS: &str = "No details available.";

const PLANT_ID_KEYS: [&str; 4] = ["id", "plant_id", "plantId", "_id"];
const PLANT_NAME_KEYS: [&str; 3] = ["name", "plant_name", "title"];
const IMAGE_KEYS: [&str; 4] = ["image", "thumbnail", "img", "image_url"];
const DESCRIPTION_KEYS: [&str; 4] = ["description", "details", "about", "short_description"];
const PLANT_CATEGORY_KEYS: [&str; 3] = ["category", "category_name", "categoryName"];
const PLANT_CATEGORY_ID_KEYS: [&str; 2] = ["category_id", "categoryId"];
const PRICE_KEYS: [&str; 4] = ["price", "cost", "amount", "price_in_tk"];
const CATEGORY_ID_KEYS: [&str; 3] = ["category_id", "id", "categoryId"];
const CATEGORY_NAME_KEYS: [&str; 3] = ["category_name", "name", "title"];

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// The identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the record carried no identifier at all.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id! {
    /// Plant identifier. Numeric ids from the API are kept in their decimal form.
    PlantId
}

string_id! {
    /// Category identifier. Numeric ids from the API are kept in their decimal form.
    CategoryId
}

/// A normalized plant record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    /// Plant id.
    pub id: PlantId,

    /// Display name.
    pub name: String,

    /// Image URL.
    pub image_url: String,

    /// Full description, possibly empty.
    pub description: String,

    /// Category display name.
    pub category: String,

    /// Category id, when the record carries one.
    pub category_id: Option<CategoryId>,

    /// Unit price.
    pub price: Price,
}

impl Plant {
    /// Normalize a raw API record.
    pub fn from_json(record: &Value) -> Self {
        Self {
            id: text_field(record, &PLANT_ID_KEYS)
                .map(PlantId::from)
                .unwrap_or_default(),
            name: text_field(record, &PLANT_NAME_KEYS)
                .unwrap_or_else(|| DEFAULT_PLANT_NAME.to_string()),
            image_url: text_field(record, &IMAGE_KEYS)
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            description: text_field(record, &DESCRIPTION_KEYS).unwrap_or_default(),
            category: text_field(record, &PLANT_CATEGORY_KEYS)
                .or_else(|| first_listed_category(record))
                .unwrap_or_else(|| DEFAULT_PLANT_CATEGORY.to_string()),
            category_id: text_field(record, &PLANT_CATEGORY_ID_KEYS).map(CategoryId::from),
            price: price_field(record, &PRICE_KEYS).unwrap_or(Price::from(DEFAULT_PRICE)),
        }
    }

    /// Description for the detail view, with a stand-in when empty.
    pub fn detail_description(&self) -> &str {
        if self.description.is_empty() {
            MISSING_DETAILS
        } else {
            &self.description
        }
    }
}

/// A normalized category record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category id.
    pub id: CategoryId,

    /// Display name.
    pub name: String,
}

impl Category {
    /// Normalize a raw API record.
    pub fn from_json(record: &Value) -> Self {
        Self {
            id: text_field(record, &CATEGORY_ID_KEYS)
                .map(CategoryId::from)
                .unwrap_or_default(),
            name: text_field(record, &CATEGORY_NAME_KEYS)
                .unwrap_or_else(|| DEFAULT_CATEGORY_NAME.to_string()),
        }
    }
}

/// Values under `keys` that count as present, in alias order.
///
/// Missing fields, `null`, `false` and blank strings are absent.
fn present<'a>(record: &'a Value, keys: &'a [&str]) -> impl Iterator<Item = &'a Value> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .filter(|value| match value {
            Value::Null | Value::Bool(false) => false,
            Value::String(text) => !text.trim().is_empty(),
            _ => true,
        })
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn text_field(record: &Value, keys: &[&str]) -> Option<String> {
    present(record, keys).find_map(as_text)
}

fn price_field(record: &Value, keys: &[&str]) -> Option<Price> {
    present(record, keys).find_map(Price::from_json)
}

fn first_listed_category(record: &Value) -> Option<String> {
    let first = record.get("categories")?.as_array()?.first()?;

    as_text(first)
        .or_else(|| text_field(first, &CATEGORY_NAME_KEYS))
        .filter(|text| !text.trim().is_empty())
}
