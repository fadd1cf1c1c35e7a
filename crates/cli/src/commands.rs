//! Subcommands

use std::io;

use clap::{Args, Subcommand};
use rusty_money::iso::Currency;
use tracing::{debug, info};

use verdant::prelude::*;

use crate::{errors::CliError, render};

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every category
    Categories,

    /// List plants, optionally filtered by category
    Plants(PlantsArgs),

    /// Show one plant's detail
    Plant(PlantArgs),

    /// Quote a cart built from plant ids
    Cart(CartArgs),
}

/// Arguments for `verdant plants`.
#[derive(Debug, Args)]
pub struct PlantsArgs {
    /// Only show plants in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Ask the API to filter instead of filtering the full catalog locally
    #[arg(long, requires = "category")]
    pub remote: bool,
}

/// Arguments for `verdant plant`.
#[derive(Debug, Args)]
pub struct PlantArgs {
    /// Plant id
    pub id: String,
}

/// Arguments for `verdant cart`.
#[derive(Debug, Args)]
pub struct CartArgs {
    /// Plant ids to add, in order; repeat an id to add it twice
    #[arg(required = true)]
    pub ids: Vec<String>,
}

impl Command {
    /// Run the command against `source`, writing to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read, a cart id is unknown or
    /// the output cannot be written.
    pub async fn run<S: CatalogSource>(
        self,
        source: &S,
        currency: &'static Currency,
        out: &mut impl io::Write,
    ) -> Result<(), CliError> {
        match self {
            Self::Categories => categories(source, out).await,
            Self::Plants(args) => plants(source, args, currency, out).await,
            Self::Plant(args) => plant(source, &PlantId::from(args.id), currency, out).await,
            Self::Cart(args) => cart(source, args.ids, currency, out).await,
        }
    }
}

async fn categories<S: CatalogSource>(source: &S, out: &mut impl io::Write) -> Result<(), CliError> {
    let categories = source.categories().await?;

    render::write_categories(out, &categories)?;

    Ok(())
}

async fn plants<S: CatalogSource>(
    source: &S,
    args: PlantsArgs,
    currency: &'static Currency,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let filter = args
        .category
        .as_deref()
        .map_or(CategoryFilter::All, CategoryFilter::from_control_id);

    if args.remote
        && let CategoryFilter::Category(id) = &filter
    {
        info!(category = %id, "filtering on the API");

        let plants = source.plants_in_category(id).await?;
        let listed: Vec<&Plant> = plants.iter().collect();

        render::write_plants(out, &listed, currency)?;

        return Ok(());
    }

    let catalog = Catalog::new(
        source.plants().await?,
        or_empty(source.categories().await, "categories"),
    );

    debug!(%filter, "filtering locally");

    render::write_plants(out, &catalog.filter(&filter), currency)?;

    Ok(())
}

async fn plant<S: CatalogSource>(
    source: &S,
    id: &PlantId,
    currency: &'static Currency,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let plant = source.plant(id).await?;

    render::write_plant(out, &plant, currency)?;

    Ok(())
}

async fn cart<S: CatalogSource>(
    source: &S,
    ids: Vec<String>,
    currency: &'static Currency,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let catalog = Catalog::new(source.plants().await?, Vec::new());
    let mut cart = Cart::new();

    for id in ids.into_iter().map(PlantId::from) {
        let plant = catalog
            .plant(&id)
            .ok_or_else(|| CliError::UnknownPlant(id.clone()))?;

        cart.add(CartEntry::from(plant));
    }

    render::write_cart(out, &cart, currency)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    /// Serves a fixed catalog; `/category/{id}` only answers for id 1.
    #[derive(Debug, Default)]
    struct FixtureSource {
        plants: Vec<Plant>,
        categories: Vec<Category>,
        categories_fail: bool,
    }

    impl FixtureSource {
        fn new() -> Self {
            Self {
                plants: vec![
                    Plant::from_json(&json!({"id": 1, "name": "Mango Tree", "category": "Fruit Tree", "category_id": 1, "price": 500})),
                    Plant::from_json(&json!({"id": 2, "name": "Neem Tree", "category": "Medicinal Tree", "price": 400})),
                    Plant::from_json(&json!({"id": 3, "name": "Guava Tree", "category": "fruit tree", "price": 350})),
                ],
                categories: vec![
                    Category::from_json(&json!({"id": 1, "category_name": "Fruit Tree"})),
                    Category::from_json(&json!({"id": 2, "category_name": "Medicinal Tree"})),
                ],
                categories_fail: false,
            }
        }
    }

    impl CatalogSource for FixtureSource {
        async fn categories(&self) -> Result<Vec<Category>, CatalogError> {
            if self.categories_fail {
                return Err(CatalogError::UnexpectedStatus {
                    endpoint: "/categories".to_string(),
                    status: 500,
                });
            }

            Ok(self.categories.clone())
        }

        async fn plants(&self) -> Result<Vec<Plant>, CatalogError> {
            Ok(self.plants.clone())
        }

        async fn plants_in_category(&self, id: &CategoryId) -> Result<Vec<Plant>, CatalogError> {
            Ok(if id.as_str() == "1" {
                self.plants.iter().take(1).cloned().collect()
            } else {
                Vec::new()
            })
        }

        async fn plant(&self, id: &PlantId) -> Result<Plant, CatalogError> {
            self.plants
                .iter()
                .find(|plant| &plant.id == id)
                .cloned()
                .ok_or_else(|| CatalogError::PlantNotFound(id.clone()))
        }
    }

    async fn output(command: Command, source: &FixtureSource) -> Result<String, CliError> {
        let mut out = Vec::new();

        command.run(source, DEFAULT_CURRENCY, &mut out).await?;

        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    fn plants_command(category: Option<&str>, remote: bool) -> Command {
        Command::Plants(PlantsArgs {
            category: category.map(str::to_string),
            remote,
        })
    }

    #[tokio::test]
    async fn test_categories_listing() -> TestResult {
        let text = output(Command::Categories, &FixtureSource::new()).await?;

        assert!(text.contains("Fruit Tree"));
        assert!(text.contains("Medicinal Tree"));

        Ok(())
    }

    #[tokio::test]
    async fn test_local_filter_matches_id_then_name() -> TestResult {
        let text = output(plants_command(Some("1"), false), &FixtureSource::new()).await?;

        assert!(text.contains("Mango Tree"));
        assert!(text.contains("Guava Tree"));
        assert!(!text.contains("Neem Tree"));
        assert!(text.ends_with("2 plants\n"));

        Ok(())
    }

    #[tokio::test]
    async fn test_all_lists_full_catalog() -> TestResult {
        let source = FixtureSource::new();

        let everything = output(plants_command(None, false), &source).await?;
        let all = output(plants_command(Some("all"), false), &source).await?;

        assert!(everything.ends_with("3 plants\n"));
        assert_eq!(everything, all);

        Ok(())
    }

    #[tokio::test]
    async fn test_remote_filter_uses_category_endpoint() -> TestResult {
        let text = output(plants_command(Some("1"), true), &FixtureSource::new()).await?;

        assert!(text.contains("Mango Tree"));
        assert!(!text.contains("Guava Tree"));

        Ok(())
    }

    #[tokio::test]
    async fn test_local_filter_survives_category_failure() -> TestResult {
        let source = FixtureSource {
            categories_fail: true,
            ..FixtureSource::new()
        };

        let text = output(plants_command(Some("1"), false), &source).await?;

        assert!(text.contains("Mango Tree"));
        assert!(text.ends_with("\n1 plant\n"));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_category_lists_nothing() -> TestResult {
        let text = output(plants_command(Some("99"), false), &FixtureSource::new()).await?;

        assert_eq!(text, "No plants found.\n");

        Ok(())
    }

    #[tokio::test]
    async fn test_plant_detail() -> TestResult {
        let command = Command::Plant(PlantArgs { id: "2".to_string() });

        let text = output(command, &FixtureSource::new()).await?;

        assert!(text.starts_with("Neem Tree\n"));
        assert!(text.contains("Price: ৳400"));

        Ok(())
    }

    #[tokio::test]
    async fn test_cart_keeps_duplicates_and_totals() -> TestResult {
        let command = Command::Cart(CartArgs {
            ids: vec!["1".to_string(), "3".to_string(), "1".to_string()],
        });

        let text = output(command, &FixtureSource::new()).await?;

        assert_eq!(text.matches("Mango Tree").count(), 2);
        assert!(text.ends_with("Total: ৳1350\n"));

        Ok(())
    }

    #[tokio::test]
    async fn test_cart_rejects_unknown_id() {
        let command = Command::Cart(CartArgs {
            ids: vec!["1".to_string(), "42".to_string()],
        });

        let result = output(command, &FixtureSource::new()).await;

        assert!(matches!(result, Err(CliError::UnknownPlant(id)) if id.as_str() == "42"));
    }
}
