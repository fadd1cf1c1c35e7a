//! Table rendering

use std::io;

use rusty_money::iso::Currency;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

use verdant::prelude::*;

fn plant_count_text(count: usize) -> String {
    let label = if count == 1 { "plant" } else { "plants" };

    format!("{count} {label}")
}

fn write_table(
    out: &mut impl io::Write,
    builder: Builder,
    price_column: Option<usize>,
) -> io::Result<()> {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);

    if let Some(column) = price_column {
        table.modify(Columns::one(column), Alignment::right());
    }

    writeln!(out, "{table}")
}

/// Write the category list.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn write_categories(out: &mut impl io::Write, categories: &[Category]) -> io::Result<()> {
    if categories.is_empty() {
        return writeln!(out, "no categories found");
    }

    let mut builder = Builder::default();

    builder.push_record(["Id", "Name"]);

    for category in categories {
        builder.push_record([category.id.to_string(), category.name.clone()]);
    }

    write_table(out, builder, None)
}

/// Write a plant listing with card-length descriptions.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn write_plants(
    out: &mut impl io::Write,
    plants: &[&Plant],
    currency: &'static Currency,
) -> io::Result<()> {
    if plants.is_empty() {
        return writeln!(out, "No plants found.");
    }

    let mut builder = Builder::default();

    builder.push_record(["Id", "Name", "Category", "Price", "Description"]);

    for plant in plants {
        builder.push_record([
            plant.id.to_string(),
            plant.name.clone(),
            plant.category.clone(),
            format_price(plant.price, currency),
            truncate_description(&plant.description).into_owned(),
        ]);
    }

    write_table(out, builder, Some(3))?;
    writeln!(out, "{}", plant_count_text(plants.len()))
}

/// Write one plant's detail view.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn write_plant(
    out: &mut impl io::Write,
    plant: &Plant,
    currency: &'static Currency,
) -> io::Result<()> {
    writeln!(out, "{}", plant.name)?;
    writeln!(out, "Category: {}", plant.category)?;
    writeln!(out, "Price: {}", format_price(plant.price, currency))?;
    writeln!(out, "Image: {}", plant.image_url)?;
    writeln!(out)?;
    writeln!(out, "{}", plant.detail_description())
}

/// Write cart lines followed by the total.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn write_cart(
    out: &mut impl io::Write,
    cart: &Cart,
    currency: &'static Currency,
) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["#", "Item", "Price"]);

    for (index, entry) in cart.iter().enumerate() {
        builder.push_record([
            (index + 1).to_string(),
            entry.name.clone(),
            format_price(entry.price, currency),
        ]);
    }

    write_table(out, builder, Some(2))?;
    writeln!(out, "Total: {}", format_price(cart.total(), currency))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn plant(name: &str, price: i64) -> Plant {
        Plant::from_json(&serde_json::json!({
            "id": 1,
            "name": name,
            "category": "Fruit Tree",
            "price": price,
        }))
    }

    fn rendered(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> TestResult<String> {
        let mut out = Vec::new();

        write(&mut out)?;

        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_empty_listings() -> TestResult {
        assert_eq!(rendered(|out| write_categories(out, &[]))?, "no categories found\n");
        assert_eq!(
            rendered(|out| write_plants(out, &[], DEFAULT_CURRENCY))?,
            "No plants found.\n"
        );

        Ok(())
    }

    #[test]
    fn test_plant_count_text() {
        assert_eq!(plant_count_text(1), "1 plant");
        assert_eq!(plant_count_text(3), "3 plants");
    }

    #[test]
    fn test_single_plant_listing_is_singular() -> TestResult {
        let mango = plant("Mango Tree", 500);
        let text = rendered(|out| write_plants(out, &[&mango], DEFAULT_CURRENCY))?;

        assert!(text.ends_with("\n1 plant\n"));

        Ok(())
    }

    #[test]
    fn test_plant_detail_falls_back_to_placeholder_text() -> TestResult {
        let text = rendered(|out| write_plant(out, &plant("Mango Tree", 500), DEFAULT_CURRENCY))?;

        assert!(text.starts_with("Mango Tree\n"));
        assert!(text.contains("Price: ৳500"));
        assert!(text.ends_with("No details available.\n"));

        Ok(())
    }

    #[test]
    fn test_cart_total_line() -> TestResult {
        let mut cart = Cart::new();

        cart.add(CartEntry::from(&plant("Mango Tree", 500)));
        cart.add(CartEntry::from(&plant("Mango Tree", 500)));

        let text = rendered(|out| write_cart(out, &cart, DEFAULT_CURRENCY))?;

        assert_eq!(text.matches("Mango Tree").count(), 2);
        assert!(text.ends_with("Total: ৳1000\n"));

        Ok(())
    }
}
