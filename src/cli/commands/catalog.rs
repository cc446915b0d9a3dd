//! Catalog listing command handler.

use crate::catalog::{self, PRODUCTS};
use crate::ui::Style;

/// Prints the product lineup to stdout.
pub fn print_catalog() {
    println!("{}", Style::header("DULA FF Premium Lineup"));
    println!();
    for product in PRODUCTS {
        println!(
            "  {}  {}{}",
            Style::value(product.name),
            Style::price(catalog::format_inr(product.price)),
            if product.is_new {
                format!("  {}", Style::success("[NEW]"))
            } else {
                String::new()
            }
        );
        println!(
            "    {}  {}",
            Style::label(product.category),
            Style::secondary(format!("rating {:.1}/5", product.rating))
        );
        println!("    {}", Style::secondary(product.description));
        println!("    {}", Style::hint(product.specs.join(" · ")));
        println!();
    }
}
