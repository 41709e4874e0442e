//! Catalog inspection commands.
//!
//! # Usage
//!
//! ```bash
//! xyra-cli catalog list --category Lures
//! xyra-cli catalog show muse-bfs-pink --related 2
//! ```

use std::fmt::Write;

use tracing::info;
use xyra_core::{Catalog, Category, Product, StaticCatalog};

use super::CliError;

/// List products as a table or JSON.
///
/// # Errors
///
/// Returns `CliError::UnknownCategory` for an unrecognized category name.
pub fn list(category: Option<&str>, json: bool) -> Result<String, CliError> {
    let catalog = StaticCatalog::xyra();

    let products: Vec<&Product> = match category {
        Some(name) => {
            let category =
                Category::from_name(name).ok_or_else(|| CliError::UnknownCategory(name.into()))?;
            catalog.by_category(category)
        }
        None => catalog.list_all().iter().collect(),
    };

    info!(count = products.len(), "Listing products");

    if json {
        return Ok(serde_json::to_string_pretty(&products)?);
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:<22} {:<7} {:>8}  NAME", "ID", "CATEGORY", "PRICE");
    for product in products {
        let _ = writeln!(out, "{}", row(product));
    }
    Ok(out.trim_end().to_string())
}

/// Show one product with its related products.
///
/// # Errors
///
/// Returns `CliError::ProductNotFound` if no product has `id`.
pub fn show(id: &str, related: usize) -> Result<String, CliError> {
    let catalog = StaticCatalog::xyra();
    let product = catalog
        .get_by_id(id)
        .ok_or_else(|| CliError::ProductNotFound(id.into()))?;

    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", product.name, product.id);
    let _ = writeln!(out, "Category: {}", product.category);
    let _ = writeln!(out, "Price:    {}", product.price);
    let _ = writeln!(out, "Image:    {}", product.image_ref);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", product.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "Features:");
    for feature in &product.features {
        let _ = writeln!(out, "  - {feature}");
    }

    let related = catalog.get_related(id, related);
    if !related.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Related:");
        for product in related {
            let _ = writeln!(out, "  {}", row(product));
        }
    }

    Ok(out.trim_end().to_string())
}

fn row(product: &Product) -> String {
    format!(
        "{:<22} {:<7} {:>8}  {}",
        product.id.as_str(),
        product.category.name(),
        product.price.to_string(),
        product.name
    )
}
