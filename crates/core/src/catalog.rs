//! Read-only product catalog.
//!
//! The storefront sells a small fixed range, so the catalog is an in-memory
//! list built at startup. [`Catalog`] is the seam the storefront and CLI read
//! through; [`StaticCatalog`] is the only implementation.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{CurrencyCode, Price, ProductId};

/// Product category, used for the shop filter and related products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Reels,
    Lures,
    Baits,
    Gifts,
}

impl Category {
    /// Every category, in shop filter order.
    pub const ALL: [Self; 4] = [Self::Reels, Self::Lures, Self::Baits, Self::Gifts];

    /// Display name, also used as the `?category=` query value.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reels => "Reels",
            Self::Lures => "Lures",
            Self::Baits => "Baits",
            Self::Gifts => "Gifts",
        }
    }

    /// Dictionary key for the translated category label.
    #[must_use]
    pub const fn dictionary_key(self) -> &'static str {
        match self {
            Self::Reels => "category.reels",
            Self::Lures => "category.lures",
            Self::Baits => "category.baits",
            Self::Gifts => "category.gifts",
        }
    }

    /// Parse a category name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: Category,
    pub description: String,
    pub features: Vec<String>,
    /// Image reference; currently a placeholder caption until photography lands.
    pub image_ref: String,
}

/// Read access to product reference data.
pub trait Catalog {
    /// All products, in catalog order.
    fn list_all(&self) -> &[Product];

    /// Find a product by ID.
    fn get_by_id(&self, id: &str) -> Option<&Product> {
        self.list_all().iter().find(|product| product.id == *id)
    }

    /// Products in the given category, in catalog order.
    fn by_category(&self, category: Category) -> Vec<&Product> {
        self.list_all()
            .iter()
            .filter(|product| product.category == category)
            .collect()
    }

    /// Up to `limit` other products from the same category as `id`.
    ///
    /// For an unknown `id` this returns the first `limit` products so the
    /// "you may also like" strip is never empty.
    fn get_related(&self, id: &str, limit: usize) -> Vec<&Product> {
        let Some(current) = self.get_by_id(id) else {
            return self.list_all().iter().take(limit).collect();
        };

        self.list_all()
            .iter()
            .filter(|product| product.id != current.id && product.category == current.category)
            .take(limit)
            .collect()
    }
}

/// Catalog backed by a fixed list of products.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    /// Create a catalog from an explicit product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The XYRA product range.
    #[must_use]
    pub fn xyra() -> Self {
        Self::new(vec![
            product(
                "muse-bfs-pink",
                "Muse Air BFS Reel",
                10999,
                Category::Reels,
                "Our flagship BFS reel, designed with the discerning angler in mind. The Muse Air features a real flower resin knob that brings nature's beauty to every cast.",
                &["28mm Shallow Spool", "130g Ultra-light", "Real Flower Resin Knob"],
                "[PRODUCT: Pink Micro Reel Side Profile]",
            ),
            product(
                "blanc-de-chine-spin",
                "Blanc De Chine Spinning Reel",
                9999,
                Category::Reels,
                "Inspired by the finest porcelain, this spinning reel combines elegance with performance. The creamy matte finish and champagne gold trim create a timeless aesthetic.",
                &["Creamy Matte Finish", "Champagne Gold Trim", "Gold Flake Knob"],
                "[PRODUCT: White Spinning Reel]",
            ),
            product(
                "crystal-minnow",
                "Crystal Minnow Pendant",
                1699,
                Category::Lures,
                "A lure that doubles as jewelry. The Crystal Minnow catches light and fish with equal grace, featuring intricate laser-etched internals that create mesmerizing prism effects.",
                &["Prism Refraction", "Laser Etched Internal", "Sinking Action"],
                "[PRODUCT: Transparent Crystal Lure]",
            ),
            product(
                "mermaid-tears",
                "Mermaid Tears Soft Baits",
                1299,
                Category::Baits,
                "Soft baits that shimmer like treasures from the deep. Biodegradable and beautiful, each pack contains 8 pearlescent lures that move with irresistible fluidity.",
                &["Pack of 8", "Biodegradable", "Pearlescent Glitter"],
                "[PRODUCT: Soft Bait Pack]",
            ),
            product(
                "candy-box-set",
                "The Candy Box Gift Set",
                3499,
                Category::Gifts,
                "The perfect introduction to the XYRA world. Five matte lures in delicate macaron colors, presented in a reusable luxury gift box that brings joy before the first cast.",
                &["5x Matte Lures", "Macaron Colors", "Luxury Gift Box"],
                "[PRODUCT: Open Gift Box Flatlay]",
            ),
        ])
    }
}

impl Catalog for StaticCatalog {
    fn list_all(&self) -> &[Product] {
        &self.products
    }
}

fn product(
    id: &str,
    name: &str,
    cents: i64,
    category: Category,
    description: &str,
    features: &[&str],
    image_ref: &str,
) -> Product {
    Product {
        id: ProductId::from(id),
        name: name.to_owned(),
        price: Price::from_cents(cents, CurrencyCode::USD),
        category,
        description: description.to_owned(),
        features: features.iter().map(|&f| f.to_owned()).collect(),
        image_ref: image_ref.to_owned(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ids<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<&'a str> {
        products.into_iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_get_by_id() {
        let catalog = StaticCatalog::xyra();
        let product = catalog.get_by_id("crystal-minnow").unwrap();
        assert_eq!(product.name, "Crystal Minnow Pendant");
        assert_eq!(product.price.to_string(), "$16.99");
        assert!(catalog.get_by_id("no-such-reel").is_none());
    }

    #[test]
    fn test_list_all_keeps_catalog_order() {
        let catalog = StaticCatalog::xyra();
        assert_eq!(
            ids(catalog.list_all()),
            vec![
                "muse-bfs-pink",
                "blanc-de-chine-spin",
                "crystal-minnow",
                "mermaid-tears",
                "candy-box-set"
            ]
        );
    }

    #[test]
    fn test_related_same_category_excluding_self() {
        let catalog = StaticCatalog::xyra();
        assert_eq!(
            ids(catalog.get_related("muse-bfs-pink", 3)),
            vec!["blanc-de-chine-spin"]
        );
        assert!(catalog.get_related("candy-box-set", 3).is_empty());
    }

    #[test]
    fn test_related_respects_limit() {
        let catalog = StaticCatalog::xyra();
        assert!(catalog.get_related("muse-bfs-pink", 0).is_empty());
    }

    #[test]
    fn test_related_unknown_id_returns_leading_products() {
        let catalog = StaticCatalog::xyra();
        assert_eq!(
            ids(catalog.get_related("missing", 2)),
            vec!["muse-bfs-pink", "blanc-de-chine-spin"]
        );
    }

    #[test]
    fn test_by_category() {
        let catalog = StaticCatalog::xyra();
        assert_eq!(ids(catalog.by_category(Category::Reels)).len(), 2);
        assert_eq!(ids(catalog.by_category(Category::Gifts)), vec!["candy-box-set"]);
    }

    #[test]
    fn test_category_from_name() {
        assert_eq!(Category::from_name("lures"), Some(Category::Lures));
        assert_eq!(Category::from_name(" Gifts "), Some(Category::Gifts));
        assert_eq!(Category::from_name("All"), None);
    }
}
