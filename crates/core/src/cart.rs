//! Per-session shopping cart.
//!
//! A [`Cart`] is owned by exactly one visitor session. The storefront loads it
//! from the session store, applies one mutation and writes it back, so the
//! type itself is plain data with no interior mutability.
//!
//! Invariants:
//! - at most one [`CartItem`] per product ID, in insertion order
//! - every retained item has `quantity >= 1`
//! - totals are derived on read and never stored

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{CurrencyCode, Price, ProductId};

/// A product line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub image_ref: String,
}

impl CartItem {
    fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
            image_ref: product.image_ref.clone(),
        }
    }

    /// `unit_price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// The visitor's cart plus the drawer visibility flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
    #[serde(default)]
    is_open: bool,
}

impl Cart {
    /// An empty, closed cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line if the product is already in the cart,
    /// otherwise appends a new line with quantity 1.
    pub fn add_item(&mut self, product: &Product) {
        self.add_item_quantity(product, 1);
    }

    /// Add `quantity` units of `product`. Adding zero is a no-op.
    pub fn add_item_quantity(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        match self.items.iter_mut().find(|item| item.id == product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => self.items.push(CartItem::from_product(product, quantity)),
        }
    }

    /// Remove the line for `id`. Removing an absent product is a no-op.
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|item| item.id != *id);
    }

    /// Set the quantity for `id`.
    ///
    /// A quantity of zero or less removes the line. Quantities beyond
    /// `u32::MAX` saturate. An absent product is left absent.
    pub fn set_quantity(&mut self, id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|item| item.id == *id) {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// The line for `id`, if present.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of all line totals.
    ///
    /// The catalog prices everything in one currency; an empty cart totals
    /// zero in the default currency.
    #[must_use]
    pub fn total_price(&self) -> Price {
        let currency = self
            .items
            .first()
            .map_or_else(CurrencyCode::default, |item| item.unit_price.currency_code);
        let amount = self
            .items
            .iter()
            .map(|item| item.line_total().amount)
            .fold(Decimal::ZERO, |acc, line| acc + line);
        Price::new(amount, currency)
    }

    /// Whether the cart drawer is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Show or hide the cart drawer.
    pub const fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }
}
