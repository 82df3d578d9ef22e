//! Validation of product/flavor records at the domain boundary.
//!
//! Records arrive as camelCase JSON from the persistence layer. They are
//! checked once here; everything downstream works on typed [`Product`]s.

use std::collections::HashSet;

use serde::Deserialize;

use vapeshop_core::{DomainError, DomainResult, FlavorId, ProductId};
use vapeshop_inventory::{StockLevels, is_over_reserved, over_reserved_units};

use crate::flavor::{Flavor, TrackedFlavor};
use crate::product::Product;

/// Threshold applied when a record does not carry one.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

fn default_low_stock_threshold() -> u32 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

fn default_active() -> bool {
    true
}

/// Product as stored upstream.
///
/// `flavors` is the legacy name list; `productFlavors` holds tracked flavor
/// records and takes precedence when non-empty. Ids stay raw strings until
/// conversion so that a bad id surfaces as [`DomainError::InvalidId`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub inventory: u32,
    #[serde(default)]
    pub reserved_inventory: u32,
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
    #[serde(default)]
    pub flavors: Vec<String>,
    #[serde(default)]
    pub product_flavors: Vec<FlavorRecord>,
}

/// Tracked flavor as stored upstream.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlavorRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub inventory: u32,
    #[serde(default)]
    pub reserved_inventory: u32,
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl TryFrom<&FlavorRecord> for TrackedFlavor {
    type Error = DomainError;

    fn try_from(record: &FlavorRecord) -> Result<Self, Self::Error> {
        let id: FlavorId = record.id.parse()?;
        let name = non_blank(&record.name, "flavor name")?;
        let stock = StockLevels::new(
            record.inventory,
            record.reserved_inventory,
            record.low_stock_threshold,
        );
        let mut flavor = TrackedFlavor::new(id, name, stock);
        flavor.active = record.active;
        Ok(flavor)
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let id: ProductId = record.id.parse()?;
        let name = non_blank(&record.name, "product name")?;
        let stock = StockLevels::new(
            record.inventory,
            record.reserved_inventory,
            record.low_stock_threshold,
        );
        let product = Product::new(id, name, stock);

        let product = if record.product_flavors.is_empty() {
            let names = record
                .flavors
                .iter()
                .map(|n| non_blank(n, "flavor name"))
                .collect::<DomainResult<Vec<_>>>()?;
            ensure_unique(names.iter().map(String::as_str))?;
            product.with_flavor_names(names)
        } else {
            let flavors = record
                .product_flavors
                .iter()
                .map(TrackedFlavor::try_from)
                .collect::<DomainResult<Vec<_>>>()?;
            ensure_unique(flavors.iter().map(|f| f.name.as_str()))?;
            product.with_tracked_flavors(flavors)
        };

        warn_if_over_reserved(&id.to_string(), product.stock());
        for flavor in product.flavors() {
            if let Flavor::Tracked(f) = flavor {
                warn_if_over_reserved(&format!("{id}/{}", f.id), &f.stock);
            }
        }
        Ok(product)
    }
}

/// Parse and validate a single product record.
pub fn parse_product(json: &str) -> DomainResult<Product> {
    let record: ProductRecord = serde_json::from_str(json)
        .map_err(|e| DomainError::validation(format!("malformed product record: {e}")))?;
    Product::try_from(record)
}

/// Parse and validate a JSON array of product records.
///
/// Fails on the first invalid record.
pub fn parse_catalog(json: &str) -> DomainResult<Vec<Product>> {
    let records: Vec<ProductRecord> = serde_json::from_str(json)
        .map_err(|e| DomainError::validation(format!("malformed catalog: {e}")))?;
    let products = records
        .into_iter()
        .map(Product::try_from)
        .collect::<DomainResult<Vec<_>>>()?;
    tracing::debug!(count = products.len(), "catalog records validated");
    Ok(products)
}

fn non_blank(value: &str, what: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{what} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

fn ensure_unique<'a>(names: impl IntoIterator<Item = &'a str>) -> DomainResult<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.to_lowercase()) {
            return Err(DomainError::validation(format!("duplicate flavor name: {name}")));
        }
    }
    Ok(())
}

// Clamping hides over-reservation from every downstream reader; report it here.
fn warn_if_over_reserved(key: &str, stock: &StockLevels) {
    if is_over_reserved(stock) {
        tracing::warn!(
            record = key,
            inventory = stock.inventory,
            reserved_inventory = stock.reserved_inventory,
            excess = over_reserved_units(stock),
            "reserved inventory exceeds stock on hand"
        );
    }
}
