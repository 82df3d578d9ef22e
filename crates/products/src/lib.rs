//! Products and flavors as seen by the storefront.
//!
//! This crate decides which flavors are selectable and whether a product can
//! be bought, implemented purely as deterministic domain logic (no IO, no
//! HTTP, no storage). Records enter through [`ingress`], where they are
//! validated once.

pub mod catalog;
pub mod flavor;
pub mod ingress;
pub mod product;

pub use catalog::{StockKey, catalog_report};
pub use flavor::{
    Availability, Flavor, FlavorOption, LegacyFlavor, TrackedFlavor, eligible_flavors,
    flavor_options,
};
pub use ingress::{
    DEFAULT_LOW_STOCK_THRESHOLD, FlavorRecord, ProductRecord, parse_catalog, parse_product,
};
pub use product::Product;
