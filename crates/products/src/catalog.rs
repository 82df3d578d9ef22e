//! Catalog-wide stock report for admin inventory views.

use serde::Serialize;

use vapeshop_core::{Entity, FlavorId, ProductId};
use vapeshop_inventory::StockReport;

use crate::flavor::Flavor;
use crate::product::Product;

/// Which stock-bearing record a report entry refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum StockKey {
    Product {
        product_id: ProductId,
    },
    Flavor {
        product_id: ProductId,
        flavor_id: FlavorId,
    },
}

/// Build a stock report over a catalog.
///
/// Tracked-flavor products contribute one entry per active flavor; every
/// other product contributes its aggregate stock. Inactive flavors are not
/// sold and are left out.
pub fn catalog_report<'a>(
    products: impl IntoIterator<Item = &'a Product>,
) -> StockReport<StockKey> {
    let mut report = StockReport::default();
    for product in products {
        let product_id = *product.id();
        if !product.tracks_flavor_inventory() {
            report.record(StockKey::Product { product_id }, product);
            continue;
        }
        for flavor in product.flavors() {
            if let Flavor::Tracked(f) = flavor
                && f.active
            {
                let flavor_id = *f.id();
                report.record(StockKey::Flavor { product_id, flavor_id }, f);
            }
        }
    }
    tracing::debug!(
        entries = report.total(),
        reorder = report.reorder.len(),
        over_reserved = report.over_reserved.len(),
        "catalog stock report built"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flavor::TrackedFlavor;
    use vapeshop_inventory::{StockLevels, StockStatus};

    fn flavor(name: &str, inventory: u32, reserved: u32) -> TrackedFlavor {
        TrackedFlavor::new(FlavorId::new(), name, StockLevels::new(inventory, reserved, 5))
    }

    #[test]
    fn reports_products_and_active_flavors() {
        let plain = Product::new(ProductId::new(), "Coil", StockLevels::new(10, 8, 5));
        let sold_out = flavor("Mango Ice", 4, 9);
        let plenty = flavor("Blue Razz", 40, 0);
        let hidden = flavor("Grape", 0, 0).deactivated();
        let tracked = Product::new(ProductId::new(), "Cloud Bar", StockLevels::default())
            .with_tracked_flavors([sold_out.clone(), plenty, hidden]);

        let report = catalog_report([&plain, &tracked]);

        assert_eq!(report.total(), 3);
        assert_eq!(report.count(StockStatus::InStock), 1);
        assert_eq!(
            report.reorder,
            vec![StockKey::Product {
                product_id: plain.id_typed()
            }]
        );
        let sold_out_key = StockKey::Flavor {
            product_id: tracked.id_typed(),
            flavor_id: sold_out.id,
        };
        assert_eq!(report.unavailable, vec![sold_out_key]);
        assert_eq!(report.over_reserved, vec![sold_out_key]);
    }

    #[test]
    fn legacy_products_report_aggregate_stock() {
        let product = Product::new(ProductId::new(), "Pod Kit", StockLevels::new(0, 0, 5))
            .with_flavor_names(["Mint"]);

        let report = catalog_report(std::slice::from_ref(&product));
        assert_eq!(
            report.unavailable,
            vec![StockKey::Product {
                product_id: product.id_typed()
            }]
        );
    }

    #[test]
    fn report_serializes_in_camel_case() {
        let sold_out = flavor("Mango Ice", 2, 2);
        let product = Product::new(ProductId::new(), "Cloud Bar", StockLevels::default())
            .with_tracked_flavors([sold_out.clone()]);

        let json = serde_json::to_value(catalog_report([&product])).unwrap();

        assert_eq!(json["outOfStock"], 1);
        let key = &json["unavailable"][0];
        assert_eq!(key["kind"], "flavor");
        assert_eq!(key["productId"], product.id_typed().to_string());
        assert_eq!(key["flavorId"], sold_out.id.to_string());
        assert!(key.get("product_id").is_none());
    }
}
