use serde::Serialize;

use vapeshop_core::{Entity, ProductId};
use vapeshop_inventory::{StockLevels, StockRecord, is_out_of_stock};

use crate::flavor::{
    Flavor, FlavorOption, LegacyFlavor, TrackedFlavor, eligible_flavors, flavor_options,
};

/// Catalog product with its aggregate stock and flavors.
///
/// A product holds either legacy flavor names or tracked flavor records,
/// never a mix: the setters replace the whole flavor list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    #[serde(flatten)]
    stock: StockLevels,
    flavors: Vec<Flavor>,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, stock: StockLevels) -> Self {
        Self {
            id,
            name: name.into(),
            stock,
            flavors: Vec::new(),
        }
    }

    pub fn with_flavor_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flavors = names
            .into_iter()
            .map(|name| Flavor::Legacy(LegacyFlavor::new(name)))
            .collect();
        self
    }

    pub fn with_tracked_flavors(
        mut self,
        flavors: impl IntoIterator<Item = TrackedFlavor>,
    ) -> Self {
        self.flavors = flavors.into_iter().map(Flavor::Tracked).collect();
        self
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock(&self) -> &StockLevels {
        &self.stock
    }

    pub fn flavors(&self) -> &[Flavor] {
        &self.flavors
    }

    /// True when explicit flavor records exist and stock is managed per flavor.
    pub fn tracks_flavor_inventory(&self) -> bool {
        self.flavors.iter().any(Flavor::is_tracked)
    }

    pub fn eligible_flavors(&self) -> Vec<&Flavor> {
        eligible_flavors(&self.flavors, self.tracks_flavor_inventory())
    }

    pub fn flavor_options(&self) -> Vec<FlavorOption<'_>> {
        flavor_options(&self.flavors, self.tracks_flavor_inventory())
    }

    /// Whether the product can be added to the cart at all.
    ///
    /// Tracked-flavor products gate on their flavors' stock only. Other
    /// products gate on their own stock, and legacy flavor lists must also
    /// offer at least one choice.
    pub fn is_purchasable(&self) -> bool {
        if self.tracks_flavor_inventory() {
            return !self.eligible_flavors().is_empty();
        }
        if is_out_of_stock(self) {
            return false;
        }
        self.flavors.is_empty() || !self.eligible_flavors().is_empty()
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl StockRecord for Product {
    fn inventory(&self) -> u32 {
        self.stock.inventory
    }

    fn reserved_inventory(&self) -> u32 {
        self.stock.reserved_inventory
    }

    fn low_stock_threshold(&self) -> u32 {
        self.stock.low_stock_threshold
    }
}
