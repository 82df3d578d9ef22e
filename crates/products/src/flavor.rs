use serde::Serialize;

use vapeshop_core::{Entity, FlavorId};
use vapeshop_inventory::{StockLevels, StockRecord, StockStatus, is_out_of_stock, stock_status};

/// Flavor derived from a plain name list; carries no stock of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyFlavor {
    pub name: String,
}

impl LegacyFlavor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Flavor with its own stock counts and an active flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedFlavor {
    pub id: FlavorId,
    pub name: String,
    #[serde(flatten)]
    pub stock: StockLevels,
    pub active: bool,
}

impl TrackedFlavor {
    pub fn new(id: FlavorId, name: impl Into<String>, stock: StockLevels) -> Self {
        Self {
            id,
            name: name.into(),
            stock,
            active: true,
        }
    }

    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }
}

impl Entity for TrackedFlavor {
    type Id = FlavorId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl StockRecord for TrackedFlavor {
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

/// A product flavor: either a legacy name or a stock-tracked record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Flavor {
    Legacy(LegacyFlavor),
    Tracked(TrackedFlavor),
}

impl Flavor {
    pub fn name(&self) -> &str {
        match self {
            Flavor::Legacy(f) => &f.name,
            Flavor::Tracked(f) => &f.name,
        }
    }

    /// Legacy flavors have no active flag and count as active.
    pub fn is_active(&self) -> bool {
        match self {
            Flavor::Legacy(_) => true,
            Flavor::Tracked(f) => f.active,
        }
    }

    pub fn stock(&self) -> Option<&StockLevels> {
        match self {
            Flavor::Legacy(_) => None,
            Flavor::Tracked(f) => Some(&f.stock),
        }
    }

    pub fn is_tracked(&self) -> bool {
        matches!(self, Flavor::Tracked(_))
    }

    /// Whether this flavor can be put in the cart.
    ///
    /// With `tracks_inventory` set, an active tracked flavor must also have
    /// stock available. Without it, only the active flag matters.
    pub fn is_eligible(&self, tracks_inventory: bool) -> bool {
        match self {
            Flavor::Legacy(_) => true,
            Flavor::Tracked(f) => f.active && !(tracks_inventory && is_out_of_stock(f)),
        }
    }
}

impl From<LegacyFlavor> for Flavor {
    fn from(value: LegacyFlavor) -> Self {
        Flavor::Legacy(value)
    }
}

impl From<TrackedFlavor> for Flavor {
    fn from(value: TrackedFlavor) -> Self {
        Flavor::Tracked(value)
    }
}

/// Flavors a customer may select, in their original order.
pub fn eligible_flavors(flavors: &[Flavor], tracks_inventory: bool) -> Vec<&Flavor> {
    flavors
        .iter()
        .filter(|f| f.is_eligible(tracks_inventory))
        .collect()
}

/// Stock shown next to a flavor in the selector.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Availability {
    pub available: u32,
    pub status: StockStatus,
}

/// One entry of the flavor selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlavorOption<'a> {
    pub name: &'a str,
    pub selectable: bool,
    /// `None` when the product does not track flavor inventory.
    pub availability: Option<Availability>,
}

/// Selector entries for every flavor, eligible or not.
pub fn flavor_options(flavors: &[Flavor], tracks_inventory: bool) -> Vec<FlavorOption<'_>> {
    flavors
        .iter()
        .map(|flavor| FlavorOption {
            name: flavor.name(),
            selectable: flavor.is_eligible(tracks_inventory),
            availability: match flavor.stock() {
                Some(stock) if tracks_inventory => Some(Availability {
                    available: stock.available(),
                    status: stock_status(stock),
                }),
                _ => None,
            },
        })
        .collect()
}
