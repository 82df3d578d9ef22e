use serde::{Deserialize, Serialize};

use vapeshop_core::ValueObject;

/// Any record carrying the three stock fields (a product or a tracked flavor).
pub trait StockRecord {
    /// Total units on hand.
    fn inventory(&self) -> u32;

    /// Units allocated to orders that are not yet fulfilled or cancelled.
    fn reserved_inventory(&self) -> u32;

    /// Availability at or below which the record is flagged for reorder.
    fn low_stock_threshold(&self) -> u32;
}

/// Snapshot of a record's stock counts.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLevels {
    pub inventory: u32,
    pub reserved_inventory: u32,
    pub low_stock_threshold: u32,
}

impl StockLevels {
    pub fn new(inventory: u32, reserved_inventory: u32, low_stock_threshold: u32) -> Self {
        Self {
            inventory,
            reserved_inventory,
            low_stock_threshold,
        }
    }

    pub fn available(&self) -> u32 {
        available_inventory(self)
    }

    pub fn status(&self) -> StockStatus {
        stock_status(self)
    }
}

impl ValueObject for StockLevels {}

impl StockRecord for StockLevels {
    fn inventory(&self) -> u32 {
        self.inventory
    }

    fn reserved_inventory(&self) -> u32 {
        self.reserved_inventory
    }

    fn low_stock_threshold(&self) -> u32 {
        self.low_stock_threshold
    }
}

/// Derived stock classification shown throughout the storefront and admin views.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "out_of_stock",
            StockStatus::LowStock => "low_stock",
            StockStatus::InStock => "in_stock",
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Units that can still be sold: `inventory - reserved`, clamped at zero.
///
/// Reservations may transiently exceed stock in the order system; the result
/// never goes negative. Use [`over_reserved_units`] to see what was absorbed.
pub fn available_inventory(record: &impl StockRecord) -> u32 {
    record.inventory().saturating_sub(record.reserved_inventory())
}

pub fn is_out_of_stock(record: &impl StockRecord) -> bool {
    available_inventory(record) == 0
}

/// True when some stock is available but no more than the threshold.
///
/// Never true together with [`is_out_of_stock`].
pub fn is_low_stock(record: &impl StockRecord) -> bool {
    let available = available_inventory(record);
    available > 0 && available <= record.low_stock_threshold()
}

/// Classify a record. Out-of-stock takes precedence over low-stock.
pub fn stock_status(record: &impl StockRecord) -> StockStatus {
    let available = available_inventory(record);
    if available == 0 {
        StockStatus::OutOfStock
    } else if available <= record.low_stock_threshold() {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}

/// Reserved units in excess of stock on hand (0 in the steady state).
pub fn over_reserved_units(record: &impl StockRecord) -> u32 {
    record.reserved_inventory().saturating_sub(record.inventory())
}

pub fn is_over_reserved(record: &impl StockRecord) -> bool {
    over_reserved_units(record) > 0
}
