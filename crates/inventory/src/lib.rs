//! Inventory availability model.
//!
//! Derives available stock and stock status from total/reserved counts,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod report;
pub mod stock;

pub use report::StockReport;
pub use stock::{
    StockLevels, StockRecord, StockStatus, available_inventory, is_low_stock, is_out_of_stock,
    is_over_reserved, over_reserved_units, stock_status,
};
