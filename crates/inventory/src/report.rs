//! Stock report for admin inventory views.

use serde::Serialize;

use crate::stock::{StockRecord, StockStatus, is_over_reserved, stock_status};

/// Stock classification summary over a set of records.
///
/// Keys keep the order in which records were supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockReport<K> {
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    /// Low-stock records, i.e. those to reorder.
    pub reorder: Vec<K>,
    pub unavailable: Vec<K>,
    /// Records whose reservations exceed stock on hand.
    pub over_reserved: Vec<K>,
}

impl<K> Default for StockReport<K> {
    fn default() -> Self {
        Self {
            in_stock: 0,
            low_stock: 0,
            out_of_stock: 0,
            reorder: Vec::new(),
            unavailable: Vec::new(),
            over_reserved: Vec::new(),
        }
    }
}

impl<K: Clone> StockReport<K> {
    pub fn from_records<'a, R>(records: impl IntoIterator<Item = (K, &'a R)>) -> Self
    where
        R: StockRecord + 'a,
    {
        let mut report = Self::default();
        for (key, record) in records {
            report.record(key, record);
        }
        report
    }

    /// Add one record to the report.
    pub fn record(&mut self, key: K, record: &impl StockRecord) {
        if is_over_reserved(record) {
            self.over_reserved.push(key.clone());
        }
        match stock_status(record) {
            StockStatus::InStock => self.in_stock += 1,
            StockStatus::LowStock => {
                self.low_stock += 1;
                self.reorder.push(key);
            }
            StockStatus::OutOfStock => {
                self.out_of_stock += 1;
                self.unavailable.push(key);
            }
        }
    }

    pub fn total(&self) -> usize {
        self.in_stock + self.low_stock + self.out_of_stock
    }

    pub fn count(&self, status: StockStatus) -> usize {
        match status {
            StockStatus::InStock => self.in_stock,
            StockStatus::LowStock => self.low_stock,
            StockStatus::OutOfStock => self.out_of_stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stock::StockLevels;

    #[test]
    fn classifies_each_record_once() {
        let records = [
            ("mango", StockLevels::new(10, 2, 5)),
            ("mint", StockLevels::new(10, 7, 5)),
            ("grape", StockLevels::new(10, 10, 5)),
            ("lychee", StockLevels::new(3, 10, 5)),
        ];

        let report = StockReport::from_records(records.iter().map(|(k, r)| (*k, r)));

        assert_eq!(report.count(StockStatus::InStock), 1);
        assert_eq!(report.count(StockStatus::LowStock), 1);
        assert_eq!(report.count(StockStatus::OutOfStock), 2);
        assert_eq!(report.total(), records.len());
        assert_eq!(report.reorder, vec!["mint"]);
        assert_eq!(report.unavailable, vec!["grape", "lychee"]);
        assert_eq!(report.over_reserved, vec!["lychee"]);
    }

    #[test]
    fn empty_input_yields_empty_report() {
        let report = StockReport::<u32>::from_records(Vec::<(u32, &StockLevels)>::new());
        assert_eq!(report, StockReport::default());
        assert_eq!(report.total(), 0);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: status counts always add up to the number of records.
            #[test]
            fn counts_sum_to_total(
                rows in prop::collection::vec((0u32..50, 0u32..50, 0u32..20), 0..40)
            ) {
                let records: Vec<StockLevels> = rows
                    .iter()
                    .map(|(i, r, t)| StockLevels::new(*i, *r, *t))
                    .collect();
                let report = StockReport::from_records(records.iter().enumerate());

                prop_assert_eq!(report.total(), records.len());
                prop_assert_eq!(report.reorder.len(), report.low_stock);
                prop_assert_eq!(report.unavailable.len(), report.out_of_stock);
                prop_assert!(report.over_reserved.iter().all(|i| report.unavailable.contains(i)));
            }
        }
    }
}
