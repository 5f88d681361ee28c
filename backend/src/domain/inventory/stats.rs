//! Summary statistics over the whole medicine collection.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{LOW_STOCK_THRESHOLD, MedicineRecord};

/// Inventory summary counters.
///
/// The counters overlap: a low-stock record also counts as available, and an
/// out-of-stock record may also be expired. They do not sum to `total`.
///
/// `expired` counts records whose expiry date is strictly before today,
/// while the classifier already treats a record expiring today as expired.
/// `total_value` sums unit prices without weighting by quantity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventoryStats {
    pub total: usize,
    pub available: usize,
    pub low: usize,
    pub out_of_stock: usize,
    pub expired: usize,
    pub total_value: Decimal,
}

/// Compute [`InventoryStats`] for `records` as of `today`.
pub fn aggregate<'a, I>(records: I, today: NaiveDate) -> InventoryStats
where
    I: IntoIterator<Item = &'a MedicineRecord>,
{
    records
        .into_iter()
        .fold(InventoryStats::default(), |mut stats, record| {
            let in_date = record.expiry_date > today;
            let in_stock = record.quantity > 0;

            stats.total += 1;
            if in_stock && in_date {
                stats.available += 1;
            }
            if in_stock && record.quantity <= LOW_STOCK_THRESHOLD && in_date {
                stats.low += 1;
            }
            if !in_stock {
                stats.out_of_stock += 1;
            }
            if record.expiry_date < today {
                stats.expired += 1;
            }
            stats.total_value = stats.total_value.saturating_add(record.price);
            stats
        })
}
