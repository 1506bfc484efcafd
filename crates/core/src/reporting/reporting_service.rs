//! Aggregate queries over the full client book.
//!
//! Everything here is a pure, stateless function re-derived on every call.
//! There is no caching or incremental maintenance; at the expected volumes
//! (hundreds of clients and items) correctness wins over performance. None
//! of these functions fail: an empty book yields zero totals and
//! empty-but-labeled series.

use chrono::{Datelike, NaiveDate};
use num_traits::Zero;
use rust_decimal::Decimal;

use super::reporting_model::{CommissionBucket, KpiSnapshot};
use crate::clients::Client;
use crate::constants::MONTH_LABELS_CS;

/// Sum of absolute values over every portfolio item that is not an
/// insurance product.
///
/// Insurance values are premiums (flows), not managed assets, and are
/// excluded. Loans contribute their absolute owed volume, which makes this
/// a gross managed volume rather than a net AUM figure; the behavior is
/// inherited deliberately and must not be "corrected" into netting.
pub fn gross_managed_volume(clients: &[Client]) -> Decimal {
    clients
        .iter()
        .flat_map(|client| client.portfolio.iter())
        .filter(|item| !item.product_type.is_insurance())
        .map(|item| item.value.abs())
        .sum()
}

/// Commission earned on products created in the reference month.
///
/// Existing/external items and items with a zero stored commission are
/// skipped; bucket membership is month and year equality against the
/// reference date.
pub fn monthly_commission(clients: &[Client], reference: NaiveDate) -> Decimal {
    clients
        .iter()
        .flat_map(|client| client.portfolio.iter())
        .filter(|item| !item.is_existing && !item.commission_final.is_zero())
        .filter(|item| {
            let created = item.created_date.date();
            created.month() == reference.month() && created.year() == reference.year()
        })
        .map(|item| item.commission_final)
        .sum()
}

/// Commission totals for the `months_back` months ending at the reference
/// month (inclusive), oldest bucket first.
///
/// Each bucket sums `commission_final` over items created in that exact
/// (month, year), excluding existing/external items, and carries the short
/// Czech month label. The series is regenerated from scratch on every call.
pub fn commission_time_series(
    clients: &[Client],
    reference: NaiveDate,
    months_back: u32,
) -> Vec<CommissionBucket> {
    let mut buckets = Vec::with_capacity(months_back as usize);

    for offset in (0..months_back).rev() {
        let (year, month) = shift_month(reference.year(), reference.month(), offset);

        let total: Decimal = clients
            .iter()
            .flat_map(|client| client.portfolio.iter())
            .filter(|item| !item.is_existing && !item.commission_final.is_zero())
            .filter(|item| {
                let created = item.created_date.date();
                created.month() == month && created.year() == year
            })
            .map(|item| item.commission_final)
            .sum();

        buckets.push(CommissionBucket {
            label: MONTH_LABELS_CS[(month - 1) as usize].to_string(),
            year,
            month,
            total,
        });
    }

    buckets
}

/// Headline dashboard figures derived from the client book.
pub fn kpi_snapshot(clients: &[Client], reference: NaiveDate) -> KpiSnapshot {
    KpiSnapshot {
        gross_managed_volume: gross_managed_volume(clients),
        active_clients: clients.len(),
        monthly_commission: monthly_commission(clients, reference),
    }
}

/// The (year, month) pair `offset` calendar months before the given one.
fn shift_month(year: i32, month: u32, offset: u32) -> (i32, u32) {
    let zero_based = year as i64 * 12 + (month as i64 - 1) - offset as i64;
    let shifted_year = zero_based.div_euclid(12) as i32;
    let shifted_month = zero_based.rem_euclid(12) as u32 + 1;
    (shifted_year, shifted_month)
}
