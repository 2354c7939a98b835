//! Summary statistics over a generated record set.
//!
//! Computed from the in-memory records, never from the written file.

use crate::types::{Amount, OrderType, PaymentMethod, PaymentRecord, PaymentStatus};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmountStats {
    /// Wider than `Amount` so a run total never wraps.
    pub sum:  u128,
    /// Integer mean, floor division.
    pub mean: Amount,
    pub min:  Amount,
    pub max:  Amount,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub total:              usize,
    /// Counts per payment method, in configured order.
    pub by_method:          Vec<(PaymentMethod, usize)>,
    pub approved:           usize,
    pub canceled:           usize,
    /// Canceled records with no cancellation timestamp.
    pub canceled_no_time:   usize,
    pub delivery:           usize,
    pub in_store:           usize,
    /// `None` only for an empty record set.
    pub amounts:            Option<AmountStats>,
}

impl RunSummary {
    /// `methods` fixes which methods are listed and in what order.
    pub fn from_records(records: &[PaymentRecord], methods: &[PaymentMethod]) -> Self {
        let by_method = methods
            .iter()
            .map(|&m| (m, count_where(records, |r| r.payment_method == m)))
            .collect();

        let min = records.iter().map(|r| r.amount).min();
        let max = records.iter().map(|r| r.amount).max();
        let amounts = match (min, max) {
            (Some(min), Some(max)) => {
                let sum: u128 = records.iter().map(|r| u128::from(r.amount)).sum();
                Some(AmountStats {
                    sum,
                    // The mean never exceeds `max`, so it fits back into `Amount`.
                    mean: (sum / records.len() as u128) as Amount,
                    min,
                    max,
                })
            }
            _ => None,
        };

        Self {
            total: records.len(),
            by_method,
            approved: count_where(records, |r| r.status == PaymentStatus::Approved),
            canceled: count_where(records, |r| r.status == PaymentStatus::Canceled),
            canceled_no_time: count_where(records, PaymentRecord::is_canceled_after_window),
            delivery: count_where(records, |r| r.order_type == OrderType::Delivery),
            in_store: count_where(records, |r| r.order_type == OrderType::InStore),
            amounts,
        }
    }

    /// Share of the total as a percentage. Zero for an empty set.
    pub fn percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        count as f64 / self.total as f64 * 100.0
    }
}

fn count_where(records: &[PaymentRecord], pred: impl Fn(&PaymentRecord) -> bool) -> usize {
    records.iter().filter(|&r| pred(r)).count()
}

/// Format an integer with comma thousands separators: 1234567 -> "1,234,567".
pub fn with_thousands(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
