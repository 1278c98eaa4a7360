//! Read-only views over products and shipments used by the reports.
use crate::core::config::Thresholds;
use crate::core::product::Product;
use crate::core::shipment::{Shipment, ShipmentStatus};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginBand {
    Low,
    Healthy,
    High,
}

impl MarginBand {
    pub fn classify(margin: i64, thresholds: &Thresholds) -> Self {
        if margin < thresholds.low_margin {
            MarginBand::Low
        } else if margin >= thresholds.high_margin {
            MarginBand::High
        } else {
            MarginBand::Healthy
        }
    }
}

/// Aggregate stock position across a set of products.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StockSummary {
    pub product_count: usize,
    pub total_real_stock: u64,
    pub total_pending: u64,
    pub low_stock: usize,
    pub oversold: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PricingSummary {
    pub product_count: usize,
    /// Stock on hand at selling price: sum of `selling_price * real_stock`.
    pub total_value: i64,
    /// Mean margin rounded to whole percent, `None` with no products.
    pub average_margin: Option<i64>,
    pub low_margin: usize,
    pub high_margin: usize,
}

pub fn is_low_stock(product: &Product, thresholds: &Thresholds) -> bool {
    product.real_stock < thresholds.low_stock
}

pub fn summarize_stock(products: &[Product], thresholds: &Thresholds) -> StockSummary {
    products.iter().fold(
        StockSummary {
            product_count: products.len(),
            ..Default::default()
        },
        |mut summary, product| {
            summary.total_real_stock += u64::from(product.real_stock);
            summary.total_pending += u64::from(product.pending_stock);
            if is_low_stock(product, thresholds) {
                summary.low_stock += 1;
            }
            if product.is_oversold() {
                summary.oversold += 1;
            }
            summary
        },
    )
}

pub fn summarize_pricing(products: &[Product], thresholds: &Thresholds) -> PricingSummary {
    let mut summary = PricingSummary {
        product_count: products.len(),
        total_value: products.iter().fold(0i64, |total, p| {
            total.saturating_add(p.selling_price.saturating_mul(i64::from(p.real_stock)))
        }),
        ..Default::default()
    };
    if products.is_empty() {
        return summary;
    }

    let total: i64 = products.iter().map(|p| p.margin).sum();
    summary.average_margin = Some((total as f64 / products.len() as f64).round() as i64);
    for product in products {
        match MarginBand::classify(product.margin, thresholds) {
            MarginBand::Low => summary.low_margin += 1,
            MarginBand::High => summary.high_margin += 1,
            MarginBand::Healthy => {}
        }
    }
    summary
}

pub fn search_products<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| p.matches(term)).collect()
}

pub fn status_counts(shipments: &[Shipment]) -> HashMap<ShipmentStatus, usize> {
    let mut counts: HashMap<ShipmentStatus, usize> =
        ShipmentStatus::ALL.iter().map(|s| (*s, 0)).collect();
    for shipment in shipments {
        *counts.entry(shipment.status).or_insert(0) += 1;
    }
    counts
}

/// Whole days from `now` until `target`, rounded up. Negative once `target`
/// has passed.
pub fn days_until(target: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let seconds = (target - now).num_seconds();
    seconds.div_euclid(SECONDS_PER_DAY) + i64::from(seconds.rem_euclid(SECONDS_PER_DAY) != 0)
}

pub fn is_overdue(shipment: &Shipment, now: DateTime<Utc>) -> bool {
    shipment.status != ShipmentStatus::Received && days_until(shipment.estimated_arrival, now) < 0
}
