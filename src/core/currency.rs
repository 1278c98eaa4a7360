//! RMB to IDR exchange rate record

use crate::core::error::InventoryError;
use crate::core::formulas;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_RMB_TO_IDR: f64 = 1850.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    #[serde(default = "default_rate")]
    pub rmb_to_idr: f64,
    #[serde(default = "Utc::now")]
    pub last_updated: DateTime<Utc>,
}

fn default_rate() -> f64 {
    DEFAULT_RMB_TO_IDR
}

impl ExchangeRate {
    /// Builds a rate stamped with `now`, rejecting anything that is not a
    /// finite positive number.
    pub fn new(rmb_to_idr: f64, now: DateTime<Utc>) -> Result<Self, InventoryError> {
        if !rmb_to_idr.is_finite() || rmb_to_idr <= 0.0 {
            return Err(InventoryError::InvalidRate(rmb_to_idr));
        }
        Ok(Self {
            rmb_to_idr,
            last_updated: now,
        })
    }

    pub fn to_idr(&self, rmb_amount: f64) -> i64 {
        formulas::to_target_currency(rmb_amount, self.rmb_to_idr)
    }
}

impl Default for ExchangeRate {
    fn default() -> Self {
        Self {
            rmb_to_idr: DEFAULT_RMB_TO_IDR,
            last_updated: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_non_positive_rates() {
        let now = Utc::now();
        assert_eq!(
            ExchangeRate::new(0.0, now),
            Err(InventoryError::InvalidRate(0.0))
        );
        assert_eq!(
            ExchangeRate::new(-5.0, now),
            Err(InventoryError::InvalidRate(-5.0))
        );
        assert!(ExchangeRate::new(f64::NAN, now).is_err());
        assert!(ExchangeRate::new(f64::INFINITY, now).is_err());
    }

    #[test]
    fn test_to_idr() {
        let rate = ExchangeRate::new(1850.0, Utc::now()).unwrap();
        assert_eq!(rate.to_idr(8.5), 15725);
        assert_eq!(rate.to_idr(0.0), 0);
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let rate: ExchangeRate = serde_json::from_str("{}").unwrap();
        assert_eq!(rate.rmb_to_idr, DEFAULT_RMB_TO_IDR);

        let rate: ExchangeRate =
            serde_json::from_str(r#"{"rmbToIdr": 2000, "lastUpdated": "2025-10-10T00:00:00Z"}"#)
                .unwrap();
        assert_eq!(rate.rmb_to_idr, 2000.0);
        assert_eq!(rate.last_updated.to_rfc3339(), "2025-10-10T00:00:00+00:00");
    }
}
