//! Terminal commands and report rendering

pub mod history;
pub mod pricing;
pub mod product;
pub mod setup;
pub mod shipping;
pub mod stock;
pub mod ui;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Parses a `YYYY-MM-DD` argument as midnight UTC.
pub fn parse_date(s: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{s}', expected YYYY-MM-DD"))?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}
