use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{Result, ValidationError};

lazy_static! {
    static ref MONTH_KEY_RE: Regex = Regex::new(r"^\d{4}-(0[1-9]|1[0-2])$").unwrap();
}

/// Calendar month in `YYYY-MM` form, the unit revenue is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn parse(raw: &str) -> Result<Self> {
        if !MONTH_KEY_RE.is_match(raw) {
            return Err(
                ValidationError::InvalidInput(format!("invalid month key '{}'", raw)).into(),
            );
        }
        let year = raw[0..4]
            .parse()
            .map_err(|_| ValidationError::InvalidInput(format!("invalid month key '{}'", raw)))?;
        let month = raw[5..7]
            .parse()
            .map_err(|_| ValidationError::InvalidInput(format!("invalid month key '{}'", raw)))?;
        Ok(MonthKey { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        MonthKey {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Manually entered revenue for one month: agency work and product sales
/// recognized outside the tracked payment tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenue {
    pub id: String,
    pub month_key: String,
    #[serde(default)]
    pub agency_revenue: Decimal,
    #[serde(default)]
    pub gumroad_revenue: Decimal,
}

/// Input model for the manual revenue row.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewMonthlyRevenue {
    pub month_key: String,
    pub agency_revenue: Decimal,
    pub gumroad_revenue: Decimal,
}

impl NewMonthlyRevenue {
    pub fn validate(&self) -> Result<()> {
        MonthKey::parse(&self.month_key)?;
        if self.agency_revenue < Decimal::ZERO || self.gumroad_revenue < Decimal::ZERO {
            return Err(
                ValidationError::InvalidInput("revenue cannot be negative".to_string()).into(),
            );
        }
        Ok(())
    }
}

/// Month revenue decomposed by source, with progress toward the goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RevenueBreakdown {
    pub month: String,
    pub consulting_revenue: Decimal,
    pub community_revenue: Decimal,
    pub agency_revenue: Decimal,
    pub product_revenue: Decimal,
    pub total: Decimal,
    pub goal: Decimal,
    /// Clamped to 100.
    pub progress_percent: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_month_keys() {
        let key = MonthKey::parse("2024-03").unwrap();
        assert_eq!(key.to_string(), "2024-03");
        assert!(key.contains(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
        assert!(!key.contains(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
    }

    #[test]
    fn rejects_malformed_month_keys() {
        for raw in ["2024-13", "2024-0", "24-03", "2024/03", "2024-03-01", ""] {
            assert!(MonthKey::parse(raw).is_err(), "accepted '{}'", raw);
        }
    }

    #[test]
    fn from_date_round_trips() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 5).unwrap();
        assert_eq!(MonthKey::from_date(date).to_string(), "2024-11");
    }
}
