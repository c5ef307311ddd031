//! Core types: rate maps, date ranges, converted rates

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Date-to-rate lookup for one currency over a queried span
///
/// Rates are quoted against the base currency and are always positive.
/// Built per request and discarded afterwards; no caching.
pub type RateMap = HashMap<NaiveDate, Decimal>;

/// One provider observation: the mid rate quoted on a business day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateRecord {
    pub effective_date: NaiveDate,
    pub mid: Decimal,
}

impl RateRecord {
    /// Create a new rate record
    pub fn new(effective_date: NaiveDate, mid: Decimal) -> Self {
        Self {
            effective_date,
            mid,
        }
    }
}

/// Derived cross-rate between two currencies on a single date
///
/// `rate = rate1_to_base / rate2_to_base`, computed with decimal division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertedRate {
    pub date: NaiveDate,
    pub rate: Decimal,
}

impl ConvertedRate {
    /// Create a new converted rate
    pub fn new(date: NaiveDate, rate: Decimal) -> Self {
        Self { date, rate }
    }
}

/// Inclusive calendar date range
///
/// `start <= end` is the caller's invariant; a violated range simply walks
/// zero days rather than iterating backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a new inclusive date range
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Number of calendar days covered (zero when start is after end)
    pub fn num_days(&self) -> i64 {
        ((self.end - self.start).num_days() + 1).max(0)
    }

    /// Whether a date falls inside the range
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Iterate every calendar day in ascending order
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |date| *date <= end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
