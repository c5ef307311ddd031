//! Range statistics over a converted-rate series

use crate::types::ConvertedRate;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Summary statistics for a cross-rate series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateStatistics {
    pub count: usize,
    pub average: Decimal,
    pub min: Decimal,
    /// First date attaining the minimum
    pub min_date: NaiveDate,
    pub max: Decimal,
    /// First date attaining the maximum
    pub max_date: NaiveDate,
}

/// Summarize a chronologically ascending series of converted rates.
///
/// Pure single-pass computation. An empty series yields `None`, not an
/// error. When several dates share an extreme value the earliest one wins.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use fx_rates::statistics::summarize;
/// use fx_rates::types::ConvertedRate;
/// use rust_decimal_macros::dec;
///
/// let date = |d: u32| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let series = vec![
///     ConvertedRate::new(date(1), dec!(4.0)),
///     ConvertedRate::new(date(2), dec!(4.5)),
/// ];
///
/// let stats = summarize(&series).unwrap();
/// assert_eq!(stats.count, 2);
/// assert_eq!(stats.average, dec!(4.25));
/// assert_eq!(stats.max_date, date(2));
/// ```
pub fn summarize(rates: &[ConvertedRate]) -> Option<RateStatistics> {
    let first = rates.first()?;

    let mut sum = first.rate;
    let mut min = first.rate;
    let mut min_date = first.date;
    let mut max = first.rate;
    let mut max_date = first.date;

    for entry in &rates[1..] {
        sum += entry.rate;
        if entry.rate < min {
            min = entry.rate;
            min_date = entry.date;
        }
        if entry.rate > max {
            max = entry.rate;
            max_date = entry.date;
        }
    }

    let count = rates.len();
    Some(RateStatistics {
        count,
        average: sum / Decimal::from(count as u64),
        min,
        min_date,
        max,
        max_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn series(entries: &[(NaiveDate, Decimal)]) -> Vec<ConvertedRate> {
        entries
            .iter()
            .map(|(date, rate)| ConvertedRate::new(*date, *rate))
            .collect()
    }

    #[test]
    fn test_empty_series_has_no_statistics() {
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn test_single_entry() {
        let rates = series(&[(date(2024, 1, 1), dec!(4.25))]);
        let stats = summarize(&rates).unwrap();

        assert_eq!(stats.count, 1);
        assert_eq!(stats.average, dec!(4.25));
        assert_eq!(stats.min, dec!(4.25));
        assert_eq!(stats.max, dec!(4.25));
        assert_eq!(stats.min_date, date(2024, 1, 1));
        assert_eq!(stats.max_date, date(2024, 1, 1));
    }

    #[test]
    fn test_average_extrema_and_dates() {
        let rates = series(&[
            (date(2024, 1, 1), dec!(4.0)),
            (date(2024, 1, 2), dec!(4.5)),
            (date(2024, 1, 3), dec!(4.0)),
        ]);
        let stats = summarize(&rates).unwrap();

        assert_eq!(stats.count, 3);
        assert!((stats.average - dec!(4.1667)).abs() < dec!(0.0001));
        assert_eq!(stats.min, dec!(4.0));
        assert_eq!(stats.max, dec!(4.5));
        assert_eq!(stats.max_date, date(2024, 1, 2));
    }

    #[test]
    fn test_ties_resolve_to_first_date() {
        let rates = series(&[
            (date(2024, 1, 1), dec!(4.0)),
            (date(2024, 1, 2), dec!(4.5)),
            (date(2024, 1, 3), dec!(4.0)),
            (date(2024, 1, 4), dec!(4.5)),
        ]);
        let stats = summarize(&rates).unwrap();

        assert_eq!(stats.min_date, date(2024, 1, 1));
        assert_eq!(stats.max_date, date(2024, 1, 2));
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let rates = series(&[
            (date(2024, 1, 1), dec!(4.1011)),
            (date(2024, 1, 2), dec!(4.0989)),
        ]);

        assert_eq!(summarize(&rates), summarize(&rates));
    }
}
