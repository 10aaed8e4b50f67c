//! Merge two forecast tables into the summary view.
//!
//! Outer join on date: every date appearing in either table produces
//! exactly one row, with each horizon's estimate filled from its own
//! table and `None` where that horizon has no entry. Bounds are dropped —
//! the merged table is a summary, not a full uncertainty report.

use crate::domain::{ForecastTable, MergedForecastTable, MergedRow};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Outer-join `short` and `long` on date.
///
/// Total function: empty inputs yield an empty or one-sided result. Output
/// dates are unique and ascending. If both tables carry a date, one row
/// results with both columns populated.
pub fn merge(short: &ForecastTable, long: &ForecastTable) -> MergedForecastTable {
    let mut rows: BTreeMap<NaiveDate, (Option<f64>, Option<f64>)> = BTreeMap::new();

    for p in &short.points {
        rows.entry(p.date).or_default().0 = Some(p.estimate);
    }
    for p in &long.points {
        rows.entry(p.date).or_default().1 = Some(p.estimate);
    }

    MergedForecastTable {
        short_horizon: short.horizon_days,
        long_horizon: long.horizon_days,
        rows: rows
            .into_iter()
            .map(|(date, (yhat_short, yhat_long))| MergedRow {
                date,
                yhat_short,
                yhat_long,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ForecastPoint;
    use chrono::Duration;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn table(horizon: u32, start: NaiveDate, estimates: &[f64]) -> ForecastTable {
        ForecastTable {
            horizon_days: horizon,
            points: estimates
                .iter()
                .enumerate()
                .map(|(i, &e)| ForecastPoint {
                    date: start + Duration::days(i as i64),
                    estimate: e,
                    lower: e - 1.0,
                    upper: e + 1.0,
                })
                .collect(),
        }
    }

    #[test]
    fn union_of_dates_one_row_each() {
        let a = table(30, d(2024, 1, 1), &[1.0, 2.0, 3.0]);
        let b = table(365, d(2024, 1, 3), &[30.0, 40.0, 50.0]);

        let merged = merge(&a, &b);

        // Dates: Jan 1..3 from a, Jan 3..5 from b → 5 unique
        assert_eq!(merged.len(), 5);
        let dates: Vec<NaiveDate> = merged.rows.iter().map(|r| r.date).collect();
        for w in dates.windows(2) {
            assert!(w[0] < w[1]);
        }
    }

    #[test]
    fn overlap_populates_both_columns() {
        let a = table(30, d(2024, 1, 1), &[1.0, 2.0, 3.0]);
        let b = table(365, d(2024, 1, 3), &[30.0, 40.0]);

        let merged = merge(&a, &b);
        let overlap = merged.rows.iter().find(|r| r.date == d(2024, 1, 3)).unwrap();

        assert_eq!(overlap.yhat_short, Some(3.0));
        assert_eq!(overlap.yhat_long, Some(30.0));
    }

    #[test]
    fn one_sided_dates_leave_none() {
        let a = table(30, d(2024, 1, 1), &[1.0]);
        let b = table(365, d(2024, 2, 1), &[99.0]);

        let merged = merge(&a, &b);
        assert_eq!(merged.rows[0].yhat_short, Some(1.0));
        assert_eq!(merged.rows[0].yhat_long, None);
        assert_eq!(merged.rows[1].yhat_short, None);
        assert_eq!(merged.rows[1].yhat_long, Some(99.0));
    }

    #[test]
    fn estimates_survive_unchanged() {
        let a = table(30, d(2024, 1, 1), &[1.5, 2.5, 3.5]);
        let b = table(365, d(2024, 1, 2), &[10.0, 20.0]);

        let merged = merge(&a, &b);
        for p in &a.points {
            let row = merged.rows.iter().find(|r| r.date == p.date).unwrap();
            assert_eq!(row.yhat_short, Some(p.estimate));
        }
    }

    #[test]
    fn empty_inputs() {
        let empty = ForecastTable { horizon_days: 30, points: vec![] };
        let b = table(365, d(2024, 1, 1), &[5.0]);

        assert!(merge(&empty, &empty).is_empty());

        let partial = merge(&empty, &b);
        assert_eq!(partial.len(), 1);
        assert_eq!(partial.rows[0].yhat_short, None);
        assert_eq!(partial.rows[0].yhat_long, Some(5.0));
    }

    #[test]
    fn commutative_in_row_content() {
        let a = table(30, d(2024, 1, 1), &[1.0, 2.0]);
        let b = table(365, d(2024, 1, 2), &[10.0, 20.0]);

        let ab = merge(&a, &b);
        let ba = merge(&b, &a);

        assert_eq!(ab.len(), ba.len());
        for (r_ab, r_ba) in ab.rows.iter().zip(&ba.rows) {
            assert_eq!(r_ab.date, r_ba.date);
            // Columns swap sides, the values do not change
            assert_eq!(r_ab.yhat_short, r_ba.yhat_long);
            assert_eq!(r_ab.yhat_long, r_ba.yhat_short);
        }
    }
}
