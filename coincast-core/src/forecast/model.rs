//! Additive trend + weekly-seasonality model.
//!
//! The fit decomposes the series as `y = trend + seasonal + residual`:
//! a least-squares linear trend over the day offset, a 7-slot weekday
//! profile averaged from the detrended values, and a residual sigma that
//! scales the prediction intervals. Daily crypto series trade every
//! calendar day, so the weekly profile is indexed by calendar weekday.

use crate::domain::PriceSeries;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Input frame in the model's expected schema: a date column (`ds`) and a
/// value column (`y`), renamed from the series' own field names.
#[derive(Debug, Clone)]
pub struct TrainingFrame {
    pub ds: Vec<NaiveDate>,
    pub y: Vec<f64>,
}

impl TrainingFrame {
    pub fn from_series(series: &PriceSeries) -> Self {
        Self {
            ds: series.dates().collect(),
            y: series.closes().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.ds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ds.is_empty()
    }
}

/// A fitted model — the opaque handle returned beside each forecast table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedModel {
    /// First training date; day offsets are measured from here.
    origin: NaiveDate,
    /// Last training date; interval widths grow past this point.
    train_end: NaiveDate,
    intercept: f64,
    slope: f64,
    /// Weekday effects indexed by days-from-Monday.
    seasonal: [f64; 7],
    /// Residual standard deviation after trend and seasonal removal.
    sigma: f64,
    n_obs: usize,
}

impl FittedModel {
    /// Fit trend and weekly seasonality on the frame.
    ///
    /// Fails when the data cannot support a fit: non-finite values, or a
    /// degenerate date axis with no variance.
    pub fn fit(frame: &TrainingFrame) -> Result<Self, String> {
        let n = frame.len();
        debug_assert!(n >= 2, "engine validates the 2-point minimum");

        if frame.y.iter().any(|v| !v.is_finite()) {
            return Err("non-finite value in training data".into());
        }

        let origin = frame.ds[0];
        let train_end = frame.ds[n - 1];
        let xs: Vec<f64> = frame
            .ds
            .iter()
            .map(|d| (*d - origin).num_days() as f64)
            .collect();

        // Least-squares line through (x, y)
        let n_f = n as f64;
        let mean_x = xs.iter().sum::<f64>() / n_f;
        let mean_y = frame.y.iter().sum::<f64>() / n_f;

        let mut cov = 0.0;
        let mut var_x = 0.0;
        for (x, y) in xs.iter().zip(&frame.y) {
            cov += (x - mean_x) * (y - mean_y);
            var_x += (x - mean_x) * (x - mean_x);
        }

        if var_x == 0.0 {
            return Err("date axis has no variance".into());
        }

        let slope = cov / var_x;
        let intercept = mean_y - slope * mean_x;

        // Weekday profile from the detrended values
        let mut sums = [0.0_f64; 7];
        let mut counts = [0_usize; 7];
        for (d, (x, y)) in frame.ds.iter().zip(xs.iter().zip(&frame.y)) {
            let wd = d.weekday().num_days_from_monday() as usize;
            sums[wd] += y - (intercept + slope * x);
            counts[wd] += 1;
        }

        let mut seasonal = [0.0_f64; 7];
        for wd in 0..7 {
            if counts[wd] > 0 {
                seasonal[wd] = sums[wd] / counts[wd] as f64;
            }
        }

        // Residual sigma after both components
        let mut residuals = Vec::with_capacity(n);
        for (d, (x, y)) in frame.ds.iter().zip(xs.iter().zip(&frame.y)) {
            let wd = d.weekday().num_days_from_monday() as usize;
            residuals.push(y - (intercept + slope * x) - seasonal[wd]);
        }
        let mean_r = residuals.iter().sum::<f64>() / n_f;
        let var_r = residuals.iter().map(|r| (r - mean_r).powi(2)).sum::<f64>() / n_f;
        let sigma = var_r.sqrt();

        if !sigma.is_finite() || !slope.is_finite() || !intercept.is_finite() {
            return Err("fit did not converge to finite parameters".into());
        }

        Ok(Self {
            origin,
            train_end,
            intercept,
            slope,
            seasonal,
            sigma,
            n_obs: n,
        })
    }

    /// Point estimate for any calendar date.
    pub fn predict(&self, date: NaiveDate) -> f64 {
        let x = (date - self.origin).num_days() as f64;
        let wd = date.weekday().num_days_from_monday() as usize;
        self.intercept + self.slope * x + self.seasonal[wd]
    }

    /// Half-width of the 95% prediction interval at `date`.
    ///
    /// Residual sigma scaled by sqrt(h + 1), where h is the number of days
    /// past the last training date (0 inside the historical range), so the
    /// band widens with forecast distance.
    pub fn interval_half_width(&self, date: NaiveDate) -> f64 {
        const Z_95: f64 = 1.96;
        let h = (date - self.train_end).num_days().max(0) as f64;
        Z_95 * self.sigma * (h + 1.0).sqrt()
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn n_obs(&self) -> usize {
        self.n_obs
    }

    pub fn train_end(&self) -> NaiveDate {
        self.train_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn frame(dates: &[NaiveDate], ys: &[f64]) -> TrainingFrame {
        TrainingFrame {
            ds: dates.to_vec(),
            y: ys.to_vec(),
        }
    }

    #[test]
    fn fits_exact_line() {
        let dates: Vec<NaiveDate> = (0..10).map(|i| d(2024, 1, 1) + chrono::Duration::days(i)).collect();
        // y = 100 + 2x, no noise — but weekday effects absorb nothing on a
        // perfect line only when each weekday's detrended mean is zero,
        // which holds since detrended values are exactly zero.
        let ys: Vec<f64> = (0..10).map(|i| 100.0 + 2.0 * i as f64).collect();

        let model = FittedModel::fit(&frame(&dates, &ys)).unwrap();
        assert!((model.predict(d(2024, 1, 1)) - 100.0).abs() < 1e-9);
        assert!((model.predict(d(2024, 1, 11)) - 120.0).abs() < 1e-9);
        assert!(model.sigma() < 1e-9);
    }

    #[test]
    fn recovers_weekly_pattern() {
        // Flat 100 with +5 every Monday over 8 weeks
        let start = d(2024, 1, 1); // a Monday
        let dates: Vec<NaiveDate> = (0..56).map(|i| start + chrono::Duration::days(i)).collect();
        let ys: Vec<f64> = dates
            .iter()
            .map(|date| {
                if date.weekday().num_days_from_monday() == 0 {
                    105.0
                } else {
                    100.0
                }
            })
            .collect();

        let model = FittedModel::fit(&frame(&dates, &ys)).unwrap();
        let monday = model.predict(d(2024, 3, 4));
        let tuesday = model.predict(d(2024, 3, 5));
        assert!(monday - tuesday > 4.0, "monday effect lost: {monday} vs {tuesday}");
    }

    #[test]
    fn interval_widens_with_distance() {
        let dates: Vec<NaiveDate> = (0..30).map(|i| d(2024, 1, 1) + chrono::Duration::days(i)).collect();
        let ys: Vec<f64> = (0..30).map(|i| 100.0 + (i % 5) as f64).collect();

        let model = FittedModel::fit(&frame(&dates, &ys)).unwrap();
        let near = model.interval_half_width(model.train_end() + chrono::Duration::days(1));
        let far = model.interval_half_width(model.train_end() + chrono::Duration::days(100));
        assert!(far > near);
    }

    #[test]
    fn historical_width_is_constant() {
        let dates: Vec<NaiveDate> = (0..30).map(|i| d(2024, 1, 1) + chrono::Duration::days(i)).collect();
        let ys: Vec<f64> = (0..30).map(|i| 100.0 + (i % 3) as f64).collect();

        let model = FittedModel::fit(&frame(&dates, &ys)).unwrap();
        let w1 = model.interval_half_width(d(2024, 1, 5));
        let w2 = model.interval_half_width(d(2024, 1, 25));
        assert!((w1 - w2).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_finite_values() {
        let dates = vec![d(2024, 1, 1), d(2024, 1, 2), d(2024, 1, 3)];
        let ys = vec![100.0, f64::INFINITY, 102.0];
        assert!(FittedModel::fit(&frame(&dates, &ys)).is_err());
    }

    #[test]
    fn rejects_zero_date_variance() {
        let dates = vec![d(2024, 1, 1), d(2024, 1, 1)];
        let ys = vec![100.0, 101.0];
        assert!(FittedModel::fit(&frame(&dates, &ys)).is_err());
    }

    #[test]
    fn two_points_suffice() {
        let dates = vec![d(2024, 1, 1), d(2024, 1, 2)];
        let ys = vec![100.0, 102.0];
        let model = FittedModel::fit(&frame(&dates, &ys)).unwrap();
        assert_eq!(model.n_obs(), 2);
        // Extrapolation continues the line through the two points
        assert!((model.predict(d(2024, 1, 3)) - 104.0).abs() < 1.0);
    }
}
