use chrono::{Duration, NaiveDate};

/// How the representative gap between occurrences is computed. Each
/// presentation has its own formulation; both are kept as distinct,
/// independently selectable policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalEstimator {
    /// Arithmetic mean of every consecutive day gap.
    MeanOfGaps,
    /// Total span over gap count: `(last - first) / (count - 1)`.
    EndpointSpan,
}

impl IntervalEstimator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MeanOfGaps => "mean-of-gaps",
            Self::EndpointSpan => "endpoint-span",
        }
    }

    /// Representative interval in days, fractional results possible.
    /// Returns `None` with fewer than two dates. Input order is irrelevant.
    pub fn estimate(self, dates: &[NaiveDate]) -> Option<f64> {
        if dates.len() < 2 {
            return None;
        }

        let mut sorted = dates.to_vec();
        sorted.sort_unstable();

        match self {
            Self::MeanOfGaps => {
                let gaps = sorted
                    .windows(2)
                    .map(|pair| (pair[1] - pair[0]).num_days())
                    .collect::<Vec<i64>>();
                let total: i64 = gaps.iter().sum();
                Some(total as f64 / gaps.len() as f64)
            }
            Self::EndpointSpan => {
                let span = (sorted[sorted.len() - 1] - sorted[0]).num_days();
                Some(span as f64 / (sorted.len() - 1) as f64)
            }
        }
    }
}

/// Projects the next occurrence as `last + round(interval)` calendar days.
/// Fractional intervals round half away from zero.
pub fn predict_next_payment(last: NaiveDate, interval_days: Option<f64>) -> Option<NaiveDate> {
    let interval = interval_days?;
    Some(last + Duration::days(interval.round() as i64))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{IntervalEstimator, predict_next_payment};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
    }

    #[test]
    fn mean_of_gaps_averages_consecutive_differences() {
        let dates = [date(2023, 1, 1), date(2023, 2, 1), date(2023, 3, 1)];
        // 31-day and 28-day gaps average to 29.5, not a round 30.
        assert_eq!(IntervalEstimator::MeanOfGaps.estimate(&dates), Some(29.5));
    }

    #[test]
    fn endpoint_span_divides_total_span_by_gap_count() {
        let dates = [date(2023, 1, 1), date(2023, 1, 2), date(2023, 1, 31)];
        assert_eq!(
            IntervalEstimator::EndpointSpan.estimate(&dates),
            Some(15.0)
        );

        let pair = [date(2023, 1, 1), date(2023, 2, 1)];
        assert_eq!(IntervalEstimator::EndpointSpan.estimate(&pair), Some(31.0));
    }

    #[test]
    fn estimates_ignore_input_order() {
        let dates = [date(2023, 3, 1), date(2023, 1, 1), date(2023, 2, 1)];
        assert_eq!(IntervalEstimator::MeanOfGaps.estimate(&dates), Some(29.5));
    }

    #[test]
    fn fewer_than_two_dates_yield_no_estimate() {
        assert_eq!(IntervalEstimator::MeanOfGaps.estimate(&[]), None);
        assert_eq!(
            IntervalEstimator::EndpointSpan.estimate(&[date(2023, 1, 1)]),
            None
        );
    }

    #[test]
    fn prediction_adds_rounded_interval_days() {
        let next = predict_next_payment(date(2023, 3, 1), Some(30.0));
        assert_eq!(next, Some(date(2023, 3, 31)));

        let fractional = predict_next_payment(date(2023, 3, 1), Some(29.5));
        assert_eq!(fractional, Some(date(2023, 3, 31)));

        let below_half = predict_next_payment(date(2023, 3, 1), Some(29.4));
        assert_eq!(below_half, Some(date(2023, 3, 30)));
    }

    #[test]
    fn missing_interval_yields_no_prediction() {
        assert_eq!(predict_next_payment(date(2023, 3, 1), None), None);
    }
}
