use crate::recurrence::group::GroupKey;
use crate::recurrence::interval::IntervalEstimator;

/// Batch classifier policy identifier, emitted with process results.
pub const AMOUNT_TOLERANCE_POLICY_VERSION: &str = "amount-tolerance/v1";

/// Bills-view classifier policy identifier.
pub const INTERVAL_WINDOW_POLICY_VERSION: &str = "interval-window/v1";

/// A series keeps its recurring flag while its amounts span at most this many
/// distinct values. One fee change is tolerated; a volatile series is not.
/// The threshold is a frozen heuristic and must stay at 2.
pub const MAX_DISTINCT_AMOUNTS: usize = 2;

/// Inclusive interval window for the bills view: daily up to a leap year.
pub const MIN_INTERVAL_DAYS: f64 = 1.0;
pub const MAX_INTERVAL_DAYS: f64 = 366.0;

/// The two recurrence-detection presentations, as independently selectable
/// strategies. Each binds a grouping key to a classifier rule and an interval
/// estimator; they are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurrencePolicy {
    /// Batch-file rule: repeats with at most `MAX_DISTINCT_AMOUNTS` distinct
    /// amounts, grouped on description+category, mean-of-gaps intervals.
    AmountTolerance,
    /// Bills-view rule: repeats whose endpoint-span interval lands inside the
    /// `[MIN_INTERVAL_DAYS, MAX_INTERVAL_DAYS]` window, grouped on
    /// description alone.
    IntervalWindow,
}

impl RecurrencePolicy {
    pub const fn version(self) -> &'static str {
        match self {
            Self::AmountTolerance => AMOUNT_TOLERANCE_POLICY_VERSION,
            Self::IntervalWindow => INTERVAL_WINDOW_POLICY_VERSION,
        }
    }

    pub const fn group_key(self) -> GroupKey {
        match self {
            Self::AmountTolerance => GroupKey::DescriptionCategory,
            Self::IntervalWindow => GroupKey::Description,
        }
    }

    pub const fn estimator(self) -> IntervalEstimator {
        match self {
            Self::AmountTolerance => IntervalEstimator::MeanOfGaps,
            Self::IntervalWindow => IntervalEstimator::EndpointSpan,
        }
    }
}
