//! Approval and cancellation timestamps.
//!
//! Calendar days are drawn uniformly across the window. The hour comes
//! from the hour-of-day weight table; minute and second are uniform.

use crate::{
    config::CancelDelay,
    error::{GenError, GenResult},
    rng::GenRng,
    sampler::WeightedTable,
};
use chrono::{Duration, NaiveDateTime, NaiveTime};

/// The dataset's time span. `end` is the boundary cancellations must not
/// cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: NaiveDateTime,
    end:   NaiveDateTime,
}

impl DateWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> GenResult<Self> {
        if end < start {
            return Err(GenError::InvalidConfig {
                reason: format!("window end {end} precedes start {start}"),
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Whole days between start and end. A window inside a single day
    /// has zero.
    pub fn whole_days(&self) -> u64 {
        (self.end - self.start).num_days().max(0) as u64
    }

    /// True when `t` lies in `[start, end]`.
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        t >= self.start && t <= self.end
    }
}

/// Build the hour-of-day table from 24 weights, hour `i` carrying
/// `weights[i]`.
pub fn hour_table(weights: &[f64]) -> GenResult<WeightedTable<u32>> {
    if weights.len() != 24 {
        return Err(GenError::InvalidWeights {
            table: "hour_weights",
            reason: format!("expected 24 entries, got {}", weights.len()),
        });
    }
    WeightedTable::new(
        "hour_weights",
        weights.iter().enumerate().map(|(h, &w)| (h as u32, w)).collect(),
    )
}

/// Draw an approval time inside `window`.
///
/// The day offset is uniform over `[0, whole_days]` from the start date;
/// the time of day replaces the start's time. On the last day the result
/// can therefore land after `window.end()`.
pub fn approval_time(
    rng: &mut GenRng,
    window: &DateWindow,
    hours: &WeightedTable<u32>,
) -> NaiveDateTime {
    let day_offset = rng.range_inclusive(0, window.whole_days()) as i64;
    let hour = *hours.sample(rng) as i64;
    let minute = rng.range_inclusive(0, 59) as i64;
    let second = rng.range_inclusive(0, 59) as i64;

    let midnight = (window.start.date() + Duration::days(day_offset)).and_time(NaiveTime::MIN);
    midnight + Duration::seconds(hour * 3600 + minute * 60 + second)
}

/// Candidate cancellation moment: approval plus a random delay.
/// `None` when the sum runs off the end of the calendar, which lies past
/// any window end.
pub fn cancellation_time(
    rng: &mut GenRng,
    approval: NaiveDateTime,
    delay: &CancelDelay,
) -> Option<NaiveDateTime> {
    let hours = rng.range_inclusive(delay.min_hours as u64, delay.max_hours as u64) as i64;
    let minutes = rng.range_inclusive(0, delay.max_minutes as u64) as i64;
    approval.checked_add_signed(Duration::hours(hours) + Duration::minutes(minutes))
}
