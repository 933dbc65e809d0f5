//! Calendar-aligned tick generation for time axes.
//!
//! Ticks sit on UTC hour or day boundaries so that rendered labels never drift
//! with the local timezone. The generator is a pure function of its inputs.
use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveTime, TimeDelta, Timelike, Utc};
use iced_plot::{Tick, TickWeight};

use crate::error::{Error, Result};

/// The unit ticks are aligned to and stepped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Hours,
    Days,
}

impl Granularity {
    /// Distance between two consecutive boundaries.
    pub fn step(self) -> TimeDelta {
        match self {
            Granularity::Hours => TimeDelta::hours(1),
            Granularity::Days => TimeDelta::days(1),
        }
    }

    /// Step size in milliseconds.
    pub fn step_millis(self) -> i64 {
        self.step().num_milliseconds()
    }

    pub fn name(self) -> &'static str {
        match self {
            Granularity::Hours => "hours",
            Granularity::Days => "days",
        }
    }

    /// The boundary at or before `t`.
    pub fn floor(self, t: DateTime<Utc>) -> DateTime<Utc> {
        let midnight = t.date_naive().and_time(NaiveTime::MIN);
        match self {
            Granularity::Days => midnight.and_utc(),
            Granularity::Hours => (midnight + TimeDelta::hours(i64::from(t.hour()))).and_utc(),
        }
    }

    /// The boundary at or after `t`, or `None` if it is past the representable range.
    pub fn ceil(self, t: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let floor = self.floor(t);
        if floor < t {
            floor.checked_add_signed(self.step())
        } else {
            Some(floor)
        }
    }

    /// Whether `t` sits exactly on a boundary of this granularity.
    pub fn is_aligned(self, t: DateTime<Utc>) -> bool {
        self.floor(t) == t
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Granularity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hours" => Ok(Granularity::Hours),
            "days" => Ok(Granularity::Days),
            other => Err(Error::InvalidArgument(format!(
                "unknown granularity `{other}`, expected `hours` or `days`"
            ))),
        }
    }
}

/// An inclusive range of instants an axis covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeDomain {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeDomain {
    /// Create a domain, rejecting `start > end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        let domain = Self { start, end };
        domain.validate()?;
        Ok(domain)
    }

    /// Create a domain from Unix timestamps in milliseconds.
    pub fn from_millis(start: i64, end: i64) -> Result<Self> {
        Self::new(instant_from_millis(start)?, instant_from_millis(end)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.start > self.end {
            return Err(Error::InvalidArgument(format!(
                "domain start {} is after end {}",
                self.start.to_rfc3339(),
                self.end.to_rfc3339()
            )));
        }
        Ok(())
    }

    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.start <= t && t <= self.end
    }

    /// `(start, end)` as Unix milliseconds.
    pub fn as_millis(&self) -> (i64, i64) {
        (self.start.timestamp_millis(), self.end.timestamp_millis())
    }

    /// `(start, end)` as plot coordinates.
    pub fn as_plot_range(&self) -> (f64, f64) {
        let (start, end) = self.as_millis();
        (start as f64, end as f64)
    }
}

pub(crate) fn instant_from_millis(ms: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| Error::InvalidArgument(format!("timestamp {ms} ms is out of range")))
}

/// Generate the boundaries of `granularity` that fall inside `domain`.
///
/// The first tick is the first boundary at or after `domain.start`; the rest
/// follow one unit apart until the next one would pass `domain.end`. A domain
/// narrower than one unit can yield no ticks at all, which is not an error.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use time_charts::ticks::{Granularity, TimeDomain, ticks_for_domain};
///
/// let domain = TimeDomain::new(
///     Utc.with_ymd_and_hms(2020, 4, 30, 10, 15, 0).unwrap(),
///     Utc.with_ymd_and_hms(2020, 4, 30, 13, 0, 0).unwrap(),
/// )
/// .unwrap();
/// let ticks = ticks_for_domain(domain, Granularity::Hours).unwrap();
/// assert_eq!(ticks.len(), 3);
/// ```
pub fn ticks_for_domain(domain: TimeDomain, granularity: Granularity) -> Result<Vec<DateTime<Utc>>> {
    domain.validate()?;

    let mut ticks = Vec::new();
    let mut next = granularity.ceil(domain.start);
    while let Some(tick) = next.filter(|t| *t <= domain.end) {
        ticks.push(tick);
        next = tick.checked_add_signed(granularity.step());
    }
    Ok(ticks)
}

/// Millisecond form of [`ticks_for_domain`], taking the granularity by name.
///
/// An unrecognized granularity fails before any tick is produced.
pub fn ticks_for_millis(domain: [i64; 2], granularity: &str) -> Result<Vec<i64>> {
    let granularity: Granularity = granularity.parse()?;
    let domain = TimeDomain::from_millis(domain[0], domain[1])?;
    Ok(ticks_for_domain(domain, granularity)?
        .into_iter()
        .map(|t| t.timestamp_millis())
        .collect())
}

/// Grid weight for a tick: midnight is major, any other hour minor.
pub fn tick_weight(t: DateTime<Utc>) -> TickWeight {
    if Granularity::Days.is_aligned(t) {
        TickWeight::Major
    } else {
        TickWeight::Minor
    }
}

/// Turn a precomputed tick sequence into a tick producer for the plot widget.
///
/// The producer hands back the ticks within the visible range only, so a plot
/// that is panned keeps the computed boundaries instead of inventing new ones.
pub fn fixed_tick_producer(
    ticks: &[DateTime<Utc>],
    granularity: Granularity,
) -> impl Fn(f64, f64) -> Vec<Tick> + Send + Sync + 'static {
    let step = granularity.step_millis() as f64;
    let ticks: Vec<Tick> = ticks
        .iter()
        .map(|t| Tick {
            value: t.timestamp_millis() as f64,
            step_size: step,
            line_type: tick_weight(*t),
        })
        .collect();

    move |min, max| {
        ticks
            .iter()
            .filter(|tick| tick.value >= min && tick.value <= max)
            .cloned()
            .collect()
    }
}
