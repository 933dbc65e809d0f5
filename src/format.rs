//! Label formatting for time axes and tooltips. Everything renders in UTC.
use chrono::{DateTime, Utc};
use iced_plot::Tick;

use crate::ticks::{Granularity, instant_from_millis};

/// How the labels of a time axis are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelFormat {
    /// `MM/DD`
    #[default]
    Day,
    /// `HH:mm`
    Hour,
    /// `MM/DD` on midnight, `HH:mm` otherwise.
    DayOrHour,
    /// No label text. Used while an axis is animating between domains.
    Hidden,
}

impl LabelFormat {
    /// The natural label format for ticks of a granularity.
    pub fn for_granularity(granularity: Granularity) -> Self {
        match granularity {
            Granularity::Days => LabelFormat::Day,
            Granularity::Hours => LabelFormat::DayOrHour,
        }
    }

    pub fn format(self, t: DateTime<Utc>) -> String {
        match self {
            LabelFormat::Day => day_label(t),
            LabelFormat::Hour => hour_label(t),
            LabelFormat::DayOrHour if Granularity::Days.is_aligned(t) => day_label(t),
            LabelFormat::DayOrHour => hour_label(t),
            LabelFormat::Hidden => String::new(),
        }
    }

    /// Format a plot coordinate holding Unix milliseconds.
    pub fn format_millis(self, ms: f64) -> String {
        match instant_from_millis(ms.round() as i64) {
            Ok(t) => self.format(t),
            Err(_) => String::new(),
        }
    }

    /// Adapter for the plot widget's tick formatter hook.
    pub fn tick_formatter(self) -> impl Fn(Tick) -> String + Send + Sync + 'static {
        move |tick| self.format_millis(tick.value)
    }
}

pub fn day_label(t: DateTime<Utc>) -> String {
    t.format("%m/%d").to_string()
}

pub fn hour_label(t: DateTime<Utc>) -> String {
    t.format("%H:%M").to_string()
}

/// Tooltip heading, e.g. `04/30 14:55`.
pub fn tooltip_label(ms: f64) -> String {
    match instant_from_millis(ms.round() as i64) {
        Ok(t) => t.format("%m/%d %H:%M").to_string(),
        Err(_) => String::new(),
    }
}

/// Round a value to one decimal place for display.
pub fn round_value(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Tooltip body for a single series: heading, then `label: value`.
pub fn tooltip_text(series_label: &str, x: f64, y: f64) -> String {
    format!("{}\n{}: {}", tooltip_label(x), series_label, round_value(y))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn day_and_hour_labels() {
        let t = Utc.with_ymd_and_hms(2020, 4, 30, 14, 55, 0).unwrap();
        assert_eq!(LabelFormat::Day.format(t), "04/30");
        assert_eq!(LabelFormat::Hour.format(t), "14:55");
        assert_eq!(LabelFormat::Hidden.format(t), "");
    }

    #[test]
    fn zoomed_axis_shows_date_at_midnight() {
        let midnight = Utc.with_ymd_and_hms(2020, 5, 1, 0, 0, 0).unwrap();
        let morning = Utc.with_ymd_and_hms(2020, 5, 1, 9, 0, 0).unwrap();
        assert_eq!(LabelFormat::DayOrHour.format(midnight), "05/01");
        assert_eq!(LabelFormat::DayOrHour.format(morning), "09:00");
    }

    #[test]
    fn tooltip_rounds_to_one_decimal() {
        let ms = Utc
            .with_ymd_and_hms(2020, 4, 30, 14, 55, 0)
            .unwrap()
            .timestamp_millis() as f64;
        assert_eq!(tooltip_text("tubing", ms, 231.46), "04/30 14:55\ntubing: 231.5");
        assert_eq!(round_value(-3.04), -3.0);
    }
}
