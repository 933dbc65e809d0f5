use std::sync::Arc;

use chrono::{DateTime, Utc};
use iced_plot::{AxisLink, Fill, HLine, PlotWidget, PlotWidgetBuilder, Series, Tick};

use crate::error::{Error, Result};
use crate::format::{self, LabelFormat};
use crate::ticks::{Granularity, TimeDomain, fixed_tick_producer, ticks_for_domain};

/// Everything a plot needs to know about its time axis.
///
/// The tick sequence is computed once from the domain and granularity and
/// handed to the plot as a fixed set, rather than letting the plot pick
/// positions of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxis {
    pub domain: TimeDomain,
    pub granularity: Granularity,
    pub ticks: Vec<DateTime<Utc>>,
    pub label: LabelFormat,
}

impl TimeAxis {
    pub fn new(domain: TimeDomain, granularity: Granularity) -> Result<Self> {
        Ok(Self {
            ticks: ticks_for_domain(domain, granularity)?,
            label: LabelFormat::for_granularity(granularity),
            domain,
            granularity,
        })
    }

    pub fn with_label(mut self, label: LabelFormat) -> Self {
        self.label = label;
        self
    }

    /// X limits for the plot. A domain collapsed to one instant is widened
    /// by one step on each side, since a plot cannot show a zero-width range.
    pub fn plot_range(&self) -> (f64, f64) {
        let (min, max) = self.domain.as_plot_range();
        if min < max {
            (min, max)
        } else {
            let pad = self.granularity.step_millis() as f64;
            (min - pad, max + pad)
        }
    }

    pub fn tick_millis(&self) -> Vec<i64> {
        self.ticks.iter().map(|t| t.timestamp_millis()).collect()
    }

    /// Install this axis' ticks and labels on an existing plot.
    ///
    /// A hidden axis gets no ticks at all, so neither gridlines nor labels
    /// are drawn.
    pub fn apply(&self, widget: &mut PlotWidget) {
        if self.label == LabelFormat::Hidden {
            widget.set_x_tick_producer(Arc::new(|_: f64, _: f64| Vec::<Tick>::new()));
        } else {
            widget.set_x_tick_producer(Arc::new(fixed_tick_producer(&self.ticks, self.granularity)));
        }
        widget.set_x_axis_formatter(Arc::new(self.label.tick_formatter()));
    }
}

/// Builder for a plot with a time x axis.
///
/// Wraps [`PlotWidgetBuilder`] with the settings every time chart shares:
/// fixed limits instead of autoscaling, the axis' precomputed ticks, and
/// tooltips that read `MM/DD HH:mm` with one-decimal values.
///
/// # Example
///
/// ```
/// use iced_plot::{LineStyle, Series};
/// use time_charts::{Granularity, TimeAxis, TimeChartBuilder, TimeDomain};
///
/// # fn main() -> time_charts::Result<()> {
/// let domain = TimeDomain::from_millis(1_588_032_000_000, 1_588_291_199_000)?;
/// let series = Series::line_only(
///     vec![[1_588_032_000_000.0, 120.0], [1_588_291_199_000.0, 140.0]],
///     LineStyle::Solid,
/// );
/// let _plot = TimeChartBuilder::new()
///     .with_axis(TimeAxis::new(domain, Granularity::Days)?)
///     .with_y_lim(0.0, 200.0)
///     .add_series(series)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct TimeChartBuilder {
    axis: Option<TimeAxis>,
    y_label: Option<String>,
    y_lim: Option<(f64, f64)>,
    x_axis_link: Option<AxisLink>,
    crosshairs: bool,
    series: Vec<Series>,
    hlines: Vec<HLine>,
    fills: Vec<Fill>,
}

impl TimeChartBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_axis(mut self, axis: TimeAxis) -> Self {
        self.axis = Some(axis);
        self
    }

    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        let l = label.into();
        if !l.is_empty() {
            self.y_label = Some(l);
        }
        self
    }

    pub fn with_y_lim(mut self, min: f64, max: f64) -> Self {
        self.y_lim = Some((min, max));
        self
    }

    /// Share the x axis with other plots so pan and zoom stay in step.
    pub fn with_x_axis_link(mut self, link: AxisLink) -> Self {
        self.x_axis_link = Some(link);
        self
    }

    pub fn with_crosshairs(mut self, enabled: bool) -> Self {
        self.crosshairs = enabled;
        self
    }

    pub fn add_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn add_hline(mut self, hline: HLine) -> Self {
        self.hlines.push(hline);
        self
    }

    pub fn add_fill(mut self, fill: Fill) -> Self {
        self.fills.push(fill);
        self
    }

    pub fn build(self) -> Result<PlotWidget> {
        let mut builder = PlotWidgetBuilder::new()
            .with_autoscale_on_updates(false)
            .with_crosshairs(self.crosshairs)
            .with_hover_highlight_provider(|context, point| {
                point.resize_marker(1.5);
                Some(format::tooltip_text(&context.series_label, point.x, point.y))
            });

        if let Some(axis) = self.axis {
            let (min, max) = axis.plot_range();
            builder = builder
                .with_x_lim(min, max)
                .with_x_tick_producer(fixed_tick_producer(&axis.ticks, axis.granularity))
                .with_x_tick_formatter(axis.label.tick_formatter());
        }
        if let Some(label) = self.y_label {
            builder = builder.with_y_label(label);
        }
        if let Some((min, max)) = self.y_lim {
            builder = builder.with_y_lim(min, max);
        }
        if let Some(link) = self.x_axis_link {
            builder = builder.with_x_axis_link(link);
        }
        for series in self.series {
            builder = builder.add_series(series);
        }
        for hline in self.hlines {
            builder = builder.add_hline(hline);
        }
        for fill in self.fills {
            builder = builder.add_fill(fill);
        }

        builder.build().map_err(|err| Error::Plot(format!("{err:?}")))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use iced_plot::LineStyle;

    use super::*;

    fn domain() -> TimeDomain {
        TimeDomain::new(
            Utc.with_ymd_and_hms(2020, 4, 27, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2020, 4, 30, 23, 45, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn axis_precomputes_ticks_and_label() {
        let axis = TimeAxis::new(domain(), Granularity::Days).unwrap();
        assert_eq!(axis.ticks.len(), 4);
        assert_eq!(axis.label, LabelFormat::Day);

        let hourly = TimeAxis::new(domain(), Granularity::Hours).unwrap();
        assert_eq!(hourly.ticks.len(), 4 * 24);
        assert_eq!(hourly.label, LabelFormat::DayOrHour);
    }

    #[test]
    fn axis_millis_are_day_aligned() {
        let axis = TimeAxis::new(domain(), Granularity::Days).unwrap();
        assert!(axis.tick_millis().iter().all(|ms| ms % 86_400_000 == 0));
    }

    #[test]
    fn hidden_label_override() {
        let axis = TimeAxis::new(domain(), Granularity::Days)
            .unwrap()
            .with_label(LabelFormat::Hidden);
        assert_eq!(axis.label, LabelFormat::Hidden);
    }

    fn line(domain: TimeDomain) -> Series {
        let (start, end) = domain.as_plot_range();
        Series::line_only(vec![[start, 1.0], [end, 2.0]], LineStyle::Solid).with_label("flow")
    }

    #[test]
    fn builds_plot_with_time_axis() {
        let axis = TimeAxis::new(domain(), Granularity::Days).unwrap();
        let mut plot = TimeChartBuilder::new()
            .with_axis(axis.clone())
            .with_y_lim(0.0, 3.0)
            .with_crosshairs(true)
            .add_series(line(domain()))
            .build()
            .unwrap();

        axis.with_label(LabelFormat::Hidden).apply(&mut plot);
        TimeAxis::new(domain(), Granularity::Hours).unwrap().apply(&mut plot);
    }

    #[test]
    fn single_instant_domain_is_widened() {
        let t = Utc.with_ymd_and_hms(2020, 4, 30, 0, 0, 0).unwrap();
        let point = TimeDomain::new(t, t).unwrap();
        let axis = TimeAxis::new(point, Granularity::Days).unwrap();
        assert_eq!(axis.ticks, vec![t]);

        let (min, max) = axis.plot_range();
        let ms = t.timestamp_millis() as f64;
        assert_eq!((min, max), (ms - 86_400_000.0, ms + 86_400_000.0));

        let built = TimeChartBuilder::new()
            .with_axis(axis)
            .with_y_lim(0.0, 1.0)
            .add_series(line(point))
            .build();
        assert!(built.is_ok());
    }

    #[test]
    fn plot_range_keeps_regular_domain() {
        let axis = TimeAxis::new(domain(), Granularity::Hours).unwrap();
        assert_eq!(axis.plot_range(), domain().as_plot_range());
    }
}
