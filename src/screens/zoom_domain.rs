//! Area chart that zooms between the full data range and its last day.
//!
//! Each zoom level has its own domain and tick set: daily ticks when zoomed
//! out, hourly ticks when zoomed in. The x limits animate between the two and
//! tick labels are hidden until the animation settles.
use std::time::{Duration, Instant};

use iced::widget::{button, column, container, text};
use iced::{Color, Element, Length, Subscription, window};
use iced_plot::{Fill, HLine, LineStyle, PlotUiMessage, PlotWidget, Series};

use crate::chart::{TimeAxis, TimeChartBuilder};
use crate::config::{Config, LayoutConfig};
use crate::data::{self, SampleData};
use crate::error::Result;
use crate::format::LabelFormat;
use crate::state::ZoomState;
use crate::ticks::{Granularity, TimeDomain};

const TITLE: &str = "Area chart that can be zoomed by providing a custom domain and set of ticks.";
const STROKE: Color = Color::from_rgb8(0x88, 0x84, 0xd8);

#[derive(Debug, Clone)]
pub enum Message {
    Plot(PlotUiMessage),
    ToggleZoom,
    Frame(Instant),
}

pub struct ZoomDomain {
    plot: PlotWidget,
    state: ZoomState,
    full_axis: TimeAxis,
    zoom_axis: TimeAxis,
    duration: Duration,
    layout: LayoutConfig,
}

impl ZoomDomain {
    pub fn new(data: &SampleData, config: &Config) -> Result<Self> {
        let full = data::extent("flow", &data.flow)?;
        let zoom = zoom_domain(full)?;
        let full_axis = TimeAxis::new(full, Granularity::Days)?;
        let zoom_axis = TimeAxis::new(zoom, Granularity::Hours)?;

        let positions = data::to_series(&data.flow, |s| s.flow_rate);
        let (_, y_max) = data::value_extent(positions.iter().map(|p| p[1]), 0.0).unwrap_or((0.0, 1.0));

        let area = Series::line_only(positions, LineStyle::Solid)
            .with_label("flowRate")
            .with_color(STROKE);
        let baseline = HLine::new(0.0).with_color(Color::TRANSPARENT);
        let fill = Fill::new(area.id, baseline.id).with_color(Color { a: 0.4, ..STROKE });

        let plot = TimeChartBuilder::new()
            .with_axis(full_axis.clone())
            .with_y_lim(0.0, (y_max * 1.1).max(1.0))
            .add_series(area)
            .add_hline(baseline)
            .add_fill(fill)
            .build()?;

        Ok(Self {
            plot,
            state: ZoomState::new(full_axis.plot_range(), zoom_axis.plot_range()),
            full_axis,
            zoom_axis,
            duration: config.animation.zoom_duration(),
            layout: config.layout.clone(),
        })
    }

    pub fn state(&self) -> ZoomState {
        self.state
    }

    /// The axis the chart is showing or heading towards.
    pub fn current_axis(&self) -> TimeAxis {
        let axis = if self.state.is_zoomed() {
            &self.zoom_axis
        } else {
            &self.full_axis
        };
        if self.state.labels_visible() {
            axis.clone()
        } else {
            axis.clone().with_label(LabelFormat::Hidden)
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Plot(msg) => self.plot.update(msg),
            Message::ToggleZoom => {
                let now = Instant::now();
                self.state = self.state.toggle(now, self.duration);
                tracing::debug!(zoomed = self.state.is_zoomed(), "toggled zoom");
                self.sync_plot(now);
            }
            Message::Frame(now) => {
                self.state = self.state.advance(now);
                self.sync_plot(now);
            }
        }
    }

    fn sync_plot(&mut self, now: Instant) {
        let (min, max) = self.state.visible_range(now);
        self.plot.set_x_lim(min, max);
        self.current_axis().apply(&mut self.plot);
    }

    /// Frame ticks while the zoom animation runs.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.state.is_animating() {
            window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let label = if self.state.is_zoomed() {
            "Zoom Out"
        } else {
            "Zoom In"
        };
        let toggle = button(container(text(label)).center_x(Length::Fill))
            .on_press(Message::ToggleZoom)
            .width(Length::Fill)
            .height(60.0);

        column![
            super::section_title(TITLE),
            super::titled_row(
                container(toggle).padding(5),
                self.plot.view().map(Message::Plot),
                self.layout.area_chart_height,
                &self.layout,
            ),
        ]
        .spacing(24)
        .into()
    }
}

/// From the start of the last day in `full` to its end.
pub fn zoom_domain(full: TimeDomain) -> Result<TimeDomain> {
    let start = Granularity::Days.floor(full.end).max(full.start);
    TimeDomain::new(start, full.end)
}
