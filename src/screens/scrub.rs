//! Tubing and casing pressure on two line charts that share one x axis.
//!
//! Both plots hold the same [`AxisLink`], so panning or zooming either one
//! moves the other, and each shows its own tooltip for the hovered sample.
use iced::widget::{column, text};
use iced::{Color, Element};
use iced_plot::{AxisLink, LineStyle, PlotUiMessage, PlotWidget, Series};

use crate::chart::{TimeAxis, TimeChartBuilder};
use crate::config::{Config, LayoutConfig};
use crate::data::{self, PressureSample, SampleData};
use crate::error::Result;
use crate::ticks::Granularity;

const TITLE: &str = "Two charts with tooltips, synchronized through a shared x axis.";
const TUBING_COLOR: Color = Color::from_rgb8(0x88, 0x84, 0xd8);
const CASING_COLOR: Color = Color::from_rgb8(0x82, 0xca, 0x9d);

#[derive(Debug, Clone)]
pub enum Message {
    Tubing(PlotUiMessage),
    Casing(PlotUiMessage),
}

pub struct ScrubCharts {
    tubing: PlotWidget,
    casing: PlotWidget,
    layout: LayoutConfig,
}

impl ScrubCharts {
    pub fn new(data: &SampleData, config: &Config) -> Result<Self> {
        // Both charts use the tubing extent so their ticks line up.
        let domain = data::extent("tubing", &data.tubing)?;
        let axis = TimeAxis::new(domain, Granularity::Days)?;
        let link = AxisLink::new();

        Ok(Self {
            tubing: pressure_plot("tubing", &data.tubing, &axis, &link, TUBING_COLOR)?,
            casing: pressure_plot("casing", &data.casing, &axis, &link, CASING_COLOR)?,
            layout: config.layout.clone(),
        })
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tubing(msg) => self.tubing.update(msg),
            Message::Casing(msg) => self.casing.update(msg),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let height = self.layout.row_chart_height;
        column![
            super::section_title(TITLE),
            super::titled_row(
                text("Tubing"),
                self.tubing.view().map(Message::Tubing),
                height,
                &self.layout,
            ),
            super::titled_row(
                text("Casing"),
                self.casing.view().map(Message::Casing),
                height,
                &self.layout,
            ),
        ]
        .spacing(8)
        .into()
    }
}

fn pressure_plot(
    label: &str,
    samples: &[PressureSample],
    axis: &TimeAxis,
    link: &AxisLink,
    color: Color,
) -> Result<PlotWidget> {
    let positions = data::to_series(samples, |s| s.value);
    let (y_min, y_max) =
        data::value_extent(positions.iter().map(|p| p[1]), 10.0).unwrap_or((0.0, 1.0));

    TimeChartBuilder::new()
        .with_axis(axis.clone())
        .with_y_lim(y_min, y_max)
        .with_x_axis_link(link.clone())
        .with_crosshairs(true)
        .add_series(
            Series::line_only(positions, LineStyle::Solid)
                .with_label(label)
                .with_color(color),
        )
        .build()
}
