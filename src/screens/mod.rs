//! The chart screens. Each one owns its plots and interaction state and
//! exposes the usual `update`/`view` pair so it can be hosted by an Iced
//! application on its own or inside the gallery.
pub mod cycles;
pub mod scrub;
pub mod scrub_custom;
pub mod zoom_domain;

pub(crate) mod marks;

pub use cycles::CyclesChart;
pub use scrub::ScrubCharts;
pub use scrub_custom::ScrubChartsCustom;
pub use zoom_domain::ZoomDomain;

use iced::widget::{container, row, text};
use iced::{Element, Length};

use crate::config::LayoutConfig;

/// Section heading shown above each screen.
pub(crate) fn section_title<'a, Message: 'a>(title: &'a str) -> Element<'a, Message> {
    container(text(title).size(16)).padding([8, 0]).into()
}

/// A chart with a fixed-width title column on its left.
pub(crate) fn titled_row<'a, Message: 'a>(
    title: impl Into<Element<'a, Message>>,
    chart: impl Into<Element<'a, Message>>,
    height: f32,
    layout: &LayoutConfig,
) -> Element<'a, Message> {
    row![
        container(title).width(layout.title_width),
        container(chart).width(Length::Fill).height(height),
    ]
    .into()
}
