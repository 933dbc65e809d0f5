//! Drawing helpers shared by the canvas-based charts.
use iced::widget::canvas::{Frame, Path, Stroke, Text};
use iced::{Color, Pixels, Point, Rectangle, Size};

use crate::chart::TimeAxis;
use crate::scale::LinearScale;

/// Space left around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

/// Right margin leaves room for the last tick label to run past the data.
pub(crate) const ROW_MARGINS: Margins = Margins {
    top: 10.0,
    right: 100.0,
    bottom: 20.0,
    left: 10.0,
};

const TICK_LENGTH: f32 = 6.0;
const LABEL_SIZE: f32 = 11.0;

pub(crate) fn plot_area(size: Size, margins: Margins) -> Rectangle {
    Rectangle {
        x: margins.left,
        y: margins.top,
        width: (size.width - margins.left - margins.right).max(1.0),
        height: (size.height - margins.top - margins.bottom).max(1.0),
    }
}

pub(crate) fn time_scale(axis: &TimeAxis, area: Rectangle) -> LinearScale {
    LinearScale::new(axis.plot_range(), (area.x, area.x + area.width))
}

/// Baseline, tick marks and labels beneath `area`.
pub(crate) fn draw_time_axis(
    frame: &mut Frame,
    area: Rectangle,
    x: &LinearScale,
    axis: &TimeAxis,
    color: Color,
) {
    let baseline_y = area.y + area.height;
    let stroke = Stroke::default().with_color(color).with_width(1.0);

    frame.stroke(
        &Path::line(
            Point::new(area.x, baseline_y),
            Point::new(area.x + area.width, baseline_y),
        ),
        stroke,
    );

    for tick in &axis.ticks {
        let px = x.scale(tick.timestamp_millis() as f64);
        frame.stroke(
            &Path::line(
                Point::new(px, baseline_y),
                Point::new(px, baseline_y + TICK_LENGTH),
            ),
            stroke,
        );
        frame.fill_text(Text {
            content: axis.label.format(*tick),
            position: Point::new(px + 2.0, baseline_y + TICK_LENGTH - 2.0),
            color: Color { a: 0.6, ..color },
            size: Pixels(LABEL_SIZE),
            ..Text::default()
        });
    }
}

/// Polyline through `[x, y]` data positions.
pub(crate) fn line_path(positions: &[[f64; 2]], x: &LinearScale, y: &LinearScale) -> Path {
    Path::new(|builder| {
        let mut points = positions.iter().map(|p| Point::new(x.scale(p[0]), y.scale(p[1])));
        if let Some(first) = points.next() {
            builder.move_to(first);
            for point in points {
                builder.line_to(point);
            }
        }
    })
}

/// Vertical line spanning `area` at pixel `px`.
pub(crate) fn cursor_line(area: Rectangle, px: f32) -> Path {
    Path::line(Point::new(px, area.y), Point::new(px, area.y + area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_area_subtracts_margins() {
        let area = plot_area(Size::new(600.0, 100.0), ROW_MARGINS);
        assert_eq!(area, Rectangle { x: 10.0, y: 10.0, width: 490.0, height: 70.0 });
    }

    #[test]
    fn plot_area_never_collapses() {
        let area = plot_area(Size::new(50.0, 10.0), ROW_MARGINS);
        assert_eq!(area.width, 1.0);
        assert_eq!(area.height, 1.0);
    }
}
