//! Two line charts under a single overlaid cursor.
//!
//! Instead of one tooltip per chart, a cursor line runs through both rows at
//! the hovered sample and a single readout lists every row's value there.
use iced::widget::canvas::{self, Cache, Event, Geometry, Path, Stroke, Text};
use iced::widget::{column, text};
use iced::{Color, Element, Length, Pixels, Point, Rectangle, Renderer, Size, Theme, mouse};

use crate::chart::TimeAxis;
use crate::config::{Config, LayoutConfig};
use crate::data::{self, SampleData};
use crate::error::Result;
use crate::format;
use crate::scale::LinearScale;
use crate::ticks::Granularity;

use super::marks::{self, ROW_MARGINS};

const TITLE: &str = "Two charts with one overlaid cursor and a unified readout.";
const ROW_GAP: f32 = 16.0;
const LINE_COLOR: Color = Color::from_rgb8(0x88, 0x84, 0xd8);
const DOT_RADIUS: f32 = 3.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The sample under the cursor changed, `None` when the cursor left.
    Scrub(Option<i64>),
}

struct Row {
    title: &'static str,
    positions: Vec<[f64; 2]>,
}

/// Values at the cursor, one per row.
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    pub time: i64,
    pub values: Vec<(&'static str, f64)>,
}

impl Readout {
    pub fn text(&self) -> String {
        let mut out = format::tooltip_label(self.time as f64);
        for (title, value) in &self.values {
            out.push_str(&format!("   {title}: {}", format::round_value(*value)));
        }
        out
    }
}

pub struct ScrubChartsCustom {
    rows: Vec<Row>,
    axis: TimeAxis,
    y_domain: (f64, f64),
    cursor: Option<i64>,
    layout: LayoutConfig,
    lines: Cache,
    overlay: Cache,
}

impl ScrubChartsCustom {
    pub fn new(data: &SampleData, config: &Config) -> Result<Self> {
        let domain = data::extent("simple", &data.simple)?;
        let positions = data::to_series(&data.simple, |s| s.y);
        let y_domain =
            data::value_extent(positions.iter().map(|p| p[1]), 10.0).unwrap_or((0.0, 1.0));

        Ok(Self {
            rows: vec![
                Row {
                    title: "Tubing",
                    positions: positions.clone(),
                },
                Row {
                    title: "Casing",
                    positions,
                },
            ],
            axis: TimeAxis::new(domain, Granularity::Days)?,
            y_domain,
            cursor: None,
            layout: config.layout.clone(),
            lines: Cache::new(),
            overlay: Cache::new(),
        })
    }

    pub fn cursor(&self) -> Option<i64> {
        self.cursor
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Scrub(time) => {
                if self.cursor != time {
                    self.cursor = time;
                    self.overlay.clear();
                }
            }
        }
    }

    /// Every row's value at the cursor.
    pub fn readout(&self) -> Option<Readout> {
        let time = self.cursor?;
        let values = self
            .rows
            .iter()
            .filter_map(|row| {
                let idx = data::nearest_index(&row.positions, time as f64)?;
                Some((row.title, row.positions[idx][1]))
            })
            .collect();
        Some(Readout { time, values })
    }

    /// Snap a time to the nearest sample of the first row.
    fn snap(&self, t: f64) -> Option<i64> {
        let positions = &self.rows.first()?.positions;
        let idx = data::nearest_index(positions, t)?;
        Some(positions[idx][0] as i64)
    }

    fn panel_height(&self) -> f32 {
        let rows = self.rows.len() as f32;
        rows * self.layout.row_chart_height + (rows - 1.0).max(0.0) * ROW_GAP
    }

    fn row_area(&self, size: Size, index: usize) -> Rectangle {
        let top = index as f32 * (self.layout.row_chart_height + ROW_GAP);
        let left = self.layout.title_width + ROW_MARGINS.left;
        Rectangle {
            x: left,
            y: top + ROW_MARGINS.top,
            width: (size.width - left - ROW_MARGINS.right).max(1.0),
            height: (self.layout.row_chart_height - ROW_MARGINS.top - ROW_MARGINS.bottom).max(1.0),
        }
    }

    fn y_scale(&self, area: Rectangle) -> LinearScale {
        LinearScale::new(self.y_domain, (area.y + area.height, area.y))
    }

    pub fn view(&self) -> Element<'_, Message> {
        let readout = self
            .readout()
            .map(|r| r.text())
            .unwrap_or_else(|| "Hover a chart to read both values".to_string());

        let panel = canvas::Canvas::new(self)
            .width(Length::Fill)
            .height(self.panel_height());

        column![super::section_title(TITLE), text(readout).size(13), panel]
            .spacing(8)
            .into()
    }
}

impl canvas::Program<Message> for ScrubChartsCustom {
    /// The last time published.
    type State = Option<i64>;

    fn update(
        &self,
        published: &mut Option<i64>,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        if !matches!(
            event,
            Event::Mouse(mouse::Event::CursorMoved { .. } | mouse::Event::CursorLeft)
        ) {
            return None;
        }

        let time = cursor.position_in(bounds).and_then(|position| {
            let area = self.row_area(bounds.size(), 0);
            if position.x < area.x || position.x > area.x + area.width {
                return None;
            }
            let x = marks::time_scale(&self.axis, area);
            self.snap(x.invert(position.x))
        });

        if time == *published {
            return None;
        }
        *published = time;
        Some(canvas::Action::publish(Message::Scrub(time)))
    }

    fn draw(
        &self,
        _state: &Option<i64>,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let text_color = theme.palette().text;

        let lines = self.lines.draw(renderer, bounds.size(), |frame| {
            for (index, row) in self.rows.iter().enumerate() {
                let area = self.row_area(frame.size(), index);
                let x = marks::time_scale(&self.axis, area);
                let y = self.y_scale(area);

                frame.fill_text(Text {
                    content: row.title.to_string(),
                    position: Point::new(0.0, area.y),
                    color: text_color,
                    size: Pixels(14.0),
                    ..Text::default()
                });
                frame.stroke(
                    &marks::line_path(&row.positions, &x, &y),
                    Stroke::default().with_color(LINE_COLOR).with_width(1.5),
                );
                marks::draw_time_axis(frame, area, &x, &self.axis, text_color);
            }
        });

        let overlay = self.overlay.draw(renderer, bounds.size(), |frame| {
            let Some(time) = self.cursor else {
                return;
            };
            let first = self.row_area(frame.size(), 0);
            let last = self.row_area(frame.size(), self.rows.len().saturating_sub(1));
            let x = marks::time_scale(&self.axis, first);
            let px = x.scale(time as f64);

            let span = Rectangle {
                height: last.y + last.height - first.y,
                ..first
            };
            frame.stroke(
                &marks::cursor_line(span, px),
                Stroke::default().with_color(text_color).with_width(1.0),
            );

            for (index, row) in self.rows.iter().enumerate() {
                let Some(idx) = data::nearest_index(&row.positions, time as f64) else {
                    continue;
                };
                let y = self.y_scale(self.row_area(frame.size(), index));
                let dot = Path::circle(Point::new(px, y.scale(row.positions[idx][1])), DOT_RADIUS);
                frame.fill(&dot, LINE_COLOR);
            }
        });

        vec![lines, overlay]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> ScrubChartsCustom {
        ScrubChartsCustom::new(&SampleData::load().unwrap(), &Config::default()).unwrap()
    }

    #[test]
    fn readout_lists_every_row() {
        let data = SampleData::load().unwrap();
        let mut panel = panel();
        assert_eq!(panel.readout(), None);

        let sample = &data.simple[5];
        panel.update(Message::Scrub(Some(sample.date.timestamp_millis())));

        let readout = panel.readout().unwrap();
        assert_eq!(readout.values, vec![("Tubing", sample.y), ("Casing", sample.y)]);
        assert!(readout.text().starts_with(&format::tooltip_label(readout.time as f64)));
    }

    #[test]
    fn snap_lands_on_a_sample() {
        let data = SampleData::load().unwrap();
        let panel = panel();
        let first = data.simple[0].date.timestamp_millis();
        let second = data.simple[1].date.timestamp_millis();

        let near_second = (first + (second - first) * 3 / 4) as f64;
        assert_eq!(panel.snap(near_second), Some(second));
    }

    #[test]
    fn rows_stack_without_overlap() {
        let panel = panel();
        let size = Size::new(800.0, panel.panel_height());
        let top = panel.row_area(size, 0);
        let bottom = panel.row_area(size, 1);
        assert!(top.y + top.height < bottom.y);
        assert_eq!(top.x, bottom.x);
        assert_eq!(top.width, bottom.width);
    }
}
