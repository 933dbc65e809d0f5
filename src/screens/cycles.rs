//! Plunger cycles drawn as duration marks on a daily time axis.
//!
//! Each cycle is a rectangle from its start to its end, colored by how the
//! plunger arrived. Hovering a cycle dims the rest.
use iced::widget::canvas::{self, Cache, Event, Geometry, Path, Stroke};
use iced::widget::{column, text};
use iced::{Color, Element, Length, Rectangle, Renderer, Size, Theme, mouse};
use indexmap::IndexMap;

use crate::chart::TimeAxis;
use crate::config::{Config, LayoutConfig};
use crate::data::{self, ArrivalCategory, Cycle, SampleData, arrival_palette};
use crate::error::Result;
use crate::scale::LinearScale;
use crate::state::HoverFocus;
use crate::ticks::Granularity;

use super::marks::{self, ROW_MARGINS};

const TITLE: &str = "Scatter plot with custom marks that have a duration on the x axis.";
const FALLBACK_COLOR: Color = Color::from_rgb8(0x80, 0x80, 0x80);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The cycle under the cursor changed, `None` when the cursor left.
    Focus(Option<i64>),
}

pub struct CyclesChart {
    cycles: Vec<Cycle>,
    axis: TimeAxis,
    focus: HoverFocus,
    palette: IndexMap<ArrivalCategory, Color>,
    y_max: f64,
    layout: LayoutConfig,
    cache: Cache,
}

impl CyclesChart {
    pub fn new(data: &SampleData, config: &Config) -> Result<Self> {
        let domain = data::extent("cycles", &data.cycles)?;
        let (_, y_max) =
            data::value_extent(data.cycles.iter().map(|c| c.y), 0.0).unwrap_or((0.0, 1.0));
        Ok(Self {
            cycles: data.cycles.clone(),
            axis: TimeAxis::new(domain, Granularity::Days)?,
            focus: HoverFocus::default(),
            palette: arrival_palette(),
            y_max: if y_max > 0.0 { y_max } else { 1.0 },
            layout: config.layout.clone(),
            cache: Cache::new(),
        })
    }

    pub fn focus(&self) -> HoverFocus {
        self.focus
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Focus(key) => {
                if self.focus.hovered() != key {
                    self.focus = self.focus.set(key);
                    self.cache.clear();
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let chart = canvas::Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill);

        column![
            super::section_title(TITLE),
            super::titled_row(text("Cycles"), chart, self.layout.row_chart_height, &self.layout),
            self.legend(),
        ]
        .spacing(24)
        .into()
    }

    fn legend(&self) -> Element<'_, Message> {
        let entries = self
            .palette
            .iter()
            .map(|(category, color)| -> Element<'_, Message> {
                text(format!("■ {}", category.label())).color(*color).into()
            });
        iced::widget::Row::with_children(entries).spacing(16).into()
    }

    fn color_for(&self, cycle: &Cycle) -> Color {
        let color = self
            .palette
            .get(&cycle.arrival.category)
            .copied()
            .unwrap_or(FALLBACK_COLOR);
        Color {
            a: color.a * self.focus.opacity_for(cycle.key()),
            ..color
        }
    }

    fn x_scale(&self, size: Size) -> (Rectangle, LinearScale) {
        let area = marks::plot_area(size, ROW_MARGINS);
        (area, marks::time_scale(&self.axis, area))
    }

    /// The mark for `cycle`: from its start to its end, rising from the
    /// baseline to its `y` value.
    fn cycle_rect(&self, cycle: &Cycle, area: Rectangle, x: &LinearScale) -> Rectangle {
        let y = LinearScale::new((0.0, self.y_max), (area.y + area.height, area.y));
        let x0 = x.scale(cycle.date.timestamp_millis() as f64);
        let x1 = x.scale(cycle.end_date.timestamp_millis() as f64);
        let top = y.scale(cycle.y.clamp(0.0, self.y_max));
        Rectangle {
            x: x0,
            y: top,
            width: (x1 - x0).max(1.0),
            height: area.y + area.height - top,
        }
    }
}

/// Key of the cycle covering `t` (Unix millis). Cycles must be sorted by start.
pub fn cycle_at(cycles: &[Cycle], t: f64) -> Option<i64> {
    let idx = cycles.partition_point(|c| (c.date.timestamp_millis() as f64) <= t);
    let candidate = cycles.get(idx.checked_sub(1)?)?;
    (t <= candidate.end_date.timestamp_millis() as f64).then(|| candidate.key())
}

impl canvas::Program<Message> for CyclesChart {
    /// The last key published, so moving within one cycle stays quiet.
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

        let key = cursor.position_in(bounds).and_then(|position| {
            let (area, x) = self.x_scale(bounds.size());
            area.contains(position)
                .then(|| cycle_at(&self.cycles, x.invert(position.x)))
                .flatten()
        });

        if key == *published {
            return None;
        }
        *published = key;
        Some(canvas::Action::publish(Message::Focus(key)))
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

        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let (area, x) = self.x_scale(frame.size());

            for cycle in &self.cycles {
                let mark = self.cycle_rect(cycle, area, &x);
                let rect = Path::rectangle(mark.position(), mark.size());
                let outline_alpha = 0.5 * self.focus.opacity_for(cycle.key());

                frame.fill(&rect, self.color_for(cycle));
                frame.stroke(
                    &rect,
                    Stroke::default()
                        .with_color(Color { a: outline_alpha, ..Color::BLACK })
                        .with_width(1.0),
                );
            }

            marks::draw_time_axis(frame, area, &x, &self.axis, text_color);
        });

        vec![geometry]
    }

    fn mouse_interaction(
        &self,
        published: &Option<i64>,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if published.is_some() {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycles() -> Vec<Cycle> {
        data::parse_dataset(
            "cycles",
            r#"[
                {"date":"2020-04-30T00:00:00Z","endDate":"2020-04-30T02:00:00Z","y":1,"arrival":{"category":"fast"}},
                {"date":"2020-04-30T03:00:00Z","endDate":"2020-04-30T05:00:00Z","y":1,"arrival":{"category":"slow"}}
            ]"#,
        )
        .unwrap()
    }

    fn ms(s: &str) -> f64 {
        s.parse::<chrono::DateTime<chrono::Utc>>().unwrap().timestamp_millis() as f64
    }

    #[test]
    fn finds_cycle_under_time() {
        let cycles = cycles();
        assert_eq!(cycle_at(&cycles, ms("2020-04-30T01:00:00Z")), Some(cycles[0].key()));
        assert_eq!(cycle_at(&cycles, ms("2020-04-30T03:00:00Z")), Some(cycles[1].key()));
        assert_eq!(cycle_at(&cycles, ms("2020-04-30T05:00:00Z")), Some(cycles[1].key()));
    }

    #[test]
    fn gaps_and_outside_have_no_cycle() {
        let cycles = cycles();
        assert_eq!(cycle_at(&cycles, ms("2020-04-30T02:30:00Z")), None);
        assert_eq!(cycle_at(&cycles, ms("2020-04-29T23:00:00Z")), None);
        assert_eq!(cycle_at(&cycles, ms("2020-04-30T06:00:00Z")), None);
    }

    #[test]
    fn focus_dims_other_cycles() {
        let data = SampleData::load().unwrap();
        let mut chart = CyclesChart::new(&data, &Config::default()).unwrap();
        let first = data.cycles[0].clone();
        let second = data.cycles[1].clone();

        let base = chart.color_for(&second).a;
        chart.update(Message::Focus(Some(first.key())));
        assert_eq!(chart.color_for(&first).a, base);
        assert!(chart.color_for(&second).a < base);

        chart.update(Message::Focus(None));
        assert!(!chart.focus().is_hovering());
    }

    #[test]
    fn mark_height_follows_y() {
        let data = SampleData::load().unwrap();
        let chart = CyclesChart::new(&data, &Config::default()).unwrap();
        let (area, x) = chart.x_scale(Size::new(800.0, 100.0));

        let full = chart.cycle_rect(&data.cycles[0], area, &x);
        assert_eq!(full.y, area.y);
        assert_eq!(full.height, area.height);

        let half = Cycle {
            y: chart.y_max / 2.0,
            ..data.cycles[0].clone()
        };
        let mark = chart.cycle_rect(&half, area, &x);
        assert_eq!(mark.y + mark.height, area.y + area.height);
        assert!((mark.height - area.height / 2.0).abs() < 1e-3);
    }
}
