//! All four chart screens in one scrollable window.
use iced::widget::{column, scrollable};
use iced::{Element, Subscription};
use time_charts::screens::{
    CyclesChart, ScrubCharts, ScrubChartsCustom, ZoomDomain, cycles, scrub, scrub_custom,
    zoom_domain,
};
use time_charts::{Config, SampleData};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("time_charts=info")),
        )
        .init();

    let config = Config::load_default();
    let theme = config.theme.theme();
    iced::application(move || App::new(&config), App::update, App::view)
        .subscription(App::subscription)
        .theme(theme)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    Zoom(zoom_domain::Message),
    Cycles(cycles::Message),
    Scrub(scrub::Message),
    ScrubCustom(scrub_custom::Message),
}

struct App {
    zoom: ZoomDomain,
    cycles: CyclesChart,
    scrub: ScrubCharts,
    scrub_custom: ScrubChartsCustom,
    spacing: f32,
}

impl App {
    fn new(config: &Config) -> Self {
        let data = SampleData::load().expect("bundled sample data is valid");
        Self {
            zoom: ZoomDomain::new(&data, config).expect("zoom chart"),
            cycles: CyclesChart::new(&data, config).expect("cycles chart"),
            scrub: ScrubCharts::new(&data, config).expect("scrub charts"),
            scrub_custom: ScrubChartsCustom::new(&data, config).expect("custom scrub charts"),
            spacing: config.layout.section_spacing,
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::Zoom(msg) => self.zoom.update(msg),
            Message::Cycles(msg) => self.cycles.update(msg),
            Message::Scrub(msg) => self.scrub.update(msg),
            Message::ScrubCustom(msg) => self.scrub_custom.update(msg),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        self.zoom.subscription().map(Message::Zoom)
    }

    fn view(&self) -> Element<'_, Message> {
        scrollable(
            column![
                self.zoom.view().map(Message::Zoom),
                self.cycles.view().map(Message::Cycles),
                self.scrub.view().map(Message::Scrub),
                self.scrub_custom.view().map(Message::ScrubCustom),
            ]
            .spacing(self.spacing)
            .padding(24),
        )
        .into()
    }
}
