//! Tubing and casing pressure with linked x axes.
//! Pan or zoom either chart and the other follows.
use iced::Element;
use iced::widget::container;
use time_charts::screens::ScrubCharts;
use time_charts::screens::scrub::Message;
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
        .theme(theme)
        .run()
}

struct App {
    charts: ScrubCharts,
}

impl App {
    fn new(config: &Config) -> Self {
        let data = SampleData::load().expect("bundled sample data is valid");
        Self {
            charts: ScrubCharts::new(&data, config).expect("scrub charts"),
        }
    }

    fn update(&mut self, message: Message) {
        self.charts.update(message);
    }

    fn view(&self) -> Element<'_, Message> {
        container(self.charts.view()).padding(24).into()
    }
}
