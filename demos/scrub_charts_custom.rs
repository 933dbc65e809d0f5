//! Two stacked line charts scrubbed by one cursor, with a single readout
//! listing both values at the hovered sample.
use iced::Element;
use iced::widget::container;
use time_charts::screens::ScrubChartsCustom;
use time_charts::screens::scrub_custom::Message;
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
    charts: ScrubChartsCustom,
}

impl App {
    fn new(config: &Config) -> Self {
        let data = SampleData::load().expect("bundled sample data is valid");
        Self {
            charts: ScrubChartsCustom::new(&data, config).expect("custom scrub charts"),
        }
    }

    fn update(&mut self, message: Message) {
        self.charts.update(message);
    }

    fn view(&self) -> Element<'_, Message> {
        container(self.charts.view()).padding(24).into()
    }
}
