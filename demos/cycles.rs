//! Plunger cycles as duration marks. Hover a cycle to highlight it.
use iced::Element;
use iced::widget::container;
use time_charts::screens::CyclesChart;
use time_charts::screens::cycles::Message;
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
    chart: CyclesChart,
}

impl App {
    fn new(config: &Config) -> Self {
        let data = SampleData::load().expect("bundled sample data is valid");
        Self {
            chart: CyclesChart::new(&data, config).expect("cycles chart"),
        }
    }

    fn update(&mut self, message: Message) {
        self.chart.update(message);
    }

    fn view(&self) -> Element<'_, Message> {
        container(self.chart.view()).padding(24).into()
    }
}
