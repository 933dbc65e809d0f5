//! Area chart that toggles between the full range and the last day.
//! The x limits animate between the two; tick labels come back once the
//! animation settles.
use iced::widget::container;
use iced::{Element, Subscription};
use time_charts::screens::ZoomDomain;
use time_charts::screens::zoom_domain::Message;
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

struct App {
    screen: ZoomDomain,
}

impl App {
    fn new(config: &Config) -> Self {
        let data = SampleData::load().expect("bundled sample data is valid");
        Self {
            screen: ZoomDomain::new(&data, config).expect("zoom chart"),
        }
    }

    fn update(&mut self, message: Message) {
        self.screen.update(message);
    }

    fn subscription(&self) -> Subscription<Message> {
        self.screen.subscription()
    }

    fn view(&self) -> Element<'_, Message> {
        container(self.screen.view()).padding(24).into()
    }
}
