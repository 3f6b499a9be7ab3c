use kantin_dashboard::{App, Config, logging};

fn main() -> iced::Result {
    let config = Config::from_env();
    logging::init(&config.log_filter);
    tracing::info!(store = %config.store().path().display(), "starting dashboard");

    iced::application(move || App::new(config.clone()), App::update, App::view)
        .title(App::title)
        .window_size(iced::Size::new(1280.0, 820.0))
        .run()
}
