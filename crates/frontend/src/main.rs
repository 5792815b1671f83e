use std::rc::Rc;
use zaplink_core::AppConfig;
use zaplink_frontend::{App, AppProps, telemetry};

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    let log_level = config
        .as_ref()
        .map_or("info", |config| config.log_level.as_str());
    telemetry::init_tracing(log_level);

    let config = config.unwrap_or_else(|err| {
        tracing::error!("Invalid configuration, falling back to defaults: {err}");
        AppConfig::default()
    });
    tracing::info!("Starting ZapLink against {}", config.api_base_url);

    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
