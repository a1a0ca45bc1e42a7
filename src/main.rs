use activity_board::config::BoardConfig;
use activity_board::logging;
use activity_board::view::{App, AppProps};

fn main() {
    let (config, config_err) = match BoardConfig::from_document() {
        Ok(c) => (c, None),
        Err(e) => (BoardConfig::default(), Some(e)),
    };
    logging::init(config.log_level());
    if let Some(e) = config_err {
        log::warn!("{e}; using defaults");
    }

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
