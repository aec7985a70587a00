mod app;
mod flow;
mod transition;
mod ui;

use app::DemoApp;
use macroquad::prelude::*;
use screenstack::{ConfigError, StackConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use ui::{CHROME_HEIGHT, UiContext};

const SCREEN_WIDTH: f32 = 640.0;
const SCREEN_HEIGHT: f32 = 480.0;
const STACK_WIDTH: f32 = 360.0;
const STACK_MARGIN: f32 = 40.0;
/// Optional path to a JSON `StackConfig`; env policy variables override it.
const CONFIG_PATH_VAR: &str = "SCREENSTACK_CONFIG";

fn window_conf() -> Conf {
    Conf {
        window_title: "Screen stack".to_owned(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        high_dpi: false,
        sample_count: 1,
        window_resizable: true,
        ..Default::default()
    }
}

fn load_config() -> Result<StackConfig, ConfigError> {
    let base = match std::env::var(CONFIG_PATH_VAR) {
        Ok(path) => StackConfig::from_json_file(path)?,
        Err(_) => StackConfig::default(),
    };
    base.with_env_overrides()
}

/// Centered column the open stack is drawn in.
fn stack_area() -> Rect {
    let h = (screen_height() - 2.0 * STACK_MARGIN).max(CHROME_HEIGHT);
    Rect::new((screen_width() - STACK_WIDTH) / 2.0, STACK_MARGIN, STACK_WIDTH, h)
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = load_config().unwrap_or_else(|e| {
        error!(error = %e, "invalid config, using defaults");
        StackConfig::default()
    });
    info!(?config, "starting screen stack demo");

    let mut app = DemoApp::new(config);
    let mut ui = UiContext::new();

    loop {
        clear_background(ui.theme.window_bg);
        ui.begin_frame();
        app.drain_transitions();
        app.slide.advance(get_frame_time());

        let window = Rect::new(0.0, 0.0, screen_width(), screen_height());
        let command = app.frame(&mut ui, stack_area(), window);
        ui.end_frame();

        if let Some(command) = command {
            app.apply(command);
        }

        next_frame().await;
    }
}
