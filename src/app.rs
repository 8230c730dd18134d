use std::rc::Rc;

use dioxus::desktop::{
    tao, use_window, use_wry_event_handler, Config, DesktopService, LogicalPosition, LogicalSize,
    WindowBuilder,
};
use dioxus::prelude::*;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::core::actions::{DashboardAction, DashboardActions, TraceActions};
use crate::core::alerts::source::{AlertSummarySource, StaticAlertSummary};
use crate::core::config::{self, ConfigManager, Settings, WindowGeometry};
use crate::dashboard::{AlertSummaryDashboard, STYLESHEET};

/// Route `log` records through a tracing fmt layer. `RUST_LOG` overrides the level.
pub fn set_up_logging() {
    let default_level = if cfg!(debug_assertions) { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let stdout_log = tracing_subscriber::fmt::layer().with_filter(filter);
    if let Err(err) = tracing_subscriber::registry().with(stdout_log).try_init() {
        eprintln!("Logging already initialised: {err}");
    }
}

fn build_window_config(settings: &Settings) -> Config {
    let (width, height) = settings.window.clamped_size();

    let mut window = WindowBuilder::new()
        .with_title(settings.title.clone())
        .with_inner_size(LogicalSize::new(width, height))
        .with_min_inner_size(LogicalSize::new(
            WindowGeometry::MIN_WIDTH,
            WindowGeometry::MIN_HEIGHT,
        ));
    if settings.window.has_position {
        window = window.with_position(LogicalPosition::new(settings.window.x, settings.window.y));
    }

    Config::new().with_window(window)
}

fn save_window_geometry(desktop: &Rc<DesktopService>, manager: &ConfigManager, settings: &Settings) {
    let scale = desktop.window.scale_factor();
    let size = desktop.window.inner_size().to_logical::<f64>(scale);
    let mut updated = settings.clone();
    updated.window.width = size.width;
    updated.window.height = size.height;

    if let Ok(position) = desktop.window.outer_position() {
        let position = position.to_logical::<f64>(scale);
        updated.window.x = position.x;
        updated.window.y = position.y;
        updated.window.has_position = true;
    }

    match manager.save(&updated) {
        Ok(()) => log::info!("Saved window state to {}", manager.path().display()),
        Err(err) => log::error!("Failed to save window state: {err}"),
    }
}

/// Settings snapshot shared by the window config and the root component
#[derive(Debug, Clone)]
struct ShellContext {
    manager: ConfigManager,
    settings: Settings,
}

impl ShellContext {
    fn load(manager: ConfigManager) -> Self {
        let settings = manager.load();
        Self { manager, settings }
    }
}

pub fn run() {
    set_up_logging();

    let shell = ShellContext::load(ConfigManager::new(config::config_dir()));
    log::info!("Starting alert dashboard: {}", shell.settings.title);

    LaunchBuilder::desktop()
        .with_cfg(build_window_config(&shell.settings))
        .with_context(shell)
        .launch(App);
}

#[component]
fn App() -> Element {
    let desktop = use_window();
    let ShellContext { manager, settings } = use_context::<ShellContext>();
    let summary = use_hook(|| StaticAlertSummary.fetch_summary());
    let actions: Rc<dyn DashboardActions> = use_hook(|| Rc::new(TraceActions) as Rc<dyn DashboardActions>);

    use_wry_event_handler({
        let desktop = desktop.clone();
        let settings = settings.clone();
        move |event, _| {
            if let tao::event::Event::WindowEvent {
                event: tao::event::WindowEvent::CloseRequested,
                ..
            } = event
            {
                save_window_geometry(&desktop, &manager, &settings);
            }
        }
    });

    let mark_all_read = actions.clone();
    let open_settings = actions;

    rsx! {
        style { {STYLESHEET} }
        AlertSummaryDashboard {
            records: summary.records().to_vec(),
            title: settings.title.clone(),
            subtitle: settings.subtitle.clone(),
            on_mark_all_read: move |_| DashboardAction::MarkAllRead.dispatch(mark_all_read.as_ref()),
            on_open_settings: move |_| DashboardAction::OpenSettings.dispatch(open_settings.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_shell_context_keeps_single_snapshot() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().to_path_buf());
        let first = Settings {
            title: "First".to_string(),
            ..Settings::default()
        };
        manager.save(&first).unwrap();

        let shell = ShellContext::load(manager.clone());

        let second = Settings {
            title: "Second".to_string(),
            ..Settings::default()
        };
        manager.save(&second).unwrap();

        assert_eq!(shell.settings, first);
        assert_eq!(shell.clone().settings.title, "First");
        assert_eq!(shell.manager.path(), manager.path());
    }
}
