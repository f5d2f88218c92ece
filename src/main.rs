use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

mod app;
mod config;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;


use crate::config::{project_dirs, Config};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::default_path().and_then(|path| Config::load(&path)) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("falling back to default config: {err:#}");
            Config::default()
        }
    };

    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView2 data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title(config.window_title()))
                .with_data_directory(webview_data_dir),
        )
        .with_context(config)
        .launch(app::App);
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}
