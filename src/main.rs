use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ops_dashboard::infra::config::default_data_dir;
use ops_dashboard::ui::app::App;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
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

fn main() -> Result<()> {
    init_tracing();

    let data_dir = default_data_dir().context("unable to resolve data directory")?;
    let webview_data_dir = ensure_webview_data_dir(&data_dir)?;
    info!(data_dir = %data_dir.display(), "starting warehouse ops dashboard");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Warehouse Ops"))
                .with_data_directory(webview_data_dir),
        )
        .launch(App);
    Ok(())
}
