//! amdash TUI: ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod fetch;
pub mod routes;
pub mod theme;
pub mod views;
pub mod widgets;

pub use app::{App, AppState};
pub use routes::Route;

use amdash_client::ApiClient;
use amdash_core::config::Config;

/// Start the TUI against `base_url`.
///
/// Builds the tokio runtime that runs background fetches; the UI loop itself
/// stays on the calling thread.
pub fn run(config: Config, base_url: &str) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .thread_name("amdash-fetch")
        .build()?;

    let client = ApiClient::new(base_url);
    let (fetcher, results) = fetch::Fetcher::new(client, runtime.handle().clone());
    let theme = theme::Theme::by_name(&config.ui.theme);
    tracing::info!(base_url, theme = %theme.name, "starting amdash");

    let result = App::new(config.ui, theme, fetcher, results).run();
    runtime.shutdown_background();
    result
}
