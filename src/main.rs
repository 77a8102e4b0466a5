use amdash_core::config::{config_path, Config, BASE_URL_ENV};
use clap::Parser;

#[derive(Parser)]
#[command(name = "amdash", about = "amdash — terminal dashboard for AutoMonitor change events")]
struct Cli {
    /// Backend base URL, e.g. http://localhost:8000. Overrides the config file.
    #[arg(long, env = BASE_URL_ENV)]
    base_url: Option<String>,

    /// Rows per page on the events screen.
    #[arg(long)]
    page_size: Option<u64>,

    /// Colour theme (default, gruvbox).
    #[arg(long)]
    theme: Option<String>,

    /// Write debug logs to /tmp/amdash-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/amdash-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("amdash debug log started — tail -f /tmp/amdash-debug.log");
    }

    let mut config = Config::load()?;
    if let Some(url) = cli.base_url.filter(|u| !u.trim().is_empty()) {
        config.api.base_url = Some(url);
    }
    if let Some(n) = cli.page_size.filter(|n| *n > 0) {
        config.ui.page_size = n;
    }
    if let Some(theme) = cli.theme {
        config.ui.theme = theme;
    }

    // Resolve before the terminal is taken over so the message is readable.
    let base_url = config
        .base_url()
        .map_err(|e| anyhow::anyhow!("{e}\nconfig file: {}", config_path().display()))?
        .to_string();

    amdash_tui::run(config, &base_url)
}
