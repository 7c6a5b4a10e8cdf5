//! Puzzle page server - renders each day's input as an HTML page.

mod render;
mod routes;
mod state;
mod view;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use axum::Router;
use clap::Parser;
use puzzles::io::config::{DEFAULT_CONFIG_PATH, PuzzlesConfig, load_config};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::state::AppState;

#[derive(Parser)]
#[command(name = "puzzles-ui")]
#[command(about = "Web pages for the daily puzzle inputs")]
struct Args {
    /// Config file (TOML). A missing file means defaults.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Directory holding the dayN.txt inputs
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Address to bind the server to
    #[arg(long)]
    bind: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Directory containing the stylesheet served under /static
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    fn merge_into(self, mut cfg: PuzzlesConfig) -> anyhow::Result<PuzzlesConfig> {
        if let Some(data_dir) = self.data_dir {
            cfg.data_dir = data_dir;
        }
        if let Some(bind) = self.bind {
            cfg.bind = bind;
        }
        if let Some(port) = self.port {
            cfg.port = port;
        }
        if let Some(static_dir) = self.static_dir {
            cfg.static_dir = static_dir;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("puzzles_ui=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let base = load_config(&args.config)?;
    let cfg = args.merge_into(base)?;

    info!(data_dir = %cfg.data_dir.display(), "starting puzzles-ui");

    let state = AppState::new(cfg.data_dir.clone())?;

    let mut app = Router::new()
        .merge(routes::page_router())
        .nest("/api", routes::api_router());

    if cfg.static_dir.exists() {
        info!(static_dir = %cfg.static_dir.display(), "serving static files");
        app = app.nest_service("/static", ServeDir::new(&cfg.static_dir));
    } else {
        info!(static_dir = %cfg.static_dir.display(), "static directory not found, pages unstyled");
    }

    let app = app.layer(TraceLayer::new_for_http()).with_state(state);

    let addr: SocketAddr = format!("{}:{}", cfg.bind, cfg.port)
        .parse()
        .with_context(|| format!("parse bind address {}:{}", cfg.bind, cfg.port))?;
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = Args::parse_from(["puzzles-ui", "--port", "8080", "--data-dir", "inputs"]);
        let cfg = args.merge_into(PuzzlesConfig::default()).expect("merge");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.data_dir, PathBuf::from("inputs"));
        assert_eq!(cfg.bind, "127.0.0.1");
    }

    #[test]
    fn zero_port_flag_is_rejected() {
        let args = Args::parse_from(["puzzles-ui", "--port", "0"]);
        assert!(args.merge_into(PuzzlesConfig::default()).is_err());
    }
}
