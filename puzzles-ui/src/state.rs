//! Shared application state for the page server.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use puzzles::core::types::Day;
use puzzles::io::loader::input_path;
use tracing::debug;

use crate::render::PageRenderer;

/// Shared state accessible from all request handlers.
///
/// Nothing here changes after startup; every request reloads its input.
#[derive(Clone)]
pub struct AppState {
    /// Directory holding the `dayN.txt` inputs.
    pub data_dir: PathBuf,
    /// Compiled page templates.
    pub renderer: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        Ok(Self {
            data_dir,
            renderer: Arc::new(PageRenderer::new()?),
        })
    }

    /// Read `day`'s input file. No caching; a missing file fails the request.
    pub async fn load_input(&self, day: Day) -> Result<String> {
        let path = input_path(&self.data_dir, day);
        debug!(day = %day, path = %path.display(), "load input");
        tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("read input {}", path.display()))
    }
}
