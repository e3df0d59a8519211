use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use eyre::WrapErr as _;
use maud::Render as _;

use crate::{routes::index_page, AppState};

/// Renders the index page once and writes it to `<out_dir>/index.html`.
#[tracing::instrument(skip(state), err)]
pub async fn export_site(
    state: &AppState,
    out_dir: &Path,
    now: DateTime<Utc>,
) -> eyre::Result<PathBuf> {
    tokio::fs::create_dir_all(out_dir)
        .await
        .wrap_err_with(|| format!("Failed to create {}", out_dir.display()))?;

    let path = out_dir.join("index.html");
    let html = index_page(state, now).render().into_string();

    tokio::fs::write(&path, html)
        .await
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), "Exported static page");

    Ok(path)
}
