//! Export action - writes every category listing to `<output_dir>/<category>.txt`.

use std::path::PathBuf;

use anyhow::Result;
use log::{debug, info};

use crate::category::CategoryClient;
use crate::config::Config;
use crate::http::Transport;
use crate::runtime::Runtime;

/// Export action - one pass over the category listing
pub struct ExportAction<'a, R: Runtime, T: Transport> {
    runtime: &'a R,
    client: &'a CategoryClient<T>,
    output_dir: PathBuf,
}

impl<'a, R: Runtime, T: Transport> ExportAction<'a, R, T> {
    pub fn new(runtime: &'a R, client: &'a CategoryClient<T>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            runtime,
            client,
            output_dir: output_dir.into(),
        }
    }

    /// File a category's body is written to.
    pub fn category_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{}.txt", name))
    }

    /// Runs the export.
    ///
    /// Network failures skip the affected category (or the whole run when
    /// the root listing is unavailable); filesystem failures abort.
    #[tracing::instrument(skip(self))]
    pub async fn run(&self) -> Result<()> {
        self.runtime.create_dir_all(&self.output_dir)?;

        let Some(categories) = self.client.list_categories().await else {
            debug!("No category listing from {}, nothing to export", self.client.base_url());
            return Ok(());
        };

        let mut written = 0usize;
        for name in &categories {
            let Some(body) = self.client.fetch_category(name).await else {
                continue;
            };

            let path = self.category_path(name);
            self.runtime.write(&path, body.as_bytes())?;
            info!("Wrote {} ({} bytes) to {:?}", name, body.len(), path);
            written += 1;
        }

        info!(
            "Exported {}/{} categories to {:?}",
            written,
            categories.len(),
            self.output_dir
        );
        Ok(())
    }
}

/// Exports every category reachable through `config`.
pub async fn export<R: Runtime>(config: &Config<R>) -> Result<()> {
    ExportAction::new(&config.runtime, &config.categories, &config.output_dir)
        .run()
        .await
}
