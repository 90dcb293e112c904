use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::{
    category::CategoryClient,
    http::HttpClient,
    report::{LogReporter, Reporter},
    runtime::Runtime,
};

pub const DEFAULT_API_URL: &str = "https://swapi.dev/api";
pub const DEFAULT_OUTPUT_DIR: &str = "data";
pub const USER_AGENT: &str = "swapi-export";

pub struct Config<R: Runtime> {
    pub runtime: R,
    pub categories: CategoryClient<HttpClient>,
    pub output_dir: PathBuf,
}

impl<R: Runtime> Config<R> {
    pub fn new(
        runtime: R,
        api_url: Option<String>,
        output_dir: Option<PathBuf>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        Self::with_reporter(runtime, api_url, output_dir, timeout, Arc::new(LogReporter))
    }

    pub fn with_reporter(
        runtime: R,
        api_url: Option<String>,
        output_dir: Option<PathBuf>,
        timeout: Option<Duration>,
        reporter: Arc<dyn Reporter>,
    ) -> Result<Self> {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        // Category paths start with '/', so a trailing one would double up
        let api_url = api_url.trim_end_matches('/').to_string();

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            debug!("Using request timeout of {:?}", timeout);
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        let transport = HttpClient::new(client, reporter.clone());
        let categories = CategoryClient::new(transport, api_url, reporter);
        let output_dir = output_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        Ok(Self {
            runtime,
            categories,
            output_dir,
        })
    }
}
