use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use swapi_export::{config::Config, export::export, runtime::RealRuntime};

/// swapi-export - dump every SWAPI category to a text file
///
/// Fetches the category listing from the API root, then writes the raw body
/// of `<api-url>/<category>/` to `<output>/<category>.txt`.
///
/// Examples:
///   swapi-export                          # https://swapi.dev/api -> ./data
///   swapi-export -o /tmp/swapi            # write somewhere else
#[derive(Parser, Debug)]
#[command(author, version = env!("SWAPI_EXPORT_VERSION"), about)]
struct Cli {
    /// API root URL (defaults to https://swapi.dev/api)
    #[arg(long = "api-url", env = "SWAPI_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Output directory (defaults to ./data)
    #[arg(
        long = "output",
        short = 'o',
        env = "SWAPI_OUTPUT_DIR",
        value_name = "PATH"
    )]
    pub output_dir: Option<PathBuf>,

    /// Per-request timeout in seconds (no timeout by default)
    #[arg(long = "timeout", env = "SWAPI_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = Config::new(
        RealRuntime,
        cli.api_url,
        cli.output_dir,
        cli.timeout.map(Duration::from_secs),
    )?;
    export(&config).await
}
