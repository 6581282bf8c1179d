//! Sitemap-Harvest main entry point
//!
//! This is the command-line interface for the sitemap URL exporter.

use anyhow::Context;
use clap::Parser;
use sitemap_harvest::config::{load_dotenv, resolve_config, Config, ConfigOverrides};
use sitemap_harvest::{build_index_url, run_harvest};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Sitemap-Harvest: export every page URL listed under a sitemap index
///
/// Fetches `<site>/<index-path>`, follows each child sitemap in order, and
/// writes the page URLs to a text file, one per line.
#[derive(Parser, Debug)]
#[command(name = "sitemap-harvest")]
#[command(version)]
#[command(about = "Export page URLs from a sitemap index", long_about = None)]
struct Cli {
    /// Optional TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Site base URL (overrides config file and $SITE_URL / $NEXT_PUBLIC_SITE_URL)
    #[arg(long, value_name = "URL")]
    site_url: Option<String>,

    /// Sitemap index path below the site URL
    #[arg(long, value_name = "PATH")]
    index_path: Option<String>,

    /// Output file for the URL list
    #[arg(short, long, value_name = "PATH")]
    output: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Fail on malformed XML instead of treating the document as empty
    #[arg(long)]
    strict: bool,

    /// Show the resolved configuration and index URL without fetching
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    load_dotenv(Path::new(".env"));

    let resolved = resolve_config(
        cli.config.as_deref(),
        |key| std::env::var(key).ok(),
        &cli.overrides(),
    )
    .context("invalid configuration")?;
    let config = resolved.config;

    if cli.dry_run {
        return handle_dry_run(&config);
    }

    let report = run_harvest(&config).await.context("harvest failed")?;
    println!("{}", report.completion_message());

    Ok(())
}

impl Cli {
    /// Command-line values that take precedence over file and environment
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            site_url: self.site_url.clone(),
            index_path: self.index_path.clone(),
            output_path: self.output.clone(),
            timeout_secs: self.timeout,
            strict: self.strict,
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitemap_harvest=info,warn"),
            1 => EnvFilter::new("sitemap_harvest=debug,info"),
            2 => EnvFilter::new("sitemap_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows what would be fetched
fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    let index_url = build_index_url(&config.site.base_url, &config.site.index_path)?;

    println!("=== Sitemap-Harvest Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);
    println!("  Index URL: {}", index_url);

    println!("\nFetch:");
    println!("  Timeout: {}s", config.fetch.timeout_secs);
    println!("  Connect timeout: {}s", config.fetch.connect_timeout_secs);
    println!("  User agent: {}", config.fetch.user_agent);

    println!("\nOutput:");
    println!("  Path: {}", config.output.path);
    println!("  Strict XML: {}", config.parse.strict);

    println!("\n✓ Configuration is valid");

    Ok(())
}
