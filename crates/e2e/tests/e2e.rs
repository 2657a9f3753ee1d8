//! E2E suite entry point
//!
//! This test binary drives the browser scenario catalog against a live
//! WebDriver endpoint. Run with:
//! cargo test --package toolshop-e2e --test e2e -- --workers 2
//!
//! Without a WebDriver endpoint (flag or E2E_WEBDRIVER_URL) the whole
//! suite is skipped so that plain `cargo test` stays green on machines
//! with no browser.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use url::Url;

use toolshop_e2e::harness::{run_suite, write_report, ScenarioError, SuiteSummary};
use toolshop_e2e::scenarios;
use toolshop_pages::{BrowserKind, SessionConfig};

#[derive(Parser, Debug)]
#[command(name = "toolshop-e2e")]
#[command(about = "Browser scenario runner for the Toolshop storefront")]
struct Args {
    /// WebDriver endpoint, e.g. http://localhost:4444
    #[arg(long, env = "E2E_WEBDRIVER_URL")]
    webdriver_url: Option<String>,

    /// Storefront base URL
    #[arg(long, env = "E2E_BASE_URL")]
    base_url: Option<Url>,

    /// Browser to use (firefox, chrome)
    #[arg(long, env = "E2E_BROWSER", default_value = "firefox")]
    browser: BrowserKind,

    /// Show the browser window instead of running headless
    #[arg(long)]
    headed: bool,

    /// Run only scenarios carrying this tag
    #[arg(short, long)]
    tag: Option<String>,

    /// Run only the scenario with this exact name
    #[arg(short, long)]
    name: Option<String>,

    /// Maximum concurrent browser sessions
    #[arg(short, long, default_value = "2")]
    workers: usize,

    /// Directory for screenshots
    #[arg(long, env = "E2E_SCREENSHOT_DIR", default_value = "screenshots")]
    screenshot_dir: PathBuf,

    /// Output directory for the JSON run report
    #[arg(short, long, default_value = "test-results")]
    output: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");
    match rt.block_on(async_main(args)) {
        Ok(true) => std::process::exit(0),
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(2);
        }
    }
}

async fn async_main(args: Args) -> Result<bool, ScenarioError> {
    let mut catalog = scenarios::all();
    if let Some(tag) = &args.tag {
        catalog.retain(|s| s.has_tag(tag));
    }
    if let Some(name) = &args.name {
        catalog.retain(|s| s.name == *name);
    }
    if catalog.is_empty() {
        eprintln!("no scenarios match the given filter");
        return Ok(false);
    }

    let Some(url) = args.webdriver_url else {
        println!(
            "E2E_WEBDRIVER_URL not set; skipping {} browser scenarios",
            catalog.len()
        );
        let summary = SuiteSummary::skipped(catalog.len());
        write_report(&summary, &args.output.join("e2e-report.json"))?;
        return Ok(true);
    };

    let mut config = SessionConfig::with_webdriver_url(url)?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    config.browser = args.browser;
    config.headless = !args.headed;
    config.screenshot_dir = args.screenshot_dir;

    let summary = run_suite(&catalog, &config, args.workers).await;
    write_report(&summary, &args.output.join("e2e-report.json"))?;

    println!(
        "{} passed, {} failed, {} skipped in {} ms",
        summary.passed, summary.failed, summary.skipped, summary.duration_ms
    );
    Ok(summary.all_passed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_default_to_two_workers() {
        let args = Args::parse_from(["toolshop-e2e"]);
        assert_eq!(args.workers, 2);
        assert!(!args.headed);
    }

    #[test]
    fn tag_filter_narrows_the_catalog() {
        let mut catalog = scenarios::all();
        catalog.retain(|s| s.has_tag("isolation"));
        assert_eq!(catalog.len(), 1);
    }
}
