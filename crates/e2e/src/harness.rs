//! Scenario registry and suite runner
//!
//! A [`Scenario`] is a named, tagged async function over a fresh
//! [`SessionConfig`]. [`run_suite`] executes scenarios concurrently, at
//! most `workers` browser sessions at a time; each scenario owns its
//! session(s) end to end, so nothing mutable is shared between them.

use std::fmt;
use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, info};

use toolshop_pages::{connect, PageContext, PageError, SessionConfig};

/// Errors that terminate a scenario.
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error(transparent)]
    Page(#[from] PageError),

    #[error("assertion failed: {what}: expected {expected}, got {actual}")]
    Assertion {
        what: String,
        expected: String,
        actual: String,
    },

    #[error("scenario setup failed: {0}")]
    Setup(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ScenarioResult = Result<(), ScenarioError>;
pub type ScenarioFuture = Pin<Box<dyn Future<Output = ScenarioResult> + Send>>;

/// Strict equality assertion. Any deviation fails the scenario immediately
/// with a diff of expected and actual; there is no continue-on-failure.
pub fn ensure_eq<T>(what: &str, actual: T, expected: T) -> ScenarioResult
where
    T: PartialEq + fmt::Debug,
{
    if actual == expected {
        Ok(())
    } else {
        Err(ScenarioError::Assertion {
            what: what.to_string(),
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        })
    }
}

/// Strict boolean assertion.
pub fn ensure(what: &str, condition: bool) -> ScenarioResult {
    ensure_eq(what, condition, true)
}

/// One user journey: a fixed linear script over page objects.
#[derive(Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub tags: &'static [&'static str],
    pub run: fn(SessionConfig) -> ScenarioFuture,
}

impl Scenario {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }
}

/// Open a session, run the scenario body, and always close the session,
/// even when the body fails.
pub async fn with_session<F, Fut>(config: &SessionConfig, body: F) -> ScenarioResult
where
    F: FnOnce(PageContext) -> Fut,
    Fut: Future<Output = ScenarioResult>,
{
    let ctx = connect(config).await?;
    let outcome = body(ctx.clone()).await;
    if let Err(err) = ctx.quit().await {
        error!(%err, "failed to close webdriver session");
    }
    outcome
}

/// Outcome of one scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub name: String,
    pub success: bool,
    pub duration_ms: u64,
    pub error: Option<String>,
}

/// Outcome of the whole run, also written as a JSON report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteSummary {
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub duration_ms: u64,
    pub scenarios: Vec<ScenarioReport>,
}

impl SuiteSummary {
    /// Summary for a run that never started because no WebDriver endpoint
    /// was configured.
    pub fn skipped(total: usize) -> Self {
        Self {
            started_at: chrono::Utc::now(),
            total,
            passed: 0,
            failed: 0,
            skipped: total,
            duration_ms: 0,
            scenarios: Vec::new(),
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Run scenarios concurrently, bounded by `workers` simultaneous sessions.
pub async fn run_suite(
    scenarios: &[Scenario],
    config: &SessionConfig,
    workers: usize,
) -> SuiteSummary {
    let started_at = chrono::Utc::now();
    let start = Instant::now();
    let semaphore = Arc::new(Semaphore::new(workers.max(1)));
    let mut set: JoinSet<ScenarioReport> = JoinSet::new();

    info!(total = scenarios.len(), workers, "running scenarios");

    for scenario in scenarios {
        let semaphore = Arc::clone(&semaphore);
        let config = config.clone();
        let name = scenario.name;
        let run = scenario.run;
        set.spawn(async move {
            let _permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    return ScenarioReport {
                        name: name.to_string(),
                        success: false,
                        duration_ms: 0,
                        error: Some("worker semaphore closed".to_string()),
                    }
                }
            };
            let scenario_start = Instant::now();
            info!(%name, "running scenario");
            let outcome = run(config).await;
            let duration_ms = scenario_start.elapsed().as_millis() as u64;
            match outcome {
                Ok(()) => {
                    info!(%name, duration_ms, "scenario passed");
                    ScenarioReport {
                        name: name.to_string(),
                        success: true,
                        duration_ms,
                        error: None,
                    }
                }
                Err(err) => {
                    error!(%name, %err, "scenario failed");
                    ScenarioReport {
                        name: name.to_string(),
                        success: false,
                        duration_ms,
                        error: Some(err.to_string()),
                    }
                }
            }
        });
    }

    let mut reports = Vec::new();
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok(report) => reports.push(report),
            Err(err) => {
                error!(%err, "scenario task panicked");
                reports.push(ScenarioReport {
                    name: "<panicked>".to_string(),
                    success: false,
                    duration_ms: 0,
                    error: Some(err.to_string()),
                });
            }
        }
    }
    reports.sort_by(|a, b| a.name.cmp(&b.name));

    let passed = reports.iter().filter(|r| r.success).count();
    let failed = reports.len() - passed;
    info!(
        passed,
        failed,
        duration_ms = start.elapsed().as_millis() as u64,
        "suite finished"
    );

    SuiteSummary {
        started_at,
        total: reports.len(),
        passed,
        failed,
        skipped: 0,
        duration_ms: start.elapsed().as_millis() as u64,
        scenarios: reports,
    }
}

/// Write the machine-readable run report.
pub fn write_report(summary: &SuiteSummary, path: &Path) -> Result<(), ScenarioError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), "run report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_eq_reports_expected_and_actual() {
        let err = ensure_eq("cart count", 2, 3).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("cart count"));
        assert!(message.contains("expected 3"));
        assert!(message.contains("got 2"));
    }

    #[test]
    fn ensure_passes_on_true() {
        assert!(ensure("banner visible", true).is_ok());
        assert!(ensure("banner visible", false).is_err());
    }

    #[test]
    fn skipped_summary_counts_everything_as_skipped() {
        let summary = SuiteSummary::skipped(6);
        assert_eq!(summary.skipped, 6);
        assert_eq!(summary.failed, 0);
        assert!(summary.all_passed());
    }

    #[test]
    fn report_serializes_round_trip() {
        let summary = SuiteSummary::skipped(1);
        let json = serde_json::to_string(&summary).unwrap();
        let back: SuiteSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back.skipped, 1);
    }
}
