//! Toolshop end-to-end suite
//!
//! Scenarios are fixed linear scripts over the page objects in
//! `toolshop-pages`, with strict interleaved assertions - any deviation
//! fails the scenario immediately; there is no soft-assert mode.
//!
//! Concurrency exists only at the suite level: [`harness::run_suite`]
//! executes independent scenarios in concurrent, isolated browser sessions
//! bounded by a worker count; within a scenario every step runs strictly
//! sequentially, and every browser interaction is an await suspension
//! point bounded by a timeout.
//!
//! The entry point is the `harness = false` test binary in `tests/e2e.rs`:
//!
//! ```text
//! E2E_WEBDRIVER_URL=http://localhost:4444 cargo test -p toolshop-e2e --test e2e -- --tag smoke
//! ```

pub mod fixtures;
pub mod harness;
pub mod scenarios;

pub use harness::{run_suite, Scenario, ScenarioError, SuiteSummary};
