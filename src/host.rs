//! Bootstrap: build one application, run it, release it on every exit path.

use anyhow::Result;
use log::{debug, error, info};

use crate::app::App;

/// Builds one application with `build`, runs it to completion, and returns
/// the run's outcome.
///
/// The instance lives in this call's scope, so it is dropped exactly once
/// whether `run` returns `Ok`, returns `Err`, or panics out. Nothing is
/// caught here: a factory or run error propagates to the caller, a panic
/// unwinds to the process boundary.
pub fn run_app<A, F>(app_name: &str, build: F) -> Result<()>
where
    A: App,
    F: FnOnce() -> Result<A>,
{
    debug!("{}: building", app_name);
    let mut app = build()?;

    info!("{}: running {}", app_name, app.name());
    let outcome = app.run();
    match &outcome {
        Ok(()) => info!("{}: terminated", app_name),
        Err(err) => error!("{}: run failed: {:#}", app_name, err),
    }
    outcome
}
