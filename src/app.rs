//! The contract between the host and the application it runs.

use anyhow::Result;

/// One hosted application.
///
/// The host builds an instance, calls [`App::run`] once, and drops it when
/// the owning scope ends. Dropping is the disposal step: put any cleanup in
/// a `Drop` impl and it runs no matter how `run` came back.
pub trait App {
    /// Runs the application until it decides to terminate.
    ///
    /// Blocking: the call returns only when the application is done. An
    /// `Err` is a fault and propagates out of the host unchanged; so does
    /// a panic.
    fn run(&mut self) -> Result<()>;

    /// Name used in host log lines.
    fn name(&self) -> &str {
        "app"
    }
}
