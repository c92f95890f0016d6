//! Machine-readable summary of a bring-up run.

use serde::Serialize;

/// Final report printed on stdout when `--json` is set.
#[derive(Debug, Serialize)]
pub struct BringupReport {
    /// Configuration source the peripherals controller was brought up against.
    pub config_source: String,
    /// Backend condition recorded at construction.
    pub backend_ready: bool,
    /// Number of backend checks that ran (bring-up plus status).
    pub checks_run: u32,
    /// Whether the logger stage ran to completion.
    pub logger_ran: bool,
    /// Wall-clock duration of the whole run in milliseconds.
    pub elapsed_ms: u64,
}
