//! Logger controller.

use crate::output::OutputContext;

const SINK_CONFIG: &str = "fake.cfg";
const PRINT_PREFIX: &str = "[Logger/Print]: ";

/// Check that the logging sink accepts writes before the line goes out.
trait SinkCheck {
    fn validate(&self, out: &OutputContext, prefix: &str, config: &str) -> bool;
}

/// Production check: emits the log line itself and reports the sink healthy.
struct SinkProbe;

impl SinkCheck for SinkProbe {
    fn validate(&self, out: &OutputContext, prefix: &str, _config: &str) -> bool {
        out.line(&format!("{prefix}Logging stuff"));
        true
    }
}

/// Logger controller. Construction is infallible; the sink check runs on
/// every print instead.
pub struct Logger;

impl Logger {
    /// Emit the log line through the sink check. The check's verdict is
    /// discarded: printing is best-effort and has no failure path today.
    pub fn print(&self, out: &OutputContext) {
        self.print_with(out, &SinkProbe);
    }

    fn print_with(&self, out: &OutputContext, check: &impl SinkCheck) {
        let ok = check.validate(out, PRINT_PREFIX, SINK_CONFIG);
        let _ = ok;
    }
}
