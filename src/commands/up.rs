//! `up` command.
//!
//! Brings up the peripherals controller against the configuration source,
//! re-checks it, then exercises the logger. With `--json`, the human
//! narration is replaced by a single [`BringupReport`] object on stdout.

use std::time::Instant;

use anyhow::{Context, Result};

use crate::controllers::{Logger, Peripherals};
use crate::output::OutputContext;
use crate::report::BringupReport;

/// Run the bring-up sequence.
///
/// # Errors
///
/// Returns an error when the peripherals controller fails to come up, or
/// when the JSON report cannot be serialized.
pub fn run(ctx: &OutputContext, config: &str, json: bool) -> Result<()> {
    let started = Instant::now();

    ctx.section("main/Peripherals:");
    // Propagated bare: the controller's own message is the full story.
    let peripherals = Peripherals::new(ctx, config)?;
    peripherals.status(ctx);

    ctx.section("main/Logger:");
    let logger = Logger;
    logger.print(ctx);

    if json {
        let report = BringupReport {
            config_source: peripherals.config_source().to_owned(),
            backend_ready: peripherals.backend_ready(),
            // Bring-up check plus the status re-check.
            checks_run: 2,
            logger_ran: true,
            elapsed_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing bring-up report")?
        );
    }

    Ok(())
}
