pub mod config;
pub mod diff;
pub mod verify;

use lockdiff::core::{LockError, LockResult};
use lockdiff::report::{Report, ReportFormat};
use lockdiff::LockfileDifference;
use tracing::warn;

/// Print the report for a difference and apply the failure policy
pub fn report_and_finish(
    difference: &LockfileDifference,
    format: ReportFormat,
    fail_on_difference: bool,
) -> LockResult<()> {
    let report = Report::new(difference);
    println!("{}", report.render(format)?);

    if report.has_findings() {
        if fail_on_difference {
            return Err(LockError::Verification(format!(
                "{} difference(s) between lockfile and project",
                report.findings().len()
            )));
        }
        warn!(
            findings = report.findings().len(),
            "differences found, not failing (warn-only)"
        );
    }

    Ok(())
}
