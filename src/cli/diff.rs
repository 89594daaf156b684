use lockdiff::config::Config;
use lockdiff::core::LockResult;
use lockdiff::lockfile::Lockfile;
use lockdiff::report::ReportFormat;
use std::path::Path;
use tracing::info;

pub fn run(
    config: &Config,
    recorded: &Path,
    observed: &Path,
    format: Option<ReportFormat>,
    warn_only: bool,
) -> LockResult<()> {
    let recorded_lockfile = Lockfile::load(recorded)?;
    let observed_lockfile = Lockfile::load(observed)?;

    info!(
        recorded = %recorded.display(),
        observed = %observed.display(),
        "diffing lockfiles"
    );

    let difference = lockdiff::diff(
        &recorded_lockfile.to_snapshot(),
        &observed_lockfile.to_snapshot(),
    );

    super::report_and_finish(
        &difference,
        format.unwrap_or(config.report_format),
        config.fail_on_difference && !warn_only,
    )
}
