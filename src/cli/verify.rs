use lockdiff::config::Config;
use lockdiff::core::path::find_project_root;
use lockdiff::core::{LockError, LockResult};
use lockdiff::integrity::RepositoryObserver;
use lockdiff::lockfile::Lockfile;
use lockdiff::report::ReportFormat;
use std::env;
use std::path::PathBuf;

pub fn run(
    config: &Config,
    lockfile: Option<PathBuf>,
    repository: Option<PathBuf>,
    format: Option<ReportFormat>,
    warn_only: bool,
) -> LockResult<()> {
    let format = format.unwrap_or(config.report_format);

    let lockfile_path = match lockfile {
        Some(path) => path,
        None => {
            let current_dir = env::current_dir().map_err(|e| {
                LockError::Path(format!("Failed to get current directory: {}", e))
            })?;
            find_project_root(&current_dir, &config.lockfile_name)?.join(&config.lockfile_name)
        }
    };

    let lockfile = Lockfile::load(&lockfile_path)?;
    let entries = lockfile.dependency_count() + lockfile.maven_plugins.len();
    if entries == 0 {
        if format == ReportFormat::Text {
            println!("No entries to verify");
        }
        return Ok(());
    }

    let repository_dir = match repository {
        Some(dir) => dir,
        None => config.get_repository_dir()?,
    };
    let observer = RepositoryObserver::new(repository_dir)?;

    if format == ReportFormat::Text {
        println!(
            "Verifying {} dependency(ies) and {} plugin(s) against {}...",
            lockfile.dependency_count(),
            lockfile.maven_plugins.len(),
            observer.repository_dir().display()
        );
    }

    let observed = observer.observe(&lockfile)?;
    let difference = lockdiff::diff(&lockfile.to_snapshot(), &observed);

    super::report_and_finish(&difference, format, config.fail_on_difference && !warn_only)
}
