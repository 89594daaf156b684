use lockdiff::config::Config;
use lockdiff::core::{LockError, LockResult};

pub fn run(config: &Config) -> LockResult<()> {
    let content = serde_yaml::to_string(config)
        .map_err(|e| LockError::Config(format!("Failed to serialize config: {}", e)))?;
    print!("{}", content);
    println!("# effective repository_dir: {}", config.get_repository_dir()?.display());
    Ok(())
}
