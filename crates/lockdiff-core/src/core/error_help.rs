use crate::core::LockError;

/// Provides helpful suggestions for common errors
pub trait ErrorHelp {
    fn help(&self) -> Option<String>;
}

impl ErrorHelp for LockError {
    fn help(&self) -> Option<String> {
        match self {
            LockError::Lockfile(msg) => {
                if msg.contains("lockfile.json not found") || msg.contains("No lockfile") {
                    Some(
                        "💡 Suggestion: Pass the lockfile path with --lockfile, or run from a directory containing one"
                            .to_string(),
                    )
                } else if msg.contains("Unsupported lockFileVersion") {
                    Some(
                        "💡 Suggestion: Regenerate the lockfile with a current version of your lockfile plugin"
                            .to_string(),
                    )
                } else if msg.contains("empty") {
                    Some(
                        "💡 Suggestion: Every entry needs groupId, artifactId, version, checksumAlgorithm and checksum"
                            .to_string(),
                    )
                } else {
                    None
                }
            }
            LockError::Checksum(msg) => {
                if msg.contains("Unsupported checksum algorithm") {
                    Some(
                        "💡 Suggestion: Supported algorithms are SHA-256 and SHA-512".to_string(),
                    )
                } else {
                    None
                }
            }
            LockError::Verification(_) => Some(
                "💡 Suggestion: Review the entries above. Tampered entries changed content without a version bump; \
                 use --warn-only to report without failing"
                    .to_string(),
            ),
            LockError::Path(msg) => {
                if msg.contains("Could not determine") {
                    Some(
                        "💡 Suggestion: Check your system environment variables (HOME, APPDATA, etc.)"
                            .to_string(),
                    )
                } else if msg.contains("Repository directory not found") {
                    Some(
                        "💡 Suggestion: Set repository_dir in the config file, or pass --repository"
                            .to_string(),
                    )
                } else {
                    None
                }
            }
            LockError::Json(e) => Some(format!(
                "💡 Suggestion: Check the lockfile JSON syntax (line {}, column {})",
                e.line(),
                e.column()
            )),
            LockError::Yaml(e) => Some(format!(
                "💡 Suggestion: Check your YAML syntax. Common issues:\n  - Missing colons after keys\n  - Incorrect indentation\n  - Unclosed quotes\n\nError details: {}",
                e
            )),
            LockError::Io(e) => {
                if e.kind() == std::io::ErrorKind::PermissionDenied {
                    Some(
                        "💡 Suggestion: Check file permissions, or try running with appropriate permissions"
                            .to_string(),
                    )
                } else if e.kind() == std::io::ErrorKind::NotFound {
                    Some(
                        "💡 Suggestion: The file or directory may not exist. Check the path and try again"
                            .to_string(),
                    )
                } else {
                    None
                }
            }
            LockError::Config(_) => None,
        }
    }
}

/// Format an error with helpful suggestions
pub fn format_error_with_help(error: &LockError) -> String {
    let mut output = format!("❌ Error: {}", error);

    if let Some(help) = error.help() {
        output.push_str("\n\n");
        output.push_str(&help);
    }

    output
}
