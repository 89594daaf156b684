//! Rendering of lockfile differences.
//!
//! A tampered entry also shows up in both "missing" sets of a
//! [`LockfileDifference`] because its recorded and observed records differ by
//! checksum. The report folds those into a single tampered finding.

use crate::core::LockResult;
use clap::ValueEnum;
use lockdiff_core::{KindDifference, LockfileDifference, RecordKind};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingStatus {
    /// Same identity, different checksum
    Tampered,
    /// Recorded in the lockfile, absent from the project
    MissingInProject,
    /// Present in the project, not recorded in the lockfile
    MissingInFile,
}

impl FindingStatus {
    fn label(&self) -> &'static str {
        match self {
            FindingStatus::Tampered => "tampered",
            FindingStatus::MissingInProject => "missing in project",
            FindingStatus::MissingInFile => "missing in lockfile",
        }
    }

    fn marker(&self) -> &'static str {
        match self {
            FindingStatus::Tampered => "⚠",
            FindingStatus::MissingInProject => "-",
            FindingStatus::MissingInFile => "+",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub kind: &'static str,
    pub status: FindingStatus,
    pub identity: String,
    pub checksum_algorithm: String,
    /// Checksum recorded in the lockfile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_checksum: Option<String>,
    /// Checksums observed in the project
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub observed_checksums: Vec<String>,
}

/// De-duplicated findings of one diff, dependencies first
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    findings: Vec<Finding>,
}

impl Report {
    pub fn new(difference: &LockfileDifference) -> Self {
        let mut findings = Vec::new();
        collect(difference.dependencies(), &mut findings);
        collect(difference.plugins(), &mut findings);
        Self { findings }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }

    pub fn count(&self, status: FindingStatus) -> usize {
        self.findings.iter().filter(|f| f.status == status).count()
    }

    pub fn render(&self, format: ReportFormat) -> LockResult<String> {
        match format {
            ReportFormat::Text => Ok(self.render_text()),
            ReportFormat::Json => self.render_json(),
        }
    }

    pub fn render_json(&self) -> LockResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render_text(&self) -> String {
        if self.findings.is_empty() {
            return "✓ Lockfile matches the project".to_string();
        }

        let mut out = String::new();
        let _ = writeln!(
            out,
            "❌ {} difference(s) found ({} tampered, {} missing in project, {} missing in lockfile)",
            self.findings.len(),
            self.count(FindingStatus::Tampered),
            self.count(FindingStatus::MissingInProject),
            self.count(FindingStatus::MissingInFile),
        );

        let mut current_kind = "";
        for finding in &self.findings {
            if finding.kind != current_kind {
                current_kind = finding.kind;
                let _ = writeln!(out, "\n{}:", current_kind);
            }
            let _ = write!(
                out,
                "  {} {}: {}",
                finding.status.marker(),
                finding.status.label(),
                finding.identity
            );
            match (&finding.expected_checksum, finding.observed_checksums.as_slice()) {
                (Some(expected), observed) if !observed.is_empty() => {
                    let _ = write!(
                        out,
                        "\n      Expected: {}:{}\n      Actual:   {}:{}",
                        finding.checksum_algorithm,
                        expected,
                        finding.checksum_algorithm,
                        observed.join(", ")
                    );
                }
                _ => {}
            }
            out.push('\n');
        }

        out.trim_end().to_string()
    }
}

fn collect<K: RecordKind>(difference: &KindDifference<K>, findings: &mut Vec<Finding>) {
    let tampered = difference.tampered_with();

    for recorded in tampered {
        let observed_checksums = difference
            .missing_in_file()
            .iter()
            .filter(|observed| recorded.is_tampered_against(observed))
            .map(|observed| observed.checksum().to_string())
            .collect();
        findings.push(Finding {
            kind: K::PLURAL,
            status: FindingStatus::Tampered,
            identity: recorded.identity().to_string(),
            checksum_algorithm: recorded.checksum_algorithm().to_string(),
            expected_checksum: Some(recorded.checksum().to_string()),
            observed_checksums,
        });
    }

    for recorded in difference.missing_in_project() {
        if tampered.contains(recorded) {
            continue;
        }
        findings.push(Finding {
            kind: K::PLURAL,
            status: FindingStatus::MissingInProject,
            identity: recorded.identity().to_string(),
            checksum_algorithm: recorded.checksum_algorithm().to_string(),
            expected_checksum: Some(recorded.checksum().to_string()),
            observed_checksums: Vec::new(),
        });
    }

    for observed in difference.missing_in_file() {
        if tampered.iter().any(|t| t.is_tampered_against(observed)) {
            continue;
        }
        findings.push(Finding {
            kind: K::PLURAL,
            status: FindingStatus::MissingInFile,
            identity: observed.identity().to_string(),
            checksum_algorithm: observed.checksum_algorithm().to_string(),
            expected_checksum: None,
            observed_checksums: vec![observed.checksum().to_string()],
        });
    }
}
