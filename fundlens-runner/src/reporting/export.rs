//! Writes a report, its display blocks and provenance metadata to disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use fundlens_core::{Report, ReportOptions, ReportRequest};

use crate::presentation::DisplayBlock;
use crate::reporting::markdown::MarkdownReportGenerator;
use crate::session::Session;

/// Bumped whenever the JSON export layout changes.
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
        }
    }
}

/// JSON export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportExport {
    pub schema_version: u32,
    pub generated_at: DateTime<Utc>,
    pub dataset_fingerprint: String,
    pub request: ReportRequest,
    pub options: ReportOptions,
    pub report: Report,
    pub blocks: Vec<DisplayBlock>,
}

/// Run `request` and write the result into `output_dir`.
///
/// The file is named `{mode}[-{name}].{ext}`; an existing file is replaced.
pub fn export_report(
    session: &Session,
    request: &ReportRequest,
    options: &ReportOptions,
    format: ExportFormat,
    output_dir: &Path,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create export directory {}", output_dir.display()))?;

    let report = session.run_with(request, options);
    let generated_at = Utc::now();
    let fingerprint = session.dataset().fingerprint().to_string();
    let path = output_dir.join(format!("{}.{}", file_stem(request), format.extension()));

    let contents = match format {
        ExportFormat::Json => {
            let doc = ReportExport {
                schema_version: EXPORT_SCHEMA_VERSION,
                generated_at,
                dataset_fingerprint: fingerprint,
                request: request.clone(),
                options: options.clone(),
                blocks: session.render(&report),
                report,
            };
            serde_json::to_string_pretty(&doc).context("Failed to serialize report export")?
        }
        ExportFormat::Markdown => MarkdownReportGenerator::new(session.presenter().clone())
            .generate(request, &report, &fingerprint, generated_at),
    };

    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    info!(path = %path.display(), "report exported");
    Ok(path)
}

fn file_stem(request: &ReportRequest) -> String {
    match request {
        ReportRequest::Overall { trend } => format!("overall-{}", trend.label().to_lowercase()),
        ReportRequest::Startup { name } => format!("startup-{}", slug(name)),
        ReportRequest::Investor { name } => format!("investor-{}", slug(name)),
    }
}

/// Lowercase ASCII alphanumerics joined by single dashes.
fn slug(name: &str) -> String {
    let mut out = String::new();
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    if out.is_empty() {
        out.push_str("unnamed");
    }
    out
}
