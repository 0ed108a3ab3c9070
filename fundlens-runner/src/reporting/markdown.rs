//! Markdown report generator.

use chrono::{DateTime, Utc};

use fundlens_core::{Report, ReportRequest};

use crate::presentation::{format_decimal, format_share, ChartKind, DisplayBlock, Presenter};

pub struct MarkdownReportGenerator {
    presenter: Presenter,
}

impl MarkdownReportGenerator {
    pub fn new(presenter: Presenter) -> Self {
        Self { presenter }
    }

    pub fn generate(
        &self,
        request: &ReportRequest,
        report: &Report,
        fingerprint: &str,
        generated_at: DateTime<Utc>,
    ) -> String {
        let mut out = format!(
            "# FundLens Report\n\n\
Mode: {}\n\n\
Dataset: `{}`\n\n\
Generated: {}\n",
            request.mode().label(),
            fingerprint,
            generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        );
        out.push_str(&blocks_to_markdown(&self.presenter.blocks(report)));
        out
    }
}

pub fn blocks_to_markdown(blocks: &[DisplayBlock]) -> String {
    let mut out = String::new();
    let mut in_metrics = false;

    for block in blocks {
        let is_metric = matches!(block, DisplayBlock::Metric { .. });
        if is_metric && !in_metrics {
            out.push('\n');
        }
        in_metrics = is_metric;

        match block {
            DisplayBlock::Title { text } => out.push_str(&format!("\n## {text}\n")),
            DisplayBlock::Header { text } => out.push_str(&format!("\n### {text}\n")),
            DisplayBlock::Metric { label, value } => {
                out.push_str(&format!("- {label}: {value}\n"));
            }
            DisplayBlock::Table {
                title,
                columns,
                rows,
            } => {
                out.push_str(&format!("\n### {title}\n\n"));
                if rows.is_empty() {
                    out.push_str("_No rows._\n");
                    continue;
                }
                out.push_str(&format!("| {} |\n", columns.join(" | ")));
                let rule: Vec<&str> = columns.iter().map(|_| "---").collect();
                out.push_str(&format!("|{}|\n", rule.join("|")));
                for row in rows {
                    let cells: Vec<String> = row.iter().map(|c| escape(c)).collect();
                    out.push_str(&format!("| {} |\n", cells.join(" | ")));
                }
            }
            DisplayBlock::Distribution {
                title,
                chart,
                slices,
            } => {
                out.push_str(&format!("\n### {title}\n\n"));
                if slices.is_empty() {
                    out.push_str("_No data._\n");
                    continue;
                }
                let total: f64 = slices.iter().map(|s| s.value).sum();
                match chart {
                    ChartKind::Pie => {
                        out.push_str("| Label | Value | Share |\n|---|---|---|\n");
                        for s in slices {
                            let pct = if total > 0.0 { s.value / total * 100.0 } else { 0.0 };
                            out.push_str(&format!(
                                "| {} | {} | {} |\n",
                                escape(&s.label),
                                format_decimal(s.value),
                                format_share(pct)
                            ));
                        }
                    }
                    ChartKind::Bar => {
                        out.push_str("| Label | Value |\n|---|---|\n");
                        for s in slices {
                            out.push_str(&format!(
                                "| {} | {} |\n",
                                escape(&s.label),
                                format_decimal(s.value)
                            ));
                        }
                    }
                }
            }
            DisplayBlock::Series { title, points } => {
                out.push_str(&format!("\n### {title}\n\n"));
                if points.is_empty() {
                    out.push_str("_No data._\n");
                    continue;
                }
                out.push_str("| Period | Value |\n|---|---|\n");
                for p in points {
                    out.push_str(&format!("| {} | {} |\n", p.label, format_decimal(p.value)));
                }
            }
        }
    }
    out
}

// Pipes would split a cell.
fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
}
