//! Plain-text rendering for terminal output.

use fundlens_core::{SeriesPoint, Slice};

use crate::presentation::{format_decimal, format_share, ChartKind, DisplayBlock};

const BAR_WIDTH: usize = 40;

/// Render blocks in order, separated by blank lines.
pub fn render_text(blocks: &[DisplayBlock]) -> String {
    let mut out = String::new();
    let mut after_metric = false;
    for block in blocks {
        if after_metric && !matches!(block, DisplayBlock::Metric { .. }) {
            out.push('\n');
        }
        after_metric = false;
        match block {
            DisplayBlock::Title { text } => {
                out.push_str(&format!("{text}\n{}\n", "=".repeat(text.chars().count())));
            }
            DisplayBlock::Header { text } => {
                out.push_str(&format!("{text}\n{}\n", "-".repeat(text.chars().count())));
            }
            DisplayBlock::Metric { label, value } => {
                out.push_str(&format!("{label}: {value}\n"));
                after_metric = true;
                continue;
            }
            DisplayBlock::Table {
                title,
                columns,
                rows,
            } => {
                out.push_str(&format!("{title}\n"));
                out.push_str(&table(columns, rows));
            }
            DisplayBlock::Distribution {
                title,
                chart,
                slices,
            } => {
                out.push_str(&format!("{title}\n"));
                out.push_str(&distribution(*chart, slices));
            }
            DisplayBlock::Series { title, points } => {
                out.push_str(&format!("{title}\n"));
                out.push_str(&series(points));
            }
        }
        out.push('\n');
    }
    out
}

fn table(columns: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    out.push_str(&line(columns, &widths));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&line(&rule, &widths));
    if rows.is_empty() {
        out.push_str("(no rows)\n");
    }
    for row in rows {
        out.push_str(&line(row, &widths));
    }
    out
}

fn line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(c, &w)| format!("{c:<w$}"))
        .collect();
    format!("{}\n", padded.join("  ").trim_end())
}

fn distribution(chart: ChartKind, slices: &[Slice]) -> String {
    if slices.is_empty() {
        return "(no data)\n".to_string();
    }
    let label_width = slices.iter().map(|s| s.label.chars().count()).max().unwrap_or(0);
    let total: f64 = slices.iter().map(|s| s.value).sum();
    let max = slices.iter().map(|s| s.value).fold(0.0_f64, f64::max);

    let mut out = String::new();
    for s in slices {
        let value = format_decimal(s.value);
        match chart {
            ChartKind::Pie => {
                let pct = if total > 0.0 { s.value / total * 100.0 } else { 0.0 };
                out.push_str(&format!(
                    "  {:<label_width$}  {value:>12}  {:>6}\n",
                    s.label,
                    format_share(pct)
                ));
            }
            ChartKind::Bar => {
                out.push_str(&format!(
                    "  {:<label_width$}  {:<bar_width$}  {value}\n",
                    s.label,
                    bar(s.value, max),
                    bar_width = BAR_WIDTH
                ));
            }
        }
    }
    out
}

fn series(points: &[SeriesPoint]) -> String {
    if points.is_empty() {
        return "(no data)\n".to_string();
    }
    let label_width = points.iter().map(|p| p.label.chars().count()).max().unwrap_or(0);
    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    let mut out = String::new();
    for p in points {
        out.push_str(&format!(
            "  {:<label_width$}  {:<bar_width$}  {}\n",
            p.label,
            bar(p.value, max),
            format_decimal(p.value),
            bar_width = BAR_WIDTH
        ));
    }
    out
}

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(len.clamp(1, BAR_WIDTH))
}
