//! Report view: lays display blocks out top to bottom.
//!
//! Consecutive metrics share one row. Distributions are drawn as
//! horizontal bar charts, with the share next to each pie slice.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph, Row,
    Table,
};
use ratatui::Frame;

use fundlens_core::{AnalysisMode, SeriesPoint, Slice};
use fundlens_runner::presentation::{format_decimal, format_share};
use fundlens_runner::{ChartKind, DisplayBlock};

use crate::app::AppState;
use crate::theme;

const MAX_LIST_HEIGHT: u16 = 12;
const SERIES_HEIGHT: u16 = 12;
const MAX_COLUMN_WIDTH: usize = 40;

/// A block, or a run of metric blocks drawn side by side.
#[derive(Debug, PartialEq)]
enum Section<'a> {
    Block(&'a DisplayBlock),
    Metrics(Vec<(&'a str, &'a str)>),
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false))
        .title(format!(" {} ", app.mode.label()))
        .title_style(theme::panel_title(false));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let Some(view) = &app.view else {
        render_empty(f, inner, app.mode);
        return;
    };

    let start = view.scroll.min(view.blocks.len());
    let mut y = inner.y;
    let bottom = inner.y + inner.height;
    for section in sections(&view.blocks[start..]) {
        if y >= bottom {
            break;
        }
        let height = section_height(&section).min(bottom - y);
        let rect = Rect::new(inner.x, y, inner.width, height);
        render_section(f, rect, &section);
        y += height;
    }
}

fn render_empty(f: &mut Frame, area: Rect, mode: AnalysisMode) {
    let hint = match mode {
        AnalysisMode::Startup => "Pick a startup in the sidebar and press Enter.",
        AnalysisMode::Investor => "Pick an investor in the sidebar and press Enter.",
        AnalysisMode::Overall => "No report.",
    };
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(hint, theme::muted())),
        Line::from(""),
        Line::from(Span::styled("Press / to filter the list.", theme::muted())),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn sections(blocks: &[DisplayBlock]) -> Vec<Section<'_>> {
    let mut out: Vec<Section<'_>> = Vec::new();
    for block in blocks {
        if let DisplayBlock::Metric { label, value } = block {
            if let Some(Section::Metrics(run)) = out.last_mut() {
                run.push((label.as_str(), value.as_str()));
            } else {
                out.push(Section::Metrics(vec![(label.as_str(), value.as_str())]));
            }
        } else {
            out.push(Section::Block(block));
        }
    }
    out
}

fn section_height(section: &Section<'_>) -> u16 {
    let list = |n: usize| (n as u16).saturating_add(2).clamp(3, MAX_LIST_HEIGHT);
    match section {
        Section::Metrics(_) => 3,
        Section::Block(DisplayBlock::Title { .. }) => 2,
        Section::Block(DisplayBlock::Header { .. }) => 1,
        Section::Block(DisplayBlock::Metric { .. }) => 3,
        Section::Block(DisplayBlock::Table { rows, .. }) => list(rows.len() + 1),
        Section::Block(DisplayBlock::Distribution { slices, .. }) => list(slices.len()),
        Section::Block(DisplayBlock::Series { points, .. }) => {
            if points.is_empty() {
                3
            } else {
                SERIES_HEIGHT
            }
        }
    }
}

fn render_section(f: &mut Frame, area: Rect, section: &Section<'_>) {
    match section {
        Section::Metrics(run) => render_metrics(f, area, run),
        Section::Block(block) => match block {
            DisplayBlock::Title { text } => {
                let line = Line::from(Span::styled(text.as_str(), theme::accent_bold()));
                f.render_widget(Paragraph::new(line), area);
            }
            DisplayBlock::Header { text } => {
                let line = Line::from(Span::styled(text.as_str(), theme::accent()));
                f.render_widget(Paragraph::new(line), area);
            }
            DisplayBlock::Metric { label, value } => {
                render_metrics(f, area, &[(label.as_str(), value.as_str())]);
            }
            DisplayBlock::Table {
                title,
                columns,
                rows,
            } => render_table(f, area, title, columns, rows),
            DisplayBlock::Distribution {
                title,
                chart,
                slices,
            } => render_distribution(f, area, title, *chart, slices),
            DisplayBlock::Series { title, points } => render_series(f, area, title, points),
        },
    }
}

fn titled(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(Span::styled(format!(" {title} "), theme::accent()))
}

fn no_data(f: &mut Frame, area: Rect, block: Block<'_>) {
    let para = Paragraph::new(Span::styled("No data", theme::muted())).block(block);
    f.render_widget(para, area);
}

fn render_metrics(f: &mut Frame, area: Rect, run: &[(&str, &str)]) {
    let n = run.len().max(1) as u32;
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(run.iter().map(|_| Constraint::Ratio(1, n)))
        .split(area);
    for ((label, value), cell) in run.iter().zip(cells.iter()) {
        let para = Paragraph::new(Span::styled(*value, theme::positive())).block(titled(label));
        f.render_widget(para, *cell);
    }
}

fn render_table(f: &mut Frame, area: Rect, title: &str, columns: &[String], rows: &[Vec<String>]) {
    if rows.is_empty() {
        no_data(f, area, titled(title));
        return;
    }
    let widths: Vec<Constraint> = columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            let widest = rows
                .iter()
                .filter_map(|r| r.get(i))
                .map(|c| c.chars().count())
                .chain(std::iter::once(col.chars().count()))
                .max()
                .unwrap_or(0);
            Constraint::Length(widest.min(MAX_COLUMN_WIDTH) as u16)
        })
        .collect();

    let header = Row::new(columns.iter().map(String::as_str)).style(theme::accent_bold());
    let body: Vec<Row> = rows
        .iter()
        .map(|r| Row::new(r.iter().map(String::as_str)).style(theme::text()))
        .collect();
    let table = Table::new(body, widths)
        .header(header)
        .column_spacing(2)
        .block(titled(title));
    f.render_widget(table, area);
}

fn render_distribution(f: &mut Frame, area: Rect, title: &str, chart: ChartKind, slices: &[Slice]) {
    if slices.is_empty() {
        no_data(f, area, titled(title));
        return;
    }
    let total: f64 = slices.iter().map(|s| s.value).sum();
    let bars: Vec<Bar> = slices
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let text = match chart {
                ChartKind::Pie => {
                    let pct = if total > 0.0 { s.value / total * 100.0 } else { 0.0 };
                    format!("{} ({})", format_decimal(s.value), format_share(pct))
                }
                ChartKind::Bar => format_decimal(s.value),
            };
            Bar::default()
                .value(bar_value(s.value))
                .label(Line::from(s.label.clone()))
                .text_value(text)
                .style(Style::default().fg(theme::slice_color(i)))
                .value_style(theme::text())
        })
        .collect();

    let chart = BarChart::default()
        .block(titled(title))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}

/// Bar lengths are integral; keep two decimals of resolution.
fn bar_value(value: f64) -> u64 {
    (value.max(0.0) * 100.0).round() as u64
}

fn render_series(f: &mut Frame, area: Rect, title: &str, points: &[SeriesPoint]) {
    if points.is_empty() {
        no_data(f, area, titled(title));
        return;
    }
    let data: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.value))
        .collect();
    let max_y = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    let min_y = points.iter().map(|p| p.value).fold(0.0_f64, f64::min);
    let padding = (max_y - min_y).abs() * 0.05;
    let x_max = points.len().saturating_sub(1) as f64;

    let first = points.first().map_or("", |p| p.label.as_str());
    let last = points.last().map_or("", |p| p.label.as_str());

    let dataset = Dataset::default()
        .name(title.to_string())
        .marker(symbols::Marker::Braille)
        .style(Style::default().fg(theme::ACCENT))
        .graph_type(GraphType::Line)
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(titled(title))
        .x_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([0.0, x_max.max(1.0)])
                .labels(vec![
                    Span::styled(first.to_string(), theme::muted()),
                    Span::styled(last.to_string(), theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([min_y - padding, (max_y + padding).max(1.0)])
                .labels(vec![
                    Span::styled(format!("{:.0}", min_y), theme::muted()),
                    Span::styled(format!("{:.0}", max_y), theme::muted()),
                ]),
        );
    f.render_widget(chart, area);
}
