//! Integration tests: config file -> session -> report -> export on disk.

use std::path::PathBuf;

use fundlens_core::{Report, ReportRequest, TrendMetric};
use fundlens_runner::{
    export_report, render_text, DashboardConfig, DisplayBlock, ExportFormat, ReportExport,
    Session, EXPORT_SCHEMA_VERSION,
};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../fundlens-core/tests/fixtures/startup_funding.csv")
}

fn session() -> Session {
    let mut config = DashboardConfig::default();
    config.data.path = fixture();
    Session::open(config).unwrap()
}

#[test]
fn config_file_drives_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("fundlens.toml");
    std::fs::write(
        &config_path,
        format!(
            "[data]\npath = {:?}\n\n[display]\ncurrency_unit = \"USD M\"\n\n[report]\ninvestor_match = \"strict\"\n",
            fixture().display().to_string()
        ),
    )
    .unwrap();

    let config = DashboardConfig::from_file(&config_path).unwrap();
    let session = Session::open(config).unwrap();

    assert_eq!(session.summary().rows, 15);
    assert_eq!(session.summary().undated_rows(), 1);
    assert_eq!(session.summary().unknown_amounts(), 2);

    let report = session.run(&ReportRequest::Investor {
        name: "Tencent".into(),
    });
    let Report::Investor(investor) = &report else {
        panic!("expected investor report");
    };
    assert_eq!(investor.matched, 3);

    let text = render_text(&session.render(&report));
    assert!(text.starts_with("Tencent\n"));
    assert!(text.contains("Biggest Investments"));
}

#[test]
fn overall_text_matches_dashboard_figures() {
    let session = session();
    let blocks = session.render(&session.run(&ReportRequest::Overall {
        trend: TrendMetric::Total,
    }));
    let text = render_text(&blocks);
    assert!(text.contains("Total: 23952 Cr"));
    assert!(text.contains("Max: 16500 Cr"));
    assert!(text.contains("Avg: 2395 Cr"));
    assert!(text.contains("Funded Startups: 10"));
}

#[test]
fn json_export_round_trips_with_provenance() {
    let session = session();
    let out = tempfile::tempdir().unwrap();
    let request = ReportRequest::Startup {
        name: "BYJU'S".into(),
    };

    let path = export_report(
        &session,
        &request,
        &session.options(),
        ExportFormat::Json,
        out.path(),
    )
    .unwrap();
    assert_eq!(path.file_name().unwrap(), "startup-byju-s.json");

    let doc: ReportExport =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(doc.schema_version, EXPORT_SCHEMA_VERSION);
    assert_eq!(doc.dataset_fingerprint, session.dataset().fingerprint());
    assert_eq!(doc.request, request);
    assert_eq!(doc.report, session.run(&request));
    assert!(doc.blocks.contains(&DisplayBlock::Metric {
        label: "Total Amount invested".into(),
        value: "1970.0 Cr".into(),
    }));
}

#[test]
fn markdown_export_writes_report() {
    let session = session();
    let out = tempfile::tempdir().unwrap();
    let path = export_report(
        &session,
        &ReportRequest::Overall {
            trend: TrendMetric::Count,
        },
        &session.options(),
        ExportFormat::Markdown,
        &out.path().join("nested"),
    )
    .unwrap();
    assert_eq!(path.file_name().unwrap(), "overall-count.md");

    let md = std::fs::read_to_string(path).unwrap();
    assert!(md.contains(session.dataset().fingerprint()));
    assert!(md.contains("### MoM graph"));
    assert!(md.contains("| 1-2020 | 5.0 |"));
}
