// End-to-end report runs with in-memory collaborators

mod common;

use chrono::Duration;
use common::{FakeInspector, FakeSummarizer, RecordingDelivery, SAMPLE_SNAPSHOT, fixed_now};
use infra_report::models::{CertificateTarget, SeverityTier};
use infra_report::runner::{
    ReportRunner, RunError, RunnerConfig, RunnerDeps, subject_for,
};
use std::path::PathBuf;

fn runner_config(snapshot_path: PathBuf) -> RunnerConfig {
    RunnerConfig {
        snapshot_path,
        title: "PSM Server Report Summary".into(),
        subject: "Daily PSM Server Executive Report".into(),
        attachment_name: "lxc_status_report.txt".into(),
        certificates: vec![
            CertificateTarget {
                domain: "ok.example.com".into(),
                path: "/certs/ok.pem".into(),
            },
            CertificateTarget {
                domain: "broken.example.com".into(),
                path: "/certs/broken.pem".into(),
            },
        ],
    }
}

fn write_snapshot(dir: &tempfile::TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("lxc_status_report.txt");
    std::fs::write(&path, content).unwrap();
    path
}

fn inspector() -> FakeInspector {
    FakeInspector::default().with("/certs/ok.pem", fixed_now() + Duration::days(90))
}

#[tokio::test]
async fn run_sends_llm_summary_with_raw_attachment() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_snapshot(&dir, SAMPLE_SNAPSHOT);
    let summarizer = FakeSummarizer::replying("<h1>PSM Server Report Summary</h1>");
    let delivery = RecordingDelivery::default();

    let runner = ReportRunner::new(
        RunnerDeps {
            summarizer: summarizer.clone(),
            delivery: delivery.clone(),
            inspector: inspector(),
        },
        runner_config(path),
    );
    let outcome = runner.run(fixed_now()).await.expect("run");

    assert!(!outcome.used_fallback);
    assert_eq!(outcome.overall, SeverityTier::Warning);
    assert_eq!(outcome.summary.certificates_ok, 1);
    assert_eq!(outcome.summary.certificate_errors, 1);
    assert_eq!(outcome.subject, "[WARNING] Daily PSM Server Executive Report");

    let sent = delivery.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].html, "<h1>PSM Server Report Summary</h1>");
    assert_eq!(sent[0].attachment, SAMPLE_SNAPSHOT.as_bytes());
    assert_eq!(sent[0].attachment_name, "lxc_status_report.txt");

    let prompts = summarizer.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("broken.example.com: ERROR"));
}

#[tokio::test]
async fn run_falls_back_to_local_html_when_llm_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_snapshot(&dir, SAMPLE_SNAPSHOT);
    let delivery = RecordingDelivery::default();

    let runner = ReportRunner::new(
        RunnerDeps {
            summarizer: FakeSummarizer::failing(),
            delivery: delivery.clone(),
            inspector: inspector(),
        },
        runner_config(path),
    );
    let outcome = runner.run(fixed_now()).await.expect("run");

    assert!(outcome.used_fallback);
    let sent = delivery.sent.lock().unwrap();
    assert!(sent[0].html.contains("<h1>PSM Server Report Summary</h1>"));
    assert!(sent[0].html.contains("broken.example.com"));
}

#[tokio::test]
async fn run_skips_llm_when_not_configured() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_snapshot(&dir, SAMPLE_SNAPSHOT);
    let summarizer = FakeSummarizer {
        unconfigured: true,
        ..FakeSummarizer::replying("<p>unused</p>")
    };
    let delivery = RecordingDelivery::default();

    let runner = ReportRunner::new(
        RunnerDeps {
            summarizer: summarizer.clone(),
            delivery: delivery.clone(),
            inspector: inspector(),
        },
        runner_config(path),
    );
    let outcome = runner.run(fixed_now()).await.expect("run");

    assert!(outcome.used_fallback);
    assert!(summarizer.prompts.lock().unwrap().is_empty());
    let sent = delivery.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].html.contains("<h1>PSM Server Report Summary</h1>"));
}

#[tokio::test]
async fn run_skips_email_when_snapshot_missing() {
    let dir = tempfile::TempDir::new().unwrap();
    let delivery = RecordingDelivery::default();
    let summarizer = FakeSummarizer::replying("<p>unused</p>");

    let runner = ReportRunner::new(
        RunnerDeps {
            summarizer: summarizer.clone(),
            delivery: delivery.clone(),
            inspector: inspector(),
        },
        runner_config(dir.path().join("missing.txt")),
    );
    let err = runner.run(fixed_now()).await.unwrap_err();

    assert!(matches!(err, RunError::SnapshotMissing(_)));
    assert!(err.to_string().contains("missing.txt"));
    assert!(err.to_string().contains("email skipped"));
    assert!(delivery.sent.lock().unwrap().is_empty());
    assert!(summarizer.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn run_reports_delivery_failure() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_snapshot(&dir, "Temp CPU: 40°C\n");
    let delivery = RecordingDelivery {
        fail: true,
        ..Default::default()
    };

    let runner = ReportRunner::new(
        RunnerDeps {
            summarizer: FakeSummarizer::replying("<p>ok</p>"),
            delivery,
            inspector: FakeInspector::default(),
        },
        RunnerConfig {
            certificates: vec![],
            ..runner_config(path)
        },
    );
    let err = runner.run(fixed_now()).await.unwrap_err();
    assert!(matches!(err, RunError::Delivery(_)));
    assert!(err.to_string().starts_with("failed to send email"));
}

#[test]
fn subject_is_prefixed_only_when_flagged() {
    assert_eq!(subject_for("Daily", SeverityTier::Ok), "Daily");
    assert_eq!(subject_for("Daily", SeverityTier::Warning), "[WARNING] Daily");
    assert_eq!(subject_for("Daily", SeverityTier::Critical), "[CRITICAL] Daily");
}
