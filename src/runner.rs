// One report run: read snapshot, parse, classify, check certificates,
// summarise via the LLM (local HTML on failure), deliver.

use crate::certificates::{CertificateInspector, check_certificates};
use crate::config::AppConfig;
use crate::llm::Summarizer;
use crate::mailer::{Delivery, MailError, OutgoingReport};
use crate::models::{CertificateTarget, SeverityTier};
use crate::parser::parse_snapshot;
use crate::report::{Report, ReportSummary, build_prompt, render_html};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing::{info, instrument, warn};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("report file not found: {}; email skipped", .0.display())]
    SnapshotMissing(PathBuf),

    #[error("reading report file {}: {source}", .path.display())]
    ReadSnapshot {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to send email: {0}")]
    Delivery(#[from] MailError),
}

/// Collaborators for a run.
pub struct RunnerDeps<S, D, C> {
    pub summarizer: S,
    pub delivery: D,
    pub inspector: C,
}

/// Per-run settings taken from the app config.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub snapshot_path: PathBuf,
    pub title: String,
    pub subject: String,
    pub attachment_name: String,
    pub certificates: Vec<CertificateTarget>,
}

impl RunnerConfig {
    pub fn from_app(config: &AppConfig) -> Self {
        Self {
            snapshot_path: PathBuf::from(&config.report.snapshot_path),
            title: config.report.title.clone(),
            subject: config.email.subject.clone(),
            attachment_name: config.report.attachment_name.clone(),
            certificates: config.certificates.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub overall: SeverityTier,
    pub summary: ReportSummary,
    pub subject: String,
    /// True when the LLM was skipped or failed and the locally rendered HTML was sent.
    pub used_fallback: bool,
}

/// Subject line, prefixed with the overall tier when anything is flagged.
pub fn subject_for(base: &str, overall: SeverityTier) -> String {
    match overall {
        SeverityTier::Ok => base.to_string(),
        tier => format!("[{tier}] {base}"),
    }
}

pub struct ReportRunner<S, D, C> {
    deps: RunnerDeps<S, D, C>,
    config: RunnerConfig,
}

impl<S, D, C> ReportRunner<S, D, C>
where
    S: Summarizer,
    D: Delivery,
    C: CertificateInspector,
{
    pub fn new(deps: RunnerDeps<S, D, C>, config: RunnerConfig) -> Self {
        Self { deps, config }
    }

    #[instrument(skip(self), fields(snapshot = %self.config.snapshot_path.display()))]
    pub async fn run(&self, now: DateTime<Utc>) -> Result<RunOutcome, RunError> {
        let path = &self.config.snapshot_path;
        let raw = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RunError::SnapshotMissing(path.clone()));
            }
            Err(source) => {
                return Err(RunError::ReadSnapshot {
                    path: path.clone(),
                    source,
                });
            }
        };
        let raw_text = String::from_utf8_lossy(&raw).into_owned();

        let snapshot = parse_snapshot(&raw_text);
        let certificates =
            check_certificates(&self.deps.inspector, &self.config.certificates, now).await;
        let report = Report::assemble(snapshot, certificates, now);
        let overall = report.overall();
        info!(
            overall = %overall,
            temperatures = report.temperatures.len(),
            certificates = report.certificates.len(),
            certificate_errors = report.summary.certificate_errors,
            "Report assembled"
        );

        let (html, used_fallback) = if !self.deps.summarizer.is_configured() {
            warn!(
                operation = "summarize",
                "LLM not configured; sending locally rendered report"
            );
            (render_html(&report, &self.config.title), true)
        } else {
            let prompt = build_prompt(&raw_text, &report, &self.config.title);
            match self.deps.summarizer.summarize(&prompt).await {
                Ok(html) => {
                    info!("Summary generated.");
                    (html, false)
                }
                Err(e) => {
                    warn!(
                        error = %e,
                        operation = "summarize",
                        "LLM summary failed; sending locally rendered report"
                    );
                    (render_html(&report, &self.config.title), true)
                }
            }
        };

        let subject = subject_for(&self.config.subject, overall);
        let outgoing = OutgoingReport {
            subject: subject.clone(),
            html,
            attachment_name: self.config.attachment_name.clone(),
            attachment: raw,
        };
        self.deps.delivery.deliver(&outgoing).await?;

        Ok(RunOutcome {
            overall,
            summary: report.summary,
            subject,
            used_fallback,
        })
    }
}
