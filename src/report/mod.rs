// Report assembly: classify parsed readings, collect certificate outcomes, summarise.

mod html;
mod prompt;

pub use html::{escape_html, render_html};
pub use prompt::build_prompt;

use crate::classify::classify_temperature;
use crate::models::{
    CertificateOutcome, ClassifiedReading, ContainerState, LxcState, ServiceState, SeverityTier,
    StatusSnapshot, UrgencyTier,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub temperatures_ok: usize,
    pub temperatures_warning: usize,
    pub temperatures_critical: usize,
    pub certificates_ok: usize,
    pub certificates_renew_soon: usize,
    pub certificates_expiring: usize,
    /// Certificates that could not be read; not part of the urgency counts.
    pub certificate_errors: usize,
    pub lxcs_stopped: usize,
    pub services_down: usize,
    pub containers_down: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub snapshot: StatusSnapshot,
    pub temperatures: Vec<ClassifiedReading>,
    pub certificates: Vec<CertificateOutcome>,
    pub summary: ReportSummary,
}

impl Report {
    pub fn assemble(
        snapshot: StatusSnapshot,
        certificates: Vec<CertificateOutcome>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let temperatures: Vec<ClassifiedReading> = snapshot
            .temperatures
            .iter()
            .map(|r| ClassifiedReading {
                reading: r.reading,
                lxc: r.lxc,
                tier: classify_temperature(r.reading.component, r.reading.celsius),
            })
            .collect();

        let mut summary = ReportSummary::default();
        for t in &temperatures {
            match t.tier {
                SeverityTier::Ok => summary.temperatures_ok += 1,
                SeverityTier::Warning => summary.temperatures_warning += 1,
                SeverityTier::Critical => summary.temperatures_critical += 1,
            }
        }
        for c in &certificates {
            match c {
                Ok(record) => match record.urgency {
                    UrgencyTier::Ok => summary.certificates_ok += 1,
                    UrgencyTier::RenewSoon => summary.certificates_renew_soon += 1,
                    UrgencyTier::Expiring => summary.certificates_expiring += 1,
                },
                Err(_) => summary.certificate_errors += 1,
            }
        }
        summary.lxcs_stopped = snapshot
            .lxcs
            .iter()
            .filter(|l| l.state != LxcState::Running)
            .count();
        summary.services_down = snapshot
            .services
            .iter()
            .filter(|s| s.state != ServiceState::Running)
            .count();
        summary.containers_down = snapshot
            .containers
            .iter()
            .filter(|c| c.state != ContainerState::Running)
            .count();

        Self {
            generated_at,
            snapshot,
            temperatures,
            certificates,
            summary,
        }
    }

    /// Worst tier across temperatures and certificates.
    /// Expiring counts as Critical; RenewSoon and unreadable certificates as Warning.
    pub fn overall(&self) -> SeverityTier {
        let temps = self.temperatures.iter().map(|t| t.tier);
        let certs = self.certificates.iter().map(|c| match c {
            Ok(r) => match r.urgency {
                UrgencyTier::Ok => SeverityTier::Ok,
                UrgencyTier::RenewSoon => SeverityTier::Warning,
                UrgencyTier::Expiring => SeverityTier::Critical,
            },
            Err(_) => SeverityTier::Warning,
        });
        temps.chain(certs).max().unwrap_or_default()
    }
}
