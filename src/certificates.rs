// Certificate expiry checks via an external inspection tool (openssl x509).
// One unreadable certificate becomes an error row; the others are still checked.

use crate::classify::classify_certificate_expiry;
use crate::models::{CertificateError, CertificateOutcome, CertificateRecord, CertificateTarget};
use chrono::{DateTime, NaiveDateTime, Utc};
use std::future::Future;
use std::path::Path;
use tokio::process::Command;
use tracing::{instrument, warn};

const SECS_PER_DAY: i64 = 86_400;

#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    /// The inspection tool could not be started.
    #[error("failed to run certificate tool: {0}")]
    Io(#[from] std::io::Error),

    /// The tool ran but reported failure (unreadable file, not a certificate, ...).
    #[error("certificate tool exited with {status}: {stderr}")]
    Tool { status: String, stderr: String },

    #[error("unparseable expiration date: {0}")]
    Parse(String),
}

/// Retrieves a certificate's expiration timestamp from a file path.
pub trait CertificateInspector {
    fn expiration(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<DateTime<Utc>, InspectError>> + Send;
}

/// Runs `openssl x509 -enddate -noout -in <path>`.
#[derive(Debug, Clone)]
pub struct OpensslInspector {
    bin: String,
}

impl Default for OpensslInspector {
    fn default() -> Self {
        Self::new("openssl")
    }
}

impl OpensslInspector {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }
}

impl CertificateInspector for OpensslInspector {
    #[instrument(skip(self), fields(operation = "openssl_enddate"))]
    async fn expiration(&self, path: &Path) -> Result<DateTime<Utc>, InspectError> {
        let output = Command::new(&self.bin)
            .args(["x509", "-enddate", "-noout", "-in"])
            .arg(path)
            .output()
            .await?;
        if !output.status.success() {
            return Err(InspectError::Tool {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        parse_openssl_enddate(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Parse `notAfter=Jun  1 12:00:00 2025 GMT` (the `notAfter=` prefix is optional).
pub fn parse_openssl_enddate(s: &str) -> Result<DateTime<Utc>, InspectError> {
    let value = s.trim();
    let value = value.strip_prefix("notAfter=").unwrap_or(value);
    let normalized = value.split_whitespace().collect::<Vec<_>>().join(" ");
    let without_zone = normalized
        .strip_suffix(" GMT")
        .or_else(|| normalized.strip_suffix(" UTC"))
        .unwrap_or(&normalized);
    NaiveDateTime::parse_from_str(without_zone, "%b %d %H:%M:%S %Y")
        .map(|naive| naive.and_utc())
        .map_err(|e| InspectError::Parse(format!("{value:?}: {e}")))
}

/// Whole days from `now` until `expiration`, rounded toward negative infinity.
pub fn days_until(expiration: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (expiration - now).num_seconds().div_euclid(SECS_PER_DAY)
}

/// Check every target in order. Failures are converted to per-domain error rows.
pub async fn check_certificates<I: CertificateInspector>(
    inspector: &I,
    targets: &[CertificateTarget],
    now: DateTime<Utc>,
) -> Vec<CertificateOutcome> {
    let mut out = Vec::with_capacity(targets.len());
    for target in targets {
        let outcome = match inspector.expiration(Path::new(&target.path)).await {
            Ok(expiration) => {
                let days_left = days_until(expiration, now);
                Ok(CertificateRecord {
                    domain: target.domain.clone(),
                    expires_on: expiration.date_naive(),
                    days_left,
                    urgency: classify_certificate_expiry(days_left),
                })
            }
            Err(e) => {
                warn!(
                    error = %e,
                    domain = %target.domain,
                    operation = "check_certificate",
                    "certificate check failed"
                );
                Err(CertificateError {
                    domain: target.domain.clone(),
                    message: e.to_string(),
                })
            }
        };
        out.push(outcome);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn days_until_floors_partial_days() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let exp = Utc.with_ymd_and_hms(2025, 1, 3, 11, 59, 59).unwrap();
        assert_eq!(days_until(exp, now), 1);
    }

    #[test]
    fn days_until_negative_when_expired() {
        let now = Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap();
        let exp = Utc.with_ymd_and_hms(2025, 1, 9, 23, 0, 0).unwrap();
        assert_eq!(days_until(exp, now), -1);
    }
}
