// Certificate expiry records and urgency tiers

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Renewal urgency. Ordered: Ok < RenewSoon < Expiring.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyTier {
    #[default]
    Ok,
    RenewSoon,
    Expiring,
}

impl UrgencyTier {
    pub fn label(self) -> &'static str {
        match self {
            UrgencyTier::Ok => "OK",
            UrgencyTier::RenewSoon => "RENEW SOON",
            UrgencyTier::Expiring => "EXPIRING",
        }
    }
}

impl fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One (domain, certificate path) pair to check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateTarget {
    pub domain: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRecord {
    pub domain: String,
    pub expires_on: NaiveDate,
    pub days_left: i64,
    pub urgency: UrgencyTier,
}

/// Per-domain failure to read or parse a certificate. Never aborts the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateError {
    pub domain: String,
    pub message: String,
}

pub type CertificateOutcome = Result<CertificateRecord, CertificateError>;
