// Shared test helpers: sample snapshot and in-memory collaborators

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use infra_report::certificates::{CertificateInspector, InspectError};
use infra_report::llm::{LlmError, Summarizer};
use infra_report::mailer::{Delivery, MailError, OutgoingReport};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

pub const SAMPLE_SNAPSHOT: &str = "\
Proxmox status collected 2025-06-01 06:00
Temp CPU: 48.0°C
Temp GPU: 86.5°C
Temp HDD: 41°C

=== LXC 101 (ollama): running ===
Disk /: 12G/50G (24%)
RAM: 1024MB/4096MB
Service ollama: active
Service nginx: failed
Docker open-webui: Up 3 hours
Docker watchtower: Exited (1) 2 days ago

=== LXC 102 (media): stopped ===
Service jellyfin: not-found
";

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 6, 0, 0).unwrap()
}

/// Summarizer that returns a fixed reply (or an empty-response error) and records prompts.
#[derive(Clone, Default)]
pub struct FakeSummarizer {
    pub reply: Option<String>,
    pub prompts: Arc<Mutex<Vec<String>>>,
    /// Reports itself as lacking credentials.
    pub unconfigured: bool,
}

impl FakeSummarizer {
    pub fn replying(html: &str) -> Self {
        Self {
            reply: Some(html.to_string()),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }
}

impl Summarizer for FakeSummarizer {
    async fn summarize(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().ok_or(LlmError::EmptyResponse)
    }

    fn is_configured(&self) -> bool {
        !self.unconfigured
    }
}

/// Delivery that records what it was given; optionally fails.
#[derive(Clone, Default)]
pub struct RecordingDelivery {
    pub sent: Arc<Mutex<Vec<OutgoingReport>>>,
    pub fail: bool,
}

impl Delivery for RecordingDelivery {
    async fn deliver(&self, report: &OutgoingReport) -> Result<(), MailError> {
        if self.fail {
            return Err(MailError::NoRecipients);
        }
        self.sent.lock().unwrap().push(report.clone());
        Ok(())
    }
}

/// Inspector backed by a path -> expiration map. Unknown paths fail.
#[derive(Clone, Default)]
pub struct FakeInspector {
    pub expirations: HashMap<String, DateTime<Utc>>,
}

impl FakeInspector {
    pub fn with(mut self, path: &str, expiration: DateTime<Utc>) -> Self {
        self.expirations.insert(path.to_string(), expiration);
        self
    }
}

impl CertificateInspector for FakeInspector {
    async fn expiration(&self, path: &Path) -> Result<DateTime<Utc>, InspectError> {
        let key = path.to_string_lossy().into_owned();
        self.expirations
            .get(&key)
            .copied()
            .ok_or_else(|| InspectError::Parse(format!("no certificate at {key}")))
    }
}
