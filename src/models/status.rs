// Host / LXC / service / Docker models parsed from the status snapshot

use serde::{Deserialize, Serialize};

use super::TemperatureReading;

/// LXC container state; serializes to lowercase JSON (e.g. "running").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LxcState {
    Running,
    Stopped,
    #[serde(other)]
    Unknown,
}

impl LxcState {
    /// Parse from `pct status` style output ("running", "stopped").
    pub fn from_status(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "running" => LxcState::Running,
            "stopped" => LxcState::Stopped,
            _ => LxcState::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LxcStatus {
    pub id: u32,
    pub name: String,
    pub state: LxcState,
}

/// systemd-style service state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceState {
    Running,
    Stopped,
    Failed,
    Missing,
    #[serde(other)]
    Unknown,
}

impl ServiceState {
    /// Parse from `systemctl is-active` style output ("active", "inactive", "failed").
    pub fn from_status(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "active" | "running" => ServiceState::Running,
            "inactive" | "stopped" | "dead" => ServiceState::Stopped,
            "failed" => ServiceState::Failed,
            "not-found" | "missing" => ServiceState::Missing,
            _ => ServiceState::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatus {
    pub lxc: Option<u32>,
    pub name: String,
    pub state: ServiceState,
}

/// Docker container state; serializes to lowercase JSON (e.g. "running").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerState {
    Running,
    Exited,
    Paused,
    Restarting,
    #[serde(other)]
    Unknown,
}

impl ContainerState {
    /// Parse from a `docker ps` STATUS column (e.g. "Up 3 hours", "Exited (0) 2 days ago").
    pub fn from_docker_status(s: &str) -> Self {
        let s = s.trim().to_lowercase();
        if s.contains("(paused)") || s.starts_with("paused") {
            ContainerState::Paused
        } else if s.starts_with("up") {
            ContainerState::Running
        } else if s.starts_with("exited") {
            ContainerState::Exited
        } else if s.starts_with("restarting") {
            ContainerState::Restarting
        } else {
            ContainerState::Unknown
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockerContainer {
    pub lxc: Option<u32>,
    pub name: String,
    pub state: ContainerState,
    /// Raw status text as reported by Docker.
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskUsage {
    pub lxc: Option<u32>,
    pub mount: String,
    pub used: String,
    pub total: String,
    pub usage_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RamUsage {
    pub lxc: Option<u32>,
    pub used_mb: u64,
    pub total_mb: u64,
    pub usage_percent: f64,
}

/// A temperature reading tagged with the LXC section it appeared in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionReading {
    pub lxc: Option<u32>,
    pub reading: TemperatureReading,
}

/// Everything recognised in one status snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    pub lxcs: Vec<LxcStatus>,
    pub disks: Vec<DiskUsage>,
    pub ram: Vec<RamUsage>,
    pub services: Vec<ServiceStatus>,
    pub containers: Vec<DockerContainer>,
    pub temperatures: Vec<SectionReading>,
    /// Non-blank lines that matched no rule.
    pub unrecognized_lines: usize,
}
