// Line-oriented parser for the pre-collected status snapshot.
// Tolerant: unknown lines are counted and skipped, parsing never fails.

use crate::models::{
    Component, ContainerState, DiskUsage, DockerContainer, LxcState, LxcStatus, RamUsage,
    SectionReading, ServiceState, ServiceStatus, StatusSnapshot, TemperatureReading,
};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static LXC_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^=+\s*LXC\s+(\d+)\s*(?:\(([^)]*)\))?\s*[:\-]\s*([\w-]+)\s*=*$")
        .expect("static regex")
});
static DISK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Disk\s+(\S+?)\s*:\s*(\S+)\s*/\s*(\S+)\s*\((\d+(?:\.\d+)?)\s*%\)$")
        .expect("static regex")
});
static RAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^RAM\s*:\s*(\d+)\s*MB\s*/\s*(\d+)\s*MB$").expect("static regex")
});
static SERVICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Service\s+([\w@.\-]+)\s*:\s*(\S+)$").expect("static regex")
});
static DOCKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Docker\s+([\w.\-]+)\s*:\s*(.+)$").expect("static regex")
});
static TEMPERATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Temp(?:erature)?\s+(\w+)\s*:\s*(-?\d+(?:\.\d+)?)\s*(?:°\s*C|C)?$")
        .expect("static regex")
});

/// Parse a raw snapshot into typed records. Items are tagged with the LXC
/// section (most recent header) they appear under.
pub fn parse_snapshot(raw: &str) -> StatusSnapshot {
    let mut out = StatusSnapshot::default();
    let mut section: Option<u32> = None;
    let raw = raw.strip_prefix('\u{FEFF}').unwrap_or(raw);

    for (line_no, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(c) = LXC_HEADER.captures(line) {
            match c[1].parse::<u32>() {
                Ok(id) => {
                    section = Some(id);
                    out.lxcs.push(LxcStatus {
                        id,
                        name: c.get(2).map(|m| m.as_str().trim()).unwrap_or("").to_string(),
                        state: LxcState::from_status(&c[3]),
                    });
                }
                Err(_) => {
                    // Later items must not be tagged with the previous container.
                    section = None;
                    out.unrecognized_lines += 1;
                }
            }
        } else if let Some(c) = DISK.captures(line) {
            out.disks.push(DiskUsage {
                lxc: section,
                mount: c[1].to_string(),
                used: c[2].to_string(),
                total: c[3].to_string(),
                usage_percent: c[4].parse().unwrap_or(0.0),
            });
        } else if let Some(c) = RAM.captures(line) {
            let used_mb: u64 = c[1].parse().unwrap_or(0);
            let total_mb: u64 = c[2].parse().unwrap_or(0);
            let usage_percent = if total_mb > 0 {
                (used_mb as f64 / total_mb as f64) * 100.0
            } else {
                0.0
            };
            out.ram.push(RamUsage {
                lxc: section,
                used_mb,
                total_mb,
                usage_percent,
            });
        } else if let Some(c) = SERVICE.captures(line) {
            out.services.push(ServiceStatus {
                lxc: section,
                name: c[1].to_string(),
                state: ServiceState::from_status(&c[2]),
            });
        } else if let Some(c) = DOCKER.captures(line) {
            let status = c[2].trim().to_string();
            out.containers.push(DockerContainer {
                lxc: section,
                name: c[1].to_string(),
                state: ContainerState::from_docker_status(&status),
                status,
            });
        } else if let Some(c) = TEMPERATURE.captures(line) {
            let component = Component::from_label(&c[1]);
            let celsius = c[2].parse::<f64>().ok();
            match (component, celsius) {
                (Some(component), Some(celsius)) => out.temperatures.push(SectionReading {
                    lxc: section,
                    reading: TemperatureReading { component, celsius },
                }),
                _ => {
                    debug!(line = line_no + 1, label = &c[1], "unknown temperature label");
                    out.unrecognized_lines += 1;
                }
            }
        } else {
            out.unrecognized_lines += 1;
        }
    }

    debug!(
        operation = "parse_snapshot",
        lxcs = out.lxcs.len(),
        services = out.services.len(),
        containers = out.containers.len(),
        temperatures = out.temperatures.len(),
        unrecognized = out.unrecognized_lines,
        "Snapshot parsed"
    );
    out
}
