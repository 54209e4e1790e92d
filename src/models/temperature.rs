// Temperature readings and severity tiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hardware component a temperature reading belongs to; serializes to lowercase JSON (e.g. "cpu").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Cpu,
    Gpu,
    Hdd,
}

impl Component {
    pub const ALL: [Component; 3] = [Component::Cpu, Component::Gpu, Component::Hdd];

    /// Parse a snapshot label ("CPU", "gpu", "HDD", "disk"). Unknown labels yield None.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cpu" => Some(Component::Cpu),
            "gpu" => Some(Component::Gpu),
            "hdd" | "disk" => Some(Component::Hdd),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Component::Cpu => "CPU",
            Component::Gpu => "GPU",
            Component::Hdd => "HDD",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureReading {
    pub component: Component,
    pub celsius: f64,
}

/// Severity of a reading. Ordered: Ok < Warning < Critical.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    #[default]
    Ok,
    Warning,
    Critical,
}

impl SeverityTier {
    pub fn label(self) -> &'static str {
        match self {
            SeverityTier::Ok => "OK",
            SeverityTier::Warning => "WARNING",
            SeverityTier::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A reading together with the tier it was classified into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedReading {
    pub reading: TemperatureReading,
    /// LXC id of the section the reading was found in, if any.
    pub lxc: Option<u32>,
    pub tier: SeverityTier,
}
