// Per-component temperature thresholds.
//
// Values outside every listed band (e.g. CPU 56-69 °C, or below the lowest OK
// range) are not flagged, so they classify as Ok. NaN never matches a band.

use crate::models::{Component, SeverityTier};

/// Threshold table for one component. OK ranges are documentary; only the
/// Warning and Critical rules decide the tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdTable {
    pub component: Component,
    /// Nominal OK ranges as (from, to) in °C.
    pub ok_ranges: [(f64, f64); 2],
    /// Warning starts here.
    pub warning_from: f64,
    /// Whether `warning_from` itself is Warning (CPU/GPU) or only values above it (HDD).
    pub warning_inclusive_lower: bool,
    /// Anything strictly above this is Critical; values up to and including it can be Warning.
    pub critical_above: f64,
}

pub const CPU_THRESHOLDS: ThresholdTable = ThresholdTable {
    component: Component::Cpu,
    ok_ranges: [(35.0, 55.0), (70.0, 85.0)],
    warning_from: 85.0,
    warning_inclusive_lower: true,
    critical_above: 95.0,
};

pub const GPU_THRESHOLDS: ThresholdTable = ThresholdTable {
    component: Component::Gpu,
    ok_ranges: [(30.0, 50.0), (60.0, 80.0)],
    warning_from: 80.0,
    warning_inclusive_lower: true,
    critical_above: 90.0,
};

pub const HDD_THRESHOLDS: ThresholdTable = ThresholdTable {
    component: Component::Hdd,
    ok_ranges: [(30.0, 45.0), (45.0, 70.0)],
    warning_from: 70.0,
    warning_inclusive_lower: false,
    critical_above: 85.0,
};

impl ThresholdTable {
    pub fn for_component(component: Component) -> &'static ThresholdTable {
        match component {
            Component::Cpu => &CPU_THRESHOLDS,
            Component::Gpu => &GPU_THRESHOLDS,
            Component::Hdd => &HDD_THRESHOLDS,
        }
    }

    pub fn classify(&self, celsius: f64) -> SeverityTier {
        if celsius > self.critical_above {
            return SeverityTier::Critical;
        }
        let in_warning = if self.warning_inclusive_lower {
            celsius >= self.warning_from
        } else {
            celsius > self.warning_from
        };
        if in_warning && celsius <= self.critical_above {
            SeverityTier::Warning
        } else {
            SeverityTier::Ok
        }
    }

    /// Human-readable band summary, e.g. "OK 35-55, 70-85 · Warning 85-95 · Critical >95".
    pub fn describe(&self) -> String {
        let [(a, b), (c, d)] = self.ok_ranges;
        let warn_op = if self.warning_inclusive_lower { "" } else { ">" };
        format!(
            "OK {a}-{b}, {c}-{d} · Warning {warn_op}{}-{} · Critical >{}",
            self.warning_from, self.critical_above, self.critical_above
        )
    }
}

/// Classify a reading against its component's own table. Total: never fails.
pub fn classify_temperature(component: Component, celsius: f64) -> SeverityTier {
    ThresholdTable::for_component(component).classify(celsius)
}
