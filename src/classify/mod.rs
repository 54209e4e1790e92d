// Pure classifiers. No configuration, no I/O.

mod certificate;
mod temperature;

pub use certificate::{EXPIRING_DAYS, RENEW_SOON_DAYS, classify_certificate_expiry};
pub use temperature::{
    CPU_THRESHOLDS, GPU_THRESHOLDS, HDD_THRESHOLDS, ThresholdTable, classify_temperature,
};
