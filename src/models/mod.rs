// Domain models: snapshot contents, readings, certificate records

mod certificate;
mod status;
mod temperature;

pub use certificate::{
    CertificateError, CertificateOutcome, CertificateRecord, CertificateTarget, UrgencyTier,
};
pub use status::{
    ContainerState, DiskUsage, DockerContainer, LxcState, LxcStatus, RamUsage, SectionReading,
    ServiceState, ServiceStatus, StatusSnapshot,
};
pub use temperature::{ClassifiedReading, Component, SeverityTier, TemperatureReading};
