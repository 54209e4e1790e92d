// Temperature and certificate-expiry classification

use infra_report::classify::{ThresholdTable, classify_certificate_expiry, classify_temperature};
use infra_report::models::{Component, SeverityTier, UrgencyTier};

#[test]
fn cpu_reference_values() {
    assert_eq!(classify_temperature(Component::Cpu, 40.0), SeverityTier::Ok);
    assert_eq!(classify_temperature(Component::Cpu, 90.0), SeverityTier::Warning);
    assert_eq!(classify_temperature(Component::Cpu, 96.0), SeverityTier::Critical);
}

#[test]
fn gpu_reference_values() {
    assert_eq!(classify_temperature(Component::Gpu, 45.0), SeverityTier::Ok);
    assert_eq!(classify_temperature(Component::Gpu, 85.0), SeverityTier::Warning);
    assert_eq!(classify_temperature(Component::Gpu, 91.0), SeverityTier::Critical);
}

#[test]
fn gpu_band_edges() {
    assert_eq!(classify_temperature(Component::Gpu, 79.99), SeverityTier::Ok);
    assert_eq!(classify_temperature(Component::Gpu, 80.0), SeverityTier::Warning);
    assert_eq!(classify_temperature(Component::Gpu, 90.0), SeverityTier::Warning);
    assert_eq!(classify_temperature(Component::Gpu, 90.01), SeverityTier::Critical);
}

#[test]
fn hdd_reference_values() {
    assert_eq!(classify_temperature(Component::Hdd, 35.0), SeverityTier::Ok);
    assert_eq!(classify_temperature(Component::Hdd, 75.0), SeverityTier::Warning);
    assert_eq!(classify_temperature(Component::Hdd, 86.0), SeverityTier::Critical);
}

#[test]
fn transitional_bands_default_to_ok() {
    for c in 56..=69 {
        assert_eq!(
            classify_temperature(Component::Cpu, c as f64),
            SeverityTier::Ok,
            "CPU {c}"
        );
    }
    for c in 51..=59 {
        assert_eq!(
            classify_temperature(Component::Gpu, c as f64),
            SeverityTier::Ok,
            "GPU {c}"
        );
    }
}

#[test]
fn below_range_and_negative_values_are_ok() {
    for component in Component::ALL {
        assert_eq!(classify_temperature(component, -40.0), SeverityTier::Ok);
        assert_eq!(classify_temperature(component, 0.0), SeverityTier::Ok);
    }
}

#[test]
fn each_component_uses_its_own_table() {
    // 82 °C: OK for CPU, Warning for GPU and HDD.
    assert_eq!(classify_temperature(Component::Cpu, 82.0), SeverityTier::Ok);
    assert_eq!(classify_temperature(Component::Gpu, 82.0), SeverityTier::Warning);
    assert_eq!(classify_temperature(Component::Hdd, 82.0), SeverityTier::Warning);
}

#[test]
fn sweep_is_total_and_deterministic() {
    for component in Component::ALL {
        let mut tenths = -500;
        while tenths <= 2000 {
            let celsius = tenths as f64 / 10.0;
            let first = classify_temperature(component, celsius);
            let second = classify_temperature(component, celsius);
            assert_eq!(first, second, "{component} {celsius}");
            assert!(matches!(
                first,
                SeverityTier::Ok | SeverityTier::Warning | SeverityTier::Critical
            ));
            tenths += 1;
        }
    }
}

#[test]
fn sweep_never_goes_down_above_warning_start() {
    for component in Component::ALL {
        let table = ThresholdTable::for_component(component);
        let mut prev = SeverityTier::Ok;
        let mut c = table.warning_from;
        while c <= 200.0 {
            let tier = classify_temperature(component, c);
            assert!(tier >= prev, "{component} {c}");
            prev = tier;
            c += 0.5;
        }
        assert_eq!(prev, SeverityTier::Critical);
    }
}

#[test]
fn certificate_reference_values() {
    assert_eq!(classify_certificate_expiry(45), UrgencyTier::Ok);
    assert_eq!(classify_certificate_expiry(20), UrgencyTier::RenewSoon);
    assert_eq!(classify_certificate_expiry(5), UrgencyTier::Expiring);
    assert_eq!(classify_certificate_expiry(-3), UrgencyTier::Expiring);
}

#[test]
fn certificate_boundaries() {
    assert_eq!(classify_certificate_expiry(31), UrgencyTier::Ok);
    assert_eq!(classify_certificate_expiry(30), UrgencyTier::RenewSoon);
    assert_eq!(classify_certificate_expiry(16), UrgencyTier::RenewSoon);
    assert_eq!(classify_certificate_expiry(15), UrgencyTier::Expiring);
    assert_eq!(classify_certificate_expiry(0), UrgencyTier::Expiring);
    assert_eq!(classify_certificate_expiry(i64::MIN), UrgencyTier::Expiring);
    assert_eq!(classify_certificate_expiry(i64::MAX), UrgencyTier::Ok);
}
