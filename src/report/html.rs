// Locally rendered HTML report, used when the LLM summary is unavailable.

use std::fmt::Write;

use super::Report;
use crate::classify::ThresholdTable;
use crate::models::{ContainerState, LxcState, ServiceState, SeverityTier, UrgencyTier};

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn severity_color(tier: SeverityTier) -> &'static str {
    match tier {
        SeverityTier::Ok => "#2e7d32",
        SeverityTier::Warning => "#ef6c00",
        SeverityTier::Critical => "#c62828",
    }
}

fn urgency_color(tier: UrgencyTier) -> &'static str {
    match tier {
        UrgencyTier::Ok => "#2e7d32",
        UrgencyTier::RenewSoon => "#ef6c00",
        UrgencyTier::Expiring => "#c62828",
    }
}

fn section_label(lxc: Option<u32>) -> String {
    lxc.map(|id| format!("LXC {id}")).unwrap_or_else(|| "host".into())
}

/// Render a self-contained HTML document for `report`.
pub fn render_html(report: &Report, title: &str) -> String {
    // write! into a String cannot fail
    let overall = report.overall();
    let s = &report.summary;
    let mut h = String::new();

    let _ = write!(
        h,
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{t}</title></head>\n<body style=\"font-family:sans-serif\">\n<h1>{t}</h1>\n",
        t = escape_html(title)
    );
    let _ = writeln!(
        h,
        "<p>Generated {} UTC. Overall status: <b style=\"color:{}\">{}</b></p>",
        report.generated_at.format("%Y-%m-%d %H:%M"),
        severity_color(overall),
        overall
    );

    let _ = writeln!(
        h,
        "<h2>Summary</h2>\n<ul>\n<li>Temperatures: {} ok, {} warning, {} critical</li>\n<li>Certificates: {} ok, {} renew soon, {} expiring, {} unreadable</li>\n<li>Stopped containers (LXC): {}</li>\n<li>Services not running: {}</li>\n<li>Docker containers down: {}</li>\n</ul>",
        s.temperatures_ok,
        s.temperatures_warning,
        s.temperatures_critical,
        s.certificates_ok,
        s.certificates_renew_soon,
        s.certificates_expiring,
        s.certificate_errors,
        s.lxcs_stopped,
        s.services_down,
        s.containers_down,
    );

    if !report.snapshot.lxcs.is_empty() {
        h.push_str("<h2>Containers (LXC)</h2>\n<table border=\"1\" cellpadding=\"4\">\n<tr><th>ID</th><th>Name</th><th>State</th></tr>\n");
        for l in &report.snapshot.lxcs {
            let color = if l.state == LxcState::Running {
                severity_color(SeverityTier::Ok)
            } else {
                severity_color(SeverityTier::Critical)
            };
            let _ = writeln!(
                h,
                "<tr><td>{}</td><td>{}</td><td style=\"color:{color}\">{:?}</td></tr>",
                l.id,
                escape_html(&l.name),
                l.state
            );
        }
        h.push_str("</table>\n");
    }

    if !report.temperatures.is_empty() {
        h.push_str("<h2>Temperatures</h2>\n<table border=\"1\" cellpadding=\"4\">\n<tr><th>Where</th><th>Component</th><th>°C</th><th>Status</th><th>Bands</th></tr>\n");
        for t in &report.temperatures {
            let _ = writeln!(
                h,
                "<tr><td>{}</td><td>{}</td><td>{:.1}</td><td style=\"color:{}\">{}</td><td>{}</td></tr>",
                section_label(t.lxc),
                t.reading.component,
                t.reading.celsius,
                severity_color(t.tier),
                t.tier,
                escape_html(&ThresholdTable::for_component(t.reading.component).describe())
            );
        }
        h.push_str("</table>\n");
    }

    if !report.certificates.is_empty() {
        h.push_str("<h2>TLS certificates</h2>\n<table border=\"1\" cellpadding=\"4\">\n<tr><th>Domain</th><th>Expires</th><th>Days left</th><th>Status</th></tr>\n");
        for c in &report.certificates {
            match c {
                Ok(r) => {
                    let _ = writeln!(
                        h,
                        "<tr><td>{}</td><td>{}</td><td>{}</td><td style=\"color:{}\">{}</td></tr>",
                        escape_html(&r.domain),
                        r.expires_on,
                        r.days_left,
                        urgency_color(r.urgency),
                        r.urgency
                    );
                }
                Err(e) => {
                    let _ = writeln!(
                        h,
                        "<tr><td>{}</td><td colspan=\"3\" style=\"color:{}\">Error: {}</td></tr>",
                        escape_html(&e.domain),
                        severity_color(SeverityTier::Warning),
                        escape_html(&e.message)
                    );
                }
            }
        }
        h.push_str("</table>\n");
    }

    let down_services: Vec<_> = report
        .snapshot
        .services
        .iter()
        .filter(|s| s.state != ServiceState::Running)
        .collect();
    if !down_services.is_empty() {
        h.push_str("<h2>Services not running</h2>\n<ul>\n");
        for svc in down_services {
            let _ = writeln!(
                h,
                "<li>{}: {} ({:?})</li>",
                section_label(svc.lxc),
                escape_html(&svc.name),
                svc.state
            );
        }
        h.push_str("</ul>\n");
    }

    let down_containers: Vec<_> = report
        .snapshot
        .containers
        .iter()
        .filter(|c| c.state != ContainerState::Running)
        .collect();
    if !down_containers.is_empty() {
        h.push_str("<h2>Docker containers down</h2>\n<ul>\n");
        for c in down_containers {
            let _ = writeln!(
                h,
                "<li>{}: {} ({})</li>",
                section_label(c.lxc),
                escape_html(&c.name),
                escape_html(&c.status)
            );
        }
        h.push_str("</ul>\n");
    }

    if !report.snapshot.disks.is_empty() || !report.snapshot.ram.is_empty() {
        h.push_str("<h2>Resources</h2>\n<ul>\n");
        for d in &report.snapshot.disks {
            let _ = writeln!(
                h,
                "<li>{} disk {}: {}/{} ({:.0}%)</li>",
                section_label(d.lxc),
                escape_html(&d.mount),
                escape_html(&d.used),
                escape_html(&d.total),
                d.usage_percent
            );
        }
        for r in &report.snapshot.ram {
            let _ = writeln!(
                h,
                "<li>{} RAM: {} MB / {} MB ({:.0}%)</li>",
                section_label(r.lxc),
                r.used_mb,
                r.total_mb,
                r.usage_percent
            );
        }
        h.push_str("</ul>\n");
    }

    h.push_str("</body></html>\n");
    h
}
