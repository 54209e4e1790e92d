// LLM prompt: the original summary questions plus pre-classified findings.

use std::fmt::Write;

use super::Report;

pub fn build_prompt(raw_status: &str, report: &Report, title: &str) -> String {
    let mut p = String::new();
    let _ = write!(
        p,
        "You are a Linux systems assistant. Analyze this Proxmox LXC container report and generate a summary in HTML format.\n\n\
         1. The title should be {title}\n\
         2. Which containers and their names are running or stopped?\n\
         3. Which services, like Ollama, and their names are running or stopped?\n\
         4. Are there any services and their names not running or missing in any LXC?\n\
         5. Are any Docker containers and their names down in any LXC?\n\
         6. Include the temperature and TLS certificate findings below verbatim, highlighting anything not OK.\n\n"
    );

    p.push_str("Findings (already classified, do not re-evaluate):\n");
    let _ = writeln!(p, "Overall: {}", report.overall());
    for t in &report.temperatures {
        let where_ = t
            .lxc
            .map(|id| format!("LXC {id}"))
            .unwrap_or_else(|| "host".into());
        let _ = writeln!(
            p,
            "- Temperature {} {}: {:.1} C -> {}",
            where_, t.reading.component, t.reading.celsius, t.tier
        );
    }
    for c in &report.certificates {
        match c {
            Ok(r) => {
                let _ = writeln!(
                    p,
                    "- Certificate {}: expires {} ({} days left) -> {}",
                    r.domain, r.expires_on, r.days_left, r.urgency
                );
            }
            Err(e) => {
                let _ = writeln!(p, "- Certificate {}: ERROR {}", e.domain, e.message);
            }
        }
    }

    let _ = write!(p, "\nReport:\n{raw_status}\n");
    p
}
