use super::DomainReport;
use std::fmt::Write;
use zonewarden_domain::{NameserverStatus, ScanMethod, ScanReport};

pub fn render_text(report: &DomainReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Domain: {} (resolver {})", report.domain, report.resolver);
    let _ = writeln!(out);

    let _ = writeln!(out, "Nameservers:");
    for ns in &report.nameservers {
        let addrs: Vec<String> = ns.addresses.iter().map(|a| a.to_string()).collect();
        let _ = writeln!(out, "  {:<30} {}", ns.name, addrs.join(", "));
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Nameserver checks:");
    for status in &report.nameserver_status {
        let _ = writeln!(out, "  {}", status_line(status));
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "DNSSEC:");
    match &report.dnssec.error {
        None => {
            let _ = writeln!(out, "OK  : DNSKEY validated. Chain validated");
        }
        Some(error) => {
            let _ = writeln!(out, "FAIL: {}", error);
        }
    }

    if let Some(scan) = &report.scan {
        let _ = writeln!(out);
        write_scan(&mut out, scan, report.scan_estimate_ms);
    }

    out
}

fn status_line(status: &NameserverStatus) -> String {
    let head = format!("{:<30} {:<39}", status.name, status.address.to_string());

    if let Some(error) = &status.error {
        return format!("{} FAIL: {}", head, error);
    }

    let rtt = status
        .rtt
        .map(|rtt| format!("{}ms", rtt.as_millis()))
        .unwrap_or_else(|| "-".to_string());
    let serial = status
        .serial
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());
    let authority = if status.is_lame() { "LAME" } else { "AA" };
    let recursion = if status.recursion_available { " RA" } else { "" };

    let dnssec = match (status.dnssec.signed, status.dnssec.valid, &status.dnssec.window) {
        (false, _, _) => "unsigned".to_string(),
        (true, true, Some(window)) => format!("signed, valid {}", window),
        (true, true, None) => "signed, valid".to_string(),
        (true, false, Some(window)) => format!("signed, INVALID {}", window),
        (true, false, None) => "signed, INVALID".to_string(),
    };

    format!(
        "{} rtt {:<6} serial {:<12} {}{}  DNSSEC {}",
        head, rtt, serial, authority, recursion, dnssec
    )
}

fn write_scan(out: &mut String, scan: &ScanReport, estimate_ms: Option<u64>) {
    match &scan.method {
        ScanMethod::ZoneTransfer { server } => {
            let _ = writeln!(out, "Scan: zone transfer allowed by {}", server);
        }
        ScanMethod::BruteForce => {
            let _ = writeln!(
                out,
                "Scan: {} probes, {} answered, {} failed",
                scan.probes_sent, scan.probes_received, scan.probes_failed
            );
        }
    }

    if let Some(ms) = estimate_ms {
        let _ = writeln!(
            out,
            "      estimated {:.1}s, took {:.1}s",
            ms as f64 / 1000.0,
            scan.elapsed.as_secs_f64()
        );
    }

    if !scan.wildcard_records.is_empty() {
        let _ = writeln!(out, "Wildcard records (filtered from results):");
        for record in &scan.wildcard_records {
            let _ = writeln!(out, "  {}", record);
        }
    }

    let lines = scan.sorted_lines();
    if lines.is_empty() {
        let _ = writeln!(out, "No records found");
    }
    for line in lines {
        let _ = writeln!(out, "{}", line);
    }
}
