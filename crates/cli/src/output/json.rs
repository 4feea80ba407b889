use super::DomainReport;

pub fn render_json(report: &DomainReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
