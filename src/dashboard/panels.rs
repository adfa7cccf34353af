use crate::dashboard::chart::{ChartCanvas, ChartConfig};
use crate::report::Report;

/// Each renderer overwrites one output slot from the report. They are
/// independent: none reads another's slot, so invocation order is free.

pub fn render_summary(report: &Report, target_label: &mut String, summary: &mut String) {
    target_label.clear();
    target_label.push_str(&sanitize(report.target().unwrap_or("unknown")));

    summary.clear();
    summary.push_str(&format!("Open ports: {}\n", report.open_ports().len()));
    summary.push_str(&format!(
        "Timestamp: {}\n",
        sanitize(report.timestamp().unwrap_or("unknown"))
    ));
    summary.push_str("Saved paths: report.json / report_visual.json\n");
}

pub fn render_banners(report: &Report, slot: &mut String) {
    slot.clear();
    let banners = report.banners();
    if banners.is_empty() {
        slot.push_str("No banners collected.");
        return;
    }
    for (port, banner) in banners {
        let text = if banner.is_empty() {
            "(no banner)".to_string()
        } else {
            sanitize(&banner)
        };
        slot.push_str(&format!("Port {}: {text}\n\n", sanitize(&port)));
    }
}

/// Debugging view of the whole payload: 2-space indented JSON, verbatim.
pub fn render_raw(report: &Report, slot: &mut String) {
    slot.clear();
    let json =
        serde_json::to_string_pretty(report.raw()).unwrap_or_else(|_| "{}".to_string());
    slot.push_str(&json);
}

pub fn render_cve_hints(report: &Report, slot: &mut String) {
    slot.clear();
    let hints = report.explanations();
    if hints.is_empty() {
        slot.push_str("No CVE hints.");
        return;
    }
    for (port, text) in hints {
        slot.push_str(&format!("Port {}:\n", sanitize(&port)));
        for line in text.lines() {
            slot.push_str(&format!("  {}\n", sanitize(line)));
        }
        slot.push('\n');
    }
}

/// Presence histogram: one bar of height 1 per open port.
pub fn render_ports_chart(report: &Report, canvas: &mut ChartCanvas) {
    let labels: Vec<String> = report.open_ports().iter().map(|p| sanitize(p)).collect();
    let values = vec![1u64; labels.len()];
    canvas.draw(ChartConfig {
        labels,
        values,
        series_label: "Open ports".to_string(),
    });
}

/// Report content comes from scanned hosts and is untrusted. Stripping control
/// characters keeps banner text from smuggling terminal escape sequences into
/// the output; newlines survive because the renderers lay lines out themselves.
pub(crate) fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n')
        .collect()
}
