use chrono::Local;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::Table;
use owo_colors::OwoColorize;

use super::Dashboard;

/// Render a filled dashboard to the terminal with colors. Slots stay plain
/// text; this is the only place styling is applied.
pub fn render(dashboard: &Dashboard) {
    println!();
    println!(
        "{}  scandash v{} — rendered {}",
        "📊".bold(),
        env!("CARGO_PKG_VERSION"),
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!();

    // An empty target label means no report was rendered; the summary slot
    // carries the instructional message.
    if dashboard.target_label.is_empty() {
        println!("  {}", dashboard.summary.yellow());
        println!();
        return;
    }

    println!("{}", summary_table(dashboard));
    println!();

    panel("Banners", &dashboard.banners);
    panel("CVE Hints", &dashboard.cve_list);

    heading("Open Ports");
    let chart_lines = dashboard.ports_chart.lines();
    if chart_lines.is_empty() {
        println!("  (no open ports)");
    } else {
        for line in &chart_lines {
            println!("  {}", line.green());
        }
    }
    println!();

    panel("Raw Report", &dashboard.raw_json);

    println!("{}", "━".repeat(60));
    println!(" {}", dashboard.updated_at.dimmed());
    println!();
}

fn heading(title: &str) {
    println!(" {}", title.bold().underline());
}

fn panel(title: &str, slot: &str) {
    heading(title);
    for line in slot.trim_end().lines() {
        // Port headings inside the CVE panel get emphasis.
        if line.starts_with("Port ") && line.ends_with(':') {
            println!("  {}", line.bold());
        } else {
            println!("  {line}");
        }
    }
    println!();
}

fn summary_table(dashboard: &Dashboard) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.add_row(vec!["Target", dashboard.target_label.as_str()]);
    for line in dashboard.summary.lines() {
        if let Some((key, value)) = line.split_once(": ") {
            table.add_row(vec![key, value]);
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Report;
    use serde_json::json;

    #[test]
    fn summary_table_carries_all_summary_lines() {
        let mut dashboard = Dashboard::with_terminal_chart();
        dashboard.render(&Report::from_value(json!({
            "target": "10.0.0.5",
            "timestamp": "2024-01-01T00:00:00Z",
            "open_ports": [22, 80],
        })));

        let rendered = summary_table(&dashboard).to_string();
        assert!(rendered.contains("10.0.0.5"));
        assert!(rendered.contains("Open ports"));
        assert!(rendered.contains("2024-01-01T00:00:00Z"));
        assert!(rendered.contains("report.json / report_visual.json"));
    }

    #[test]
    fn render_does_not_panic_on_any_state() {
        let mut dashboard = Dashboard::with_terminal_chart();
        render(&dashboard);

        dashboard.mark_unavailable();
        render(&dashboard);

        dashboard.render(&Report::from_value(json!({ "open_ports": [22] })));
        render(&dashboard);
    }
}
