pub mod chart;
pub mod panels;
pub mod terminal;

use crate::client::NO_REPORT_MESSAGE;
use crate::report::Report;
use chart::{ChartBackend, ChartCanvas, TerminalBars};

/// The page: one named slot per panel, plus the chart canvas. Slots hold
/// plain text; all styling happens in the terminal presenter.
pub struct Dashboard {
    pub target_label: String,
    pub summary: String,
    pub banners: String,
    pub raw_json: String,
    pub cve_list: String,
    pub updated_at: String,
    pub ports_chart: ChartCanvas,
}

impl Dashboard {
    pub fn new(backend: Box<dyn ChartBackend>) -> Self {
        Dashboard {
            target_label: String::new(),
            summary: String::new(),
            banners: String::new(),
            raw_json: String::new(),
            cve_list: String::new(),
            updated_at: String::new(),
            ports_chart: ChartCanvas::new(backend),
        }
    }

    pub fn with_terminal_chart() -> Self {
        Dashboard::new(Box::new(TerminalBars))
    }

    /// Fills every panel from the report, then the footer. Each renderer only
    /// touches its own slot, so the order below carries no meaning.
    pub fn render(&mut self, report: &Report) {
        panels::render_summary(report, &mut self.target_label, &mut self.summary);
        panels::render_banners(report, &mut self.banners);
        panels::render_raw(report, &mut self.raw_json);
        panels::render_cve_hints(report, &mut self.cve_list);
        panels::render_ports_chart(report, &mut self.ports_chart);
        self.updated_at = format!(
            "Report target: {}",
            panels::sanitize(report.target().unwrap_or("unknown"))
        );
    }

    /// No report could be obtained: the summary slot carries the fixed
    /// instructional message and every other slot stays untouched.
    pub fn mark_unavailable(&mut self) {
        self.summary.clear();
        self.summary.push_str(NO_REPORT_MESSAGE);
    }
}
