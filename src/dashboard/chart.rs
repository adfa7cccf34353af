/// Declarative description of the chart to draw: one bar per label, with the
/// value at the same index.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub series_label: String,
}

/// A live chart bound to the canvas. `destroy` releases whatever the backend
/// holds for it; after that the instance renders nothing.
pub trait ChartInstance {
    fn lines(&self) -> Vec<String>;
    fn destroy(&mut self);
}

/// The charting collaborator. Given a config, it produces a live instance.
pub trait ChartBackend {
    fn draw(&self, config: &ChartConfig) -> Box<dyn ChartInstance>;
}

/// The drawable surface. Owns at most one live chart at a time: drawing again
/// destroys the previous instance before the replacement is created, so
/// repeated renders cannot leak backend handles.
pub struct ChartCanvas {
    backend: Box<dyn ChartBackend>,
    current: Option<Box<dyn ChartInstance>>,
}

impl ChartCanvas {
    pub fn new(backend: Box<dyn ChartBackend>) -> Self {
        ChartCanvas {
            backend,
            current: None,
        }
    }

    pub fn draw(&mut self, config: ChartConfig) {
        if let Some(mut chart) = self.current.take() {
            chart.destroy();
        }
        self.current = Some(self.backend.draw(&config));
    }

    pub fn chart(&self) -> Option<&dyn ChartInstance> {
        self.current.as_deref()
    }

    /// Rendered rows of the current chart; empty when nothing was drawn.
    pub fn lines(&self) -> Vec<String> {
        self.current
            .as_ref()
            .map(|chart| chart.lines())
            .unwrap_or_default()
    }
}

impl Drop for ChartCanvas {
    fn drop(&mut self) {
        if let Some(mut chart) = self.current.take() {
            chart.destroy();
        }
    }
}

/// Default backend: unicode block-glyph bars, one row per label.
pub struct TerminalBars;

struct BarChart {
    rows: Vec<String>,
}

impl ChartBackend for TerminalBars {
    fn draw(&self, config: &ChartConfig) -> Box<dyn ChartInstance> {
        let label_width = config.labels.iter().map(String::len).max().unwrap_or(0);
        let rows = config
            .labels
            .iter()
            .zip(&config.values)
            .map(|(label, value)| {
                let bar = "█".repeat(*value as usize * 4);
                format!("{label:>label_width$}  {bar} {value}")
            })
            .collect();
        Box::new(BarChart { rows })
    }
}

impl ChartInstance for BarChart {
    fn lines(&self) -> Vec<String> {
        self.rows.clone()
    }

    fn destroy(&mut self) {
        self.rows.clear();
    }
}
