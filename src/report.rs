use serde_json::Value;

/// A scan report as produced by the scanner and served at `/api/report`.
///
/// The payload is kept as raw JSON so the raw panel can dump it byte-faithfully,
/// and every accessor is lenient: a missing or malformed field degrades to an
/// empty or placeholder value instead of failing. The dashboard never rejects
/// a report, it only renders less of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    raw: Value,
}

impl Report {
    pub fn from_value(raw: Value) -> Self {
        Report { raw }
    }

    /// The full payload, untouched.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Scanned host label, if the scanner recorded one.
    pub fn target(&self) -> Option<&str> {
        self.raw.get("target").and_then(Value::as_str)
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.raw.get("timestamp").and_then(Value::as_str)
    }

    /// Open ports as display labels. Scanners emit these as numbers, but
    /// hand-edited reports sometimes carry strings; both are accepted.
    pub fn open_ports(&self) -> Vec<String> {
        match self.raw.get("open_ports").and_then(Value::as_array) {
            Some(ports) => ports.iter().map(port_label).collect(),
            None => Vec::new(),
        }
    }

    /// Banner text per port, in the mapping's own key order.
    pub fn banners(&self) -> Vec<(String, String)> {
        self.string_map("banners")
    }

    /// CVE hint text per port, in the mapping's own key order.
    pub fn explanations(&self) -> Vec<(String, String)> {
        self.string_map("explanations")
    }

    fn string_map(&self, field: &str) -> Vec<(String, String)> {
        match self.raw.get(field).and_then(Value::as_object) {
            Some(map) => map
                .iter()
                .map(|(k, v)| {
                    // Non-string values fail safe to empty text.
                    let text = v.as_str().unwrap_or_default().to_string();
                    (k.clone(), text)
                })
                .collect(),
            None => Vec::new(),
        }
    }
}

fn port_label(port: &Value) -> String {
    match port {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
