use std::path::Path;

use reqwest::blocking::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::report::Report;

/// Where the scanner webapp serves the saved report.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/report";

/// Shown in the summary panel whenever no report could be obtained.
pub const NO_REPORT_MESSAGE: &str =
    "No report available. Run the scanner and save to report.json (or report_visual.json).";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed report JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not read report file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of one attempt to obtain a report. Transport errors, non-success
/// statuses and unparseable envelopes all collapse into `Unavailable`; the
/// dashboard shows the same instructional message for each of them.
#[derive(Debug)]
pub enum FetchOutcome {
    Report(Report),
    Unavailable,
}

/// Issues the single GET against the report endpoint. One request per
/// invocation, no retries.
pub struct ReportClient {
    endpoint: String,
    http: Client,
}

impl ReportClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        ReportClient {
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }

    pub fn fetch(&self) -> FetchOutcome {
        match self.try_fetch() {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!("report fetch failed: {err}");
                FetchOutcome::Unavailable
            }
        }
    }

    fn try_fetch(&self) -> Result<FetchOutcome, FetchError> {
        debug!("GET {}", self.endpoint);
        let response = self.http.get(&self.endpoint).send()?;
        let status = response.status();
        if !status.is_success() {
            debug!("report endpoint answered {status}");
            return Ok(FetchOutcome::Unavailable);
        }
        let envelope: Value = response.json()?;
        Ok(unwrap_envelope(envelope))
    }
}

/// Pulls the nested `report` field out of the `{ "report": ... }` envelope.
/// No schema validation beyond that; the payload may be any shape.
fn unwrap_envelope(mut envelope: Value) -> FetchOutcome {
    match envelope.get_mut("report") {
        Some(report) if !report.is_null() => {
            FetchOutcome::Report(Report::from_value(report.take()))
        }
        _ => FetchOutcome::Unavailable,
    }
}

/// Reads a saved report straight from disk (`view --file report.json`).
/// The file holds the bare report, not the HTTP envelope.
pub fn load_file(path: &Path) -> FetchOutcome {
    match try_load_file(path) {
        Ok(report) => FetchOutcome::Report(report),
        Err(err) => {
            warn!("could not load {}: {err}", path.display());
            FetchOutcome::Unavailable
        }
    }
}

fn try_load_file(path: &Path) -> Result<Report, FetchError> {
    let text = std::fs::read_to_string(path)?;
    Ok(Report::from_value(serde_json::from_str(&text)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serves exactly one canned HTTP response, then closes.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 2048];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/api/report")
    }

    #[test]
    fn fetch_unwraps_the_envelope() {
        let url = serve_once("200 OK", r#"{"ok":true,"report":{"target":"10.0.0.5"}}"#);
        match ReportClient::new(url).fetch() {
            FetchOutcome::Report(report) => assert_eq!(report.target(), Some("10.0.0.5")),
            FetchOutcome::Unavailable => panic!("expected a report"),
        }
    }

    #[test]
    fn non_success_status_is_unavailable() {
        let url = serve_once("404 Not Found", r#"{"ok":false,"error":"No report found"}"#);
        assert!(matches!(
            ReportClient::new(url).fetch(),
            FetchOutcome::Unavailable
        ));
    }

    #[test]
    fn unreachable_endpoint_is_unavailable() {
        // Bind then drop to get a port nothing listens on.
        let addr = TcpListener::bind("127.0.0.1:0")
            .expect("bind")
            .local_addr()
            .expect("addr");
        let client = ReportClient::new(format!("http://{addr}/api/report"));
        assert!(matches!(client.fetch(), FetchOutcome::Unavailable));
    }

    #[test]
    fn envelope_without_report_is_unavailable() {
        assert!(matches!(
            unwrap_envelope(serde_json::json!({ "ok": false })),
            FetchOutcome::Unavailable
        ));
        assert!(matches!(
            unwrap_envelope(serde_json::json!({ "report": null })),
            FetchOutcome::Unavailable
        ));
    }

    #[test]
    fn load_file_reads_a_bare_report() {
        let path = std::env::temp_dir().join(format!("scandash-test-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"target":"lab","open_ports":[22]}"#).expect("write");
        match load_file(&path) {
            FetchOutcome::Report(report) => {
                assert_eq!(report.target(), Some("lab"));
                assert_eq!(report.open_ports(), vec!["22"]);
            }
            FetchOutcome::Unavailable => panic!("expected a report"),
        }
        let _ = std::fs::remove_file(&path);
        assert!(matches!(load_file(&path), FetchOutcome::Unavailable));
    }
}
