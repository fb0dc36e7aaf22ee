use std::fmt;
use std::time::Duration;

use thiserror::Error;

use super::error_chain;

/// Status codes accepted by the HTTPS accessibility check.
pub const HTTPS_ACCEPTED_STATUS: &[u16] = &[200];

/// Status codes accepted by the redirection check. 301 and 302 are the
/// redirect answers proper; 200 tolerates servers that answer plain HTTP
/// directly instead of redirecting.
pub const REDIRECT_ACCEPTED_STATUS: &[u16] = &[301, 302, 200];

/// Everything captured from one completed probe.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    pub url: String,
    pub http_status: u16,
    pub http_version: String,
    pub elapsed: Duration,
    /// First-hop `Location` header, present when the server redirected.
    pub location: Option<String>,
}

/// Why a probe never produced an HTTP response.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The domain under test could not be turned into a probe url.
    #[error("could not build a probe url for domain {domain:?}")]
    InvalidUrl {
        domain: String,
        #[source]
        source: url::ParseError,
    },

    /// DNS, connect, timeout or TLS handshake trouble before any response.
    #[error("request to {url} could not be completed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Tagged result of one reachability check.
#[derive(Debug)]
pub enum CheckOutcome {
    /// The probe completed and the status code was in the accepted set.
    Passed(ProbeReport),
    /// The probe completed but the server answered outside the accepted set.
    UnexpectedStatus {
        expected: &'static [u16],
        report: ProbeReport,
    },
    /// The request never produced a response; there is no status to evaluate.
    TransportFailure(ProbeError),
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, CheckOutcome::Passed(_))
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::Passed(report) => {
                write!(f, "Passed (status {}", report.http_status)?;
                if let Some(location) = &report.location {
                    write!(f, " -> {location}")?;
                }
                write!(
                    f,
                    ", {}, {:.2}ms)",
                    report.http_version,
                    report.elapsed.as_secs_f64() * 1000.0
                )
            }
            CheckOutcome::UnexpectedStatus { expected, report } => {
                write!(
                    f,
                    "Failed - expected {}, got {}",
                    format_status_set(expected),
                    report.http_status
                )
            }
            CheckOutcome::TransportFailure(err) => {
                write!(f, "Failed - {}", error_chain(err))
            }
        }
    }
}

fn format_status_set(codes: &[u16]) -> String {
    codes
        .iter()
        .map(|code| code.to_string())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with_status(http_status: u16) -> ProbeReport {
        ProbeReport {
            url: "http://www.example.com/".to_string(),
            http_status,
            http_version: "HTTP/1.1".to_string(),
            elapsed: Duration::from_millis(12),
            location: None,
        }
    }

    #[test]
    fn accepted_status_sets() {
        assert_eq!(HTTPS_ACCEPTED_STATUS, &[200]);
        assert_eq!(REDIRECT_ACCEPTED_STATUS, &[301, 302, 200]);
    }

    #[test]
    fn passed_line_names_status_version_and_elapsed() {
        let outcome = CheckOutcome::Passed(report_with_status(200));
        assert_eq!(outcome.to_string(), "Passed (status 200, HTTP/1.1, 12.00ms)");
        assert!(outcome.passed());
    }

    #[test]
    fn passed_line_includes_redirect_location_when_present() {
        let mut report = report_with_status(301);
        report.location = Some("https://www.example.com/".to_string());
        let outcome = CheckOutcome::Passed(report);
        assert_eq!(
            outcome.to_string(),
            "Passed (status 301 -> https://www.example.com/, HTTP/1.1, 12.00ms)"
        );
    }

    #[test]
    fn unexpected_status_line_names_expected_set_and_actual_code() {
        let outcome = CheckOutcome::UnexpectedStatus {
            expected: HTTPS_ACCEPTED_STATUS,
            report: report_with_status(404),
        };
        assert_eq!(outcome.to_string(), "Failed - expected 200, got 404");
        assert!(!outcome.passed());

        let outcome = CheckOutcome::UnexpectedStatus {
            expected: REDIRECT_ACCEPTED_STATUS,
            report: report_with_status(404),
        };
        assert_eq!(outcome.to_string(), "Failed - expected 301/302/200, got 404");
    }

    #[test]
    fn transport_failure_line_renders_the_error_chain() {
        let source = url::Url::parse("https://").unwrap_err();
        let outcome = CheckOutcome::TransportFailure(ProbeError::InvalidUrl {
            domain: String::new(),
            source,
        });
        assert_eq!(
            outcome.to_string(),
            "Failed - could not build a probe url for domain \"\": empty host"
        );
        assert!(!outcome.passed());
    }
}
