use std::time::Instant;

use reqwest::header::LOCATION;
use url::Url;

use super::prelude::*;

/// Checks the site is accessible over HTTPS and answers with a 200 OK.
/// Expects a client that accepts invalid certificates.
pub async fn check_https_accessibility(client: &reqwest::Client, domain: &str) -> CheckOutcome {
    run_check(client, "https", domain, HTTPS_ACCEPTED_STATUS).await
}

/// Checks plain HTTP requests are redirected, expecting a 301 Moved
/// Permanently or 302 Found (200 is tolerated for sites that serve plain
/// HTTP directly). Expects a client that does not follow redirects; the
/// first-hop status is what gets evaluated.
pub async fn check_http_to_https_redirection(
    client: &reqwest::Client,
    domain: &str,
) -> CheckOutcome {
    run_check(client, "http", domain, REDIRECT_ACCEPTED_STATUS).await
}

async fn run_check(
    client: &reqwest::Client,
    scheme: &str,
    domain: &str,
    accepted: &'static [u16],
) -> CheckOutcome {
    let url = match probe_url(scheme, domain) {
        Ok(url) => url,
        Err(err) => return CheckOutcome::TransportFailure(err),
    };
    classify(accepted, fetch_status(client, url).await)
}

/// The domain is taken as provided; a value that cannot form a url surfaces
/// as that check's fault in place of the network call.
pub(crate) fn probe_url(scheme: &str, domain: &str) -> Result<Url, ProbeError> {
    Url::parse(&format!("{scheme}://{domain}")).map_err(|source| ProbeError::InvalidUrl {
        domain: domain.to_string(),
        source,
    })
}

pub(crate) async fn fetch_status(
    client: &reqwest::Client,
    url: Url,
) -> Result<ProbeReport, ProbeError> {
    tracing::debug!("probing {url}");

    let start = Instant::now();
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| ProbeError::Transport {
            url: url.to_string(),
            source,
        })?;
    let elapsed = start.elapsed();

    let http_status = response.status().as_u16();
    let http_version = version_label(response.version());
    let location = response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    // The body is never read; dropping the response releases the connection.
    drop(response);

    Ok(ProbeReport {
        url: url.to_string(),
        http_status,
        http_version,
        elapsed,
        location,
    })
}

fn classify(accepted: &'static [u16], probed: Result<ProbeReport, ProbeError>) -> CheckOutcome {
    match probed {
        Ok(report) if accepted.contains(&report.http_status) => CheckOutcome::Passed(report),
        Ok(report) => CheckOutcome::UnexpectedStatus {
            expected: accepted,
            report,
        },
        Err(err) => CheckOutcome::TransportFailure(err),
    }
}

fn version_label(version: reqwest::Version) -> String {
    match version {
        reqwest::Version::HTTP_09 => "HTTP/0.9".to_string(),
        reqwest::Version::HTTP_10 => "HTTP/1.0".to_string(),
        reqwest::Version::HTTP_11 => "HTTP/1.1".to_string(),
        reqwest::Version::HTTP_2 => "HTTP/2.0".to_string(),
        reqwest::Version::HTTP_3 => "HTTP/3.0".to_string(),
        _ => "UNKNOWN".to_string(),
    }
}
