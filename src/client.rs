use std::time::Duration;

use reqwest::{Client, redirect};

/// User agent presented by both probes.
pub const PROBE_USER_AGENT: &str = "sitecheck-probe/1.0";

/// Upper bound for one probe request, connection setup included.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the HTTPS accessibility probe. Certificate verification is
/// deliberately disabled: the probe tests reachability, not certificate
/// trust, and self-signed deployments must pass it.
pub fn https_probe_client() -> reqwest::Result<Client> {
    Client::builder()
        .timeout(PROBE_TIMEOUT)
        .danger_accept_invalid_certs(true)
        .user_agent(PROBE_USER_AGENT)
        .build()
}

/// Client for the redirection probe. Redirects are not followed so the
/// first-hop status code stays observable.
pub fn redirect_probe_client() -> reqwest::Result<Client> {
    Client::builder()
        .timeout(PROBE_TIMEOUT)
        .redirect(redirect::Policy::none())
        .user_agent(PROBE_USER_AGENT)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_clients_build() {
        assert!(https_probe_client().is_ok());
        assert!(redirect_probe_client().is_ok());
    }
}
