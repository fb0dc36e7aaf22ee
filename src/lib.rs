pub mod cli;
pub mod client;
pub mod http_check;
pub mod logger;

pub use cli::Cli;
pub use client::{https_probe_client, redirect_probe_client};
pub use http_check::outcome::{CheckOutcome, ProbeError, ProbeReport};
pub use http_check::probe::{check_http_to_https_redirection, check_https_accessibility};
