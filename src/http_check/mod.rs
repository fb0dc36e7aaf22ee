pub mod outcome;
pub mod probe;

use std::fmt::Write;

/// Renders an error and its source chain on one line.
pub fn error_chain(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = format!("{}", err);
    while let Some(src) = err.source() {
        let _ = write!(s, ": {}", src);
        err = src;
    }
    s
}

pub mod prelude {
    pub use super::error_chain;
    pub use super::outcome::{
        CheckOutcome, HTTPS_ACCEPTED_STATUS, ProbeError, ProbeReport, REDIRECT_ACCEPTED_STATUS,
    };
    pub use super::probe::{check_http_to_https_redirection, check_https_accessibility};
}
