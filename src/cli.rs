use clap::Parser;

/// Post-deploy smoke checks for a freshly published site.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sitecheck",
    about = "Checks that a site answers over HTTPS and upgrades plain HTTP"
)]
pub struct Cli {
    /// The domain name to test.
    #[arg(long, default_value = "www.google.com")]
    pub domain: String,
}
