use anyhow::Context;
use clap::Parser;

use sitecheck::cli::Cli;
use sitecheck::http_check::prelude::*;
use sitecheck::{client, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init();

    tracing::info!("running reachability checks for {}", cli.domain);

    let https_client =
        client::https_probe_client().context("could not build the HTTPS probe client")?;
    let redirect_client =
        client::redirect_probe_client().context("could not build the redirect probe client")?;

    let https_outcome = check_https_accessibility(&https_client, &cli.domain).await;
    report("HTTPS Accessibility", &https_outcome);

    let redirect_outcome = check_http_to_https_redirection(&redirect_client, &cli.domain).await;
    report("HTTP to HTTPS Redirection", &redirect_outcome);

    if !(https_outcome.passed() && redirect_outcome.passed()) {
        std::process::exit(1);
    }
    Ok(())
}

fn report(name: &str, outcome: &CheckOutcome) {
    let marker = if outcome.passed() { "✅" } else { "❌" };
    println!("{marker} {name}: {outcome}");
}
