// Main entry point - Dependency injection and dispatch
mod application;
mod domain;
mod error;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use crate::application::reconciler::Reconciler;
use crate::application::template_service::TemplateService;
use crate::infrastructure::chronograf_repository::ChronografRepository;
use crate::infrastructure::influx_repository::InfluxRepository;
use crate::infrastructure::logging::init_logging;
use crate::presentation::cli::Cli;
use crate::presentation::dispatcher::Dispatcher;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_str());

    let settings = cli.settings();
    tracing::debug!(
        "Chronograf at {}, InfluxDB at {}",
        settings.chronograf.url,
        settings.influx.url
    );

    // One HTTP client shared by both repositories
    let http = reqwest::Client::builder()
        .build()
        .context("Failed to build HTTP client")?;

    let hosts = Arc::new(InfluxRepository::new(http.clone(), settings.influx));
    let dashboards = Arc::new(ChronografRepository::new(http, &settings.chronograf.url));

    let templates = TemplateService::new(dashboards.clone(), settings.host_var);
    let reconciler = Reconciler::new(hosts, dashboards, templates.clone());
    let dispatcher = Dispatcher::new(reconciler, templates, settings.template);

    let mut stdout = std::io::stdout().lock();
    let outcomes = dispatcher
        .execute(&cli.args, &mut stdout)
        .await
        .with_context(|| format!("'{}' did not complete", cli.args.join(" ")))?;

    let failed = outcomes.iter().filter(|o| !o.succeeded()).count();
    if failed > 0 {
        tracing::warn!("{} of {} dashboard writes were not accepted", failed, outcomes.len());
    }

    Ok(())
}
