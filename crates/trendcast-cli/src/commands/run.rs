//! Run command: one fetch-and-publish invocation.

use anyhow::Result;
use clap::Args;
use tracing::info;
use url::Url;

use trendcast_core::pipeline::{self, DEFAULT_TARGET};
use trendcast_http::{MAX_PAGE_SIZE, PubsubPublisher, YoutubeCatalog};

use crate::config::Config;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Total number of videos to publish before stopping
    #[arg(long, default_value_t = DEFAULT_TARGET)]
    pub target: u64,

    /// Region code for the trending chart
    #[arg(long, default_value = "US")]
    pub region: String,

    /// Items requested per catalog page (upstream cap 50)
    #[arg(long, default_value_t = MAX_PAGE_SIZE)]
    pub page_size: u32,

    /// Override the catalog API endpoint
    #[arg(long)]
    pub api_url: Option<Url>,

    /// Override the Pub/Sub endpoint
    #[arg(long)]
    pub pubsub_url: Option<Url>,
}

pub async fn run(args: RunArgs) -> Result<()> {
    let config = Config::from_env();

    let mut source = YoutubeCatalog::new(config.api_key.clone())
        .with_region(&args.region)
        .with_page_size(args.page_size);
    if let Some(url) = args.api_url {
        source = source.with_endpoint(url);
    }

    let mut sink = PubsubPublisher::new(config.project.clone(), config.topic.clone());
    if let Some(url) = args.pubsub_url {
        sink = sink.with_endpoint(url);
    }
    if let Some(token) = config.auth_token.clone() {
        sink = sink.with_auth_token(token);
    }

    let report = pipeline::run(&source, &sink, args.target).await;
    info!(
        published = report.published,
        pages = report.pages_fetched,
        stop = ?report.stop,
        "run complete"
    );

    // Runs cut short by a fault still report success with the true count.
    println!("Published {} video(s) to Pub/Sub.", report.published);
    Ok(())
}
