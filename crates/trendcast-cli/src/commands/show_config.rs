//! Show-config command: display the resolved environment configuration.

use anyhow::Result;
use clap::Args;

use crate::config::Config;
use crate::output;

#[derive(Args, Debug)]
pub struct ShowConfigArgs {
    /// Print as JSON instead of labeled fields
    #[arg(long)]
    pub json: bool,
}

pub async fn show_config(args: ShowConfigArgs) -> Result<()> {
    let config = Config::from_env();

    if args.json {
        output::json(&serde_json::json!({
            "apiKey": config.masked_api_key(),
            "project": config.project,
            "topic": config.topic,
            "authToken": config.auth_token.is_some(),
        }))?;
    } else {
        output::field("API key", &config.masked_api_key());
        output::field("Project", &config.project);
        output::field("Topic", &config.topic);
        output::field(
            "Auth token",
            if config.auth_token.is_some() {
                "set"
            } else {
                "not set"
            },
        );
    }

    Ok(())
}
