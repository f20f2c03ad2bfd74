use clap::Args;
use serde_json::Value;

use termsheet_core::playbook::{self, narrative::StaticPlaybook};

use super::deal::DealArgs;

/// Arguments for the negotiation playbook
#[derive(Args)]
pub struct PlaybookArgs {
    #[command(flatten)]
    pub deal: DealArgs,
}

pub fn run_playbook(args: PlaybookArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let (input, source) = args.deal.resolve()?;
    tracing::debug!(?source, "resolved deal submission");

    let generator = StaticPlaybook;
    let result = playbook::build_playbook(&input, &generator, chrono::Utc::now())?;
    for warning in &result.warnings {
        tracing::warn!("{}", warning);
    }
    tracing::info!(generator = %result.result.generator, "playbook generated");
    Ok(serde_json::to_value(result)?)
}
