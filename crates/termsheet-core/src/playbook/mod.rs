pub mod narrative;
pub mod prompt;
pub mod summary;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::deal::DealInput;
use crate::types::{with_metadata, ComputationOutput};
use crate::TermSheetResult;

use narrative::NarrativeGenerator;

/// Negotiation material for one submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playbook {
    /// Name of the generator that produced `guidance`
    pub generator: String,
    pub prompt: String,
    pub guidance: String,
    pub summary: String,
}

/// Build the prompt, ask `generator` for guidance once, and render the
/// exportable summary.
pub fn build_playbook(
    input: &DealInput,
    generator: &dyn NarrativeGenerator,
    generated_at: DateTime<Utc>,
) -> TermSheetResult<ComputationOutput<Playbook>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    input.validate()?;

    if input.company.name.trim().is_empty() {
        warnings.push("Company name is blank; summary shows N/A".into());
    }

    let prompt = prompt::build_negotiation_prompt(input);
    let guidance = generator.generate(&prompt)?;
    let guidance = guidance.trim().to_string();

    let missing: Vec<&str> = prompt::GUIDANCE_SECTIONS
        .iter()
        .copied()
        .filter(|section| !guidance.contains(section))
        .collect();
    if !missing.is_empty() {
        warnings.push(format!(
            "Guidance from '{}' is missing sections: {}",
            generator.name(),
            missing.join(", ")
        ));
    }

    let output = Playbook {
        generator: generator.name().to_string(),
        summary: summary::render_summary(input, generated_at),
        prompt,
        guidance,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Term sheet negotiation playbook",
        &serde_json::json!({
            "generator": generator.name(),
            "generated_at": generated_at.to_rfc3339(),
        }),
        warnings,
        elapsed,
        output,
    ))
}
