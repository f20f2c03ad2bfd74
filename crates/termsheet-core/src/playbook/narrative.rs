use crate::TermSheetResult;

/// Source of free-text negotiation guidance.
///
/// Implementations may call a remote language model; they are invoked at
/// most once per submission and their failures never affect the numbers.
pub trait NarrativeGenerator: Send + Sync {
    /// Generator name, reported alongside the guidance.
    fn name(&self) -> &'static str;

    /// Produce guidance for a negotiation prompt.
    fn generate(&self, prompt: &str) -> TermSheetResult<String>;
}

/// Offline generator returning the standard founder-side playbook.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPlaybook;

const STANDARD_GUIDANCE: &str = "\
[Valuation]
- Anchor valuation using comparable deals, revenue, and growth.
- Offer modest movement on price in exchange for better terms (1x non-participating, broad-based weighted average).

[Anti-Dilution]
- Push for broad-based weighted-average anti-dilution.
- Avoid full ratchet, which can crush founder ownership in down rounds.

[Liquidation Preferences]
- Target 1x non-participating as the default.
- If investors want participation, request a cap at 2-3x and negotiate for participation to fall away at higher exits.

[Other]
- Maintain at least parity on the board; avoid giving up control too early.
- Narrow protective provisions to truly major events (M&A, new senior securities, changes to charter).
- Align information rights with what you can deliver without excessive overhead.";

impl NarrativeGenerator for StaticPlaybook {
    fn name(&self) -> &'static str {
        "static"
    }

    fn generate(&self, _prompt: &str) -> TermSheetResult<String> {
        Ok(STANDARD_GUIDANCE.to_string())
    }
}
