//! Evidence prompt construction.

use fair_core::constants::CITATION_INSTRUCTION;
use fair_core::models::{Domain, EvidenceSet, Query};

const NO_EVIDENCE_NOTE: &str = "No evidence sources matched this question. Answer cautiously, \
say that no sources were available, and recommend consulting a qualified professional.";

fn role(domain: Domain) -> &'static str {
    match domain {
        Domain::Finance => "a careful personal finance assistant",
        Domain::Medical => "a careful health information assistant",
        Domain::CrossDomain => "a careful assistant for questions spanning health and money",
        Domain::Unknown => "a careful assistant",
    }
}

/// Build the generator prompt for `query` over `evidence`.
///
/// Sources appear as `[Source N]` in selection order.
pub fn build_prompt(query: &Query, evidence: &EvidenceSet) -> String {
    let mut prompt = format!(
        "You are {}. Answer the question using the evidence below.\n",
        role(query.domain)
    );
    if evidence.is_empty() {
        prompt.push_str(NO_EVIDENCE_NOTE);
        prompt.push_str("\n\n");
    } else {
        prompt.push_str(CITATION_INSTRUCTION);
        prompt.push_str(" Do not cite sources that are not listed.\n\nEvidence:\n\n");
        prompt.push_str(&evidence.render_for_prompt());
    }
    prompt.push_str("Question: ");
    prompt.push_str(query.text.trim());
    prompt.push_str("\n\nAnswer:");
    prompt
}
