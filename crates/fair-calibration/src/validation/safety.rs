//! Domain safety: disclaimers and dangerous claims.

use fair_core::models::Domain;
use serde::Serialize;

use super::CheckOutcome;

/// A fix requested by a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "text", rename_all = "snake_case")]
pub enum Correction {
    AddDisclaimer(String),
    RemoveClaim(String),
}

pub const MEDICAL_DISCLAIMER: &str = "This information is for educational purposes only. \
Always consult a qualified healthcare provider for medical advice.";

pub const FINANCIAL_DISCLAIMER: &str = "This is educational information, not financial advice. \
Consult a qualified financial advisor before making investment decisions.";

const MEDICAL_TRIGGERS: [&str; 11] = [
    "treatment", "medication", "drug", "dose", "symptom", "diagnosis", "therapy", "surgery",
    "prescription", "condition", "disease",
];
const MEDICAL_DISCLAIMER_PHRASES: [&str; 6] = [
    "consult", "healthcare provider", "medical professional", "doctor", "physician",
    "professional advice",
];
const MEDICAL_ABSOLUTES: [&str; 5] = ["always", "never", "definitely", "guaranteed", "cure"];

const FINANCIAL_TRIGGERS: [&str; 10] = [
    "invest", "stock", "trade", "buy", "sell", "portfolio", "recommendation", "advice",
    "should invest", "guaranteed",
];
const FINANCIAL_DISCLAIMER_PHRASES: [&str; 6] = [
    "not financial advice", "consult", "financial advisor", "professional advice",
    "past performance", "risk",
];
const FINANCIAL_GUARANTEES: [&str; 4] = ["guaranteed profit", "guaranteed return", "no risk", "cant lose"];

fn mentions_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| text.contains(p))
}

pub fn check(answer: &str, domain: Domain) -> CheckOutcome {
    let lower = answer.to_lowercase();
    match domain {
        Domain::Medical => medical(&lower),
        Domain::Finance => financial(&lower),
        Domain::CrossDomain | Domain::Unknown => CheckOutcome::pass(1.0),
    }
}

fn medical(lower: &str) -> CheckOutcome {
    if !mentions_any(lower, &MEDICAL_TRIGGERS) {
        return CheckOutcome::pass(1.0);
    }
    if !mentions_any(lower, &MEDICAL_DISCLAIMER_PHRASES) {
        let mut out = CheckOutcome::warn(0.3, "medical response lacks professional consultation disclaimer");
        out.corrections.push(Correction::AddDisclaimer(MEDICAL_DISCLAIMER.to_string()));
        return out;
    }
    if mentions_any(lower, &MEDICAL_ABSOLUTES) {
        return CheckOutcome::warn(0.7, "medical response uses absolute language");
    }
    CheckOutcome::pass(0.95)
}

fn financial(lower: &str) -> CheckOutcome {
    if !mentions_any(lower, &FINANCIAL_TRIGGERS) {
        return CheckOutcome::pass(1.0);
    }
    if !mentions_any(lower, &FINANCIAL_DISCLAIMER_PHRASES) {
        let mut out = CheckOutcome::warn(0.4, "financial advice lacks appropriate disclaimers");
        out.corrections.push(Correction::AddDisclaimer(FINANCIAL_DISCLAIMER.to_string()));
        return out;
    }
    if mentions_any(lower, &FINANCIAL_GUARANTEES) {
        let mut out = CheckOutcome::warn(0.2, "financial response makes guarantee claims");
        out.corrections.push(Correction::RemoveClaim(
            "guaranteed return claims are false and misleading".to_string(),
        ));
        return out;
    }
    CheckOutcome::pass(0.95)
}
