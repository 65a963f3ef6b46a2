use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::Domain;

/// Domain vocabulary: synonym table plus technical terms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainLexicon {
    /// Term or phrase -> related terms appended on expansion.
    pub synonyms: BTreeMap<String, Vec<String>>,
    /// Terms counted for query technicality and source density.
    pub technical_terms: Vec<String>,
}

impl DomainLexicon {
    pub fn is_technical(&self, term: &str) -> bool {
        self.technical_terms.iter().any(|t| t == term)
    }
}

/// Query expansion configuration and domain lexicons.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    pub enabled: bool,
    pub max_terms: usize,
    pub finance: DomainLexicon,
    pub medical: DomainLexicon,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_QUERY_EXPANSION,
            max_terms: defaults::DEFAULT_MAX_EXPANSION_TERMS,
            finance: finance_lexicon(),
            medical: medical_lexicon(),
        }
    }
}

impl ExpansionConfig {
    /// Lexicons consulted for a query or source in `domain`.
    pub fn lexicons(&self, domain: Domain) -> Vec<&DomainLexicon> {
        domain
            .evidence_domains()
            .iter()
            .map(|d| match d {
                Domain::Medical => &self.medical,
                _ => &self.finance,
            })
            .collect()
    }

    /// Whether `term` is technical vocabulary for `domain`.
    pub fn is_technical(&self, domain: Domain, term: &str) -> bool {
        self.lexicons(domain).iter().any(|l| l.is_technical(term))
    }
}

fn table(entries: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect()))
        .collect()
}

fn terms(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn finance_lexicon() -> DomainLexicon {
    DomainLexicon {
        synonyms: table(&[
            ("compound interest", &["compounding", "interest on interest", "growth"]),
            ("apr", &["annual percentage rate", "interest rate"]),
            ("apy", &["annual percentage yield", "compounding"]),
            ("401k", &["retirement plan", "employer match", "tax deferred"]),
            ("ira", &["individual retirement account", "retirement", "tax advantaged"]),
            ("roth", &["after tax", "tax free growth", "ira"]),
            ("etf", &["exchange traded fund", "index fund"]),
            ("stocks", &["equities", "shares"]),
            ("bonds", &["fixed income", "treasury", "yield"]),
            ("diversification", &["asset allocation", "portfolio", "risk"]),
            ("inflation", &["purchasing power", "cpi"]),
            ("budget", &["budgeting", "expenses", "spending plan"]),
            ("mortgage", &["home loan", "amortization", "principal"]),
            ("credit score", &["fico", "credit history", "creditworthiness"]),
            ("emergency fund", &["savings", "cash reserve", "liquidity"]),
            ("debt", &["loan", "liability", "repayment"]),
        ]),
        technical_terms: terms(&[
            "401k", "amortization", "annuity", "apr", "apy", "asset", "bond", "bonds",
            "budget", "capital", "compound", "compounding", "credit", "debt", "deduction",
            "diversification", "dividend", "equity", "etf", "fund", "index", "inflation",
            "interest", "ira", "liability", "liquidity", "mortgage", "portfolio", "principal",
            "rate", "retirement", "risk", "roth", "savings", "stock", "stocks", "tax",
            "volatility", "yield",
        ]),
    }
}

fn medical_lexicon() -> DomainLexicon {
    DomainLexicon {
        synonyms: table(&[
            ("blood pressure", &["hypertension", "systolic", "diastolic"]),
            ("hypertension", &["high blood pressure", "cardiovascular"]),
            ("diabetes", &["blood glucose", "insulin", "glycemic control"]),
            ("cholesterol", &["ldl", "hdl", "lipids"]),
            ("heart attack", &["myocardial infarction", "cardiac"]),
            ("stroke", &["cerebrovascular", "brain attack"]),
            ("flu", &["influenza", "respiratory infection"]),
            ("vaccine", &["immunization", "vaccination"]),
            ("antibiotics", &["antibacterial", "antimicrobial"]),
            ("painkiller", &["analgesic", "pain relief"]),
            ("depression", &["major depressive disorder", "mood disorder"]),
            ("exercise", &["physical activity", "aerobic"]),
        ]),
        technical_terms: terms(&[
            "antibiotic", "antibiotics", "blood", "cardiovascular", "cholesterol", "chronic",
            "clinical", "diabetes", "diagnosis", "disease", "dosage", "dose", "glucose",
            "hypertension", "infection", "inflammation", "influenza", "insulin", "medication",
            "metformin", "prescription", "pressure", "statin", "symptom", "symptoms",
            "syndrome", "therapy", "treatment", "vaccine",
        ]),
    }
}
