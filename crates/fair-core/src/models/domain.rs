use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Knowledge domain of a query or an evidence source.
///
/// Evidence sources only ever carry `Finance` or `Medical`. The other two
/// variants come out of query classification and draw on both pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Finance,
    Medical,
    CrossDomain,
    Unknown,
}

impl Domain {
    /// Domains a source may belong to.
    pub const EVIDENCE_DOMAINS: [Domain; 2] = [Domain::Finance, Domain::Medical];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Finance => "finance",
            Self::Medical => "medical",
            Self::CrossDomain => "cross_domain",
            Self::Unknown => "unknown",
        }
    }

    /// Whether a corpus entry may be tagged with this domain.
    pub fn is_evidence_domain(self) -> bool {
        matches!(self, Self::Finance | Self::Medical)
    }

    /// Evidence domains searched for a query targeting `self`.
    pub fn evidence_domains(self) -> &'static [Domain] {
        match self {
            Self::Finance => &[Domain::Finance],
            Self::Medical => &[Domain::Medical],
            Self::CrossDomain | Self::Unknown => &Self::EVIDENCE_DOMAINS,
        }
    }

    /// Whether a source tagged `source_domain` is in scope for this query domain.
    pub fn covers(self, source_domain: Domain) -> bool {
        self.evidence_domains().contains(&source_domain)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "finance" | "financial" => Ok(Self::Finance),
            "medical" | "health" => Ok(Self::Medical),
            "cross_domain" | "cross-domain" => Ok(Self::CrossDomain),
            "unknown" => Ok(Self::Unknown),
            other => Err(format!("unknown domain '{other}'")),
        }
    }
}
