use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::{LONG_QUERY_TOKENS, SHORT_QUERY_TOKENS};
use crate::models::Domain;

/// Base admission threshold per query domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainThresholds {
    pub finance: f64,
    pub medical: f64,
    pub cross_domain: f64,
    pub unknown: f64,
}

impl Default for DomainThresholds {
    fn default() -> Self {
        Self {
            finance: defaults::THRESHOLD_FINANCE,
            medical: defaults::THRESHOLD_MEDICAL,
            cross_domain: defaults::THRESHOLD_CROSS_DOMAIN,
            unknown: defaults::THRESHOLD_UNKNOWN,
        }
    }
}

impl DomainThresholds {
    pub fn get(&self, domain: Domain) -> f64 {
        match domain {
            Domain::Finance => self.finance,
            Domain::Medical => self.medical,
            Domain::CrossDomain => self.cross_domain,
            Domain::Unknown => self.unknown,
        }
    }
}

/// Adaptive threshold configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub base: DomainThresholds,
    pub short_query_tokens: usize,
    pub long_query_tokens: usize,
    /// Subtracted for short queries, added for long ones.
    pub length_adjustment: f64,
    /// Technical-term density above which the threshold rises.
    pub technical_density_level: f64,
    pub technical_adjustment: f64,
    pub min: f64,
    pub max: f64,
    pub relaxation_step: f64,
    pub relaxation_floor: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            base: DomainThresholds::default(),
            short_query_tokens: SHORT_QUERY_TOKENS,
            long_query_tokens: LONG_QUERY_TOKENS,
            length_adjustment: defaults::DEFAULT_LENGTH_ADJUSTMENT,
            technical_density_level: defaults::DEFAULT_TECHNICAL_DENSITY_LEVEL,
            technical_adjustment: defaults::DEFAULT_TECHNICAL_ADJUSTMENT,
            min: defaults::DEFAULT_THRESHOLD_MIN,
            max: defaults::DEFAULT_THRESHOLD_MAX,
            relaxation_step: defaults::DEFAULT_RELAXATION_STEP,
            relaxation_floor: defaults::DEFAULT_RELAXATION_FLOOR,
        }
    }
}
