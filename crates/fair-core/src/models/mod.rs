pub mod candidate;
pub mod confidence;
pub mod degradation_event;
pub mod domain;
pub mod evidence;
pub mod evidence_set;
pub mod query;
pub mod source_type;

pub use candidate::RetrievalCandidate;
pub use confidence::{ConfidenceBreakdown, ConfidenceComponents, GenerationStatus};
pub use degradation_event::DegradationEvent;
pub use domain::Domain;
pub use evidence::{EvidenceSource, Origin};
pub use evidence_set::{EvidenceItem, EvidenceSet};
pub use query::Query;
pub use source_type::SourceType;
