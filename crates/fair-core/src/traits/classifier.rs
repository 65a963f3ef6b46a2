use crate::models::Domain;

/// Assigns a domain to a raw query.
pub trait IDomainClassifier: Send + Sync {
    fn classify(&self, query: &str) -> Domain;
}

/// Classifier that always answers the same domain.
#[derive(Debug, Clone, Copy)]
pub struct FixedDomainClassifier(pub Domain);

impl IDomainClassifier for FixedDomainClassifier {
    fn classify(&self, _query: &str) -> Domain {
        self.0
    }
}
