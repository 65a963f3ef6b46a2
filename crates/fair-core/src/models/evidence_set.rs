use serde::Serialize;

use super::{Origin, RetrievalCandidate};

/// A selected candidate with its citation number.
#[derive(Debug, Clone, Serialize)]
pub struct EvidenceItem {
    /// 1-based; rendered as `[Source N]`.
    pub citation: usize,
    pub candidate: RetrievalCandidate,
    /// Marginal relevance at the time of selection.
    pub mmr_score: f64,
}

impl EvidenceItem {
    pub fn label(&self) -> String {
        citation_label(self.citation)
    }
}

/// Ordered, duplicate-free evidence for one answer. Order is citation order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EvidenceSet {
    items: Vec<EvidenceItem>,
}

pub fn citation_label(n: usize) -> String {
    format!("[Source {n}]")
}

impl EvidenceSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from selection order, dropping repeated ids and truncating at `max_size`.
    pub fn from_selection(
        selected: impl IntoIterator<Item = (RetrievalCandidate, f64)>,
        max_size: usize,
    ) -> Self {
        let mut items: Vec<EvidenceItem> = Vec::new();
        for (candidate, mmr_score) in selected {
            if items.len() >= max_size {
                break;
            }
            if items.iter().any(|i| i.candidate.id() == candidate.id()) {
                continue;
            }
            items.push(EvidenceItem {
                citation: items.len() + 1,
                candidate,
                mmr_score,
            });
        }
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[EvidenceItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &EvidenceItem> {
        self.items.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.candidate.id()).collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.items.iter().map(EvidenceItem::label).collect()
    }

    pub fn fetched_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| i.candidate.source.origin == Origin::Fetched)
            .count()
    }

    /// Mean quality score of the selected items, 0 when empty.
    pub fn mean_quality(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        let total: f64 = self.items.iter().map(|i| i.candidate.quality_score).sum();
        total / self.items.len() as f64
    }

    /// Render the evidence block of a prompt, one labeled source per paragraph.
    pub fn render_for_prompt(&self) -> String {
        let mut out = String::new();
        for item in &self.items {
            let source = &item.candidate.source;
            out.push_str(&item.label());
            out.push(' ');
            out.push_str(&source.title);
            out.push_str(&format!(
                " ({}, reliability {:.2})\n",
                source.source_type, source.base_reliability
            ));
            out.push_str(source.content.trim());
            out.push_str("\n\n");
        }
        out
    }
}
