//! MMR: `lambda * relevance + (1 - lambda) * (1 - max similarity to selected)`.

use std::cmp::Ordering;
use std::collections::HashMap;

use fair_core::models::RetrievalCandidate;
use fair_embeddings::cosine_similarity;

/// Keep one candidate per source id, the one with the highest relevance.
/// Output is ordered by id.
pub fn dedup_by_id(candidates: Vec<RetrievalCandidate>) -> Vec<RetrievalCandidate> {
    let mut best: HashMap<String, RetrievalCandidate> = HashMap::new();
    for candidate in candidates {
        match best.get(candidate.id()) {
            Some(existing) if existing.relevance() >= candidate.relevance() => {}
            _ => {
                best.insert(candidate.id().to_string(), candidate);
            }
        }
    }
    let mut out: Vec<RetrievalCandidate> = best.into_values().collect();
    out.sort_by(|a, b| a.id().cmp(b.id()));
    out
}

/// Greedy MMR order over `pool`: `(index, marginal score)` per pick, at most
/// `max` picks. Ties go to the smaller id.
pub fn mmr_order(pool: &[RetrievalCandidate], lambda: f64, max: usize) -> Vec<(usize, f64)> {
    let limit = max.min(pool.len());
    let mut selected: Vec<(usize, f64)> = Vec::with_capacity(limit);
    let mut remaining: Vec<usize> = (0..pool.len()).collect();
    // Highest similarity of each candidate to anything selected so far.
    let mut max_sim = vec![0.0_f64; pool.len()];

    while selected.len() < limit {
        let best = remaining
            .iter()
            .enumerate()
            .map(|(slot, &i)| {
                let novelty = if selected.is_empty() { 1.0 } else { 1.0 - max_sim[i] };
                let score = lambda * pool[i].relevance() + (1.0 - lambda) * novelty;
                (slot, i, score)
            })
            .max_by(|a, b| {
                a.2.partial_cmp(&b.2)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| pool[b.1].id().cmp(pool[a.1].id()))
            });
        let Some((slot, pick, score)) = best else {
            break;
        };
        remaining.swap_remove(slot);
        selected.push((pick, score));

        for &i in &remaining {
            let sim = cosine_similarity(&pool[i].embedding, &pool[pick].embedding);
            if sim > max_sim[i] {
                max_sim[i] = sim;
            }
        }
    }
    selected
}
