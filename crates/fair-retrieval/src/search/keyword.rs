//! Okapi BM25 over the candidate pool.

use std::collections::HashSet;

use fair_core::text::content_terms;

use crate::snapshot::KeywordDoc;

/// Distinct content terms of the (expanded) query, in first-seen order.
pub fn query_terms(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    content_terms(text)
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

/// BM25 score of every document in `docs` for `terms`.
///
/// Document frequencies and the average length come from `docs` itself,
/// so scores are only comparable within one pool.
pub fn bm25_scores(terms: &[String], docs: &[&KeywordDoc], k1: f64, b: f64) -> Vec<f64> {
    if docs.is_empty() {
        return Vec::new();
    }
    let n = docs.len() as f64;
    let total_len: usize = docs.iter().map(|d| d.length).sum();
    let avg_len = (total_len as f64 / n).max(1.0);

    let idf: Vec<f64> = terms
        .iter()
        .map(|term| {
            let df = docs.iter().filter(|d| d.contains(term)).count() as f64;
            (1.0 + (n - df + 0.5) / (df + 0.5)).ln()
        })
        .collect();

    docs.iter()
        .map(|doc| {
            let len_norm = 1.0 - b + b * doc.length as f64 / avg_len;
            terms
                .iter()
                .zip(&idf)
                .map(|(term, idf)| {
                    let tf = f64::from(doc.tf(term));
                    if tf == 0.0 {
                        0.0
                    } else {
                        idf * tf * (k1 + 1.0) / (tf + k1 * len_norm)
                    }
                })
                .sum()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<KeywordDoc> {
        texts.iter().map(|t| KeywordDoc::from_text(t)).collect()
    }

    #[test]
    fn query_terms_deduplicated_without_stopwords() {
        assert_eq!(
            query_terms("What is interest on interest?"),
            vec!["interest".to_string()]
        );
    }

    #[test]
    fn matching_document_scores_higher() {
        let owned = docs(&[
            "compound interest grows savings",
            "a budget tracks monthly expenses",
        ]);
        let refs: Vec<&KeywordDoc> = owned.iter().collect();
        let scores = bm25_scores(&query_terms("compound interest"), &refs, 1.5, 0.75);
        assert!(scores[0] > 0.0);
        assert_eq!(scores[1], 0.0);
    }

    #[test]
    fn rarer_terms_weigh_more() {
        let owned = docs(&["interest rate", "interest yield", "interest apr"]);
        let refs: Vec<&KeywordDoc> = owned.iter().collect();
        let common = bm25_scores(&query_terms("interest"), &refs, 1.5, 0.75);
        let rare = bm25_scores(&query_terms("apr"), &refs, 1.5, 0.75);
        assert!(rare[2] > common[2]);
    }

    #[test]
    fn empty_pool_or_terms() {
        assert!(bm25_scores(&query_terms("x y"), &[], 1.5, 0.75).is_empty());
        let owned = docs(&["anything"]);
        let refs: Vec<&KeywordDoc> = owned.iter().collect();
        assert_eq!(bm25_scores(&[], &refs, 1.5, 0.75), vec![0.0]);
    }
}
