//! FairAgent: one question in, one calibrated answer out.

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::NaiveDate;
use fair_calibration::{
    base_confidence, count_reasoning_steps, AnswerValidator, CalibrationInputs,
    ConfidenceCalibrator, ValidationReport,
};
use fair_core::config::FairConfig;
use fair_core::errors::{FairError, GenerationError, RetrievalError};
use fair_core::models::{
    ConfidenceBreakdown, Domain, EvidenceSet, EvidenceSource, GenerationStatus, Query,
};
use fair_core::traits::{
    GenerationRequest, IDomainClassifier, IEvidenceFetcher, IGenerator, ISafetyReviewer,
    PassthroughSafetyReviewer,
};
use fair_embeddings::{EmbeddingEngine, ExcludedSource};
use fair_retrieval::store::load_corpus;
use fair_retrieval::{
    CorpusLoadReport, EvidenceStore, IndexSnapshot, RetrievalEngine, RetrievalOutcome,
    SnapshotHandle,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::LexiconDomainClassifier;
use crate::prompt::build_prompt;
use crate::telemetry::events;

/// A question, optionally with its domain already known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRequest {
    pub query: String,
    #[serde(default)]
    pub domain: Option<Domain>,
}

impl AgentRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            domain: None,
        }
    }

    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = Some(domain);
        self
    }
}

/// Retrieval figures reported alongside an answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RetrievalStats {
    pub policy_threshold: f64,
    pub effective_threshold: f64,
    pub relaxation_steps: u32,
    pub pool_size: usize,
    pub admitted: usize,
    pub fetched_count: usize,
    pub snapshot_generation: u64,
}

impl From<&RetrievalOutcome> for RetrievalStats {
    fn from(outcome: &RetrievalOutcome) -> Self {
        Self {
            policy_threshold: outcome.threshold.policy_threshold,
            effective_threshold: outcome.threshold.effective_threshold,
            relaxation_steps: outcome.threshold.relaxation_steps,
            pool_size: outcome.pool_size,
            admitted: outcome.threshold.admitted,
            fetched_count: outcome.fetched_count,
            snapshot_generation: outcome.snapshot_generation,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentResponse {
    /// The query as retrieval saw it, expansion included.
    pub query: Query,
    pub domain: Domain,
    /// `None` when generation timed out or the generator was unavailable.
    pub answer: Option<String>,
    pub evidence: EvidenceSet,
    pub confidence: ConfidenceBreakdown,
    pub validation: Option<ValidationReport>,
    pub generation_error: Option<GenerationError>,
    pub retrieval: RetrievalStats,
}

impl AgentResponse {
    /// Whether the answer was withheld and only evidence is returned.
    pub fn is_degraded(&self) -> bool {
        self.answer.is_none()
    }
}

/// Result of installing a new snapshot generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RebuildReport {
    pub generation: u64,
    pub replaced_generation: u64,
    pub indexed: usize,
    pub excluded: Vec<ExcludedSource>,
}

/// What loading a corpus file produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusIndexReport {
    pub corpus: CorpusLoadReport,
    pub index: RebuildReport,
}

pub struct FairAgent {
    config: FairConfig,
    embeddings: Arc<EmbeddingEngine>,
    retrieval: Arc<RetrievalEngine>,
    snapshots: SnapshotHandle,
    rebuild_lock: Mutex<()>,
    generator: Arc<dyn IGenerator>,
    classifier: Arc<dyn IDomainClassifier>,
    safety: Arc<dyn ISafetyReviewer>,
    fetcher: Option<Arc<dyn IEvidenceFetcher>>,
    reference_date: Option<NaiveDate>,
    validator: AnswerValidator,
    calibrator: ConfidenceCalibrator,
}

impl FairAgent {
    /// Validate `config` and start with an empty snapshot (generation 0).
    ///
    /// With the Ollama embedding provider this builds a blocking HTTP
    /// client, so call it outside an async context (e.g. `spawn_blocking`).
    pub fn new(config: FairConfig, generator: Arc<dyn IGenerator>) -> Result<Self, FairError> {
        config.validate()?;
        let embeddings = Arc::new(EmbeddingEngine::new(&config.embedding));
        let snapshots = SnapshotHandle::new(IndexSnapshot::empty(&embeddings));
        let retrieval = Arc::new(RetrievalEngine::new(&config, Arc::clone(&embeddings)));
        Ok(Self {
            classifier: Arc::new(LexiconDomainClassifier::new(config.expansion.clone())),
            safety: Arc::new(PassthroughSafetyReviewer::default()),
            validator: AnswerValidator::from_config(&config.calibration),
            calibrator: ConfidenceCalibrator::new(config.calibration.clone()),
            fetcher: None,
            reference_date: None,
            rebuild_lock: Mutex::new(()),
            config,
            embeddings,
            retrieval,
            snapshots,
            generator,
        })
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn IDomainClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_safety_reviewer(mut self, safety: Arc<dyn ISafetyReviewer>) -> Self {
        self.safety = safety;
        self
    }

    pub fn with_fetcher(mut self, fetcher: Arc<dyn IEvidenceFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self.rebuild_retrieval();
        self
    }

    /// Pin "today" for recency scoring.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self.rebuild_retrieval();
        self
    }

    fn rebuild_retrieval(&mut self) {
        let mut engine = RetrievalEngine::new(&self.config, Arc::clone(&self.embeddings));
        if let Some(fetcher) = &self.fetcher {
            engine = engine.with_fetcher(Arc::clone(fetcher));
        }
        if let Some(date) = self.reference_date {
            engine = engine.with_reference_date(date);
        }
        self.retrieval = Arc::new(engine);
    }

    pub fn config(&self) -> &FairConfig {
        &self.config
    }

    pub fn embeddings(&self) -> &Arc<EmbeddingEngine> {
        &self.embeddings
    }

    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    pub fn current_snapshot(&self) -> Arc<IndexSnapshot> {
        self.snapshots.current()
    }

    /// Answer one question.
    ///
    /// Retrieval errors (empty query, model mismatch) fail the call.
    /// Generation failures do not: the response carries the evidence, no
    /// answer, and a confidence computed without reasoning credit.
    pub async fn answer(&self, request: AgentRequest) -> Result<AgentResponse, FairError> {
        let domain = request
            .domain
            .unwrap_or_else(|| self.classifier.classify(&request.query));
        let query = Query::new(request.query, domain);

        let snapshot = self.snapshots.current();
        let retrieval = Arc::clone(&self.retrieval);
        let outcome = tokio::task::spawn_blocking(move || retrieval.retrieve(&snapshot, query))
            .await
            .map_err(|e| RetrievalError::TaskFailed {
                reason: e.to_string(),
            })??;
        self.log_degradations();

        let prompt = build_prompt(&outcome.query, &outcome.evidence);
        debug!(chars = prompt.len(), generator = self.generator.name(), "prompt built");
        let generated = self.generate(prompt).await;

        let evidence_count = outcome.evidence.len();
        let fetched_count = outcome.evidence.fetched_count();
        let (answer, validation, generation_error, inputs) = match generated {
            Ok(text) => {
                let review = self.safety.review(&text, domain);
                let report = self.validator.validate(
                    &review.annotated_text,
                    &outcome.query.text,
                    domain,
                    evidence_count,
                );
                let inputs = CalibrationInputs {
                    generation: GenerationStatus::Completed,
                    base_confidence: base_confidence(
                        &review.annotated_text,
                        &self.config.calibration,
                    ),
                    evidence_count,
                    fetched_count,
                    reasoning_steps: count_reasoning_steps(&review.annotated_text),
                    safety_score: review.safety_score,
                    validation_adjustment: report.confidence_adjustment,
                };
                let corrected = self
                    .validator
                    .apply_corrections(&review.annotated_text, &report);
                (Some(corrected), Some(report), None, inputs)
            }
            Err(err) => {
                events::generation_degraded(&err, evidence_count);
                let status = GenerationStatus::from(&err);
                let inputs = CalibrationInputs::failed(status, evidence_count, fetched_count);
                (None, None, Some(err), inputs)
            }
        };

        let confidence = self.calibrator.calibrate(&inputs);
        events::answer_completed(
            domain,
            evidence_count,
            confidence.confidence(),
            validation.as_ref().map(|v| v.is_valid),
        );

        Ok(AgentResponse {
            retrieval: RetrievalStats::from(&outcome),
            query: outcome.query,
            domain,
            answer,
            evidence: outcome.evidence,
            confidence,
            validation,
            generation_error,
        })
    }

    /// Run the generator on the blocking pool, bounded by the configured timeout.
    ///
    /// A timed-out call is abandoned, not cancelled; its result is discarded.
    async fn generate(&self, prompt: String) -> Result<String, GenerationError> {
        let cfg = &self.config.generation;
        let request = GenerationRequest {
            prompt,
            temperature: cfg.temperature,
            max_tokens: cfg.max_tokens,
        };
        let generator = Arc::clone(&self.generator);
        let task = tokio::task::spawn_blocking(move || generator.generate(&request));

        match tokio::time::timeout(Duration::from_millis(cfg.timeout_ms), task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join)) => Err(GenerationError::Unavailable {
                reason: format!("generator task failed: {join}"),
            }),
            Err(_) => Err(GenerationError::Timeout {
                elapsed_ms: cfg.timeout_ms,
            }),
        }
    }

    /// Build a complete snapshot from `sources` under the next generation
    /// number and swap it in. Blocks while embedding.
    pub fn rebuild(&self, sources: Vec<EvidenceSource>) -> RebuildReport {
        let _guard = self.rebuild_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let generation = self.snapshots.next_generation();
        let store = EvidenceStore::new(sources);
        let snapshot = IndexSnapshot::build(generation, store, &self.embeddings);
        let indexed = snapshot.store().len();
        let excluded = snapshot.excluded().to_vec();
        self.log_degradations();

        let replaced = self.snapshots.swap(snapshot);
        events::index_rebuilt(generation, indexed, excluded.len());
        RebuildReport {
            generation,
            replaced_generation: replaced.generation(),
            indexed,
            excluded,
        }
    }

    /// Load a corpus file and rebuild from it.
    pub fn load_corpus(&self, path: &Path) -> Result<CorpusIndexReport, FairError> {
        let (sources, report) = load_corpus(path)?;
        let shown = path.display().to_string();
        events::corpus_loaded(&shown, report.loaded, report.skipped.len());
        let index = self.rebuild(sources);
        Ok(CorpusIndexReport {
            corpus: report,
            index,
        })
    }

    /// Drop every cached embedding and re-embed the current sources.
    pub fn clear_cache_and_rebuild(&self) -> RebuildReport {
        self.embeddings.cache().clear();
        let sources = self
            .snapshots
            .current()
            .store()
            .sources()
            .iter()
            .map(|s| EvidenceSource::clone(s))
            .collect();
        self.rebuild(sources)
    }

    fn log_degradations(&self) {
        for event in self.embeddings.drain_degradation_events() {
            events::embedding_degraded(&event);
        }
    }
}
