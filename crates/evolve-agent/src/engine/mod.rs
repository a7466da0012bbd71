//! `AlphaEvolveAgent`: the propose → verify → refine loop.

mod expansion;
mod state;
pub mod synthesis;

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use evolve_core::config::AgentConfig;
use evolve_core::models::{AgentAnswer, Draft, Evidence};
use evolve_core::traits::{Memory, Retriever, Verifier};

use self::state::LoopState;

/// Answers from retrieved evidence or refuses.
///
/// Holds no state across `ask` calls apart from the trace of the most recent
/// call and whatever the memory collaborator keeps.
pub struct AlphaEvolveAgent {
    retriever: Box<dyn Retriever>,
    verifier: Box<dyn Verifier>,
    memory: Option<Arc<dyn Memory>>,
    config: AgentConfig,
    trace_log: Vec<String>,
}

impl AlphaEvolveAgent {
    /// Create an agent. Iteration and idea counts below one are raised to one.
    pub fn new(
        retriever: Box<dyn Retriever>,
        verifier: Box<dyn Verifier>,
        config: AgentConfig,
    ) -> Self {
        Self {
            retriever,
            verifier,
            memory: None,
            config: config.normalized(),
            trace_log: Vec::new(),
        }
    }

    /// Attach a memory collaborator notified once per `ask`.
    pub fn with_memory(mut self, memory: Arc<dyn Memory>) -> Self {
        self.memory = Some(memory);
        self
    }

    /// The effective (coerced) configuration.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn verifier(&self) -> &dyn Verifier {
        self.verifier.as_ref()
    }

    pub fn retriever(&self) -> &dyn Retriever {
        self.retriever.as_ref()
    }

    /// Trace lines of the most recent `ask`. Empty unless tracing is enabled.
    pub fn trace(&self) -> &[String] {
        &self.trace_log
    }

    /// Answer `query` from evidence, or refuse. Never fails.
    pub fn ask(&mut self, query: &str) -> AgentAnswer {
        self.trace_log.clear();
        let max_iters = self.config.max_iters;
        let threshold = self.config.accept_threshold;

        let mut best: Option<Draft> = None;
        let mut state = LoopState::Proposing {
            iteration: 0,
            evidence: self.initial_evidence(query),
        };

        loop {
            state = match state {
                LoopState::Proposing { iteration, evidence } => {
                    let candidates = (0..self.config.ideas_per_iteration as usize)
                        .map(|variant| {
                            synthesis::propose(
                                &evidence,
                                variant,
                                self.config.max_citations,
                                self.config.inline_citations,
                            )
                        })
                        .collect();
                    LoopState::Scoring { iteration, candidates }
                }

                LoopState::Scoring { iteration, mut candidates } => {
                    for draft in candidates.iter_mut() {
                        draft.confidence = self.score_draft(query, draft);
                        if best.as_ref().map_or(true, |b| draft.confidence > b.confidence) {
                            best = Some(draft.clone());
                        }
                    }
                    debug!(
                        iteration = iteration + 1,
                        scores = %format_scores(candidates.iter().map(|d| d.confidence)),
                        "candidates scored"
                    );

                    match candidates.iter().position(|d| d.confidence >= threshold) {
                        Some(pos) => {
                            self.record_trace(|| {
                                format!(
                                    "Iter {}: accept early with scores [{}]",
                                    iteration + 1,
                                    format_scores(candidates.iter().map(|d| d.confidence))
                                )
                            });
                            LoopState::Accepted {
                                iteration,
                                draft: candidates.swap_remove(pos),
                            }
                        }
                        None => LoopState::Refining { iteration, candidates },
                    }
                }

                LoopState::Refining { iteration, candidates } => {
                    let has_next = iteration + 1 < max_iters;
                    let (top_confidence, evidence, missing) =
                        self.refine(query, &candidates, has_next);

                    self.record_trace(|| {
                        let mut scores: Vec<f64> = candidates.iter().map(|d| d.confidence).collect();
                        scores.sort_by(|a, b| b.total_cmp(a));
                        let missing = if missing.is_empty() {
                            "-".to_string()
                        } else {
                            missing.iter().cloned().collect::<Vec<_>>().join(", ")
                        };
                        format!(
                            "Iter {}: top={:.2} candidates=[{}] missing=[{}]",
                            iteration + 1,
                            top_confidence,
                            format_scores(scores.into_iter()),
                            missing
                        )
                    });

                    if has_next {
                        LoopState::Proposing {
                            iteration: iteration + 1,
                            evidence,
                        }
                    } else {
                        LoopState::Refused {
                            iterations: iteration + 1,
                        }
                    }
                }

                LoopState::Accepted { iteration, draft } => {
                    info!(
                        confidence = format!("{:.3}", draft.confidence),
                        citations = draft.citations.len(),
                        iterations = iteration + 1,
                        "Answer accepted"
                    );
                    self.notify_memory(query, &draft.answer, true);
                    return AgentAnswer {
                        answer: draft.answer,
                        citations: draft.citations,
                        confidence: draft.confidence,
                        accepted: true,
                        iterations: iteration + 1,
                    };
                }

                LoopState::Refused { iterations } => {
                    let answer = synthesis::refusal(best.as_ref());
                    let (best_answer, citations, confidence) = match best {
                        Some(draft) => (draft.answer, draft.citations, draft.confidence),
                        None => (String::new(), Vec::new(), 0.0),
                    };
                    info!(
                        best_confidence = format!("{:.3}", confidence),
                        threshold,
                        iterations,
                        "Refusing: no draft reached the acceptance threshold"
                    );
                    // Memory keeps the best draft itself, not the refusal wording
                    self.notify_memory(query, &best_answer, false);
                    return AgentAnswer {
                        answer,
                        citations,
                        confidence,
                        accepted: false,
                        iterations,
                    };
                }
            };
        }
    }

    fn initial_evidence(&self, query: &str) -> Vec<Evidence> {
        match self.retriever.search(query, self.config.initial_k) {
            Ok(evidence) => evidence,
            Err(e) => {
                warn!(error = %e, "initial retrieval failed: proceeding without evidence");
                Vec::new()
            }
        }
    }

    /// Verifier score, pinned to 0 for drafts without citations.
    fn score_draft(&self, query: &str, draft: &Draft) -> f64 {
        if draft.citations.is_empty() {
            return 0.0;
        }
        let score = self.verifier.score(query, draft);
        if score.is_finite() {
            score.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Next iteration's evidence: the top draft's citations re-ranked, plus
    /// supplementary hits for its missing terms when `expand` is set.
    fn refine(
        &self,
        query: &str,
        candidates: &[Draft],
        expand: bool,
    ) -> (f64, Vec<Evidence>, BTreeSet<String>) {
        let Some(top) = top_candidate(candidates) else {
            return (0.0, Vec::new(), BTreeSet::new());
        };

        let mut evidence = top.citations.clone();
        evidence.sort_by(|a, b| b.score.total_cmp(&a.score));
        evidence.truncate(self.config.max_citations);

        let missing = self
            .verifier
            .as_analyzer()
            .map(|analyzer| analyzer.analyze(query, top).missing_terms)
            .unwrap_or_default();

        if expand && !missing.is_empty() {
            let outcome = expansion::expand(
                self.retriever.as_ref(),
                missing.iter().take(self.config.expansion_terms),
                self.config.expansion_k,
                &mut evidence,
            );
            debug!(
                added = outcome.added,
                skipped = outcome.skipped,
                aborted = outcome.aborted,
                "refinement expansion"
            );
        }

        (top.confidence, evidence, missing)
    }

    fn record_trace<F: FnOnce() -> String>(&mut self, line: F) {
        if self.config.trace {
            self.trace_log.push(line());
        }
    }

    fn notify_memory(&self, query: &str, answer: &str, accepted: bool) {
        if let Some(memory) = &self.memory {
            memory.remember(query, answer, accepted);
        }
    }
}

/// Highest-confidence draft; the earliest wins ties.
fn top_candidate(candidates: &[Draft]) -> Option<&Draft> {
    candidates.iter().fold(None, |top: Option<&Draft>, d| match top {
        Some(t) if t.confidence >= d.confidence => Some(t),
        _ => Some(d),
    })
}

fn format_scores<I: Iterator<Item = f64>>(scores: I) -> String {
    scores.map(|s| format!("{s:.2}")).collect::<Vec<_>>().join(", ")
}
