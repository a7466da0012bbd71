//! The evaluation pass: ask every question once, compare against ground truth.

use std::collections::BTreeSet;

use tracing::{debug, info};

use evolve_agent::AlphaEvolveAgent;
use evolve_core::models::{AgentAnswer, Draft};
use evolve_core::text::term_set;

use crate::confusion::{ratio, ConfusionCounts};
use crate::dataset::EvalRecord;
use crate::report::{EvalExample, EvalReport};
use crate::wilson::{wilson_interval, WILSON_Z_95};

/// Evaluate `agent` over `data`, classifying rows as accepted when the
/// returned confidence reaches `threshold`. Rows are processed in order.
pub fn evaluate(agent: &mut AlphaEvolveAgent, data: &[EvalRecord], threshold: f64) -> EvalReport {
    let mut confusion = ConfusionCounts::default();
    let mut examples = Vec::with_capacity(data.len());
    let mut accepts = 0u32;
    let mut sum_score = 0.0;
    let mut sum_coverage = 0.0;

    for record in data {
        let answer = agent.ask(&record.question);
        let accepted = answer.confidence >= threshold;
        if accepted {
            accepts += 1;
        }
        confusion.record(accepted, record.should_refuse);
        sum_score += answer.confidence;

        let (coverage, covered, missing) = query_coverage(agent, &record.question, &answer);
        sum_coverage += coverage;
        debug!(
            question = %record.question,
            accepted,
            should_refuse = record.should_refuse,
            score = answer.confidence,
            coverage,
            "evaluated"
        );

        examples.push(EvalExample {
            question: record.question.clone(),
            accepted,
            should_refuse: record.should_refuse,
            score: answer.confidence,
            coverage,
            covered_terms: covered.into_iter().collect(),
            missing_terms: missing.into_iter().collect(),
            answer: answer.answer,
            citations: answer.citations,
        });
    }

    let total = confusion.total();
    let mean = |sum: f64| if total == 0 { 0.0 } else { sum / f64::from(total) };

    let report = EvalReport {
        total,
        accept_rate: ratio(accepts, total),
        refusal_rate: ratio(total - accepts, total),
        avg_score: mean(sum_score),
        avg_query_coverage: mean(sum_coverage),
        precision_accept: confusion.precision(),
        precision_accept_ci: wilson_interval(
            confusion.tp_accept,
            confusion.tp_accept + confusion.fp_accept,
            WILSON_Z_95,
        ),
        recall_accept: confusion.recall(),
        recall_accept_ci: wilson_interval(confusion.tp_accept, confusion.total_positives, WILSON_Z_95),
        false_accept_rate: confusion.false_accept_rate(),
        false_accept_rate_ci: wilson_interval(
            confusion.fp_accept,
            confusion.total_negatives,
            WILSON_Z_95,
        ),
        confusion,
        examples,
    };

    info!(
        total,
        threshold,
        accept_rate = format!("{:.3}", report.accept_rate),
        fp_accept = confusion.fp_accept,
        precision = format!("{:.3}", report.precision_accept),
        "Evaluation complete"
    );
    report
}

/// Query-term coverage of a returned answer: the verifier's own analysis when
/// it offers one, plain term overlap otherwise.
fn query_coverage(
    agent: &AlphaEvolveAgent,
    question: &str,
    answer: &AgentAnswer,
) -> (f64, BTreeSet<String>, BTreeSet<String>) {
    let draft = Draft {
        answer: answer.answer.clone(),
        citations: answer.citations.clone(),
        confidence: answer.confidence,
    };

    if let Some(analyzer) = agent.verifier().as_analyzer() {
        let analysis = analyzer.analyze(question, &draft);
        return (analysis.score, analysis.covered_terms, analysis.missing_terms);
    }

    let answer_terms = term_set(&draft.grounding_text());
    let (covered, missing): (BTreeSet<String>, BTreeSet<String>) = term_set(question)
        .into_iter()
        .partition(|term| answer_terms.contains(term));
    let coverage = covered.len() as f64 / (covered.len() + missing.len()).max(1) as f64;
    (coverage.min(1.0), covered, missing)
}
