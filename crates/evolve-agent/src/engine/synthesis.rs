//! Extractive answer synthesis and refusal wording.

use std::collections::VecDeque;

use evolve_core::models::{Draft, Evidence};

/// Lead-in prefixed to every synthesized answer.
pub const LEAD_IN: &str = "Based on available evidence, ";

/// Answer of a draft proposed without any evidence.
pub const INSUFFICIENT_EVIDENCE_ANSWER: &str = "I don’t have enough evidence to answer. \
Please provide more context or allow me to consult additional sources.";

/// Refusal when the best draft cited nothing.
pub const NO_EVIDENCE_REFUSAL: &str = "I cannot answer confidently because I found no \
supporting evidence. I prefer to avoid guessing.";

/// Prefix of a refusal that still shows the best (insufficiently grounded) draft.
pub const LOW_CONFIDENCE_PREFACE: &str = "I’m not fully confident in an answer grounded in \
evidence. Here’s what the sources suggest, but it may be incomplete: ";

/// Build one candidate draft from the leading `max_citations` evidence items.
///
/// Variants differ only in ordering: line `idx` goes to the back when
/// `(idx + variant)` is even, to the front otherwise.
pub fn propose(
    evidence: &[Evidence],
    variant: usize,
    max_citations: usize,
    inline_citations: bool,
) -> Draft {
    let citations: Vec<Evidence> = evidence.iter().take(max_citations).cloned().collect();
    if citations.is_empty() {
        return Draft::new(INSUFFICIENT_EVIDENCE_ANSWER, citations);
    }

    let mut pieces: VecDeque<String> = VecDeque::with_capacity(citations.len());
    for (idx, ev) in citations.iter().enumerate() {
        let line = if inline_citations {
            format!("{} [{}]", ev.lead_line(), idx + 1)
        } else {
            ev.lead_line().to_string()
        };
        if (idx + variant) % 2 == 0 {
            pieces.push_back(line);
        } else {
            pieces.push_front(line);
        }
    }

    let synthesis = Vec::from(pieces).join(" ");
    Draft::new(format!("{LEAD_IN}{synthesis}"), citations)
}

/// Refusal text derived from the best draft seen.
pub fn refusal(best: Option<&Draft>) -> String {
    match best {
        Some(draft) if !draft.citations.is_empty() => {
            format!("{LOW_CONFIDENCE_PREFACE}{}", draft.answer)
        }
        _ => NO_EVIDENCE_REFUSAL.to_string(),
    }
}
