//! Extractive answer composition over retrieved passages.
//!
//! The pipeline is pure and synchronous: split the top passages into sentences,
//! tokenize the question, score each sentence by lexical overlap, then select a
//! short, deduplicated answer. Every input maps to a defined string; fallbacks
//! cover the empty passage list and passages without terminated sentences.

mod score;
mod sentences;
mod tokens;

use crate::retrieval::RetrievedPassage;

/// Fixed message returned when the retrieval API found nothing.
pub const NO_RESULTS_MESSAGE: &str =
    "No relevant passages were found for your question. Try rephrasing it and ask again.";
/// Fixed prefix prepended to every composed answer.
pub const ANSWER_LEAD_IN: &str = "Based on the retrieved passages: ";

/// Passages pooled for sentence selection; the rest only feed the sources display.
const MAX_POOLED_PASSAGES: usize = 3;
/// Upper bound on sentences joined into the answer.
const MAX_SELECTED_SENTENCES: usize = 2;
/// Character cap applied to the excerpt fallback.
const EXCERPT_CHAR_CAP: usize = 320;

/// Outcome of one composition pass, before rendering.
///
/// Each fallback branch is a distinct variant so callers and tests can observe
/// which path produced the answer instead of inspecting the final string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composition {
    /// The retrieval API returned no passages at all.
    NoPassages,
    /// Passages existed but contained no terminated sentence; holds the capped
    /// excerpt of the highest-ranked passage.
    Excerpt(String),
    /// Sentences were pooled, scored, and selected.
    Selected(Vec<String>),
}

/// Run the composition pipeline over the question and the ordered passage list.
pub fn compose(question: &str, passages: &[RetrievedPassage]) -> Composition {
    if passages.is_empty() {
        return Composition::NoPassages;
    }

    let pooled: Vec<String> = passages
        .iter()
        .take(MAX_POOLED_PASSAGES)
        .flat_map(|passage| sentences::split_sentences(&passage.text))
        .collect();

    if pooled.is_empty() {
        // Passages are ordered by descending relevance, so the first is the
        // best source for a raw excerpt.
        return Composition::Excerpt(excerpt(&passages[0].text));
    }

    let tokens = tokens::tokenize_question(question);
    let mut scored: Vec<(String, u32)> = pooled
        .into_iter()
        .map(|sentence| {
            let score = score::score_sentence(&tokens, &sentence);
            (sentence, score)
        })
        .collect();

    let has_signal = scored.iter().any(|(_, score)| *score > 0);
    if has_signal {
        // Stable sort: descending score, then shorter sentences first. Without
        // any signal the pooled order already reflects retrieval relevance.
        scored.sort_by(|a, b| {
            b.1.cmp(&a.1)
                .then_with(|| a.0.chars().count().cmp(&b.0.chars().count()))
        });
    }

    let mut selected = Vec::with_capacity(MAX_SELECTED_SENTENCES);
    for (sentence, _) in scored {
        if selected.len() == MAX_SELECTED_SENTENCES {
            break;
        }
        if !selected.contains(&sentence) {
            selected.push(sentence);
        }
    }

    Composition::Selected(selected)
}

/// Render a composition outcome into the final answer string.
pub fn render(composition: &Composition) -> String {
    match composition {
        Composition::NoPassages => NO_RESULTS_MESSAGE.to_string(),
        Composition::Excerpt(excerpt) => format!("{ANSWER_LEAD_IN}{excerpt}"),
        Composition::Selected(sentences) => {
            format!("{ANSWER_LEAD_IN}{}", sentences.join(" "))
        }
    }
}

/// Compose and render in one step.
pub fn compose_answer(question: &str, passages: &[RetrievedPassage]) -> String {
    render(&compose(question, passages))
}

fn excerpt(text: &str) -> String {
    let cleaned = text.trim();
    let mut chars = cleaned.chars();
    let capped: String = chars.by_ref().take(EXCERPT_CHAR_CAP).collect();
    if chars.next().is_none() {
        capped
    } else {
        format!("{}...", capped.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passage(text: &str) -> RetrievedPassage {
        RetrievedPassage {
            chunk_id: "c-1".into(),
            document_id: "doc-1".into(),
            dataset_id: "ds-1".into(),
            score: 0.9,
            text: text.into(),
            source_uri: None,
            meta: None,
        }
    }

    #[test]
    fn empty_passage_list_yields_no_results_message() {
        assert_eq!(compose("hello", &[]), Composition::NoPassages);
        assert_eq!(compose_answer("hello", &[]), NO_RESULTS_MESSAGE);
    }

    #[test]
    fn matching_sentence_is_selected_first() {
        let passages = [passage(
            "Refunds are processed within 30 days. Shipping is free over $50.",
        )];
        let answer = compose_answer("what is the refund window", &passages);
        assert!(answer.starts_with(ANSWER_LEAD_IN));
        assert!(
            answer[ANSWER_LEAD_IN.len()..].starts_with("Refunds are processed within 30 days.")
        );
    }

    #[test]
    fn unterminated_passages_fall_back_to_excerpt() {
        let passages = [passage("no punctuation here at all")];
        let answer = compose_answer("anything", &passages);
        assert_eq!(
            answer,
            format!("{ANSWER_LEAD_IN}no punctuation here at all")
        );
    }

    #[test]
    fn excerpt_is_capped_with_ellipsis() {
        let long = "x".repeat(400);
        let passages = [passage(&long)];
        match compose("anything", &passages) {
            Composition::Excerpt(excerpt) => {
                assert_eq!(excerpt, format!("{}...", "x".repeat(320)));
            }
            other => panic!("expected excerpt fallback, got {other:?}"),
        }
    }

    #[test]
    fn excerpt_cap_counts_characters_not_bytes() {
        let long = "退".repeat(400);
        let passages = [passage(&long)];
        match compose("anything", &passages) {
            Composition::Excerpt(excerpt) => {
                assert_eq!(excerpt.chars().count(), 320 + 3);
            }
            other => panic!("expected excerpt fallback, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_sentences_appear_at_most_once() {
        let passages = [
            passage("The cache is warmed nightly. Backups run hourly."),
            passage("The cache is warmed nightly. Backups run hourly."),
        ];
        match compose("cache backups", &passages) {
            Composition::Selected(selected) => {
                assert_eq!(selected.len(), 2);
                assert_ne!(selected[0], selected[1]);
            }
            other => panic!("expected selection, got {other:?}"),
        }
    }

    #[test]
    fn tie_break_prefers_shorter_sentence() {
        let passages = [passage(
            "The refund policy covers defective items shipped internationally too. Refunds take 30 days.",
        )];
        match compose("refund", &passages) {
            Composition::Selected(selected) => {
                assert_eq!(selected[0], "Refunds take 30 days.");
            }
            other => panic!("expected selection, got {other:?}"),
        }
    }

    #[test]
    fn no_signal_preserves_pooled_order() {
        let passages = [passage("Alpha comes first. Beta follows after that one.")];
        match compose("zzz-unrelated", &passages) {
            Composition::Selected(selected) => {
                assert_eq!(selected, vec!["Alpha comes first.", "Beta follows after that one."]);
            }
            other => panic!("expected selection, got {other:?}"),
        }
    }

    #[test]
    fn only_first_three_passages_are_pooled() {
        let passages = [
            passage("One has nothing useful."),
            passage("Two has nothing useful."),
            passage("Three has nothing useful."),
            passage("The answer about refunds hides in passage four."),
        ];
        match compose("refunds", &passages) {
            Composition::Selected(selected) => {
                assert!(selected.iter().all(|sentence| !sentence.contains("four")));
            }
            other => panic!("expected selection, got {other:?}"),
        }
    }

    #[test]
    fn composition_is_idempotent() {
        let passages = [passage("Refunds are processed within 30 days. Shipping is free.")];
        let first = compose_answer("refund window", &passages);
        let second = compose_answer("refund window", &passages);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn non_ascii_question_matches_verbatim() {
        let passages = [passage("退款三十天内处理。运费超过五十元免费。")];
        match compose("退款", &passages) {
            Composition::Selected(selected) => {
                assert_eq!(selected[0], "退款三十天内处理。");
            }
            other => panic!("expected selection, got {other:?}"),
        }
    }
}
