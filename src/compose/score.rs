//! Lexical-overlap scoring of candidate sentences against query tokens.

/// Score one sentence against the query tokens.
///
/// ASCII-alphanumeric tokens contribute 1 point on a case-insensitive substring
/// match. Any other token is matched verbatim and contributes 2 points; such
/// tokens are rarer and a verbatim hit is the more discriminative signal in
/// scripts the tokenizer cannot split on word boundaries. A score of zero
/// means no lexical overlap was found.
pub(crate) fn score_sentence(tokens: &[String], sentence: &str) -> u32 {
    let lowered = sentence.to_lowercase();
    tokens
        .iter()
        .map(|token| {
            if token.chars().all(|ch| ch.is_ascii_alphanumeric()) {
                u32::from(lowered.contains(&token.to_lowercase()))
            } else if sentence.contains(token.as_str()) {
                2
            } else {
                0
            }
        })
        .sum()
}
