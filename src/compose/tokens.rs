//! Query tokenization for sentence scoring.

/// Extract matchable terms from the user's question.
///
/// Primary path: lower-case and split on runs of anything other than ASCII
/// alphanumerics, keeping tokens longer than two characters. When that yields
/// nothing (the question is entirely non-ASCII, or too short), the trimmed
/// whole question becomes a single token so substring containment can still
/// match scripts without word boundaries. A blank question yields no tokens.
pub(crate) fn tokenize_question(question: &str) -> Vec<String> {
    let tokens: Vec<String> = question
        .to_lowercase()
        .split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter(|token| token.len() > 2)
        .map(str::to_string)
        .collect();
    if !tokens.is_empty() {
        return tokens;
    }

    let whole = question.trim();
    if whole.is_empty() {
        Vec::new()
    } else {
        vec![whole.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::tokenize_question;

    #[test]
    fn lowercases_and_splits_on_non_alphanumerics() {
        let tokens = tokenize_question("What is the Refund-Window?");
        assert_eq!(tokens, vec!["what", "the", "refund", "window"]);
    }

    #[test]
    fn drops_short_tokens_when_longer_ones_exist() {
        let tokens = tokenize_question("is the gateway up");
        assert_eq!(tokens, vec!["the", "gateway"]);
    }

    #[test]
    fn short_only_questions_fall_back_to_the_whole_string() {
        assert_eq!(tokenize_question("is it on a vm"), vec!["is it on a vm"]);
    }

    #[test]
    fn falls_back_to_whole_question_for_non_ascii_scripts() {
        assert_eq!(tokenize_question("退款期限是多久"), vec!["退款期限是多久"]);
    }

    #[test]
    fn fallback_preserves_original_casing() {
        assert_eq!(tokenize_question(" Hi "), vec!["Hi"]);
    }

    #[test]
    fn blank_question_yields_no_tokens() {
        assert!(tokenize_question("").is_empty());
        assert!(tokenize_question("   ").is_empty());
    }
}
