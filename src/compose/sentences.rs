//! Sentence segmentation for retrieved passage text.

/// Terminators that close a sentence unit, covering ASCII and full-width CJK punctuation.
const SENTENCE_TERMINATORS: [char; 6] = ['.', '!', '?', '。', '！', '？'];

/// Split passage text into sentence units, keeping each terminator with its sentence.
///
/// Whitespace runs are collapsed to single spaces before segmentation. Text after the
/// last terminator is not a complete sentence and is dropped; a passage with no
/// terminators therefore yields an empty list, which the composer treats as a signal
/// to fall back to a raw excerpt.
pub(crate) fn split_sentences(text: &str) -> Vec<String> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut current = String::new();
    for ch in normalized.chars() {
        current.push(ch);
        if SENTENCE_TERMINATORS.contains(&ch) {
            let unit = current.trim();
            if !unit.is_empty() {
                sentences.push(unit.to_string());
            }
            current.clear();
        }
    }
    sentences
}
