use crate::models::TranslationMap;

/// Pair the i-th word with the i-th translation.
///
/// Pairing stops at the shorter list. A repeated word keeps its first slot and
/// takes the later translation.
pub fn assemble<W, T>(words: &[W], translations: &[T]) -> TranslationMap
where
    W: AsRef<str>,
    T: AsRef<str>,
{
    if words.len() != translations.len() {
        tracing::debug!(
            "Pairing {} words with {} translations, extra entries are ignored",
            words.len(),
            translations.len()
        );
    }

    let mut map = TranslationMap::new();
    for (word, translation) in words.iter().zip(translations) {
        let word: &str = word.as_ref();
        let translation: &str = translation.as_ref();
        map.insert(word, translation.to_string());
    }
    map
}
