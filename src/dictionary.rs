use crate::models::Language;
use anyhow::{Context, Result};
use std::collections::HashMap;

/// On-disk dictionary shape: `{ "<code>": [ { "word": "ipa", ... } ] }`,
/// one file per language code.
type DictFile = HashMap<String, Vec<HashMap<String, String>>>;

/// Look up the IPA transcription for `word` in the bundled dictionary of `lang`.
/// Exact match on the word key, language-specific casing preserved. Parses the
/// resource fresh on every call; run inside a blocking task to keep the UI
/// responsive.
pub fn lookup(lang: Language, word: &str) -> Result<Option<String>> {
    lookup_in_json(lang.bundled_json(), lang.code(), word)
}

fn lookup_in_json(json: &str, code: &str, word: &str) -> Result<Option<String>> {
    let dict: DictFile = serde_json::from_str(json)
        .with_context(|| format!("malformed dictionary for {}", code))?;
    let entries = dict
        .get(code)
        .with_context(|| format!("dictionary is not keyed by {}", code))?;
    Ok(entries.first().and_then(|m| m.get(word).cloned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_word_returns_exact_ipa() {
        assert_eq!(
            lookup(Language::EnUs, "hello").unwrap(),
            Some("həˈloʊ".to_string())
        );
        assert_eq!(
            lookup(Language::FrFr, "bonjour").unwrap(),
            Some("bɔ̃.ʒuʁ".to_string())
        );
    }

    #[test]
    fn absent_word_returns_none() {
        assert_eq!(lookup(Language::EnUs, "zzyzx").unwrap(), None);
        // Exact match: casing matters.
        assert_eq!(lookup(Language::DeDe, "katze").unwrap(), None);
        assert_eq!(
            lookup(Language::DeDe, "Katze").unwrap(),
            Some("ˈkatsə".to_string())
        );
    }

    #[test]
    fn every_bundled_dictionary_parses_under_its_own_code() {
        for lang in Language::all() {
            let dict: DictFile = serde_json::from_str(lang.bundled_json()).unwrap();
            let entries = dict.get(lang.code()).unwrap();
            assert!(!entries[0].is_empty(), "{} dictionary is empty", lang.code());
        }
    }

    #[test]
    fn malformed_dictionary_is_an_error() {
        assert!(lookup_in_json("not json", "en_US", "hello").is_err());
        assert!(lookup_in_json(r#"{"fr_FR": [{}]}"#, "en_US", "hello").is_err());
    }

    #[test]
    fn empty_entry_list_is_a_miss() {
        assert_eq!(
            lookup_in_json(r#"{"en_US": []}"#, "en_US", "hello").unwrap(),
            None
        );
    }
}
