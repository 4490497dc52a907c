use serde::{Serialize, Deserialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en_US")]
    EnUs,
    #[serde(rename = "fr_FR")]
    FrFr,
    #[serde(rename = "de_DE")]
    DeDe,
    #[serde(rename = "es_ES")]
    EsEs,
}

impl Language {
    pub fn all() -> Vec<Language> {
        vec![Language::EnUs, Language::FrFr, Language::DeDe, Language::EsEs]
    }

    /// Language code used as the dictionary file key and the persisted `lang` value.
    pub fn code(&self) -> &'static str {
        match self {
            Language::EnUs => "en_US",
            Language::FrFr => "fr_FR",
            Language::DeDe => "de_DE",
            Language::EsEs => "es_ES",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::EnUs => "English (US)",
            Language::FrFr => "French",
            Language::DeDe => "German",
            Language::EsEs => "Spanish",
        }
    }

    /// Bundled dictionary resource for this language.
    pub fn bundled_json(&self) -> &'static str {
        match self {
            Language::EnUs => include_str!("../assets/dicts/en_US.json"),
            Language::FrFr => include_str!("../assets/dicts/fr_FR.json"),
            Language::DeDe => include_str!("../assets/dicts/de_DE.json"),
            Language::EsEs => include_str!("../assets/dicts/es_ES.json"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub word: String,
    pub ipa: String,
    pub lang: Language,
    #[serde(with = "chrono::serde::ts_seconds", default = "chrono::Utc::now")]
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl HistoryRecord {
    pub fn new(word: String, ipa: String, lang: Language) -> Self {
        HistoryRecord {
            word,
            ipa,
            lang,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Field equality on the (word, ipa, lang) triple; the timestamp is
    /// display-only and never part of the match.
    pub fn matches(&self, other: &HistoryRecord) -> bool {
        self.word == other.word && self.ipa == other.ipa && self.lang == other.lang
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_serializes_as_code() {
        for lang in Language::all() {
            let json = serde_json::to_string(&lang).unwrap();
            assert_eq!(json, format!("\"{}\"", lang.code()));
            let back: Language = serde_json::from_str(&json).unwrap();
            assert_eq!(back, lang);
        }
    }

    #[test]
    fn record_match_ignores_timestamp() {
        let mut a = HistoryRecord::new("hello".into(), "həˈloʊ".into(), Language::EnUs);
        let b = HistoryRecord::new("hello".into(), "həˈloʊ".into(), Language::EnUs);
        a.timestamp -= chrono::Duration::hours(3);
        assert!(a.matches(&b));
    }

    #[test]
    fn record_match_is_per_field() {
        let a = HistoryRecord::new("hello".into(), "həˈloʊ".into(), Language::EnUs);
        let other_lang = HistoryRecord::new("hello".into(), "həˈloʊ".into(), Language::DeDe);
        let other_ipa = HistoryRecord::new("hello".into(), "wɝld".into(), Language::EnUs);
        assert!(!a.matches(&other_lang));
        assert!(!a.matches(&other_ipa));
    }
}
