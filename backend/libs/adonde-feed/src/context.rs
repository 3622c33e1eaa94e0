//! Display context
//!
//! The listing screens used to read language and region selection from
//! ambient globals persisted in local storage. Here the same trio is an
//! explicit value passed into each merge call, so the merger stays pure and
//! independently testable.

use serde::{Deserialize, Serialize};

/// UI language. Spanish is the app default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Es,
}

/// Active region/state filter plus language, stamped onto synthesized
/// sponsored cards so they match the surrounding results.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayContext {
    #[serde(default)]
    pub language: Language,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl DisplayContext {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            region: None,
            state: None,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_spanish_no_filter() {
        let ctx = DisplayContext::default();
        assert_eq!(ctx.language, Language::Es);
        assert!(ctx.region.is_none());
        assert!(ctx.state.is_none());
    }

    #[test]
    fn test_language_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
        assert_eq!(serde_json::to_string(&Language::Es).unwrap(), "\"es\"");
    }

    #[test]
    fn test_builder_chain() {
        let ctx = DisplayContext::new(Language::En)
            .with_region("Quintana Roo")
            .with_state("Tulum");
        assert_eq!(ctx.region.as_deref(), Some("Quintana Roo"));
        assert_eq!(ctx.state.as_deref(), Some("Tulum"));
    }
}
