//! Sectioned rule sets.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::matcher::RuleTrie;
use crate::types::Section;

/// Pre-parsed PSL rules, split by section.
///
/// The JSON form is `{"ICANN_DOMAINS": {...}, "PRIVATE_DOMAINS": {...}}` with
/// each section in the nested trie mapping form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(rename = "ICANN_DOMAINS", default)]
    pub icann: RuleTrie,
    #[serde(rename = "PRIVATE_DOMAINS", default)]
    pub private: RuleTrie,
}

impl RuleSet {
    /// Create a rule set from already built section tries
    pub fn new(icann: RuleTrie, private: RuleTrie) -> Self {
        Self { icann, private }
    }

    /// Trie holding every rule that applies under `section`
    pub fn trie_for(&self, section: Section) -> RuleTrie {
        let mut trie = RuleTrie::new();
        if section.includes(Section::Icann) {
            trie.merge(&self.icann);
        }
        if section.includes(Section::Private) {
            trie.merge(&self.private);
        }
        trie
    }

    /// Check if both sections are empty
    pub fn is_empty(&self) -> bool {
        self.icann.is_empty() && self.private.is_empty()
    }

    /// Serialize to the JSON mapping form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Load from the JSON mapping form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PslError;
    use crate::matcher::RuleNode;

    fn sample() -> RuleSet {
        RuleSet::new(
            RuleTrie::from_rules(["com", "co.uk", "uk"]).unwrap(),
            RuleTrie::from_rules(["blogspot.com", "*.compute.amazonaws.com"]).unwrap(),
        )
    }

    #[test]
    fn test_trie_for_icann() {
        let trie = sample().trie_for(Section::Icann);
        let com = trie.child("com").unwrap();
        assert!(com.child("blogspot").is_none());
        assert!(trie.child("uk").is_some());
    }

    #[test]
    fn test_trie_for_private() {
        let trie = sample().trie_for(Section::Private);
        assert!(trie.child("uk").is_none());
        assert!(trie.child("com").and_then(|c| c.child("blogspot")).is_some());
    }

    #[test]
    fn test_trie_for_all() {
        let trie = sample().trie_for(Section::All);
        let com = trie.child("com").unwrap();
        assert!(com.child("blogspot").is_some());
        assert!(com.child("amazonaws").is_some());
        assert!(trie.child("uk").and_then(|uk| uk.child("co")).is_some());
    }

    #[test]
    fn test_json_round_trip() {
        let rules = sample();
        let json = rules.to_json().unwrap();
        assert!(json.contains("\"ICANN_DOMAINS\""));
        assert!(json.contains("\"PRIVATE_DOMAINS\""));
        assert_eq!(RuleSet::from_json(&json).unwrap(), rules);
    }

    #[test]
    fn test_from_json_missing_section() {
        let rules = RuleSet::from_json(r#"{"ICANN_DOMAINS":{"uk":{"co":{}}}}"#).unwrap();
        assert!(rules.private.is_empty());
        assert!(rules.icann.child("uk").is_some());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = RuleSet::from_json("not json").unwrap_err();
        assert!(matches!(err, PslError::JsonError(_)));
    }
}
