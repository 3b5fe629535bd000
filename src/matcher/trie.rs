use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{RuleNode, EXCEPTION_KEY, WILDCARD_KEY};
use crate::error::{PslError, Result};
use crate::normalize::{encode_ascii, SEPARATOR};

/// Rule trie keyed by ASCII lowercase labels, read right to left.
///
/// `"co.uk"` is stored as `uk -> co`, `"*.ck"` as `ck -> *` and `"!www.ck"`
/// as `ck -> www -> !`. Serializes to the nested JSON mapping form, e.g.
/// `{"uk":{"co":{}}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleTrie {
    children: HashMap<String, RuleTrie>,
}

impl RuleTrie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from PSL rules (`co.uk`, `*.ck`, `!www.ck`, ...).
    pub fn from_rules<I, S>(rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for rule in rules {
            trie.add_rule(rule.as_ref())?;
        }
        Ok(trie)
    }

    /// Insert a single PSL rule.
    ///
    /// Labels are IDNA encoded, so Unicode rules such as `公司.cn` land under
    /// their `xn--` keys. A leading `!` marks an exception rule.
    pub fn add_rule(&mut self, rule: &str) -> Result<()> {
        let rule = rule.trim();
        let (exception, body) = match rule.strip_prefix('!') {
            Some(body) => (true, body),
            None => (false, rule),
        };
        if body.is_empty() {
            return Err(PslError::InvalidRule(rule.to_string()));
        }

        let mut labels = Vec::new();
        for label in body.split(SEPARATOR) {
            if label.is_empty() {
                return Err(PslError::InvalidRule(format!("empty label in '{}'", rule)));
            }
            if label == WILDCARD_KEY {
                labels.push(WILDCARD_KEY.to_string());
            } else if label.contains(EXCEPTION_KEY) || label.contains(WILDCARD_KEY) {
                return Err(PslError::InvalidRule(format!(
                    "reserved character in label '{}' of '{}'",
                    label, rule
                )));
            } else {
                labels.push(encode_ascii(label)?);
            }
        }

        let mut node = self;
        for label in labels.into_iter().rev() {
            node = node.children.entry(label).or_default();
        }
        if exception {
            node.children.entry(EXCEPTION_KEY.to_string()).or_default();
        }
        Ok(())
    }

    /// Deep-merge another trie into this one.
    pub fn merge(&mut self, other: &RuleTrie) {
        for (label, child) in &other.children {
            self.children
                .entry(label.clone())
                .or_default()
                .merge(child);
        }
    }

    /// Number of nodes below the root.
    pub fn len(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.len())
            .sum()
    }

    /// Check if the trie holds no rules
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl RuleNode for RuleTrie {
    fn child(&self, label: &str) -> Option<&Self> {
        self.children.get(label)
    }

    fn has_wildcard(&self) -> bool {
        self.children.contains_key(WILDCARD_KEY)
    }

    fn is_exception(&self) -> bool {
        self.children.contains_key(EXCEPTION_KEY)
    }
}
