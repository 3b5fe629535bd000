use std::fmt;

use serde::Serialize;

use crate::normalize::SEPARATOR;

/// Outcome of resolving a domain against the rules.
///
/// Every variant answers the same three questions (domain, public suffix,
/// registrable domain); the registrable domain is derived the same way for
/// matched and unmatched domains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Domain {
    /// Input that cannot be matched: absent, empty, leading dot, single
    /// label or IP literal.
    Null,
    /// A plausible domain that no rule matched. The public suffix is a guess:
    /// the last label of the domain.
    Unmatched {
        domain: String,
        public_suffix: Option<String>,
    },
    /// A domain for which at least one rule matched.
    Matched {
        domain: String,
        public_suffix: String,
    },
}

impl Domain {
    /// Create a matched domain
    pub fn matched(domain: impl Into<String>, public_suffix: impl Into<String>) -> Self {
        Domain::Matched {
            domain: domain.into(),
            public_suffix: public_suffix.into(),
        }
    }

    /// Create an unmatched domain with a guessed public suffix
    pub fn unmatched(domain: impl Into<String>, public_suffix: Option<String>) -> Self {
        Domain::Unmatched {
            domain: domain.into(),
            public_suffix,
        }
    }

    /// The domain as supplied by the caller
    pub fn domain(&self) -> Option<&str> {
        match self {
            Domain::Null => None,
            Domain::Unmatched { domain, .. } | Domain::Matched { domain, .. } => Some(domain),
        }
    }

    /// The public suffix (matched or guessed)
    pub fn public_suffix(&self) -> Option<&str> {
        match self {
            Domain::Null => None,
            Domain::Unmatched { public_suffix, .. } => public_suffix.as_deref(),
            Domain::Matched { public_suffix, .. } => Some(public_suffix),
        }
    }

    /// The public suffix plus the one label to its left.
    ///
    /// `None` when the domain has no label in front of its suffix.
    pub fn registrable_domain(&self) -> Option<String> {
        let (domain, suffix) = (self.domain()?, self.public_suffix()?);
        let label = label_before_suffix(domain, suffix)?;
        Some(format!("{}{}{}", label, SEPARATOR, suffix))
    }

    /// Labels to the left of the registrable domain, if any
    pub fn sub_domain(&self) -> Option<String> {
        let (domain, suffix) = (self.domain()?, self.public_suffix()?);
        label_before_suffix(domain, suffix)?;

        let labels: Vec<&str> = domain.split(SEPARATOR).collect();
        let keep = labels.len() - suffix_label_count(suffix) - 1;
        if keep == 0 {
            return None;
        }
        Some(labels[..keep].join("."))
    }

    /// Whether a rule actually matched (only true for [`Domain::Matched`])
    pub fn is_valid(&self) -> bool {
        matches!(self, Domain::Matched { .. })
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.domain().unwrap_or_default())
    }
}

fn suffix_label_count(suffix: &str) -> usize {
    suffix.split(SEPARATOR).count()
}

/// The label of `domain` immediately left of `suffix`.
///
/// `domain` is split on `.` only. A caller string using `。` or `．` as a
/// separator keeps those inside one label, so it may have no label in front
/// of a suffix the normalized form matched.
fn label_before_suffix<'a>(domain: &'a str, suffix: &str) -> Option<&'a str> {
    if suffix.is_empty() || domain == suffix {
        return None;
    }
    let suffix_labels = suffix_label_count(suffix);
    let label = domain.rsplit(SEPARATOR).nth(suffix_labels)?;
    if label.is_empty() {
        return None;
    }
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_domain() {
        let domain = Domain::Null;
        assert_eq!(domain.domain(), None);
        assert_eq!(domain.public_suffix(), None);
        assert_eq!(domain.registrable_domain(), None);
        assert_eq!(domain.sub_domain(), None);
        assert!(!domain.is_valid());
        assert_eq!(domain.to_string(), "");
    }

    #[test]
    fn test_matched_domain() {
        let domain = Domain::matched("www.example.co.uk", "co.uk");
        assert_eq!(domain.domain(), Some("www.example.co.uk"));
        assert_eq!(domain.public_suffix(), Some("co.uk"));
        assert_eq!(domain.registrable_domain().as_deref(), Some("example.co.uk"));
        assert_eq!(domain.sub_domain().as_deref(), Some("www"));
        assert!(domain.is_valid());
    }

    #[test]
    fn test_domain_equal_to_suffix_has_no_registrable_domain() {
        let domain = Domain::matched("co.uk", "co.uk");
        assert_eq!(domain.registrable_domain(), None);
        assert_eq!(domain.sub_domain(), None);
    }

    #[test]
    fn test_registrable_without_sub_domain() {
        let domain = Domain::matched("example.co.uk", "co.uk");
        assert_eq!(domain.registrable_domain().as_deref(), Some("example.co.uk"));
        assert_eq!(domain.sub_domain(), None);
    }

    #[test]
    fn test_deep_sub_domain() {
        let domain = Domain::matched("a.b.c.example.com", "com");
        assert_eq!(domain.registrable_domain().as_deref(), Some("example.com"));
        assert_eq!(domain.sub_domain().as_deref(), Some("a.b.c"));
    }

    #[test]
    fn test_unmatched_domain() {
        let domain = Domain::unmatched("example.faketld", Some("faketld".to_string()));
        assert_eq!(domain.public_suffix(), Some("faketld"));
        assert_eq!(
            domain.registrable_domain().as_deref(),
            Some("example.faketld")
        );
        assert!(!domain.is_valid());
    }

    #[test]
    fn test_unmatched_without_suffix() {
        let domain = Domain::unmatched("example.", None);
        assert_eq!(domain.public_suffix(), None);
        assert_eq!(domain.registrable_domain(), None);
    }

    #[test]
    fn test_empty_preceding_label() {
        // "a..co.uk": the label in front of the suffix is empty.
        let domain = Domain::matched("a..co.uk", "co.uk");
        assert_eq!(domain.registrable_domain(), None);
        assert_eq!(domain.sub_domain(), None);
    }

    #[test]
    fn test_registrable_uses_suffix_encoding() {
        let domain = Domain::matched("食狮.公司.cn", "公司.cn");
        assert_eq!(domain.registrable_domain().as_deref(), Some("食狮.公司.cn"));
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_string(&Domain::matched("example.com", "com")).unwrap();
        assert_eq!(
            json,
            r#"{"type":"matched","domain":"example.com","public_suffix":"com"}"#
        );
        let json = serde_json::to_string(&Domain::Null).unwrap();
        assert_eq!(json, r#"{"type":"null"}"#);
    }
}
