//! Public suffix resolution.
//!
//! [`PublicSuffixList`] owns the rule trie for one section and classifies
//! domains into [`Domain`] results.

use std::num::NonZeroUsize;

use log::{debug, trace};
use lru::LruCache;
use parking_lot::Mutex;

use crate::domain::Domain;
use crate::error::Result;
use crate::matcher::{match_suffix, RuleTrie};
use crate::normalize::{decode_unicode, encode_ascii, is_ascii_encoded, is_matchable, SEPARATOR};
use crate::rules::RuleSet;
use crate::types::Section;

/// Options for building a [`PublicSuffixList`].
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Section whose rules are applied
    pub section: Section,
    /// LRU cache size for resolved domains (0 disables the cache)
    pub cache_size: usize,
}

impl ListOptions {
    /// Create new list options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.section = section;
        self
    }

    /// Set cache size.
    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }
}

/// Public suffix matching engine.
///
/// The rule trie is immutable once built, so a single instance can be shared
/// between threads. The optional cache is the only locked state.
pub struct PublicSuffixList {
    rules: RuleTrie,
    section: Section,
    cache: Option<Mutex<LruCache<String, Domain>>>,
}

impl PublicSuffixList {
    /// Create an engine applying the rules of `section`.
    pub fn new(section: Section, rules: &RuleSet) -> Self {
        Self::with_options(rules, ListOptions::new().with_section(section))
    }

    /// Create an engine from a section designator such as `ICANN_DOMAINS`.
    ///
    /// Fails with [`PslError::InvalidSection`](crate::PslError::InvalidSection)
    /// for an unknown designator.
    pub fn from_designator(designator: &str, rules: &RuleSet) -> Result<Self> {
        let section = designator.parse::<Section>()?;
        Ok(Self::new(section, rules))
    }

    /// Create an engine with explicit options.
    pub fn with_options(rules: &RuleSet, options: ListOptions) -> Self {
        let trie = rules.trie_for(options.section);
        debug!(
            "Building public suffix list for {} ({} rule nodes, cache size {})",
            options.section,
            trie.len(),
            options.cache_size
        );
        Self {
            rules: trie,
            section: options.section,
            cache: NonZeroUsize::new(options.cache_size)
                .map(|size| Mutex::new(LruCache::new(size))),
        }
    }

    /// Section this engine applies
    pub fn section(&self) -> Section {
        self.section
    }

    /// Resolve a domain.
    ///
    /// Unmatchable input is [`Domain::Null`], never an error. Errors only come
    /// from IDNA normalization rejecting the input.
    pub fn resolve<'a>(&self, domain: impl Into<Option<&'a str>>) -> Result<Domain> {
        let domain = match domain.into() {
            Some(domain) if is_matchable(domain) => domain,
            other => {
                trace!("Not matchable: {:?}", other);
                return Ok(Domain::Null);
            }
        };

        if let Some(cache) = &self.cache {
            if let Some(cached) = cache.lock().get(domain) {
                trace!("Cache hit: {}", domain);
                return Ok(cached.clone());
            }
        }

        let result = self.classify(domain)?;

        if let Some(cache) = &self.cache {
            cache.lock().put(domain.to_string(), result.clone());
        }

        Ok(result)
    }

    /// Public suffix of a domain, matched or guessed.
    pub fn public_suffix<'a>(
        &self,
        domain: impl Into<Option<&'a str>>,
    ) -> Result<Option<String>> {
        Ok(self.resolve(domain)?.public_suffix().map(str::to_string))
    }

    /// Registrable domain of a domain, if it has one.
    pub fn registrable_domain<'a>(
        &self,
        domain: impl Into<Option<&'a str>>,
    ) -> Result<Option<String>> {
        Ok(self.resolve(domain)?.registrable_domain())
    }

    /// Clear the cache
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.lock().clear();
        }
    }

    fn classify(&self, domain: &str) -> Result<Domain> {
        let ascii = encode_ascii(domain)?;
        let keep_encoded = is_ascii_encoded(domain);

        let result = match match_suffix(&self.rules, &ascii) {
            Some(suffix) => Domain::matched(domain, caller_form(&suffix, keep_encoded)?),
            None => {
                let guess = match domain.rsplit(SEPARATOR).next() {
                    Some(label) if !label.is_empty() => Some(caller_form(label, keep_encoded)?),
                    _ => None,
                };
                Domain::unmatched(domain, guess)
            }
        };

        trace!("Resolved {} -> {:?}", domain, result);
        Ok(result)
    }
}

/// Convert a suffix back to Unicode unless the caller used encoded input.
fn caller_form(suffix: &str, keep_encoded: bool) -> Result<String> {
    if keep_encoded {
        Ok(suffix.to_string())
    } else {
        decode_unicode(suffix)
    }
}
