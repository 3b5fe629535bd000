//! PSL Engine - Public Suffix List rule matching for Rust
//!
//! This library resolves domain names against the Public Suffix List:
//! - Ordinary, wildcard (`*.ck`) and exception (`!www.ck`) rules
//! - ICANN / private section selection
//! - IDNA normalization, with results in the caller's encoding
//! - Registrable domain and sub domain derivation
//! - Optional LRU caching of results
//!
//! # Example
//!
//! ```rust
//! use psl_engine_r::{parse_list, Domain, PublicSuffixList, Section};
//!
//! let list = "
//! // ===BEGIN ICANN DOMAINS===
//! uk
//! co.uk
//! // ===END ICANN DOMAINS===
//! ";
//!
//! let rules = parse_list(list).unwrap();
//! let psl = PublicSuffixList::new(Section::All, &rules);
//!
//! let domain = psl.resolve("www.example.co.uk").unwrap();
//! assert_eq!(domain.public_suffix(), Some("co.uk"));
//! assert_eq!(domain.registrable_domain().as_deref(), Some("example.co.uk"));
//!
//! // Single labels, leading dots and IP literals are not matchable.
//! assert_eq!(psl.resolve("localhost").unwrap(), Domain::Null);
//! ```
//!
//! # Results
//!
//! | Variant | When | Public suffix |
//! |---------|------|---------------|
//! | `Matched` | a rule matched | the matched suffix |
//! | `Unmatched` | no rule matched | the last label (guess) |
//! | `Null` | input not matchable | none |

pub mod domain;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod parser;
pub mod resolver;
pub mod rules;
pub mod types;

// Re-export commonly used items
pub use domain::Domain;
pub use error::{PslError, Result};
pub use matcher::{match_suffix, RuleNode, RuleTrie};
pub use parser::{parse_list, parse_list_from_file};
pub use resolver::{ListOptions, PublicSuffixList};
pub use rules::RuleSet;
pub use types::Section;
