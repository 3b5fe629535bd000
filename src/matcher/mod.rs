//! Rule structure and label matching.
//!
//! The rule structure is read only through [`RuleNode`], so the matcher works
//! on any tree a loader produces. [`RuleTrie`] is the owned implementation the
//! converter builds.

mod labels;
pub mod trie;

pub use labels::match_suffix;
pub use trie::RuleTrie;

/// Reserved key marking an exception rule.
pub const EXCEPTION_KEY: &str = "!";

/// Reserved key marking a wildcard rule.
pub const WILDCARD_KEY: &str = "*";

/// Read access to a node of the rule structure.
pub trait RuleNode: Send + Sync {
    /// Child node for a label, if any rule continues through it.
    fn child(&self, label: &str) -> Option<&Self>;

    /// Whether a wildcard rule is anchored at this node.
    fn has_wildcard(&self) -> bool;

    /// Whether this node carries the exception marker.
    fn is_exception(&self) -> bool;

    /// Whether the child for `label` is an exception rule.
    fn has_exception(&self, label: &str) -> bool {
        self.child(label).is_some_and(|child| child.is_exception())
    }
}
