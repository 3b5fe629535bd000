use super::RuleNode;
use crate::normalize::SEPARATOR;

/// Find the public suffix of a normalized domain.
///
/// `domain` must already be in lowercase IDNA ASCII form. Labels are walked
/// from the rightmost one inward and the walk never resumes after a label
/// without a rule, so a suffix always matches contiguously from the right.
///
/// Returns `None` when no rule matched the rightmost label.
pub fn match_suffix<N: RuleNode>(root: &N, domain: &str) -> Option<String> {
    let mut matched: Vec<&str> = Vec::new();
    let mut node = root;

    for label in domain.rsplit(SEPARATOR) {
        if node.has_exception(label) {
            break;
        }
        if node.has_wildcard() {
            matched.push(label);
            break;
        }
        match node.child(label) {
            Some(child) => {
                matched.push(label);
                node = child;
            }
            None => break,
        }
    }

    matched.retain(|label| !label.is_empty());
    if matched.is_empty() {
        return None;
    }
    matched.reverse();
    Some(matched.join("."))
}
