//! Public Suffix List converter.
//!
//! Turns the raw PSL text format into a sectioned [`RuleSet`]:
//!
//! ```text
//! // ===BEGIN ICANN DOMAINS===
//! uk
//! co.uk
//! *.ck
//! !www.ck
//! // ===END ICANN DOMAINS===
//! // ===BEGIN PRIVATE DOMAINS===
//! blogspot.com
//! // ===END PRIVATE DOMAINS===
//! ```

use std::fs;
use std::path::Path;

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{PslError, Result};
use crate::rules::RuleSet;
use crate::types::Section;

/// Regex pattern for section markers
/// Format: // ===BEGIN ICANN DOMAINS===
static SECTION_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^//\s*===(BEGIN|END) (ICANN|PRIVATE) DOMAINS===")
        .expect("SECTION_MARKER: hardcoded regex is invalid")
});

/// Parse PSL text into a sectioned rule set.
///
/// Rules outside any section are skipped. A rule is the first
/// whitespace-delimited token of its line.
pub fn parse_list(text: &str) -> Result<RuleSet> {
    let mut rules = RuleSet::default();
    let mut current: Option<Section> = None;
    let mut counts = (0usize, 0usize);

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers
        let line = line.trim();

        if let Some(captures) = SECTION_MARKER.captures(line) {
            let section = match &captures[2] {
                "ICANN" => Section::Icann,
                _ => Section::Private,
            };
            let begin = &captures[1] == "BEGIN";
            current = switch_section(current, begin, section, line_num)?;
            continue;
        }

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        let rule = line.split_whitespace().next().unwrap_or(line);
        let trie = match current {
            Some(Section::Icann) => {
                counts.0 += 1;
                &mut rules.icann
            }
            Some(Section::Private) => {
                counts.1 += 1;
                &mut rules.private
            }
            _ => {
                warn!("Skipping rule outside any section at line {}: {}", line_num, rule);
                continue;
            }
        };

        trie.add_rule(rule)
            .map_err(|e| PslError::ParseErrorAtLine {
                line: line_num,
                message: e.to_string(),
            })?;
    }

    if let Some(open) = current {
        return Err(PslError::ParseError(format!(
            "{} section is never closed",
            open
        )));
    }

    debug!(
        "Parsed public suffix list: {} ICANN rules, {} private rules",
        counts.0, counts.1
    );
    Ok(rules)
}

/// Parse a PSL file from disk.
pub fn parse_list_from_file(path: impl AsRef<Path>) -> Result<RuleSet> {
    let text = fs::read_to_string(path.as_ref())?;
    parse_list(&text)
}

fn switch_section(
    current: Option<Section>,
    begin: bool,
    section: Section,
    line: usize,
) -> Result<Option<Section>> {
    match (current, begin) {
        (None, true) => Ok(Some(section)),
        (Some(open), false) if open == section => Ok(None),
        (Some(open), true) => Err(PslError::ParseErrorAtLine {
            line,
            message: format!("{} section opened inside {}", section, open),
        }),
        (_, false) => Err(PslError::ParseErrorAtLine {
            line,
            message: format!("Unexpected end of {} section", section),
        }),
    }
}
