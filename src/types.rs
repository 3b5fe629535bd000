use std::fmt;
use std::str::FromStr;

use crate::error::PslError;

/// PSL section a rule set is drawn from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    /// ICANN and private rules together
    #[default]
    All,
    /// Rules contributed by ICANN (generic and country-code suffixes)
    Icann,
    /// Rules submitted by private registries opting in
    Private,
}

impl Section {
    /// Canonical designator name
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::All => "ALL_DOMAINS",
            Section::Icann => "ICANN_DOMAINS",
            Section::Private => "PRIVATE_DOMAINS",
        }
    }

    /// Check if rules of the `other` section apply under this one
    pub fn includes(&self, other: Section) -> bool {
        *self == Section::All || *self == other
    }
}

impl FromStr for Section {
    type Err = PslError;

    /// Accepts the canonical names and their short forms, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALL_DOMAINS" | "ALL" => Ok(Section::All),
            "ICANN_DOMAINS" | "ICANN" => Ok(Section::Icann),
            "PRIVATE_DOMAINS" | "PRIVATE" => Ok(Section::Private),
            _ => Err(PslError::InvalidSection(s.to_string())),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
