//! Domain normalization.
//!
//! Rules and queries are matched in lowercase IDNA ASCII form. Results are
//! converted back to Unicode unless the caller already supplied an encoded
//! (`xn--`) domain.

use std::borrow::Cow;
use std::net::IpAddr;

use idna::AsciiDenyList;

use crate::error::{PslError, Result};

/// ASCII Compatible Encoding prefix of an IDNA label.
pub const ACE_PREFIX: &str = "xn--";

/// Label separator.
pub const SEPARATOR: char = '.';

/// Convert a domain to its lowercase IDNA ASCII form.
///
/// Forbidden host code points (space, `/`, `@`, `<`, `|`, ...) are rejected.
pub fn encode_ascii(domain: &str) -> Result<String> {
    idna::domain_to_ascii_cow(domain.as_bytes(), AsciiDenyList::URL)
        .map(Cow::into_owned)
        .map_err(|e| PslError::Normalization {
            input: domain.to_string(),
            message: format!("{:?}", e),
        })
}

/// Convert an ASCII encoded label or domain to its Unicode form.
pub fn decode_unicode(input: &str) -> Result<String> {
    let (unicode, result) = idna::domain_to_unicode(input);
    result.map_err(|e| PslError::Normalization {
        input: input.to_string(),
        message: format!("{:?}", e),
    })?;
    Ok(unicode)
}

/// Check whether the ACE prefix appears anywhere in the domain.
pub fn is_ascii_encoded(domain: &str) -> bool {
    domain
        .as_bytes()
        .windows(ACE_PREFIX.len())
        .any(|w| w.eq_ignore_ascii_case(ACE_PREFIX.as_bytes()))
}

/// Check whether a raw domain may be matched against the rules at all.
///
/// Rejects empty input, a leading separator, single labels and IP literals.
/// Operates on the caller's string before normalization, so only `.` counts
/// as a separator here; ideographic and fullwidth dots (`。`, `．`) are part
/// of a label until IDNA maps them.
pub fn is_matchable(domain: &str) -> bool {
    match domain.find(SEPARATOR) {
        None | Some(0) => false,
        Some(_) => !is_ip_literal(domain),
    }
}

fn is_ip_literal(domain: &str) -> bool {
    let host = domain
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(domain);
    host.parse::<IpAddr>().is_ok()
}
