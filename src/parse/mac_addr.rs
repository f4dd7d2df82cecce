//! MAC address canonicalization.

use crate::error::ParseError;

/// Canonicalize a MAC address token to lowercase colon-separated hex pairs.
///
/// Accepts the notations seen on device CLIs: colon groups
/// (`00:11:22:33:44:55`, groups may drop leading zeros), dash groups
/// (`00-11-22-33-44-55`), Cisco dotted quads (`0011.2233.4455`) and bare hex
/// (`001122334455`). Anything that does not resolve to exactly six bytes of
/// hex fails with [`ParseError::InvalidMac`].
pub fn canonical_mac(token: &str) -> Result<String, ParseError> {
    let invalid = || ParseError::InvalidMac {
        token: token.to_string(),
    };

    let digits: String = if token.contains(':') || token.contains('-') {
        let groups: Vec<&str> = token.split([':', '-']).collect();
        if groups.len() != 6 {
            return Err(invalid());
        }
        let mut digits = String::with_capacity(12);
        for group in groups {
            if group.is_empty() || group.len() > 2 {
                return Err(invalid());
            }
            if group.len() == 1 {
                digits.push('0');
            }
            digits.push_str(group);
        }
        digits
    } else if token.contains('.') {
        let groups: Vec<&str> = token.split('.').collect();
        if groups.len() != 3 || groups.iter().any(|g| g.is_empty() || g.len() > 4) {
            return Err(invalid());
        }
        groups
            .iter()
            .map(|g| format!("{g:0>4}"))
            .collect()
    } else {
        token.to_string()
    };

    if digits.len() != 12 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let digits = digits.to_ascii_lowercase();
    let bytes: Vec<&str> = (0..6).map(|i| &digits[i * 2..i * 2 + 2]).collect();
    Ok(bytes.join(":"))
}
