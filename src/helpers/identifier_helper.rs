use percent_encoding::percent_decode_str;
use crate::config::constants::MAX_USERNAME_LENGTH;
use crate::enums::analysis_error::AnalysisError;

/// Percent-decodes a raw route parameter. Like a browser's
/// `decodeURIComponent`, a `%` not followed by two hex digits or a byte
/// sequence that is not UTF-8 is rejected rather than passed through.
pub fn decode_identifier(raw: &str) -> Result<String, AnalysisError> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let well_formed = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !well_formed {
                return Err(AnalysisError::invalid_identifier(raw, "malformed percent-encoding"));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| AnalysisError::invalid_identifier(raw, "decoded identifier is not valid UTF-8"))
}

/// Account name check used by providers before they look anything up:
/// one optional leading `@`, then 1 to 30 letters, digits, periods or
/// underscores. Returns the lowercased name.
pub fn normalize_username(identifier: &str) -> Result<String, AnalysisError> {
    let name = identifier.strip_prefix('@').unwrap_or(identifier);

    if name.is_empty() {
        return Err(AnalysisError::invalid_identifier(identifier, "username is empty"));
    }
    if name.chars().count() > MAX_USERNAME_LENGTH {
        return Err(AnalysisError::invalid_identifier(
            identifier,
            &format!("username is longer than {} characters", MAX_USERNAME_LENGTH),
        ));
    }
    if let Some(c) = name.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '.' || *c == '_')) {
        return Err(AnalysisError::invalid_identifier(
            identifier,
            &format!("unexpected character '{}'", c),
        ));
    }

    Ok(name.to_ascii_lowercase())
}
