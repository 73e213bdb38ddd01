use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

/// Characters left unescaped in a results path segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Destinations the presenter can navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", content = "username", rename_all = "snake_case")]
pub enum Route {
    Entry,
    Results(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self.encoded_identifier() {
            None => "/".to_string(),
            Some(segment) => format!("/results/{}", segment),
        }
    }

    /// The identifier as it appears in a results path, percent-encoded.
    pub fn encoded_identifier(&self) -> Option<String> {
        match self {
            Route::Entry => None,
            Route::Results(username) => Some(utf8_percent_encode(username, SEGMENT).to_string()),
        }
    }
}
