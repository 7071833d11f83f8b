/// Request construction: query string encoding and the auth header.
use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::options::PassageOptions;

/// Bytes left as-is: ASCII alphanumerics plus `.`, `-` and `_`.
/// Everything else becomes `%XX` (uppercase hex).
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'.').remove(b'-').remove(b'_');

/// Percent-encode a single query key or value.
#[must_use]
pub fn encode(component: &str) -> String {
    utf8_percent_encode(component, QUERY_COMPONENT).to_string()
}

/// A fully built GET request: target URL plus headers.
pub struct PassageRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
}

impl PassageRequest {
    /// Build the request for `reference`.
    ///
    /// `q` always comes first, followed by whatever `options` has set.
    #[must_use]
    pub fn build(base_url: &str, reference: &str, options: &PassageOptions, api_key: &str) -> Self {
        let query = std::iter::once(("q", reference.to_owned()))
            .chain(options.to_params())
            .map(|(key, value)| format!("{}={}", encode(key), encode(&value)))
            .collect::<Vec<_>>()
            .join("&");

        Self {
            url: format!("{base_url}?{query}"),
            headers: vec![("Authorization", format!("Token {api_key}"))],
        }
    }
}

// Keep the token out of debug logs.
impl fmt::Debug for PassageRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, _)| (*name, "<redacted>"))
            .collect();
        f.debug_struct("PassageRequest")
            .field("url", &self.url)
            .field("headers", &headers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use percent_encoding::percent_decode_str;

    use super::*;
    use crate::esv::options::IndentUsing;

    const BASE: &str = "https://api.esv.org/v3/passage/text/";

    #[test]
    fn test_encode_reference() {
        assert_eq!(encode("John 3:16"), "John%203%3A16");
        assert_eq!(encode("Romans 8:28-39"), "Romans%208%3A28-39");
    }

    #[test]
    fn test_encode_keeps_unreserved() {
        assert_eq!(encode("a.b-c_d"), "a.b-c_d");
        assert_eq!(encode("include-verse-numbers"), "include-verse-numbers");
    }

    #[test]
    fn test_encode_uppercase_hex_and_multibyte() {
        assert_eq!(encode("~/&="), "%7E%2F%26%3D");
        assert_eq!(encode("é"), "%C3%A9");
    }

    #[test]
    fn test_encode_round_trips_reference_characters() {
        for reference in ["John 3:16", "1 Corinthians 13:4-7", "Psalm 23", "Gen 1:1-2:3"] {
            let encoded = encode(reference);
            assert!(!encoded.contains(' '));
            let decoded = percent_decode_str(&encoded).decode_utf8().unwrap();
            assert_eq!(decoded, reference);
        }
    }

    #[test]
    fn test_minimal_request_has_only_q() {
        let req = PassageRequest::build(BASE, "John 3:16", &PassageOptions::MINIMAL, "abc123");
        assert_eq!(req.url, format!("{BASE}?q=John%203%3A16"));
        assert_eq!(req.headers, vec![("Authorization", "Token abc123".to_owned())]);
    }

    #[test]
    fn test_options_follow_q() {
        let opts = PassageOptions {
            include_headings: Some(false),
            indent_using: Some(IndentUsing::Tab),
            line_length: Some(80),
            ..PassageOptions::MINIMAL
        };
        let req = PassageRequest::build(BASE, "Ps 23", &opts, "k");
        assert_eq!(
            req.url,
            format!("{BASE}?q=Ps%2023&include-headings=false&indent-using=tab&line-length=80")
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let req = PassageRequest::build(BASE, "John 1:1", &PassageOptions::MINIMAL, "s3cret");
        let dbg = format!("{req:?}");
        assert!(!dbg.contains("s3cret"));
        assert!(dbg.contains("Authorization"));
    }
}
