//! Response body parsing rules.

/// How a short link is extracted from a provider's 2xx response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseRule {
    /// The body itself is the short link: trimmed text starting with `http`.
    PlainTextLink,
    /// TinyURL JSON API: the link lives at `data.tiny_url`.
    TinyUrlJson,
}

/// Extracts the short link from a response body, or `None` if the body does
/// not match the provider's documented shape.
///
/// This is the body half of the success criterion; the status half (2xx) is
/// checked by the dispatcher before the body is read.
pub fn extract_short_url(rule: ParseRule, body: &str) -> Option<String> {
    match rule {
        ParseRule::PlainTextLink => {
            let trimmed = body.trim();
            if trimmed.starts_with("http") {
                Some(trimmed.to_string())
            } else {
                None
            }
        }
        ParseRule::TinyUrlJson => serde_json::from_str::<serde_json::Value>(body)
            .ok()?
            .get("data")?
            .get("tiny_url")?
            .as_str()
            .map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_link_trims_whitespace() {
        assert_eq!(
            extract_short_url(ParseRule::PlainTextLink, "https://is.gd/abc123\n"),
            Some("https://is.gd/abc123".to_string())
        );
    }

    #[test]
    fn test_plain_text_link_rejects_html_error_pages() {
        assert_eq!(
            extract_short_url(ParseRule::PlainTextLink, "<html>Error: invalid URL</html>"),
            None
        );
        assert_eq!(extract_short_url(ParseRule::PlainTextLink, ""), None);
    }

    #[test]
    fn test_tinyurl_json_extracts_nested_field() {
        let body = r#"{"data":{"tiny_url":"https://tinyurl.com/xyz","url":"https://example.com"},"code":0}"#;
        assert_eq!(
            extract_short_url(ParseRule::TinyUrlJson, body),
            Some("https://tinyurl.com/xyz".to_string())
        );
    }

    #[test]
    fn test_tinyurl_json_rejects_missing_field() {
        assert_eq!(
            extract_short_url(ParseRule::TinyUrlJson, r#"{"data":{}}"#),
            None
        );
        assert_eq!(
            extract_short_url(ParseRule::TinyUrlJson, r#"{"errors":["token"]}"#),
            None
        );
    }

    #[test]
    fn test_tinyurl_json_rejects_malformed_json() {
        assert_eq!(extract_short_url(ParseRule::TinyUrlJson, "not json"), None);
        // A plain-text link from the wrong endpoint is still a mismatch here.
        assert_eq!(
            extract_short_url(ParseRule::TinyUrlJson, "https://tinyurl.com/xyz"),
            None
        );
    }
}
