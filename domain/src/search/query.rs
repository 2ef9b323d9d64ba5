//! Outbound instant-answer query parameters.

/// A query against the instant-answer endpoint.
///
/// Besides the text, every request asks for JSON output, plain text
/// snippets, no disambiguation pages and no bang redirects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Query-string pairs, unencoded
    pub fn params(&self) -> [(&'static str, &str); 5] {
        [
            ("q", self.text.as_str()),
            ("format", "json"),
            ("no_html", "1"),
            ("skip_disambig", "1"),
            ("no_redirect", "1"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_include_query_and_flags() {
        let query = SearchQuery::new("rust & tokio");
        let params = query.params();
        assert_eq!(params[0], ("q", "rust & tokio"));
        assert!(params.contains(&("format", "json")));
        assert!(params.contains(&("skip_disambig", "1")));
        assert!(params.contains(&("no_redirect", "1")));
    }
}
