//! Snippet cleanup.

/// Collapse every run of whitespace into a single space and trim the ends.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  Rust \n\n is\tfast  "), "Rust is fast");
    }

    #[test]
    fn test_clean_text_blank() {
        assert_eq!(clean_text(" \n\t "), "");
    }
}
