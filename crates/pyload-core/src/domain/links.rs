//! Link extraction from free-form text.

use regex::Regex;
use std::sync::LazyLock;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://[^\s<>"]+|www\.[^\s<>"]+"#).expect("link pattern is valid")
});

/// Find every link in `text`, in order of appearance.
///
/// Accepts links separated by whitespace, newlines or surrounded by other
/// text; duplicates are kept since the server treats them as separate files.
pub fn extract_links(text: &str) -> Vec<String> {
    URL_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_lines_and_spaces() {
        let text = "http://x/a.zip\nhttps://y/b.zip  www.z.org/c\n";
        assert_eq!(
            extract_links(text),
            vec!["http://x/a.zip", "https://y/b.zip", "www.z.org/c"]
        );
    }

    #[test]
    fn test_extract_stops_at_markup() {
        let text = r#"<a href="https://host/file.rar">mirror</a>"#;
        assert_eq!(extract_links(text), vec!["https://host/file.rar"]);
    }

    #[test]
    fn test_extract_nothing() {
        assert!(extract_links("no links here, ftp://ignored").is_empty());
    }
}
