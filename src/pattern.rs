/// Chrome-style URL match patterns for tab queries
use regex::Regex;

/// Evaluate a match pattern against a URL.
///
/// Patterns are the subset of Chrome match patterns the extension uses for
/// `chrome.tabs.query`: literal text with `*` matching any run of characters
/// (including `/`), anchored at both ends.
///
/// Examples:
/// - `https://team.arcblock.io/*` matches `https://team.arcblock.io/projects`
/// - `https://team.arcblock.io/*` does not match `https://docs.arcblock.io/`
/// - a pattern without `*` only matches the identical URL
pub fn url_matches_pattern(pattern: &str, url: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }

    let escaped: Vec<String> = pattern.split('*').map(|part| regex::escape(part)).collect();
    let anchored = format!("^{}$", escaped.join(".*"));

    Regex::new(&anchored)
        .map(|re| re.is_match(url))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_pattern_matches_only_itself() {
        assert!(url_matches_pattern(
            "https://team.arcblock.io",
            "https://team.arcblock.io"
        ));
        assert!(!url_matches_pattern(
            "https://team.arcblock.io",
            "https://team.arcblock.io/"
        ));
        assert!(!url_matches_pattern(
            "https://team.arcblock.io",
            "https://team.arcblock.io/projects"
        ));
    }

    #[test]
    fn test_trailing_wildcard() {
        assert!(url_matches_pattern(
            "https://team.arcblock.io/*",
            "https://team.arcblock.io/"
        ));
        assert!(url_matches_pattern(
            "https://team.arcblock.io/*",
            "https://team.arcblock.io/projects/42?tab=overview"
        ));
        assert!(!url_matches_pattern(
            "https://team.arcblock.io/*",
            "https://team.arcblock.io"
        ));
        assert!(!url_matches_pattern(
            "https://team.arcblock.io/*",
            "https://docs.arcblock.io/"
        ));
    }

    #[test]
    fn test_wildcard_spans_path_separators() {
        assert!(url_matches_pattern(
            "https://*/settings",
            "https://example.com/account/settings"
        ));
    }

    #[test]
    fn test_infix_wildcard() {
        assert!(url_matches_pattern(
            "https://*.arcblock.io/*",
            "https://team.arcblock.io/projects"
        ));
        assert!(!url_matches_pattern(
            "https://*.arcblock.io/*",
            "https://arcblock.example.com/projects"
        ));
    }

    #[test]
    fn test_extension_page_pattern() {
        assert!(url_matches_pattern(
            "chrome-extension://abcdefgh/internal-page.html",
            "chrome-extension://abcdefgh/internal-page.html"
        ));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        // URL query separators must not be treated as regex syntax
        assert!(url_matches_pattern(
            "https://example.com/search?q=a+b",
            "https://example.com/search?q=a+b"
        ));
        assert!(!url_matches_pattern(
            "https://example.com/search?q=a+b",
            "https://example.com/searchXq=aab"
        ));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(!url_matches_pattern("", "https://example.com"));
        assert!(!url_matches_pattern("https://example.com", ""));
        assert!(url_matches_pattern("*", ""));
    }
}
