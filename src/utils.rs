use regex::Regex;

/// Returns `true` if the pattern matches anywhere in the text.
///
/// The command patterns are anchored, so in practice this is a
/// prefix check on the message body.
pub fn matches_pattern(pattern: &str, text: &str) -> bool {
    let re = Regex::new(pattern).unwrap();
    re.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::matches_pattern;

    #[test]
    fn anchored_prefix_match() {
        assert!(matches_pattern("^(p|P)ing", "ping"));
        assert!(matches_pattern("^(p|P)ing", "Ping..."));
        assert!(matches_pattern("^(p|P)ing", "ping me"));
        assert!(!matches_pattern("^(p|P)ing", "sping"));
        assert!(!matches_pattern("^(p|P)ing", "PING"));
        assert!(!matches_pattern("^(p|P)ing", ""));
    }
}
