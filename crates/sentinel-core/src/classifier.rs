use crate::model::Category;
use regex::Regex;
use sentinel_config::Config;

/// A configured keyword compiled for repeated matching over one scan.
///
/// The rule is strict: ignoring leading whitespace, the line must begin with a
/// comment opener (`//` or `#`), optional whitespace, then the keyword
/// (case-insensitive) followed by a non-identifier boundary. A keyword
/// appearing mid-comment or as a prefix of a longer identifier does not match.
#[derive(Debug, Clone)]
pub struct WordMatcher {
    pub word: String,
    pub category: Category,
    pattern: Regex,
}

impl WordMatcher {
    pub fn new(word: &str, category: Category) -> Self {
        let pattern = Regex::new(&marker_pattern(word)).expect("escaped keyword is a valid regex");
        Self {
            word: word.to_string(),
            category,
            pattern,
        }
    }

    pub fn matches(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

// An explicit end alternation instead of `\b`: the boundary must hold even
// for keywords ending in a non-word character, where `\b` inverts.
fn marker_pattern(word: &str) -> String {
    format!(
        r"(?i)^\s*(//|#)\s*{}(?:[^A-Za-z0-9_]|$)",
        regex::escape(word)
    )
}

/// One-off form of the matcher, for callers that do not hold a compiled set.
pub fn is_marker_comment(line: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    WordMatcher::new(word, Category::Tracking).matches(line)
}

/// Compiles the configured word lists in evaluation order: blocking words
/// first, then tracking words, each in configured order. Empty keywords are
/// skipped.
pub fn compile_matchers(config: &Config) -> Vec<WordMatcher> {
    let blocking = config
        .words
        .blocking
        .iter()
        .filter(|w| !w.is_empty())
        .map(|w| WordMatcher::new(w, Category::Blocking));
    let tracking = config
        .words
        .tracking
        .iter()
        .filter(|w| !w.is_empty())
        .map(|w| WordMatcher::new(w, Category::Tracking));
    blocking.chain(tracking).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_at_comment_start() {
        assert!(is_marker_comment("// PARANOID: do not ship", "PARANOID"));
        assert!(is_marker_comment("# PARANOID", "PARANOID"));
        assert!(is_marker_comment("   # TODO fix later", "TODO"));
        assert!(is_marker_comment("\t//TODO handle errors", "TODO"));
    }

    #[test]
    fn is_case_insensitive() {
        assert!(is_marker_comment("// paranoid: later", "PARANOID"));
        assert!(is_marker_comment("// Todo", "TODO"));
    }

    #[test]
    fn rejects_identifier_continuation() {
        // The boundary check: appending an identifier character breaks the match.
        assert!(!is_marker_comment("// PARANOIDXYZ", "PARANOID"));
        assert!(!is_marker_comment("// TODOs everywhere", "TODO"));
        assert!(!is_marker_comment("# TODO_LATER", "TODO"));
        assert!(is_marker_comment("// PARANOID!", "PARANOID"));
    }

    #[test]
    fn rejects_mid_comment_keyword() {
        assert!(!is_marker_comment("// remember the TODO here", "TODO"));
        assert!(!is_marker_comment("let x = 1; // TODO", "TODO"));
        assert!(!is_marker_comment("print(\"# TODO\")", "TODO"));
    }

    #[test]
    fn rejects_empty_inputs() {
        assert!(!is_marker_comment("", "TODO"));
        assert!(!is_marker_comment("// TODO", ""));
    }

    #[test]
    fn compiles_in_blocking_then_tracking_order() {
        let config = Config::default();
        let matchers = compile_matchers(&config);
        let words: Vec<(&str, Category)> = matchers
            .iter()
            .map(|m| (m.word.as_str(), m.category))
            .collect();
        assert_eq!(
            words,
            vec![
                ("PARANOID", Category::Blocking),
                ("TODO", Category::Tracking),
                ("FIXME", Category::Tracking),
                ("BUG", Category::Tracking),
            ]
        );
    }

    #[test]
    fn escapes_regex_metacharacters_in_words() {
        assert!(is_marker_comment("// DO.NOT.SHIP now", "DO.NOT.SHIP"));
        assert!(!is_marker_comment("// DOXNOTXSHIP now", "DO.NOT.SHIP"));
        // Boundary also holds for keywords ending in a non-word character.
        assert!(is_marker_comment("// C++ cleanup pending", "C++"));
    }
}
