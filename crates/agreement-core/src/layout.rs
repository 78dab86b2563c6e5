//! Selective-bold word wrapping.
//!
//! Every paragraph of the agreement is drawn word by word so that bold
//! and normal runs interleave within a single visual line: a word is set
//! in bold when it contains any sufficiently long token of a party name
//! or the property address, everything else stays regular weight.

use crate::metrics::{self, Font};

/// Minimum token length for a name part to participate in bold matching.
/// Initials and other short parts never trigger bolding.
const MIN_TOKEN_LEN: usize = 3;

/// Tokens of the names whose occurrences are emphasised in prose.
#[derive(Debug, Clone)]
pub struct NameMatcher {
    tokens: Vec<String>,
}

impl NameMatcher {
    /// Build a matcher from whitespace-tokenised names. Tokens shorter
    /// than three characters are discarded up front.
    pub fn new(names: &[&str]) -> Self {
        let tokens = names
            .iter()
            .flat_map(|name| name.split_whitespace())
            .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
            .map(str::to_string)
            .collect();
        Self { tokens }
    }

    /// A word is emphasised when any retained token is a substring of it.
    /// Partial overlaps count: "Smithson" matches the token "Smith".
    pub fn matches(&self, word: &str) -> bool {
        self.tokens.iter().any(|token| word.contains(token.as_str()))
    }
}

/// One word of a wrapped line, with its resolved weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledWord {
    pub text: String,
    pub bold: bool,
}

impl StyledWord {
    pub fn font(&self) -> Font {
        if self.bold {
            Font::HelveticaBold
        } else {
            Font::Helvetica
        }
    }

    /// Horizontal advance when drawn: the word plus one trailing space,
    /// measured in the weight the word is drawn with.
    pub fn advance(&self, size: f64) -> f64 {
        metrics::text_width(&self.text, self.font(), size)
            + metrics::text_width(" ", self.font(), size)
    }
}

/// Wrap `text` to `max_width` points at `size`, classifying each word
/// through `matcher`. Greedy fill; a word wider than the full line gets
/// a line of its own rather than being split.
pub fn wrap(text: &str, max_width: f64, size: f64, matcher: &NameMatcher) -> Vec<Vec<StyledWord>> {
    let mut lines = Vec::new();
    let mut line: Vec<StyledWord> = Vec::new();
    let mut cursor = 0.0_f64;

    for raw in text.split_whitespace() {
        let word = StyledWord {
            text: raw.to_string(),
            bold: matcher.matches(raw),
        };
        let width = metrics::text_width(raw, word.font(), size);

        if !line.is_empty() && cursor + width > max_width {
            lines.push(std::mem::take(&mut line));
            cursor = 0.0;
        }

        cursor += word.advance(size);
        line.push(word);
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn joined(lines: &[Vec<StyledWord>]) -> String {
        lines
            .iter()
            .flat_map(|line| line.iter().map(|w| w.text.as_str()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn short_name_tokens_never_match() {
        // "Jo" is two characters: "Johnson" stays regular weight while
        // "Smithson" picks up the five-character token "Smith".
        let matcher = NameMatcher::new(&["Jo Smith"]);
        assert!(!matcher.matches("Johnson"));
        assert!(matcher.matches("Smithson"));
        assert!(matcher.matches("Smith"));
    }

    #[test]
    fn matching_is_substring_not_equality() {
        let matcher = NameMatcher::new(&["Vineet Dutta"]);
        assert!(matcher.matches("Vineet's"));
        assert!(matcher.matches("Dutta,"));
        assert!(!matcher.matches("Vince"));
    }

    #[test]
    fn address_tokens_participate() {
        let matcher = NameMatcher::new(&[
            "Praveen Kumar Anwla",
            "Vineet Dutta",
            "161 Van Wagenen Ave, Jersey City, NJ 07306",
        ]);
        assert!(matcher.matches("Wagenen"));
        // "Van", "161" and "NJ" are short or numeric tokens; "Van" has
        // exactly three characters so it does match.
        assert!(matcher.matches("Van"));
        assert!(!matcher.matches("N"));
    }

    #[test]
    fn wrap_preserves_word_order() {
        let matcher = NameMatcher::new(&[]);
        let text = "the quick brown fox jumps over the lazy dog";
        let lines = wrap(text, 60.0, 8.5, &matcher);
        assert!(lines.len() > 1);
        assert_eq!(joined(&lines), text);
    }

    #[test]
    fn wrapped_lines_fit_the_width() {
        let matcher = NameMatcher::new(&["Praveen Kumar Anwla"]);
        let text = "Both Vineet Dutta and Praveen Kumar Anwla will be required \
                    to give a 30-day notice period in the event parties want to \
                    terminate the agreement earlier.";
        for line in wrap(text, 200.0, 8.5, &matcher) {
            let width: f64 = line
                .iter()
                .map(|w| crate::metrics::text_width(&w.text, w.font(), 8.5))
                .sum::<f64>()
                + 0.278 * 8.5 * (line.len().saturating_sub(1)) as f64;
            assert!(width <= 200.0 + 1e-6, "line too wide: {width}");
        }
    }

    #[test]
    fn oversized_word_gets_its_own_line() {
        let matcher = NameMatcher::new(&[]);
        let lines = wrap("a Pneumonoultramicroscopicsilicovolcanoconiosis b", 40.0, 8.5, &matcher);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].len(), 1);
    }

    #[test]
    fn bold_words_carry_the_bold_font() {
        let matcher = NameMatcher::new(&["Vineet Dutta"]);
        let lines = wrap("between Vineet Dutta and others", 500.0, 8.5, &matcher);
        let flags: Vec<bool> = lines[0].iter().map(|w| w.bold).collect();
        assert_eq!(flags, vec![false, true, true, false, false]);
        assert_eq!(lines[0][1].font(), Font::HelveticaBold);
    }

    proptest! {
        #[test]
        fn wrap_never_drops_or_reorders_words(
            words in proptest::collection::vec("[a-zA-Z]{1,12}", 1..40),
            width in 40.0f64..400.0,
        ) {
            let matcher = NameMatcher::new(&["Praveen Kumar Anwla"]);
            let text = words.join(" ");
            let lines = wrap(&text, width, 8.5, &matcher);
            prop_assert_eq!(joined(&lines), text);
        }

        #[test]
        fn multi_word_lines_stay_within_width(
            words in proptest::collection::vec("[a-z]{1,10}", 1..40),
            width in 60.0f64..400.0,
        ) {
            let matcher = NameMatcher::new(&[]);
            let lines = wrap(&words.join(" "), width, 8.5, &matcher);
            for line in lines {
                if line.len() > 1 {
                    let total: f64 = line
                        .iter()
                        .map(|w| crate::metrics::text_width(&w.text, w.font(), 8.5))
                        .sum();
                    prop_assert!(total <= width + 1e-6);
                }
            }
        }
    }
}
