//! Near-duplicate detection between two steps by key-phrase overlap.

use regex::Regex;
use std::sync::OnceLock;

use super::ClassifiedStep;

/// Overlap ratio above which two steps count as duplicates.
pub const SIMILARITY_THRESHOLD: f64 = 0.6;

const MAX_NAME_PHRASES: usize = 3;
const MIN_TOKEN_CHARS: usize = 3;

fn re_date() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)(?-u:\b)(january|february|march|april|may|june|july|august|september|october|november|december)\s+[0-9]+|friday|monday|tuesday|wednesday|thursday|saturday|sunday",
        )
        .expect("date regex")
    })
}

// Word boundaries and word characters are ASCII-only in these patterns, so
// "Café" yields "Caf" and "sendé" yields "send".
fn re_name() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?-u:\b)[A-Z][a-z]+(?-u:\b)").expect("name regex"))
}

fn re_verb() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?-u:\b)(prepare|follow|schedule|discuss|meet|call|send|create|review|finalize)(?-u:\w)*")
            .expect("verb regex")
    })
}

/// Fingerprint tokens for a step: dates, up to three capitalized words and
/// action verbs, lower-cased, with tokens of two characters or fewer removed.
///
/// Duplicates are kept; a verb that also opens the sentence shows up twice.
pub fn key_tokens(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut phrases: Vec<&str> = Vec::new();

    phrases.extend(re_date().find_iter(&lower).map(|m| m.as_str()));
    phrases.extend(
        re_name()
            .find_iter(text)
            .take(MAX_NAME_PHRASES)
            .map(|m| m.as_str()),
    );
    phrases.extend(re_verb().find_iter(&lower).map(|m| m.as_str()));

    phrases
        .join(" ")
        .to_lowercase()
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .map(String::from)
        .collect()
}

/// Number of tokens in `from` that also appear somewhere in `within`.
fn membership_count(from: &[String], within: &[String]) -> usize {
    from.iter().filter(|token| within.contains(token)).count()
}

/// Whether two steps are close enough that only one should be offered.
pub fn are_similar(a: &ClassifiedStep, b: &ClassifiedStep) -> bool {
    let tokens_a = key_tokens(&a.text);
    let tokens_b = key_tokens(&b.text);

    if tokens_a.is_empty() || tokens_b.is_empty() {
        return false;
    }

    // Counting in both directions and keeping the smaller makes the
    // relation symmetric when one side repeats a shared token.
    let common = membership_count(&tokens_a, &tokens_b).min(membership_count(&tokens_b, &tokens_a));
    let denominator = tokens_a.len().max(tokens_b.len());

    common as f64 / denominator as f64 > SIMILARITY_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(text: &str) -> ClassifiedStep {
        ClassifiedStep::new(text, 0)
    }

    #[test]
    fn test_key_tokens_collects_dates_names_and_verbs() {
        let tokens = key_tokens("Send Maria the recap by January 30 or Friday");
        // "30" is too short; only the first three capitalized words count.
        assert_eq!(
            tokens,
            vec!["january", "friday", "send", "maria", "january", "send"]
        );
    }

    #[test]
    fn test_key_tokens_limits_names_to_three() {
        let tokens = key_tokens("Ann Beth Cara Dana");
        assert_eq!(tokens, vec!["ann", "beth", "cara"]);
    }

    #[test]
    fn test_key_tokens_word_boundaries_are_ascii() {
        assert_eq!(key_tokens("Café Lumen"), vec!["caf", "lumen"]);
        assert_eq!(key_tokens("sendé notes"), vec!["send"]);
    }

    #[test]
    fn test_key_tokens_drops_short_tokens() {
        assert!(key_tokens("Al and Bo go").is_empty());
    }

    #[test]
    fn test_identical_steps_are_similar() {
        let a = step("Schedule follow-up call with Priya on Friday");
        assert!(are_similar(&a, &a.clone()));
    }

    #[test]
    fn test_reworded_duplicates_are_similar() {
        let a = step("Schedule follow-up call with Priya on Friday");
        let b = step("Schedule a follow up call with Priya Friday");
        assert!(are_similar(&a, &b));
    }

    #[test]
    fn test_unrelated_steps_are_not_similar() {
        let a = step("Prepare the renewal proposal");
        let b = step("Send the pricing sheet");
        assert!(!are_similar(&a, &b));
    }

    #[test]
    fn test_empty_tokens_are_never_similar() {
        let a = step("ok");
        let b = step("ok");
        assert!(!are_similar(&a, &b));
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let cases = [
            ("send send send notes", "Send the notes"),
            ("Review the deck on Monday", "review monday review"),
            ("Prepare the renewal proposal", "prepare prepare prepare"),
            ("Schedule a meeting with the CFO", "Send the pricing sheet"),
        ];
        for (left, right) in cases {
            let a = step(left);
            let b = step(right);
            assert_eq!(are_similar(&a, &b), are_similar(&b, &a), "{left} / {right}");
        }
    }

    #[test]
    fn test_repeated_token_does_not_inflate_overlap() {
        // One-directional counting would give 3/3 here.
        let a = step("send send send");
        let b = step("send review finalize");
        assert!(!are_similar(&a, &b));
        assert!(!are_similar(&b, &a));
    }
}
