use regex::Regex;
use std::sync::OnceLock;

const MAX_SUMMARY_CHARS: usize = 100;
const MIN_WORD_BREAK: usize = 50;
const LABEL_COLON_LIMIT: usize = 80;

fn re_owner_deadline() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)owner:|deadline:").expect("owner regex"))
}

fn re_leading_verb() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(prepare|develop|draft|identify|organize|schedule|explore|create)\s+")
            .expect("leading verb regex")
    })
}

/// Reduce a step to a short button label.
///
/// Drops owner/deadline trailers and a leading "Label:" prefix, strips one
/// leading verb, capitalizes, and caps the result at 100 characters plus an
/// ellipsis.
pub fn summarize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let before_owner = match re_owner_deadline().find(text) {
        Some(m) => &text[..m.start()],
        None => text,
    };
    let mut summary = before_owner.trim();

    if let Some((index, _)) = summary.char_indices().find(|(_, c)| *c == ':') {
        let char_pos = summary[..index].chars().count();
        if char_pos > 0 && char_pos < LABEL_COLON_LIMIT {
            summary = summary[index + 1..].trim();
        }
    }

    let summary = re_leading_verb().replace(summary, "");
    let summary = capitalize_first(&summary);

    truncate_at_word(&summary)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn truncate_at_word(text: &str) -> String {
    if text.chars().count() <= MAX_SUMMARY_CHARS {
        return text.to_string();
    }

    let truncated: String = text.chars().take(MAX_SUMMARY_CHARS).collect();
    let last_space = truncated
        .char_indices()
        .filter(|(_, c)| *c == ' ')
        .map(|(i, _)| i)
        .last();

    match last_space {
        Some(i) if truncated[..i].chars().count() > MIN_WORD_BREAK => {
            format!("{}...", &truncated[..i])
        }
        _ => format!("{truncated}..."),
    }
}
