use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Prose lines shorter than this are not treated as steps.
const MIN_PROSE_CHARS: usize = 10;

fn re_list_item() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<li[^>]*>(.*?)</li>").expect("list item regex"))
}

fn re_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("tag regex"))
}

fn re_leading_glyph() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^•\s*").expect("glyph regex"))
}

fn re_bullet_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[•\-*]\s*(.+)$").expect("bullet regex"))
}

fn re_bullet_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[•\-*]\s*").expect("bullet prefix regex"))
}

/// Split next-steps text into individual step strings, in source order.
///
/// HTML list items win whenever at least one is present; otherwise the text
/// is read line by line, taking bulleted lines and substantial prose lines.
pub fn parse(text: &str) -> Vec<String> {
    let html_steps = parse_list_items(text);
    if let Some(steps) = html_steps {
        debug!("Parsed {} step(s) from HTML list items", steps.len());
        return steps;
    }

    let steps = parse_lines(text);
    debug!("Parsed {} step(s) from plain-text lines", steps.len());
    steps
}

/// Returns `None` when the text has no list items at all.
fn parse_list_items(text: &str) -> Option<Vec<String>> {
    let mut found = false;
    let mut steps = Vec::new();

    for caps in re_list_item().captures_iter(text) {
        found = true;
        // Strip from the whole match so the <li> tag itself goes too.
        let stripped = re_tag().replace_all(&caps[0], "");
        let clean = re_leading_glyph().replace(stripped.trim(), "");
        if !clean.is_empty() {
            steps.push(clean.into_owned());
        }
    }

    found.then_some(steps)
}

fn parse_lines(text: &str) -> Vec<String> {
    let mut steps = Vec::new();

    for line in text.split('\n') {
        let trimmed = line.trim();

        if let Some(caps) = re_bullet_line().captures(trimmed) {
            steps.push(caps[1].trim().to_string());
        } else if !trimmed.is_empty() && !trimmed.starts_with('<') {
            let clean = re_bullet_prefix().replace(trimmed, "");
            if clean.chars().count() > MIN_PROSE_CHARS {
                steps.push(clean.into_owned());
            }
        }
    }

    steps
}
