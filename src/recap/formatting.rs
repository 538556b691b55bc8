use regex::Regex;
use std::sync::OnceLock;

fn re_bullet() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^•\s*(.+)$").expect("bullet regex"))
}

/// Render "•" bullet runs as HTML lists and every other line as a paragraph.
///
/// Text that already carries `<ul>`/`<ol>` markup is returned untouched.
pub fn format_bullets_as_html(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    if text.contains("<ul>") || text.contains("<ol>") {
        return text.to_string();
    }

    let mut result = String::new();
    let mut items: Vec<String> = Vec::new();

    for line in text.split('\n') {
        let line = line.trim();

        if let Some(caps) = re_bullet().captures(line) {
            items.push(caps[1].to_string());
            continue;
        }

        flush_list(&mut result, &mut items);
        if !line.is_empty() {
            result.push_str(&format!("<p>{line}</p>"));
        }
    }
    flush_list(&mut result, &mut items);

    if result.is_empty() {
        text.to_string()
    } else {
        result
    }
}

fn flush_list(result: &mut String, items: &mut Vec<String>) {
    if items.is_empty() {
        return;
    }
    result.push_str("<ul>");
    for item in items.drain(..) {
        result.push_str(&format!("<li>{item}</li>"));
    }
    result.push_str("</ul>");
}
