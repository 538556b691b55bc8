//! Keyword rules deciding whether a step is a task or an event.
//!
//! Rules are evaluated in order against the lower-cased step text and the
//! first one that matches decides. Anything unmatched is a task.

use tracing::debug;

use super::Category;

/// Phrases that always mean a meeting or call is being set up.
pub const STRONG_EVENT_KEYWORDS: &[&str] = &[
    "schedule a meeting",
    "schedule a call",
    "schedule meeting",
    "schedule call",
    "meeting with",
    "call with",
    "follow-up meeting",
    "follow up meeting",
    "appointment",
    "conference",
    "demo",
    "presentation",
    "workshop",
    "webinar",
    "sync meeting",
    "standup",
    "stand-up",
    "touch base",
    "check-in",
    "check in",
];

/// Phrases naming a piece of work rather than a meeting.
pub const TASK_KEYWORDS: &[&str] = &[
    "send email",
    "send an email",
    "prepare document",
    "prepare report",
    "prepare plan",
    "prepare for",
    "prepare proposal",
    "prepare materials",
    "finalize",
    "deliver",
    "create document",
    "create report",
    "create proposal",
    "update record",
    "update case",
    "update opportunity",
    "review",
    "review document",
    "review proposal",
    "review materials",
    "complete form",
    "complete",
    "submit",
    "draft",
    "draft proposal",
    "draft email",
    "write",
    "write email",
    "email",
    "introduction",
    "introduce",
    "facilitate introduction",
    "research",
    "analyze",
    "gather",
    "compile",
    "organize",
    "coordinate",
    "follow up with email",
    "send follow-up",
    "document",
    "record",
];

/// Words that mention a meeting without saying what to do about it.
pub const MEETING_KEYWORDS: &[&str] = &[
    "meeting",
    "call",
    "conference call",
    "video call",
    "zoom",
    "teams meeting",
    "google meet",
];

pub const SCHEDULING_INDICATORS: &[&str] = &["schedule", "set up", "arrange", "book", "attend"];

pub const PREP_INDICATORS: &[&str] = &["prepare", "prep"];

/// One entry of the decision list.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub category: Category,
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

fn strong_event(text: &str) -> bool {
    contains_any(text, STRONG_EVENT_KEYWORDS)
}

fn task_phrase(text: &str) -> bool {
    contains_any(text, TASK_KEYWORDS)
}

fn scheduled_meeting(text: &str) -> bool {
    contains_any(text, MEETING_KEYWORDS) && contains_any(text, SCHEDULING_INDICATORS)
}

fn meeting_prep(text: &str) -> bool {
    contains_any(text, MEETING_KEYWORDS) && contains_any(text, PREP_INDICATORS)
}

fn bare_meeting(text: &str) -> bool {
    contains_any(text, MEETING_KEYWORDS)
}

/// The decision list, in evaluation order.
pub const RULES: &[Rule] = &[
    Rule {
        name: "strong_event",
        matches: strong_event,
        category: Category::Event,
    },
    Rule {
        name: "task_phrase",
        matches: task_phrase,
        category: Category::Task,
    },
    Rule {
        name: "scheduled_meeting",
        matches: scheduled_meeting,
        category: Category::Event,
    },
    Rule {
        name: "meeting_prep",
        matches: meeting_prep,
        category: Category::Task,
    },
    Rule {
        name: "bare_meeting",
        matches: bare_meeting,
        category: Category::Event,
    },
];

/// Categorize a single step.
pub fn classify(step: &str) -> Category {
    let lower = step.to_lowercase();

    match RULES.iter().find(|rule| (rule.matches)(&lower)) {
        Some(rule) => {
            debug!("Rule {} classified step as {}", rule.name, rule.category);
            rule.category
        }
        None => Category::Task,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> &'static Rule {
        RULES.iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_strong_keyword_beats_generic_meeting() {
        assert_eq!(classify("Schedule a meeting with the CFO"), Category::Event);
    }

    #[test]
    fn test_task_keyword() {
        assert_eq!(classify("Prepare proposal for renewal"), Category::Task);
    }

    #[test]
    fn test_bare_call_is_event() {
        assert_eq!(classify("Discuss pricing on the call"), Category::Event);
    }

    #[test]
    fn test_review_before_call_is_task() {
        assert_eq!(classify("Review the contract before the call"), Category::Task);
    }

    #[test]
    fn test_scheduling_indicator_makes_event() {
        assert_eq!(classify("Book time on Zoom"), Category::Event);
    }

    #[test]
    fn test_prep_for_meeting_is_task() {
        assert_eq!(classify("Prep talking points for the zoom"), Category::Task);
    }

    #[test]
    fn test_default_is_task() {
        assert_eq!(classify("Confirm budget numbers"), Category::Task);
        assert_eq!(classify(""), Category::Task);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("WEBINAR for the ops team"), Category::Event);
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "strong_event",
                "task_phrase",
                "scheduled_meeting",
                "meeting_prep",
                "bare_meeting"
            ]
        );
    }

    #[test]
    fn test_individual_rules() {
        assert!((rule("strong_event").matches)("quick touch base next week"));
        assert!(!(rule("strong_event").matches)("send the notes"));

        assert!((rule("task_phrase").matches)("compile usage data"));
        assert!(!(rule("task_phrase").matches)("talk to legal"));

        assert!((rule("scheduled_meeting").matches)("arrange a call"));
        assert!(!(rule("scheduled_meeting").matches)("arrange the files"));

        assert!((rule("meeting_prep").matches)("prep for the teams meeting"));
        assert!(!(rule("meeting_prep").matches)("prep the slides"));

        assert!((rule("bare_meeting").matches)("google meet with ops"));
        assert!(!(rule("bare_meeting").matches)("ship the fix"));
    }
}
