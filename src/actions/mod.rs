//! Next-step extraction: turns generated "next steps" text into at most three
//! categorized, de-duplicated action items.
//!
//! The pipeline is parse → classify → select, with the summarizer and the
//! similarity checker used by the selector. Every stage is a total function.

mod classifier;
mod parser;
mod selector;
mod similarity;
mod summarizer;

pub use classifier::{classify, Rule, RULES};
pub use parser::parse;
pub use selector::{select, MAX_ACTION_ITEMS};
pub use similarity::{are_similar, key_tokens, SIMILARITY_THRESHOLD};
pub use summarizer::summarize;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of follow-up a step turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Task,
    Event,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Event => "event",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Task => "Create Task",
            Self::Event => "Schedule Event",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Task => "task-icon",
            Self::Event => "event-icon",
        }
    }

    pub fn variant(&self) -> &'static str {
        match self {
            Self::Task => "neutral",
            Self::Event => "brand",
        }
    }

    pub fn card_class(&self) -> &'static str {
        match self {
            Self::Task => "action-card-task",
            Self::Event => "action-card-event",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A parsed step together with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedStep {
    pub text: String,
    pub category: Category,
    /// Position of the step in the parsed sequence.
    pub position: usize,
}

impl ClassifiedStep {
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        let text = text.into();
        let category = classify(&text);
        Self {
            text,
            category,
            position,
        }
    }

    /// Stable synthetic key for this step, unique within one parse.
    pub fn key(&self) -> String {
        format!("step-{}", self.position)
    }
}

/// Marker for the action whose creation call is in flight.
///
/// `Text` matches on raw step text, so two steps with identical text both
/// show as loading. `Key` matches the synthetic key and has no such collision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "by", content = "value")]
pub enum Pending {
    Text(String),
    Key(String),
}

impl Pending {
    pub fn matches(&self, step: &ClassifiedStep) -> bool {
        match self {
            Self::Text(text) => *text == step.text,
            Self::Key(key) => *key == step.key(),
        }
    }
}

/// A selected step enriched with presentation fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayItem {
    pub id: String,
    pub key: String,
    pub text: String,
    pub summary_text: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub label: String,
    pub icon: String,
    pub variant: String,
    pub card_class: String,
    pub is_task: bool,
    pub is_loading: bool,
}

impl DisplayItem {
    pub fn from_step(index: usize, step: &ClassifiedStep, pending: Option<&Pending>) -> Self {
        let is_loading = pending.is_some_and(|p| p.matches(step));
        let label = if is_loading {
            "Loading..."
        } else {
            step.category.label()
        };

        Self {
            id: format!("action-{index}"),
            key: step.key(),
            text: step.text.clone(),
            summary_text: summarize(&step.text),
            category: step.category,
            label: label.to_string(),
            icon: step.category.icon().to_string(),
            variant: step.category.variant().to_string(),
            card_class: step.category.card_class().to_string(),
            is_task: step.category == Category::Task,
            is_loading,
        }
    }
}

/// Parse, classify and select action items from raw next-steps text.
pub fn extract_action_items(text: &str, pending: Option<&Pending>) -> Vec<DisplayItem> {
    select(&parse(text), pending)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_item_fields_for_event() {
        let step = ClassifiedStep::new("Schedule a call with the buyer", 4);
        let item = DisplayItem::from_step(0, &step, None);

        assert_eq!(item.id, "action-0");
        assert_eq!(item.key, "step-4");
        assert_eq!(item.category, Category::Event);
        assert_eq!(item.label, "Schedule Event");
        assert_eq!(item.icon, "event-icon");
        assert_eq!(item.variant, "brand");
        assert_eq!(item.card_class, "action-card-event");
        assert!(!item.is_task);
        assert!(!item.is_loading);
    }

    #[test]
    fn test_display_item_fields_for_task() {
        let step = ClassifiedStep::new("Send the pricing sheet", 0);
        let item = DisplayItem::from_step(2, &step, None);

        assert_eq!(item.id, "action-2");
        assert_eq!(item.label, "Create Task");
        assert_eq!(item.icon, "task-icon");
        assert_eq!(item.variant, "neutral");
        assert_eq!(item.card_class, "action-card-task");
        assert!(item.is_task);
    }

    #[test]
    fn test_pending_text_collides_on_identical_text() {
        let first = ClassifiedStep::new("Send the pricing sheet", 0);
        let second = ClassifiedStep::new("Send the pricing sheet", 3);
        let pending = Pending::Text("Send the pricing sheet".to_string());

        assert!(pending.matches(&first));
        assert!(pending.matches(&second));
    }

    #[test]
    fn test_pending_key_is_unique() {
        let first = ClassifiedStep::new("Send the pricing sheet", 0);
        let second = ClassifiedStep::new("Send the pricing sheet", 3);
        let pending = Pending::Key(second.key());

        assert!(!pending.matches(&first));
        assert!(pending.matches(&second));

        let item = DisplayItem::from_step(1, &second, Some(&pending));
        assert!(item.is_loading);
        assert_eq!(item.label, "Loading...");
    }

    #[test]
    fn test_display_item_serializes_camel_case() {
        let step = ClassifiedStep::new("Send the pricing sheet", 0);
        let item = DisplayItem::from_step(0, &step, None);
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["summaryText"], "Send the pricing sheet");
        assert_eq!(json["type"], "task");
        assert_eq!(json["cardClass"], "action-card-task");
        assert_eq!(json["isLoading"], false);
    }
}
