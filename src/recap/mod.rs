//! Meeting recap view model.
//!
//! Holds the generated recap fields for one meeting and derives everything
//! the recap card shows from them: formatted lists, timing text and the
//! action items offered as buttons.

mod formatting;

pub use formatting::format_bullets_as_html;

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::actions::{extract_action_items, DisplayItem, Pending};
use crate::schedule::{format_clock, format_duration};

/// Generated recap content for one meeting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MeetingRecap {
    pub meeting_id: Option<String>,
    pub subject: Option<String>,
    pub summary: Option<String>,
    pub key_outcomes: Option<String>,
    pub next_steps: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub duration_minutes: Option<u32>,
    pub account_id: Option<String>,
    pub contact_id: Option<String>,
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl MeetingRecap {
    pub fn has_summary(&self) -> bool {
        non_empty(&self.summary).is_some()
    }

    pub fn has_key_outcomes(&self) -> bool {
        non_empty(&self.key_outcomes).is_some()
    }

    pub fn has_next_steps(&self) -> bool {
        non_empty(&self.next_steps).is_some()
    }

    pub fn has_recap_data(&self) -> bool {
        self.has_summary() || self.has_key_outcomes() || self.has_next_steps()
    }

    pub fn formatted_key_outcomes(&self) -> String {
        non_empty(&self.key_outcomes)
            .map(format_bullets_as_html)
            .unwrap_or_default()
    }

    pub fn formatted_next_steps(&self) -> String {
        non_empty(&self.next_steps)
            .map(format_bullets_as_html)
            .unwrap_or_default()
    }

    /// e.g. "Tuesday, March 3, 2026 at 2:30 PM"
    pub fn formatted_start(&self, offset: FixedOffset) -> String {
        self.start
            .map(|start| {
                let local = start.with_timezone(&offset);
                format!(
                    "{} at {}",
                    local.format("%A, %B %-d, %Y"),
                    format_clock(start, offset)
                )
            })
            .unwrap_or_default()
    }

    pub fn formatted_end(&self, offset: FixedOffset) -> String {
        self.end
            .map(|end| format_clock(end, offset))
            .unwrap_or_default()
    }

    pub fn formatted_duration(&self) -> String {
        match self.duration_minutes {
            Some(minutes) if minutes > 0 => format_duration(minutes),
            _ => String::new(),
        }
    }

    /// Action items derived from the next-steps text.
    pub fn action_items(&self, pending: Option<&Pending>) -> Vec<DisplayItem> {
        match non_empty(&self.next_steps) {
            Some(text) => extract_action_items(text, pending),
            None => Vec::new(),
        }
    }

    pub fn show_action_buttons(&self) -> bool {
        self.has_next_steps() && !self.action_items(None).is_empty()
    }

    /// Payload the task/event creation service expects for an item.
    pub fn create_request(&self, item: &DisplayItem) -> CreateActionRequest {
        CreateActionRequest::from_item(item, self.account_id.clone(), self.contact_id.clone())
    }
}

/// Request body for generating a task or event from an action item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateActionRequest {
    pub free_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_contact_id: Option<String>,
}

impl CreateActionRequest {
    pub fn from_item(
        item: &DisplayItem,
        related_account_id: Option<String>,
        related_contact_id: Option<String>,
    ) -> Self {
        Self {
            free_text: item.text.clone(),
            related_account_id,
            related_contact_id,
        }
    }
}
