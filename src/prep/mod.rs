//! Meeting prep brief view model.
//!
//! A prep record holds the generated briefing sections for an upcoming
//! meeting. Each section is shown only when it has text; the attendee
//! summary may arrive as a JSON array and is then rendered as a list.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Generated prep content for one meeting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MeetingPrep {
    pub meeting_prep_id: Option<String>,
    pub event_id: Option<String>,
    pub event_subject: Option<String>,
    pub event_date_time: Option<String>,
    pub event_location: Option<String>,
    #[serde(rename = "prepBriefHTML")]
    pub prep_brief_html: Option<String>,
    pub competitive_intelligence: Option<String>,
    pub attendee_summary: Option<String>,
    pub key_talking_points: Option<String>,
    pub recent_updates: Option<String>,
    pub questions_to_ask: Option<String>,
    pub potential_objections: Option<String>,
    pub success: Option<bool>,
    pub message: Option<String>,
}

fn has_text(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}

impl MeetingPrep {
    pub fn has_prep_brief(&self) -> bool {
        has_text(&self.prep_brief_html)
    }

    pub fn has_competitive_intelligence(&self) -> bool {
        has_text(&self.competitive_intelligence)
    }

    pub fn has_attendee_summary(&self) -> bool {
        has_text(&self.attendee_summary)
    }

    pub fn has_key_talking_points(&self) -> bool {
        has_text(&self.key_talking_points)
    }

    pub fn has_recent_updates(&self) -> bool {
        has_text(&self.recent_updates)
    }

    pub fn has_questions_to_ask(&self) -> bool {
        has_text(&self.questions_to_ask)
    }

    pub fn has_potential_objections(&self) -> bool {
        has_text(&self.potential_objections)
    }

    pub fn has_any_content(&self) -> bool {
        self.has_prep_brief()
            || self.has_competitive_intelligence()
            || self.has_attendee_summary()
            || self.has_key_talking_points()
            || self.has_recent_updates()
            || self.has_questions_to_ask()
            || self.has_potential_objections()
    }

    /// Generation reported a failure. A missing flag is neither error nor success.
    pub fn has_error(&self) -> bool {
        self.success == Some(false)
    }

    pub fn has_success(&self) -> bool {
        self.success == Some(true)
    }

    /// Attendee summary ready for display, empty when there is none.
    pub fn attendee_summary_html(&self) -> String {
        self.attendee_summary
            .as_deref()
            .map(render_attendees)
            .unwrap_or_default()
    }
}

/// Render a JSON array of attendees as an HTML list.
///
/// Anything that is not a JSON array (plain text, HTML, an object) is
/// returned unchanged, as is an array with a `null` entry.
pub fn render_attendees(summary: &str) -> String {
    let attendees = match serde_json::from_str::<Value>(summary) {
        Ok(Value::Array(attendees)) if !attendees.iter().any(Value::is_null) => attendees,
        _ => return summary.to_string(),
    };
    debug!("Rendering {} attendee(s) as a list", attendees.len());

    let items: String = attendees
        .iter()
        .map(|attendee| {
            let mut parts = Vec::new();
            if let Some(name) = attendee_part(attendee, "name") {
                parts.push(format!("<strong>{name}</strong>"));
            }
            if let Some(title) = attendee_part(attendee, "title") {
                parts.push(title);
            }
            if let Some(email) = attendee_part(attendee, "email") {
                parts.push(format!("Email: {email}"));
            }
            if let Some(phone) = attendee_part(attendee, "phone") {
                parts.push(format!("Phone: {phone}"));
            }
            format!("<li>{}</li>", parts.join(" • "))
        })
        .collect();

    format!("<ul>{items}</ul>")
}

/// A displayable attendee field; empty strings, zero and `false` count as absent.
fn attendee_part(attendee: &Value, field: &str) -> Option<String> {
    match attendee.get(field)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}
