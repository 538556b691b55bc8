//! Daily schedule helpers for the meeting command center.
//!
//! Works on a day's worth of meetings already fetched from the calendar:
//! timing status relative to "now", duration text and the one-line day
//! summary shown above the list.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::InputError;

/// One calendar meeting as delivered by the schedule query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: String,
    #[serde(default)]
    pub subject: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub recap_completed: bool,
    #[serde(default)]
    pub related_name: Option<String>,
    #[serde(default)]
    pub who_name: Option<String>,
}

impl Meeting {
    /// Scheduled length, falling back to end minus start.
    pub fn minutes(&self) -> u32 {
        self.duration_minutes.unwrap_or_else(|| {
            let minutes = (self.end - self.start).num_minutes();
            minutes.clamp(0, u32::MAX as i64) as u32
        })
    }

    pub fn timing(&self, now: DateTime<Utc>) -> MeetingTiming {
        let is_past = self.end < now;
        let is_now = self.start <= now && self.end >= now;
        MeetingTiming {
            is_past,
            is_now,
            is_upcoming: !is_past && !is_now,
            show_recap_button: is_past && !self.recap_completed,
        }
    }
}

/// Where a meeting sits relative to the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingTiming {
    pub is_past: bool,
    pub is_now: bool,
    pub is_upcoming: bool,
    pub show_recap_button: bool,
}

impl MeetingTiming {
    pub fn as_str(&self) -> &'static str {
        if self.is_now {
            "now"
        } else if self.is_past {
            "past"
        } else {
            "upcoming"
        }
    }
}

/// A meeting with its display fields resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledMeeting {
    #[serde(flatten)]
    pub meeting: Meeting,
    pub formatted_start_time: String,
    pub duration_text: String,
    #[serde(flatten)]
    pub timing: MeetingTiming,
}

/// The day view: meetings in calendar order plus the header text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub meetings: Vec<ScheduledMeeting>,
    pub summary: String,
}

impl DaySchedule {
    pub fn build(meetings: Vec<Meeting>, now: DateTime<Utc>, offset: FixedOffset) -> Self {
        let summary = day_summary(&meetings, offset);
        let meetings = meetings
            .into_iter()
            .map(|meeting| ScheduledMeeting {
                formatted_start_time: format_clock(meeting.start, offset),
                duration_text: format_duration(meeting.minutes()),
                timing: meeting.timing(now),
                meeting,
            })
            .collect();

        Self { meetings, summary }
    }
}

/// "45 min", "2 hr" or "1 hr 30 min".
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes} min");
    }
    let hours = minutes / 60;
    let remaining = minutes % 60;
    if remaining == 0 {
        format!("{hours} hr")
    } else {
        format!("{hours} hr {remaining} min")
    }
}

/// 12-hour clock time in the given offset, e.g. "9:05 AM".
pub fn format_clock(time: DateTime<Utc>, offset: FixedOffset) -> String {
    time.with_timezone(&offset).format("%-I:%M %p").to_string()
}

/// Header line summarizing the day's meetings.
pub fn day_summary(meetings: &[Meeting], offset: FixedOffset) -> String {
    match meetings {
        [] => "No meetings".to_string(),
        [only] => format!(
            "1 meeting at {} ({})",
            format_clock(only.start, offset),
            format_duration(only.minutes())
        ),
        _ => {
            let mut sorted: Vec<&Meeting> = meetings.iter().collect();
            sorted.sort_by_key(|m| m.start);

            let first = sorted[0];
            let last = sorted[sorted.len() - 1];
            let total_minutes: u32 = meetings.iter().map(|m| m.duration_minutes.unwrap_or(0)).sum();

            debug!(
                "Summarizing {} meetings, {} scheduled minutes",
                meetings.len(),
                total_minutes
            );

            format!(
                "{} meetings starting at {}, last meeting at {} - {} hours of meetings total",
                meetings.len(),
                format_clock(first.start, offset),
                format_clock(last.end, offset),
                format_hours(total_minutes)
            )
        }
    }
}

/// Hours with one decimal, ties rounded up ("1.3" for 75 minutes).
fn format_hours(minutes: u32) -> String {
    // Odd quarter hours are the only exact ties; `{:.1}` would round them to even.
    if minutes % 30 == 15 {
        let tenths = minutes / 6 + 1;
        return format!("{}.{}", tenths / 10, tenths % 10);
    }
    format!("{:.1}", f64::from(minutes) / 60.0)
}

/// Title and message for a day with nothing on the calendar.
pub fn empty_state(is_today: bool) -> (&'static str, &'static str) {
    if is_today {
        (
            "No Meetings Today",
            "You have a clear schedule today. Take advantage of this time to prepare for upcoming meetings or catch up on important tasks.",
        )
    } else {
        (
            "No Meetings on This Day",
            "No meetings are scheduled for this day. Use the navigation arrows to view other days or create a new meeting.",
        )
    }
}

/// Calendar date of `time` in the given offset.
pub fn local_date(time: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    time.with_timezone(&offset).date_naive()
}

/// Whether `day` is the calendar date of the reference time `now`.
pub fn is_today(day: NaiveDate, now: DateTime<Utc>, offset: FixedOffset) -> bool {
    day == local_date(now, offset)
}

/// Parse a `YYYY-MM-DD` day selector.
pub fn parse_day(value: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| InputError::InvalidDate(value.to_string()))
}

/// Keep only meetings that start on `day` in the given offset.
pub fn meetings_on(meetings: Vec<Meeting>, day: NaiveDate, offset: FixedOffset) -> Vec<Meeting> {
    meetings
        .into_iter()
        .filter(|m| local_date(m.start, offset) == day)
        .collect()
}

/// Decode a JSON array of meetings.
pub fn parse_meetings(json: &str) -> Result<Vec<Meeting>, InputError> {
    if json.trim().is_empty() {
        return Err(InputError::Empty);
    }
    Ok(serde_json::from_str(json)?)
}
