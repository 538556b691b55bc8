//! CLI handler for the day schedule view.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::info;

use crate::config::{offset_from_minutes, Config, OutputFormat};
use crate::error::InputError;
use crate::schedule::{self, DaySchedule};
use crate::text_io::read_file;

use super::args::ScheduleCliArgs;

pub fn handle_schedule_command(args: ScheduleCliArgs) -> Result<()> {
    let config = Config::load()?;
    let format = args.format.unwrap_or(config.output.format);
    let offset = match args.utc_offset {
        Some(minutes) => offset_from_minutes(minutes)?,
        None => config.schedule.offset()?,
    };

    let now = match args.now.as_deref() {
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map_err(|_| InputError::InvalidTimestamp(value.to_string()))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    let json = read_file(&args.file)?;
    let mut meetings = schedule::parse_meetings(&json).context("Failed to load meetings")?;

    let day = match args.date.as_deref() {
        Some(value) => schedule::parse_day(value)?,
        None => schedule::local_date(now, offset),
    };
    let is_today = schedule::is_today(day, now, offset);
    meetings = schedule::meetings_on(meetings, day, offset);
    meetings.sort_by_key(|m| m.start);
    info!("{} meeting(s) on {}", meetings.len(), day);

    let view = DaySchedule::build(meetings, now, offset);

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&view).context("Failed to serialize schedule")?
            );
        }
        OutputFormat::Text => {
            println!("=== {} ===", day.format("%A, %B %-d, %Y"));
            if view.meetings.is_empty() {
                let (title, message) = schedule::empty_state(is_today);
                println!("{title}\n{message}");
                return Ok(());
            }

            println!("{}\n", view.summary);
            for entry in &view.meetings {
                let mut line = format!(
                    "{:>8}  {:<8} {:<9} {}",
                    entry.formatted_start_time,
                    entry.duration_text,
                    entry.timing.as_str(),
                    entry.meeting.subject
                );
                if let Some(related) = entry.meeting.related_name.as_deref() {
                    line.push_str(&format!(" [{related}]"));
                }
                if entry.timing.show_recap_button {
                    line.push_str("  (recap pending)");
                }
                println!("{line}");
            }
        }
    }

    Ok(())
}
