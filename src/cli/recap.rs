//! CLI handler for rendering a stored meeting recap.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::actions::DisplayItem;
use crate::config::{offset_from_minutes, Config, OutputFormat};
use crate::error::InputError;
use crate::recap::{CreateActionRequest, MeetingRecap};
use crate::text_io::read_input;

use super::args::RecapCliArgs;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecapView {
    subject: Option<String>,
    start: String,
    end: String,
    duration: String,
    summary: Option<String>,
    key_outcomes_html: String,
    next_steps_html: String,
    show_action_buttons: bool,
    action_items: Vec<DisplayItem>,
    requests: Vec<CreateActionRequest>,
}

pub fn handle_recap_command(args: RecapCliArgs) -> Result<()> {
    let config = Config::load()?;
    let format = args.format.unwrap_or(config.output.format);
    let offset = match args.utc_offset {
        Some(minutes) => offset_from_minutes(minutes)?,
        None => config.schedule.offset()?,
    };

    let json = read_input(args.file.as_deref())?;
    if json.trim().is_empty() {
        return Err(InputError::Empty.into());
    }
    let recap: MeetingRecap =
        serde_json::from_str(&json).map_err(InputError::from).context("Failed to parse recap")?;

    if !recap.has_recap_data() {
        println!("No recap data available for this meeting.");
        return Ok(());
    }

    let items = recap.action_items(None);
    let view = RecapView {
        subject: recap.subject.clone(),
        start: recap.formatted_start(offset),
        end: recap.formatted_end(offset),
        duration: recap.formatted_duration(),
        summary: recap.summary.clone(),
        key_outcomes_html: recap.formatted_key_outcomes(),
        next_steps_html: recap.formatted_next_steps(),
        show_action_buttons: recap.show_action_buttons(),
        requests: items.iter().map(|item| recap.create_request(item)).collect(),
        action_items: items,
    };

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&view).context("Failed to serialize recap")?
            );
        }
        OutputFormat::Text => print_recap(&view),
    }

    Ok(())
}

fn print_recap(view: &RecapView) {
    println!("=== {} ===", view.subject.as_deref().unwrap_or("Meeting recap"));
    if !view.start.is_empty() {
        let mut when = view.start.clone();
        if !view.end.is_empty() {
            when.push_str(&format!(" - {}", view.end));
        }
        if !view.duration.is_empty() {
            when.push_str(&format!(" ({})", view.duration));
        }
        println!("{when}");
    }

    if let Some(summary) = view.summary.as_deref().filter(|s| !s.is_empty()) {
        println!("\nSummary:\n{summary}");
    }
    if !view.key_outcomes_html.is_empty() {
        println!("\nKey outcomes:\n{}", view.key_outcomes_html);
    }
    if !view.next_steps_html.is_empty() {
        println!("\nNext steps:\n{}", view.next_steps_html);
    }

    if view.show_action_buttons {
        println!("\nSuggested actions:");
        for item in &view.action_items {
            println!("  [{}] {}", item.label, item.summary_text);
        }
    }
}
