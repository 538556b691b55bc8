//! CLI handler for rendering a meeting prep brief.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::warn;

use crate::config::{Config, OutputFormat};
use crate::error::InputError;
use crate::prep::MeetingPrep;
use crate::text_io::read_input;

use super::args::PrepCliArgs;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrepView {
    subject: Option<String>,
    when: Option<String>,
    location: Option<String>,
    sections: Vec<PrepSection>,
}

#[derive(Debug, Serialize)]
struct PrepSection {
    title: &'static str,
    html: String,
}

pub fn handle_prep_command(args: PrepCliArgs) -> Result<()> {
    let config = Config::load()?;
    let format = args.format.unwrap_or(config.output.format);

    let json = read_input(args.file.as_deref())?;
    if json.trim().is_empty() {
        return Err(InputError::Empty.into());
    }
    let prep: MeetingPrep =
        serde_json::from_str(&json).map_err(InputError::from).context("Failed to parse meeting prep")?;

    if prep.has_error() {
        let message = prep.message.as_deref().unwrap_or("Meeting prep generation failed");
        warn!("{message}");
        println!("{message}");
        return Ok(());
    }
    if !prep.has_any_content() {
        println!("No prep content available for this meeting.");
        return Ok(());
    }

    let view = PrepView {
        subject: prep.event_subject.clone(),
        when: prep.event_date_time.clone(),
        location: prep.event_location.clone(),
        sections: sections(&prep),
    };

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&view).context("Failed to serialize meeting prep")?
            );
        }
        OutputFormat::Text => print_prep(&view),
    }

    Ok(())
}

fn sections(prep: &MeetingPrep) -> Vec<PrepSection> {
    let text = |field: &Option<String>| field.clone().unwrap_or_default();
    let candidates = [
        ("Prep brief", prep.has_prep_brief(), text(&prep.prep_brief_html)),
        ("Attendees", prep.has_attendee_summary(), prep.attendee_summary_html()),
        ("Key talking points", prep.has_key_talking_points(), text(&prep.key_talking_points)),
        ("Recent updates", prep.has_recent_updates(), text(&prep.recent_updates)),
        ("Questions to ask", prep.has_questions_to_ask(), text(&prep.questions_to_ask)),
        ("Potential objections", prep.has_potential_objections(), text(&prep.potential_objections)),
        (
            "Competitive intelligence",
            prep.has_competitive_intelligence(),
            text(&prep.competitive_intelligence),
        ),
    ];

    candidates
        .into_iter()
        .filter(|(_, present, _)| *present)
        .map(|(title, _, html)| PrepSection { title, html })
        .collect()
}

fn print_prep(view: &PrepView) {
    println!("=== {} ===", view.subject.as_deref().unwrap_or("Meeting prep"));
    let details: Vec<&str> = [view.when.as_deref(), view.location.as_deref()]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect();
    if !details.is_empty() {
        println!("{}", details.join(" | "));
    }

    for section in &view.sections {
        println!("\n{}:\n{}", section.title, section.html);
    }
}
