//! CLI handlers for next-steps text.
//!
//! Terminal presentation only; the extraction itself lives in `actions`.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::actions::{self, Category, ClassifiedStep, DisplayItem, Pending};
use crate::config::{Config, OutputFormat};
use crate::recap::format_bullets_as_html;
use crate::text_io::read_input;

use super::args::{ActionsCliArgs, FormatCliArgs, StepsCliArgs};

pub fn handle_actions_command(args: ActionsCliArgs) -> Result<()> {
    let config = Config::load()?;
    let format = args.format.unwrap_or(config.output.format);
    let text = read_input(args.file.as_deref())?;

    let pending = match (args.pending_text, args.pending_key) {
        (Some(text), _) => Some(Pending::Text(text)),
        (None, Some(key)) => Some(Pending::Key(key)),
        (None, None) => None,
    };

    let items = actions::extract_action_items(&text, pending.as_ref());
    info!("Selected {} action item(s)", items.len());

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&items).context("Failed to serialize action items")?
            );
        }
        OutputFormat::Text => print_items(&items),
    }

    Ok(())
}

fn print_items(items: &[DisplayItem]) {
    if items.is_empty() {
        println!("No action items found.");
        return;
    }

    for item in items {
        let marker = match item.category {
            Category::Task => "[task] ",
            Category::Event => "[event]",
        };
        println!("{} {} {}", item.id, marker, item.summary_text);
        println!("    {} ({})", item.label, item.key);
    }
}

/// One parsed step as shown by `recapper steps`.
#[derive(Debug, Serialize)]
struct StepView {
    key: String,
    category: Category,
    summary: String,
    text: String,
}

pub fn handle_steps_command(args: StepsCliArgs) -> Result<()> {
    let config = Config::load()?;
    let format = args.format.unwrap_or(config.output.format);
    let text = read_input(args.file.as_deref())?;

    let steps: Vec<StepView> = actions::parse(&text)
        .into_iter()
        .enumerate()
        .map(|(position, text)| {
            let step = ClassifiedStep::new(text, position);
            StepView {
                key: step.key(),
                category: step.category,
                summary: actions::summarize(&step.text),
                text: step.text,
            }
        })
        .collect();

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&steps).context("Failed to serialize steps")?
            );
        }
        OutputFormat::Text => {
            if steps.is_empty() {
                println!("No steps found.");
            }
            for step in &steps {
                println!("{:<8} {:<6} {}", step.key, step.category, step.summary);
            }
        }
    }

    Ok(())
}

pub fn handle_format_command(args: FormatCliArgs) -> Result<()> {
    let text = read_input(args.file.as_deref())?;
    println!("{}", format_bullets_as_html(&text));
    Ok(())
}
