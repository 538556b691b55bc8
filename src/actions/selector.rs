use tracing::debug;

use super::{are_similar, Category, ClassifiedStep, DisplayItem, Pending};

/// Upper bound on the number of action items offered at once.
pub const MAX_ACTION_ITEMS: usize = 3;

/// Pick a balanced, de-duplicated set of at most three action items.
///
/// Prefers two tasks and one event when both kinds exist, one task and up
/// to two events when only one task exists, and otherwise up to three of
/// whichever kind is present.
pub fn select(steps: &[String], pending: Option<&Pending>) -> Vec<DisplayItem> {
    if steps.is_empty() {
        return Vec::new();
    }

    let classified: Vec<ClassifiedStep> = steps
        .iter()
        .enumerate()
        .map(|(position, text)| ClassifiedStep::new(text.as_str(), position))
        .collect();

    let (tasks, events): (Vec<&ClassifiedStep>, Vec<&ClassifiedStep>) = classified
        .iter()
        .partition(|step| step.category == Category::Task);

    debug!(
        "Selecting from {} task(s) and {} event(s)",
        tasks.len(),
        events.len()
    );

    let mut selected = match (tasks.is_empty(), events.is_empty()) {
        (false, false) if tasks.len() >= 2 => two_tasks_one_event(&tasks, &events),
        (false, false) => {
            let mut selected = vec![tasks[0]];
            fill_distinct(&mut selected, &events);
            selected
        }
        (false, true) => {
            let mut selected = vec![tasks[0]];
            fill_distinct(&mut selected, &tasks[1..]);
            selected
        }
        (true, false) => {
            let mut selected = vec![events[0]];
            fill_distinct(&mut selected, &events[1..]);
            selected
        }
        (true, true) => Vec::new(),
    };

    selected.truncate(MAX_ACTION_ITEMS);

    selected
        .into_iter()
        .enumerate()
        .map(|(index, step)| DisplayItem::from_step(index, step, pending))
        .collect()
}

fn two_tasks_one_event<'a>(
    tasks: &[&'a ClassifiedStep],
    events: &[&'a ClassifiedStep],
) -> Vec<&'a ClassifiedStep> {
    let first = tasks[0];
    let mut selected = vec![first];

    if !are_similar(first, tasks[1]) {
        selected.push(tasks[1]);
    } else if let Some(next) = tasks[2..].iter().find(|task| !are_similar(first, task)) {
        selected.push(*next);
    }

    if selected.len() < MAX_ACTION_ITEMS {
        if let Some(event) = events.iter().find(|event| !similar_to_any(&selected, event)) {
            selected.push(*event);
        }
    }

    selected
}

/// Append candidates in order, skipping near-duplicates, until full.
fn fill_distinct<'a>(selected: &mut Vec<&'a ClassifiedStep>, candidates: &[&'a ClassifiedStep]) {
    for candidate in candidates {
        if selected.len() >= MAX_ACTION_ITEMS {
            break;
        }
        if !similar_to_any(selected, candidate) {
            selected.push(*candidate);
        } else {
            debug!("Skipping near-duplicate step: {}", candidate.text);
        }
    }
}

fn similar_to_any(selected: &[&ClassifiedStep], candidate: &ClassifiedStep) -> bool {
    selected.iter().any(|item| are_similar(item, candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    fn texts(items: &[DisplayItem]) -> Vec<&str> {
        items.iter().map(|i| i.text.as_str()).collect()
    }

    #[test]
    fn test_select_empty() {
        assert!(select(&[], None).is_empty());
    }

    #[test]
    fn test_select_single_step() {
        let items = select(&steps(&["Send the pricing sheet"]), None);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "action-0");
    }

    #[test]
    fn test_two_tasks_and_first_distinct_event() {
        let items = select(
            &steps(&[
                "Schedule a follow-up meeting with the CFO next week",
                "Prepare the renewal proposal",
                "Send the pricing sheet",
                "Book a demo for the ops team",
            ]),
            None,
        );

        assert_eq!(
            texts(&items),
            vec![
                "Prepare the renewal proposal",
                "Send the pricing sheet",
                "Schedule a follow-up meeting with the CFO next week",
            ]
        );
        assert_eq!(items[2].category, Category::Event);
    }

    #[test]
    fn test_similar_second_task_is_replaced() {
        let items = select(
            &steps(&[
                "Send Priya the recap on Friday",
                "Send Priya the recap Friday",
                "Compile usage data for finance",
                "Attend the quarterly business meeting",
            ]),
            None,
        );

        assert_eq!(
            texts(&items),
            vec![
                "Send Priya the recap on Friday",
                "Compile usage data for finance",
                "Attend the quarterly business meeting",
            ]
        );
    }

    #[test]
    fn test_one_task_two_events() {
        let items = select(
            &steps(&[
                "Webinar walkthrough for admins",
                "Send the pricing sheet",
                "Touch base with legal",
                "Workshop with the data team",
            ]),
            None,
        );

        assert_eq!(
            texts(&items),
            vec![
                "Send the pricing sheet",
                "Webinar walkthrough for admins",
                "Touch base with legal",
            ]
        );
    }

    #[test]
    fn test_only_tasks_skips_duplicates() {
        let items = select(
            &steps(&[
                "Send Priya the recap on Friday",
                "Send Priya the recap Friday",
                "Compile usage data",
                "Research competitor pricing",
                "Update opportunity stage",
            ]),
            None,
        );

        assert_eq!(
            texts(&items),
            vec![
                "Send Priya the recap on Friday",
                "Compile usage data",
                "Research competitor pricing",
            ]
        );
        assert_eq!(items[2].id, "action-2");
    }

    #[test]
    fn test_only_events() {
        let items = select(
            &steps(&["Demo for the CIO", "Workshop with ops", "Webinar for admins", "Standup sync"]),
            None,
        );
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|i| i.category == Category::Event));
    }

    #[test]
    fn test_pending_text_marks_item_loading() {
        let pending = Pending::Text("Send the pricing sheet".to_string());
        let items = select(
            &steps(&["Compile usage data", "Send the pricing sheet"]),
            Some(&pending),
        );

        assert!(!items[0].is_loading);
        assert!(items[1].is_loading);
        assert_eq!(items[1].label, "Loading...");
    }

    #[test]
    fn test_output_has_no_similar_pairs() {
        let input = steps(&[
            "Send Priya the recap on Friday",
            "Send Priya the recap Friday",
            "Call Priya on Friday",
            "Schedule a call with Priya on Friday",
            "Schedule call with Priya Friday",
            "Review the MSA redlines",
        ]);
        let items = select(&input, None);
        assert!(items.len() <= MAX_ACTION_ITEMS);

        let classified: Vec<_> = items
            .iter()
            .map(|i| ClassifiedStep::new(i.text.as_str(), 0))
            .collect();
        for (i, a) in classified.iter().enumerate() {
            for b in classified.iter().skip(i + 1) {
                assert!(!are_similar(a, b), "{} ~ {}", a.text, b.text);
            }
        }
    }
}
