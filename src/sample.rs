//! Demo content for a fresh workspace.

use crate::domain::{Board, Card, CardDraft, CardId, IconName, List, ListStore};
use crate::error::Result;
use chrono::{DateTime, Duration, NaiveDate, Utc};

fn card(title: &str, description: &str, labels: &[&str], due: Option<NaiveDate>) -> Result<Card> {
    let mut draft = CardDraft::new(title).with_description(description);
    for label in labels {
        draft = draft.with_label(*label);
    }
    draft.due = due;
    Card::from_draft(CardId::generate(), draft)
}

/// "To Do", "In Progress" and "Done" with a handful of cards
pub fn sample_lists() -> Result<ListStore> {
    let date = NaiveDate::from_ymd_opt;

    let mut todo = List::new("To Do");
    todo.cards.push(card(
        "Research competitors",
        "Analyze top 5 competitors",
        &["research"],
        date(2023, 12, 10),
    )?);
    todo.cards.push(card(
        "Design landing page",
        "Create wireframes",
        &["design"],
        date(2023, 12, 15),
    )?);

    let mut in_progress = List::new("In Progress");
    in_progress.cards.push(card(
        "Implement authentication",
        "Set up user login and registration",
        &["development", "backend"],
        date(2023, 12, 5),
    )?);

    let mut done = List::new("Done");
    done.cards.push(card(
        "Set up development environment",
        "Install required dependencies",
        &["setup"],
        date(2023, 11, 28),
    )?);

    ListStore::from_lists(vec![todo, in_progress, done])
}

/// Sample boards, newest first; the first one holds [`sample_lists`]
pub fn sample_boards(now: DateTime<Utc>) -> Result<Vec<Board>> {
    let seeds = [
        ("Product Development", "Code", 1),
        ("Marketing Campaign", "Rocket", 24),
        ("Client Projects", "Briefcase", 72),
        ("Personal Tasks", "Heart", 168),
    ];

    let mut boards = Vec::with_capacity(seeds.len());
    for (title, icon, hours_ago) in seeds {
        let mut board = Board::new(title, Some(IconName::new(icon)))?;
        board.last_updated = now - Duration::hours(hours_ago);
        boards.push(board);
    }
    if let Some(first) = boards.first_mut() {
        first.lists = sample_lists()?;
    }
    Ok(boards)
}
