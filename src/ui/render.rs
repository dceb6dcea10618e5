//! Human-readable terminal output for events, summaries and chat messages.

use crate::core::catalog::CatalogSummary;
use crate::models::chat_message::{ChatMessage, Sender};
use crate::models::profile::UserProfile;
use crate::models::volunteer_event::VolunteerEvent;
use crate::utils::table::{Column, Table};
use ansi_term::Colour;

const BUBBLE_WIDTH: usize = 72;

pub fn print_events(events: &[&VolunteerEvent]) {
    let mut table = Table::new(vec![
        Column::new("START", 16),
        Column::new("END", 16),
        Column::new("TITLE", 40),
        Column::new("CATEGORY", 24),
        Column::new("LOCATION", 20),
        Column::new("ORGANIZATION", 30),
        Column::new("TYPE", 8),
    ]);

    for ev in events {
        table.add_row(vec![
            ev.start_str(),
            ev.end_str(),
            ev.title.clone(),
            ev.category.clone(),
            ev.location.clone(),
            ev.organization.clone(),
            ev.kind.clone(),
        ]);
    }

    let rendered = table.render_with(|i| {
        events
            .get(i)
            .filter(|e| e.is_ongoing())
            .map(|_| Colour::Blue.normal())
    });
    print!("{}", rendered);
}

pub fn print_categories(counts: &[(String, usize)]) {
    let mut table = Table::new(vec![Column::new("CATEGORY", 48), Column::new("EVENTS", 8)]);
    for (category, n) in counts {
        table.add_row(vec![category.clone(), n.to_string()]);
    }
    print!("{}", table.render());
}

pub fn print_summary(summary: &CatalogSummary) {
    println!("Available Opportunities : {} (in NYC area)", summary.opportunities);
    println!("Categories              : {}", summary.categories);
    println!("Organizations           : {}", summary.organizations);
    println!(
        "Current Filter          : {} ({} opportunities)",
        summary.filter, summary.filtered
    );
    println!("Ongoing                 : {}", summary.ongoing);
    println!(
        "Without coordinates     : {} (shown at the NYC center point)",
        summary.on_fallback_point
    );
    match summary.calendar_start {
        Some(start) => println!("Calendar opens at       : {}", start.format("%Y-%m-%d")),
        None => println!("Calendar opens at       : -"),
    }
}

pub fn print_message(msg: &ChatMessage) {
    let (label, colour) = match msg.sender {
        Sender::User => ("you", Colour::Cyan),
        Sender::Bot => ("assistant", Colour::Green),
    };

    println!("{}", colour.bold().paint(format!("[{}] {}", msg.id, label)));
    for line in textwrap::wrap(&msg.content, BUBBLE_WIDTH) {
        println!("  {}", line);
    }

    if let Some(options) = &msg.options {
        for (i, opt) in options.iter().enumerate() {
            println!("    {}) {}", i + 1, opt);
        }
    }
    println!();
}

pub fn print_profile(profile: &UserProfile) {
    println!("Name  : {}", profile.name);
    println!("Email : {}", profile.email);
    println!("Phone : {}", profile.phone);
    println!("Role  : {}", profile.role);
}
