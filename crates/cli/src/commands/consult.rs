//! `medcompanion log` / `medcompanion history`: Consultation records.

use chrono::{Local, NaiveDate};
use medcompanion_core::record::ConsultationLog;
use medcompanion_core::store::RecordStore;

pub async fn log(
    date: Option<String>,
    provider: String,
    notes: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let date = visit_date(date)?;
    let entry = ConsultationLog::new(date, provider, notes)?;

    let config = super::load_config()?;
    let store = super::open_store(&config);
    store.add_consultation(entry.clone())?;

    println!(
        "✅ Consultation logged: {} with {}",
        entry.date, entry.provider
    );
    Ok(())
}

pub async fn history() -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config()?;
    let consultations = super::open_store(&config).load_consultations()?;

    println!("📋 Consultation History");
    println!("=======================\n");

    if consultations.is_empty() {
        println!("  No consultations logged yet.");
        println!("  Add one with: medcompanion log --provider \"Dr. Smith\" --notes \"...\"\n");
        return Ok(());
    }

    // Most recent first, like a timeline.
    for entry in consultations.iter().rev() {
        println!("  {} — {}", entry.date, entry.provider);
        for line in entry.notes.lines() {
            println!("      {line}");
        }
        println!();
    }
    println!("  Total: {} consultation(s)\n", consultations.len());
    Ok(())
}

/// Validate a `YYYY-MM-DD` visit date, defaulting to today.
fn visit_date(date: Option<String>) -> Result<String, String> {
    match date {
        None => Ok(Local::now().date_naive().format("%Y-%m-%d").to_string()),
        Some(date) => {
            let date = date.trim();
            NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map(|d| d.format("%Y-%m-%d").to_string())
                .map_err(|_| format!("Invalid visit date '{date}', expected YYYY-MM-DD"))
        }
    }
}
