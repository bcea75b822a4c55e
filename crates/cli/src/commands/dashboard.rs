//! `medcompanion dashboard`: Overview of the stored records.

use medcompanion_core::record::DashboardSummary;
use medcompanion_core::store::RecordStore;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config()?;
    let store = super::open_store(&config);

    let profile = store.load_profile()?;
    let consultations = store.load_consultations()?;
    let summary = DashboardSummary::new(&profile, &consultations);

    println!("🩺 MedCompanion Dashboard");
    println!("=========================\n");
    println!("  Patient:        {}", summary.name);
    println!("  Allergies:      {}", summary.allergy_count);
    println!("  Medications:    {}", summary.medication_count);
    println!("  Consultations:  {}", summary.consultation_count);
    println!("  Last visit:     {}", summary.last_visit);

    if profile.is_empty() {
        println!("\n  ⚠️  Profile is empty. Run `medcompanion profile set` to fill it in.");
    }
    println!();

    Ok(())
}
