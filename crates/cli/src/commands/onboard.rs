//! `medcompanion onboard`: First-time setup.

use medcompanion_config::AppConfig;
use medcompanion_security::SecretsFileSource;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = AppConfig::config_dir();
    let config_path = AppConfig::config_path();

    println!("🩺 MedCompanion — First-Time Setup");
    println!("==================================\n");

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
        println!("✅ Created config directory: {}", config_dir.display());
    } else {
        println!("  Config directory exists: {}", config_dir.display());
    }

    let config = if config_path.exists() {
        println!("\n⚠️  Config already exists at: {}", config_path.display());
        println!("   Edit it manually or delete and re-run onboard.\n");
        super::load_config()?
    } else {
        std::fs::write(&config_path, AppConfig::default_toml())?;
        println!("✅ Created config.toml at: {}", config_path.display());
        super::load_config()?
    };

    if !config.data_dir.exists() {
        std::fs::create_dir_all(&config.data_dir)?;
        println!("✅ Created data directory: {}", config.data_dir.display());
    } else {
        println!("  Data directory exists: {}", config.data_dir.display());
    }

    if !config.secrets_path.exists() {
        if let Some(parent) = config.secrets_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&config.secrets_path, SecretsFileSource::template())?;
        println!("✅ Created secrets template: {}", config.secrets_path.display());
    }

    println!("\n📝 Next steps:");
    println!("   1. Add your Gemini API key to {}", config.secrets_path.display());
    println!("      (or set GEMINI_API_KEY in your environment or a .env file)");
    println!("   2. Fill in your profile:");
    println!("      medcompanion profile set --name \"Ann\" --allergies \"penicillin\"");
    println!("   3. Ask a question: medcompanion chat\n");

    Ok(())
}
