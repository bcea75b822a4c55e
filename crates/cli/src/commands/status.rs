//! `medcompanion status`: Show configuration, records, and credential status.

use medcompanion_config::AppConfig;
use medcompanion_core::credential::SessionCredential;
use medcompanion_core::store::RecordStore;
use medcompanion_security::CredentialResolver;
use tracing::debug;

pub async fn run(check: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config()?;
    let store = super::open_store(&config);

    println!("🩺 MedCompanion Status");
    println!("======================");
    println!("  Config dir:   {}", AppConfig::config_dir().display());
    println!("  Store:        {} ({})", store.name(), store.data_dir().display());
    println!("  Secrets:      {}", config.secrets_path.display());
    println!("  Model:        {}", config.provider.model);
    println!("  Endpoint:     {}", config.provider.base_url);
    println!("  Temperature:  {}", config.provider.temperature);
    println!("  Timeout:      {}s", config.provider.timeout_secs);
    println!("  Context:      last {} consultation(s)", config.context.recent_consultations);

    if AppConfig::config_path().exists() {
        println!("\n  ✅ Config file found");
    } else {
        println!("\n  ⚠️  No config file — run `medcompanion onboard` first");
    }

    match store.load_profile() {
        Ok(profile) if profile.is_empty() => println!("  ⚠️  Profile not set"),
        Ok(_) => println!("  ✅ Profile readable ({})", store.profile_path().display()),
        Err(e) => println!("  ❌ {e}"),
    }
    match store.load_consultations() {
        Ok(logs) => println!("  ✅ {} consultation(s) on record", logs.len()),
        Err(e) => println!("  ❌ {e}"),
    }

    let resolver = CredentialResolver::standard(&config.secrets_path, SessionCredential::new());
    let resolved = resolver.resolve_with_source();
    match &resolved {
        Some((credential, source)) => {
            println!("  ✅ API key found: {} (from {source})", credential.hint());
        }
        None => {
            println!("  ❌ No API key — checked {}", resolver.source_names().join(", "));
        }
    }

    if check {
        match resolved {
            Some((credential, _)) => {
                let provider = medcompanion_providers::build_from_config(&config);
                match provider.health_check(&credential).await {
                    Ok(true) => println!("  ✅ {} API reachable", provider.name()),
                    Ok(false) => println!("  ⚠️  {} API responded but reported unhealthy", provider.name()),
                    Err(e) => {
                        debug!(error = ?e, "Health check failed");
                        println!("  ❌ {} API check failed: {e}", provider.name());
                    }
                }
            }
            None => println!("  ⚠️  Skipping API check without a key"),
        }
    }

    Ok(())
}
