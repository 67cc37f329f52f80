mod config;
mod import;
mod storage;

use crate::config::ImporterConfig;
use crate::import::orchestrator::run_import;
use crate::storage::SupabaseStore;
use common::model::supplier::SupplierProfile;
use env_logger::Env;
use log::error;
use std::env;
use std::process;

/// City recorded on imported rows until the supplier syncs their profile.
const IMPORTED_CITY: &str = "Imported City";
/// Contact recorded on imported rows until the supplier syncs their profile.
const IMPORTED_CONTACT: &str = "Imported Contact";

#[tokio::main]
async fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 3 {
        println!("Usage: importer <csv_file_path> <wholesaler_name> <user_id>");
        println!("Example: importer ./data/widespectrum.csv \"WideSpectrum\" \"user-uuid-here\"");
        process::exit(1);
    }

    dotenvy::dotenv().ok();
    let config = match ImporterConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    let store = SupabaseStore::new(&config.supabase_url, &config.service_role_key);
    let supplier = SupplierProfile {
        wholesaler_name: args[1].clone(),
        city: IMPORTED_CITY.to_string(),
        contact_method: IMPORTED_CONTACT.to_string(),
        user_id: args[2].clone(),
    };

    match run_import(&store, &args[0], &supplier, config.batch_size).await {
        Ok(summary) => {
            println!(
                "Import complete for {}. Success: {}, Failed: {}",
                summary.wholesaler_name, summary.succeeded, summary.failed
            );
        }
        Err(e) => {
            error!("Import failed: {}", e);
            process::exit(1);
        }
    }
}
