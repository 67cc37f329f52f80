use std::env;

use crate::import::batcher::DEFAULT_BATCH_SIZE;

/// Environment-backed settings for one importer process.
pub struct ImporterConfig {
    pub supabase_url: String,
    pub service_role_key: String,
    pub batch_size: usize,
}

impl ImporterConfig {
    /// Reads the platform credentials and tuning knobs from the environment
    /// (a `.env` file is loaded beforehand when present). `SUPABASE_URL` and
    /// `SUPABASE_SERVICE_ROLE_KEY` are required; `IMPORT_BATCH_SIZE` falls
    /// back to the default when unset.
    pub fn from_env() -> Result<Self, String> {
        let supabase_url =
            env::var("SUPABASE_URL").map_err(|_| "SUPABASE_URL is not set".to_string())?;
        let service_role_key = env::var("SUPABASE_SERVICE_ROLE_KEY")
            .map_err(|_| "SUPABASE_SERVICE_ROLE_KEY is not set".to_string())?;
        let batch_size = match env::var("IMPORT_BATCH_SIZE") {
            Ok(raw) => raw.parse::<usize>().ok().filter(|n| *n > 0).ok_or_else(|| {
                format!("IMPORT_BATCH_SIZE must be a positive integer, got '{}'", raw)
            })?,
            Err(_) => DEFAULT_BATCH_SIZE,
        };

        Ok(Self {
            supabase_url,
            service_role_key,
            batch_size,
        })
    }
}
