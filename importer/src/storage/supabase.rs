use async_trait::async_trait;
use common::model::record::InventoryRecord;
use reqwest::Client;

use crate::storage::DrugStore;

/// Table holding all medicine listings.
const DRUGS_TABLE: &str = "Drugs";

/// REST client for the hosted Postgres platform.
///
/// Writes go through the platform's `/rest/v1/<table>` surface using the
/// service-role key, which bypasses row-level visibility so one importer
/// process can write listings on behalf of any supplier account.
pub struct SupabaseStore {
    client: Client,
    base_url: String,
    service_role_key: String,
}

impl SupabaseStore {
    pub fn new(base_url: &str, service_role_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            service_role_key: service_role_key.to_string(),
        }
    }
}

#[async_trait]
impl DrugStore for SupabaseStore {
    async fn insert_batch(&self, records: &[InventoryRecord]) -> Result<(), String> {
        let url = format!("{}/rest/v1/{}", self.base_url, DRUGS_TABLE);
        let response = self
            .client
            .post(&url)
            .header("apikey", self.service_role_key.as_str())
            .header("Authorization", format!("Bearer {}", self.service_role_key))
            .header("Prefer", "return=minimal")
            .json(&records)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(format!("{}: {}", status, body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn record() -> InventoryRecord {
        InventoryRecord {
            brand_name: "Panadol".to_string(),
            generic_name: "Paracetamol".to_string(),
            dosage_form: "Tablet".to_string(),
            strength: "500mg".to_string(),
            manufacturer: "GSK".to_string(),
            batch_number: None,
            price: Some(12500.0),
            expiry_date: None,
            wholesaler_name: "WideSpectrum".to_string(),
            city: "Imported City".to_string(),
            contact_method: "Imported Contact".to_string(),
            user_id: "9f6f2a54-8a3e-45f0-9d15-21f6f1b3a7c2".to_string(),
            availability: "In stock".to_string(),
        }
    }

    #[tokio::test]
    async fn posts_the_batch_with_service_role_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/v1/Drugs"))
            .and(header("apikey", "service-key"))
            .and(header("Authorization", "Bearer service-key"))
            .and(header("Prefer", "return=minimal"))
            .and(body_partial_json(serde_json::json!([
                { "brand_name": "Panadol", "price": 12500.0, "batch_number": null }
            ])))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let store = SupabaseStore::new(&server.uri(), "service-key");
        store.insert_batch(&[record()]).await.unwrap();
    }

    #[tokio::test]
    async fn platform_rejection_surfaces_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(409).set_body_string("duplicate key value"))
            .mount(&server)
            .await;

        let store = SupabaseStore::new(&server.uri(), "service-key");
        let err = store.insert_batch(&[record()]).await.unwrap_err();

        assert!(err.contains("409"));
        assert!(err.contains("duplicate key value"));
    }
}
