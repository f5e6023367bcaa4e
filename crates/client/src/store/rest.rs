//! REST client for the hosted data backend
//!
//! Speaks the backend's PostgREST-style dialect: column filters as
//! `column=eq.value` query operators, `Prefer` headers to get mutated rows
//! back, and `on_conflict` for natural-key upserts. Authentication is an
//! API key sent as both the `apikey` header and a bearer token.

use super::StudentStore;
use async_trait::async_trait;
use registry_common::config::StoreConfig;
use registry_common::{AppError, Result, StudentPayload, StudentRecord};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use uuid::Uuid;

pub struct RestStore {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl RestStore {
    /// Build a client from configuration. The only transport policy applied
    /// is the configured request timeout; failures are never retried.
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        let endpoint = format!(
            "{}/rest/v1/{}",
            config.base_url.trim_end_matches('/'),
            config.table
        );

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.client
            .request(method, &self.endpoint)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    /// Fold non-success responses into a store error carrying the
    /// backend's own message verbatim.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), body = %body, "store request failed");
        Err(AppError::Store {
            message: format!("{status}: {body}"),
        })
    }
}

#[async_trait]
impl StudentStore for RestStore {
    async fn list(&self) -> Result<Vec<StudentRecord>> {
        let response = self
            .request(Method::GET)
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;
        let records: Vec<StudentRecord> = Self::check(response).await?.json().await?;
        tracing::debug!(count = records.len(), "fetched student records");
        Ok(records)
    }

    async fn find_by_national_id(&self, national_id: &str) -> Result<Option<StudentRecord>> {
        let filter = format!("eq.{national_id}");
        let response = self
            .request(Method::GET)
            .query(&[
                ("select", "*"),
                ("nationalId", filter.as_str()),
                ("limit", "1"),
            ])
            .send()
            .await?;
        let records: Vec<StudentRecord> = Self::check(response).await?.json().await?;
        Ok(records.into_iter().next())
    }

    async fn insert(&self, payload: StudentPayload) -> Result<StudentRecord> {
        let response = self
            .request(Method::POST)
            .header("Prefer", "return=representation")
            .json(&[payload])
            .send()
            .await?;
        let records: Vec<StudentRecord> = Self::check(response).await?.json().await?;
        records.into_iter().next().ok_or_else(|| AppError::Store {
            message: "insert returned no record".to_string(),
        })
    }

    async fn update(&self, id: Uuid, payload: StudentPayload) -> Result<StudentRecord> {
        let response = self
            .request(Method::PATCH)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(&payload)
            .send()
            .await?;
        let records: Vec<StudentRecord> = Self::check(response).await?.json().await?;
        records
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound { id: id.to_string() })
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let response = self
            .request(Method::DELETE)
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound { id: id.to_string() });
        }
        Self::check(response).await?;
        Ok(())
    }

    async fn upsert(&self, payloads: Vec<StudentPayload>) -> Result<()> {
        let response = self
            .request(Method::POST)
            .query(&[("on_conflict", "nationalId")])
            .header("Prefer", "resolution=merge-duplicates")
            .json(&payloads)
            .send()
            .await?;
        Self::check(response).await?;
        tracing::info!(count = payloads.len(), "upserted imported records");
        Ok(())
    }
}
