//! REST client for the department backend.
//!
//! One endpoint family per entity kind, always the same shape:
//! `GET /{entity}?organization_id=&limit=` and `GET /{entity}/department`
//! for lists, `POST /{entity}` for creates, `PUT`/`DELETE /{entity}/{id}`
//! where the kind supports editing, and `POST /{entity}/bulk_csv` for the
//! multipart CSV upload. Backend error messages are surfaced verbatim; 401
//! and 403 become [`Error::Unauthorized`], which is fatal for the page.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use sevadash_core::defaults::BULK_FILE_FIELD;
use sevadash_core::{
    BulkImportResult, CreatePayload, EntityKind, Error, NutritionStockPayload, Organization,
    Record, RecordService, Result, Scope,
};

use crate::config::ClientConfig;

/// HTTP client for the department backend.
pub struct ApiClient {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
    timeout: Duration,
    upload_timeout: Duration,
}

impl ApiClient {
    /// Create a client from configuration.
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        info!(
            subsystem = "client",
            component = "api",
            base_url = %config.base_url,
            "Initializing backend client"
        );

        Self {
            client,
            base_url: config.base_url,
            auth_token: config.auth_token,
            timeout: Duration::from_secs(config.timeout_secs),
            upload_timeout: Duration::from_secs(config.upload_timeout_secs),
        }
    }

    /// Create a client from environment variables.
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn list_url(&self, scope: &Scope, limit: u32) -> String {
        let entity = scope.kind.as_str();
        match scope.organization_id() {
            Some(id) => format!(
                "{}/{entity}?organization_id={id}&limit={limit}",
                self.base_url
            ),
            None => format!("{}/{entity}/department?limit={limit}", self.base_url),
        }
    }

    /// Turn a non-success response into an error, preferring the backend's
    /// own message (`error` or `message` field) verbatim.
    async fn error_for(response: reqwest::Response) -> Error {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .or_else(|| v.get("message"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    format!("backend returned {status}")
                } else {
                    body.trim().to_string()
                }
            });

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Error::Unauthorized(message)
        } else {
            Error::Request(message)
        }
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Self::error_for(response).await)
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        let response = self
            .authorize(self.client.get(url))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| Error::Request(format!("Request failed: {e}")))?;
        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| Error::Serialization(format!("Failed to parse response: {e}")))
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: String,
        body: &B,
    ) -> Result<T> {
        let response = self
            .authorize(self.client.post(url))
            .timeout(self.timeout)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Request(format!("Request failed: {e}")))?;
        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| Error::Serialization(format!("Failed to parse response: {e}")))
    }

    async fn list_kind<T>(&self, scope: &Scope, limit: u32) -> Result<Vec<Record>>
    where
        T: DeserializeOwned + Into<Record>,
    {
        let rows: Vec<T> = self.get_json(self.list_url(scope, limit)).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl RecordService for ApiClient {
    #[instrument(skip(self), fields(subsystem = "client", component = "api", op = "list_records", entity_kind = %scope.kind))]
    async fn list_records(&self, scope: &Scope, limit: u32) -> Result<Vec<Record>> {
        use sevadash_core::{
            AttendanceRecord, MedicineStockRecord, NutritionStockRecord, PatientsRecord,
        };

        let start = Instant::now();
        let records = match scope.kind {
            EntityKind::Attendance => self.list_kind::<AttendanceRecord>(scope, limit).await?,
            EntityKind::MedicineStock => {
                self.list_kind::<MedicineStockRecord>(scope, limit).await?
            }
            EntityKind::NutritionStock => {
                self.list_kind::<NutritionStockRecord>(scope, limit).await?
            }
            EntityKind::Patients => self.list_kind::<PatientsRecord>(scope, limit).await?,
        };

        debug!(
            result_count = records.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "List complete"
        );
        Ok(records)
    }

    #[instrument(skip(self, payload), fields(subsystem = "client", component = "api", op = "create_record", entity_kind = %payload.kind()))]
    async fn create_record(&self, payload: CreatePayload) -> Result<Record> {
        let url = format!("{}/{}", self.base_url, payload.kind().as_str());
        // The backend expects the flat entity payload, not the tagged union.
        let record = match payload {
            CreatePayload::Attendance(p) => {
                Record::Attendance(self.post_json(url, &p).await?)
            }
            CreatePayload::MedicineStock(p) => {
                Record::MedicineStock(self.post_json(url, &p).await?)
            }
            CreatePayload::NutritionStock(p) => {
                Record::NutritionStock(self.post_json(url, &p).await?)
            }
            CreatePayload::Patients(p) => Record::Patients(self.post_json(url, &p).await?),
        };
        debug!(record_id = record.id(), "Create complete");
        Ok(record)
    }

    async fn update_nutrition(&self, id: i64, payload: NutritionStockPayload) -> Result<Record> {
        let url = format!(
            "{}/{}/{id}",
            self.base_url,
            EntityKind::NutritionStock.as_str()
        );
        let response = self
            .authorize(self.client.put(url))
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::Request(format!("Request failed: {e}")))?;
        let response = Self::check(response).await?;
        let record: sevadash_core::NutritionStockRecord = response
            .json()
            .await
            .map_err(|e| Error::Serialization(format!("Failed to parse response: {e}")))?;
        Ok(Record::NutritionStock(record))
    }

    async fn delete_nutrition(&self, id: i64) -> Result<()> {
        let url = format!(
            "{}/{}/{id}",
            self.base_url,
            EntityKind::NutritionStock.as_str()
        );
        let response = self
            .authorize(self.client.delete(url))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| Error::Request(format!("Request failed: {e}")))?;
        Self::check(response).await?;
        debug!(
            subsystem = "client",
            component = "api",
            op = "delete_nutrition",
            record_id = id,
            "Delete complete"
        );
        Ok(())
    }

    #[instrument(skip(self, bytes), fields(subsystem = "client", component = "api", op = "bulk_import", entity_kind = %kind))]
    async fn bulk_import(
        &self,
        kind: EntityKind,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<BulkImportResult> {
        let url = format!("{}/{}/bulk_csv", self.base_url, kind.as_str());
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("text/csv")
            .map_err(|e| Error::Request(format!("Invalid upload part: {e}")))?;
        let form = Form::new().part(BULK_FILE_FIELD, part);

        let response = self
            .authorize(self.client.post(url))
            .timeout(self.upload_timeout)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::Request(format!("Upload failed: {e}")))?;
        let response = Self::check(response).await?;
        let result: BulkImportResult = response
            .json()
            .await
            .map_err(|e| Error::Serialization(format!("Failed to parse response: {e}")))?;

        if result.errors.is_empty() {
            debug!(imported_count = result.imported, "Bulk import complete");
        } else {
            warn!(
                imported_count = result.imported,
                row_error_count = result.errors.len(),
                "Bulk import completed with row errors"
            );
        }
        Ok(result)
    }

    async fn list_organizations(&self) -> Result<Vec<Organization>> {
        self.get_json(format!("{}/organizations", self.base_url))
            .await
    }
}
