//! HTTP client for sector setting records.
//!
//! Create and delete of a sector's dated setting history, plus the fresh
//! reads the admin views re-derive after every write. One request per call,
//! no retries, no client-side cache; the backend is the source of truth.

use contracts::{ClimbCenter, Sector, SettingRecord};
use serde_json::{json, Value};

use crate::config::base_url_from_env;
use crate::error::RequestError;

/// Outcome of a write against the backend.
///
/// A 2xx answer whose body cannot be parsed as the written entity is still a
/// successful write; `Unparsed` keeps that partial success distinguishable
/// from a real failure (which is a [`RequestError`]).
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOutcome<T> {
    /// The backend confirmed the write and echoed the entity.
    Record(T),
    /// The write succeeded but the response body was absent or malformed.
    Unparsed,
}

impl<T> WriteOutcome<T> {
    pub fn record(self) -> Option<T> {
        match self {
            WriteOutcome::Record(record) => Some(record),
            WriteOutcome::Unparsed => None,
        }
    }
}

/// HTTP client for the climb-center backend.
pub struct SettingRecordClient {
    http: reqwest::Client,
    base_url: String,
}

impl SettingRecordClient {
    /// Client against an explicit base URL. The URL is normalized to end
    /// with exactly one `/`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        base_url.push('/');

        Self {
            // No timeout here: transports below this layer may impose one,
            // the component itself does not.
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Client against the URL resolved from the environment.
    pub fn from_env() -> Self {
        Self::new(base_url_from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Append a setting record to a sector's history.
    ///
    /// `setting_date` must already be canonical `YYYY-MM-DD`
    /// (normalization is [`crate::utils`]' job, not this client's), and the
    /// sector must exist — the backend enforces that and answers non-2xx
    /// otherwise.
    pub async fn create_setting_record(
        &self,
        sector_id: i64,
        setting_date: &str,
    ) -> Result<WriteOutcome<SettingRecord>, RequestError> {
        let url = format!("{}api/climb-sector-setting", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&json!({
                "sectorId": sector_id,
                "settingDate": setting_date,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, sector_id, "failed to create sector setting");
            return Err(RequestError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.unwrap_or_default();
        Ok(parse_write_body(&body, SettingRecord::from_value))
    }

    /// Revoke a setting record by id.
    ///
    /// Returns the parsed response entity when the backend echoes one,
    /// `None` for an empty or unparsable success body. Whether deleting a
    /// missing id succeeds is backend-defined; its status is surfaced as-is.
    pub async fn delete_setting_record(
        &self,
        id: i64,
    ) -> Result<Option<SettingRecord>, RequestError> {
        let url = format!("{}api/climb-sector-setting/{}", self.base_url, id);
        let response = self.http.delete(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, id, "failed to delete sector setting");
            return Err(RequestError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.unwrap_or_default();
        Ok(parse_write_body(&body, SettingRecord::from_value).record())
    }

    /// Add a sector to a climb center.
    pub async fn create_sector(
        &self,
        climb_center_id: i64,
        name: &str,
    ) -> Result<WriteOutcome<Sector>, RequestError> {
        let url = format!("{}api/climb-sector", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&json!({
                "climbCenterId": climb_center_id,
                "name": name,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, climb_center_id, "failed to create sector");
            return Err(RequestError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.unwrap_or_default();
        Ok(parse_write_body(&body, Sector::from_value))
    }

    /// Fetch a single climb center, schema-validated.
    ///
    /// Read state is always re-derived from a fresh fetch; nothing is held
    /// client-side. Unlike the write paths, a malformed body here is a
    /// contract violation and fails with [`RequestError::Decode`].
    pub async fn fetch_climb_center(&self, id: i64) -> Result<ClimbCenter, RequestError> {
        let url = format!("{}api/climb-center/{}", self.base_url, id);
        let body = self.fetch_success_body(&url).await?;
        let value: Value = serde_json::from_str(&body)?;
        Ok(ClimbCenter::from_value(&value)?)
    }

    /// Fetch every climb center, each schema-validated.
    pub async fn fetch_climb_centers(&self) -> Result<Vec<ClimbCenter>, RequestError> {
        let url = format!("{}api/climb-center", self.base_url);
        let body = self.fetch_success_body(&url).await?;
        let value: Value = serde_json::from_str(&body)?;
        let items = value.as_array().ok_or_else(|| contracts::ValidationError {
            path: "$".to_string(),
            expected: "array",
            actual: if value.is_object() { "object" } else { "scalar" }.to_string(),
        })?;

        let mut centers = Vec::with_capacity(items.len());
        for item in items {
            centers.push(ClimbCenter::from_value(item)?);
        }
        Ok(centers)
    }

    async fn fetch_success_body(&self, url: &str) -> Result<String, RequestError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, url, "fetch failed");
            return Err(RequestError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.text().await?)
    }
}

/// Soft-failure body handling for writes: a body that is missing, not JSON,
/// or not the expected entity downgrades to `Unparsed` with a log line
/// instead of aborting a write that already happened.
fn parse_write_body<T>(
    body: &str,
    from_value: impl Fn(&Value) -> Result<T, contracts::ValidationError>,
) -> WriteOutcome<T> {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(%error, "write succeeded but response body is not JSON");
            return WriteOutcome::Unparsed;
        }
    };
    match from_value(&value) {
        Ok(record) => WriteOutcome::Record(record),
        Err(error) => {
            tracing::warn!(%error, "write succeeded but response failed validation");
            WriteOutcome::Unparsed
        }
    }
}
