//! Typed client for the backend's table-style HTTP API.
//!
//! The managed backend exposes each table under `/rest/v1/{table}` with
//! filter query parameters (`column=eq.value`), nested relation selects
//! (`select=*,payments(*)`), and a storage endpoint for file blobs.
//! Repositories build on the small surface here; no call is retried and
//! no timeout is set beyond the client defaults.

use log::{debug, error};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{RemoteError, Result};
use crate::store::session::SessionContext;

/// Connection settings for the remote store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: String,
    pub api_key: String,
}

/// Builds an equality filter value for a query pair.
pub fn eq(value: impl std::fmt::Display) -> String {
    format!("eq.{}", value)
}

pub struct StoreClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl StoreClient {
    pub fn new(config: StoreConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(RemoteError::Request("store base url is empty".to_string()).into());
        }
        Ok(StoreClient {
            http: reqwest::Client::new(),
            base_url,
            api_key: config.api_key,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Reads rows from `table`. `query` carries filter pairs and, when the
    /// caller needs nested relations, a `select` expression.
    pub async fn select<T: DeserializeOwned>(
        &self,
        session: &SessionContext,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>> {
        debug!("select from '{}' ({} params)", table, query.len());
        let response = self
            .http
            .get(self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&session.access_token)
            .query(query)
            .send()
            .await?;
        decode_rows(table, response).await
    }

    /// Inserts one row and returns the stored representation.
    pub async fn insert<B: Serialize, T: DeserializeOwned>(
        &self,
        session: &SessionContext,
        table: &str,
        row: &B,
    ) -> Result<T> {
        debug!("insert into '{}'", table);
        let response = self
            .http
            .post(self.table_url(table))
            .header("apikey", &self.api_key)
            .header("Prefer", "return=representation")
            .bearer_auth(&session.access_token)
            .json(row)
            .send()
            .await?;
        first_row(table, decode_rows(table, response).await?)
    }

    /// Inserts or merges one row keyed by the table's unique constraint.
    pub async fn upsert<B: Serialize, T: DeserializeOwned>(
        &self,
        session: &SessionContext,
        table: &str,
        row: &B,
    ) -> Result<T> {
        debug!("upsert into '{}'", table);
        let response = self
            .http
            .post(self.table_url(table))
            .header("apikey", &self.api_key)
            .header("Prefer", "resolution=merge-duplicates,return=representation")
            .bearer_auth(&session.access_token)
            .json(row)
            .send()
            .await?;
        first_row(table, decode_rows(table, response).await?)
    }

    /// Patches every row matched by `filters` and returns the updated rows.
    pub async fn update<B: Serialize, T: DeserializeOwned>(
        &self,
        session: &SessionContext,
        table: &str,
        filters: &[(&str, String)],
        patch: &B,
    ) -> Result<Vec<T>> {
        debug!("update '{}' ({} filters)", table, filters.len());
        let response = self
            .http
            .patch(self.table_url(table))
            .header("apikey", &self.api_key)
            .header("Prefer", "return=representation")
            .bearer_auth(&session.access_token)
            .query(filters)
            .json(patch)
            .send()
            .await?;
        decode_rows(table, response).await
    }

    pub async fn delete(
        &self,
        session: &SessionContext,
        table: &str,
        filters: &[(&str, String)],
    ) -> Result<()> {
        debug!("delete from '{}' ({} filters)", table, filters.len());
        let response = self
            .http
            .delete(self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&session.access_token)
            .query(filters)
            .send()
            .await?;
        check_status(table, response).await?;
        Ok(())
    }

    /// Uploads a blob to the storage endpoint and returns its public URL.
    pub async fn upload_object(
        &self,
        session: &SessionContext,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String> {
        debug!("upload {} bytes to bucket '{}'", bytes.len(), bucket);
        let url = format!("{}/storage/v1/object/{}/{}", self.base_url, bucket, path);
        let response = self
            .http
            .post(&url)
            .header("apikey", &self.api_key)
            .header("Content-Type", content_type)
            .bearer_auth(&session.access_token)
            .body(bytes)
            .send()
            .await?;
        check_status(bucket, response).await?;
        Ok(format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, bucket, path
        ))
    }
}

async fn check_status(target: &str, response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    if status == StatusCode::NOT_FOUND {
        return Err(RemoteError::NotFound(target.to_string()).into());
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(crate::errors::AuthError::SessionRejected(body).into());
    }
    if !status.is_success() {
        error!("remote store rejected '{}' call: {} {}", target, status, body);
        return Err(RemoteError::Status {
            status: status.as_u16(),
            message: body,
        }
        .into());
    }
    Ok(body)
}

async fn decode_rows<T: DeserializeOwned>(
    table: &str,
    response: reqwest::Response,
) -> Result<Vec<T>> {
    let body = check_status(table, response).await?;
    serde_json::from_str(&body)
        .map_err(|e| RemoteError::Decode(format!("{}: {}", table, e)).into())
}

fn first_row<T>(table: &str, mut rows: Vec<T>) -> Result<T> {
    rows.pop()
        .ok_or_else(|| RemoteError::Decode(format!("'{}' write returned no rows", table)).into())
}
