//! Shape of the catalog endpoint's response body.
//!
//! The transport that fetches it lives outside this crate; callers hand
//! over the body text and get back either the rows or the reason the
//! catalog is unavailable.

use serde::Deserialize;
use tracing::info;

use crate::error::{GachaError, Result};
use crate::record::CatalogRecord;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CatalogResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub rows: Option<Vec<CatalogRecord>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
}

impl CatalogResponse {
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Rows of a successful response. `ok: false` becomes
    /// [`GachaError::DataUnavailable`]; a successful response without a
    /// `rows` field is treated as an empty catalog.
    pub fn into_rows(self) -> Result<Vec<CatalogRecord>> {
        if !self.ok {
            return Err(GachaError::DataUnavailable(self.error));
        }
        let rows = self.rows.unwrap_or_default();
        info!(
            rows = rows.len(),
            updated_at = self.updated_at.as_deref().unwrap_or("unknown"),
            "loaded catalog"
        );
        Ok(rows)
    }
}
