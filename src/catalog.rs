//! Tower upgrade catalogs.
//!
//! The tower index is bundled with the app; each tower's catalog is a
//! separate JSON file fetched on demand, only for towers the player has
//! selected.

use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// One purchasable upgrade.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UpgradeStep {
    pub name: String,
    pub price: f64,
}

/// An ordered prerequisite chain: later steps unlock only after earlier
/// ones have been bought.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UpgradePath {
    pub path: String,
    pub upgrades: Vec<UpgradeStep>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TowerCatalog {
    pub upgrade_paths: Vec<UpgradePath>,
}

/// Index entry naming where a tower's catalog lives.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TowerRef {
    pub name: String,
    pub file: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TowerIndex {
    pub towers: Vec<TowerRef>,
}

impl TowerIndex {
    /// The index bundled with the app.
    pub fn embedded() -> &'static Self {
        static INDEX: OnceLock<TowerIndex> = OnceLock::new();
        INDEX.get_or_init(|| {
            serde_json::from_str(include_str!("../data/tower_index.json"))
                .expect("bundled tower index is valid JSON")
        })
    }

    pub fn file_for(&self, name: &str) -> Option<&str> {
        self.towers
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.file.as_str())
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no window object")]
    NoWindow,
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("response body was not text")]
    BodyNotText,
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

pub fn parse_catalog(raw: &str) -> Result<TowerCatalog, CatalogError> {
    Ok(serde_json::from_str(raw)?)
}

/// Fetch and parse one tower catalog.
///
/// Callers log failures and drop the tower; a bad catalog never fails the
/// whole computation.
pub async fn fetch_catalog(file: &str) -> Result<TowerCatalog, CatalogError> {
    let window = web_sys::window().ok_or(CatalogError::NoWindow)?;
    let resp_value = JsFuture::from(window.fetch_with_str(file))
        .await
        .map_err(|e| CatalogError::Network(js_error_text(&e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| CatalogError::Network("fetch returned a non-Response value".into()))?;
    if !resp.ok() {
        return Err(CatalogError::Status(resp.status()));
    }
    let text_promise = resp
        .text()
        .map_err(|e| CatalogError::Network(js_error_text(&e)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| CatalogError::Network(js_error_text(&e)))?;
    let raw = text.as_string().ok_or(CatalogError::BodyNotText)?;
    parse_catalog(&raw)
}

fn js_error_text(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
