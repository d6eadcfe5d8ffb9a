//! JSON-file item catalog: the persistence layer behind the gear aggregator.
//! One file holds every named item plus provenance metadata ("data as of").

use std::fmt;
use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::data::item::Item;

pub const DEFAULT_ITEMS_PATH: &str = "data/items.json";

const CATALOG_VERSION: &str = "1";

/// On-disk catalog shape. `last_updated` is RFC 3339, refreshed on every
/// write so operators can see how stale their gear data is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemCatalog {
    #[serde(default)]
    pub data_version: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
}

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err)
    }
}

/// Load the catalog, or an empty one when the file does not exist yet.
/// A file that exists but fails to parse is an error, not an empty catalog.
pub fn load_catalog(path: &str) -> Result<ItemCatalog, StoreError> {
    if !Path::new(path).exists() {
        return Ok(ItemCatalog::default());
    }
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn write_catalog(path: &str, catalog: &mut ItemCatalog) -> Result<(), StoreError> {
    catalog.data_version = Some(CATALOG_VERSION.to_string());
    catalog.last_updated = Some(Utc::now().to_rfc3339());
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let raw = serde_json::to_string_pretty(catalog)?;
    fs::write(path, raw)?;
    Ok(())
}

/// Create the catalog file if it does not exist.
pub fn init_store(path: &str) -> Result<(), StoreError> {
    let mut catalog = load_catalog(path)?;
    write_catalog(path, &mut catalog)
}

/// Insert or replace an item by name.
pub fn add_item(path: &str, item: Item) -> Result<(), StoreError> {
    let mut catalog = load_catalog(path)?;
    match catalog.items.iter_mut().find(|i| i.name == item.name) {
        Some(existing) => *existing = item,
        None => catalog.items.push(item),
    }
    write_catalog(path, &mut catalog)
}

/// Remove an item by name. Returns whether anything was removed.
pub fn remove_item(path: &str, name: &str) -> Result<bool, StoreError> {
    let mut catalog = load_catalog(path)?;
    let before = catalog.items.len();
    catalog.items.retain(|i| i.name != name);
    let removed = catalog.items.len() != before;
    if removed {
        write_catalog(path, &mut catalog)?;
    }
    Ok(removed)
}

/// Fetch items by name. Unknown names are silently skipped, matching how the
/// gear front-ends treat an empty equipment slot.
pub fn get_items(path: &str, names: &[String]) -> Result<Vec<Item>, StoreError> {
    if names.is_empty() {
        return Ok(Vec::new());
    }
    let catalog = load_catalog(path)?;
    Ok(catalog
        .items
        .into_iter()
        .filter(|item| names.iter().any(|n| n == &item.name))
        .collect())
}

/// Sorted list of every item name in the catalog.
pub fn list_item_names(path: &str) -> Result<Vec<String>, StoreError> {
    let catalog = load_catalog(path)?;
    let mut names: Vec<String> = catalog.items.into_iter().map(|i| i.name).collect();
    names.sort();
    Ok(names)
}
