//! CSV export of the item catalog: one row per item, one column per
//! whitelisted stat key, for spreadsheet comparison of gear sets.

use std::fmt;
use std::fs::File;

use crate::data::item::STAT_KEYS;
use crate::data::store::{self, StoreError};

#[derive(Debug)]
pub enum ExportError {
    Store(StoreError),
    Csv(csv::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Csv(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<StoreError> for ExportError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Write the catalog at `store_path` to `out_path` as CSV. Returns the number
/// of item rows written. Stat columns follow [STAT_KEYS] order; stats outside
/// the whitelist are not exported.
pub fn export_items_csv(store_path: &str, out_path: &str) -> Result<usize, ExportError> {
    let catalog = store::load_catalog(store_path)?;

    let file = File::create(out_path).map_err(StoreError::Io)?;
    let mut writer = csv::Writer::from_writer(file);

    let mut header = vec!["name", "slot", "required_level"];
    header.extend_from_slice(STAT_KEYS);
    writer.write_record(&header)?;

    for item in &catalog.items {
        let mut row = vec![
            item.name.clone(),
            item.slot.clone(),
            item.required_level.to_string(),
        ];
        for key in STAT_KEYS {
            row.push(format_stat(item.stat(key)));
        }
        writer.write_record(&row)?;
    }

    writer.flush().map_err(|err| StoreError::Io(err))?;
    Ok(catalog.items.len())
}

fn format_stat(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        value.to_string()
    }
}
