//! JSON payload builders for the HTTP API. Each function parses the request
//! body, runs the core, and serializes the response; routing and status codes
//! live in [routes](crate::server::routes).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::combat::{
    ability_damage, dps_breakdown, rage_from_damage_dealt, rage_from_damage_taken, AbilityOverrides,
    AttackTable, WarriorStats,
};
use crate::data::gear::{build_stats, GearInputs};
use crate::data::item::Item;
use crate::data::store::{self, StoreError, DEFAULT_ITEMS_PATH};

#[derive(Debug)]
pub enum RequestError {
    Parse(serde_json::Error),
    Validation(String),
    Store(StoreError),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Validation(msg) => write!(f, "{msg}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for RequestError {}

impl From<StoreError> for RequestError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

pub fn health_payload() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "service": "warcalc-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[derive(Debug, Clone, Serialize)]
struct TablePayload {
    miss: f64,
    dodge: f64,
    parry: f64,
    block: f64,
    glancing: f64,
    crit: f64,
    hit: f64,
    base_miss: f64,
    dual_wield_miss: f64,
}

impl From<AttackTable> for TablePayload {
    fn from(table: AttackTable) -> Self {
        Self {
            miss: table.miss,
            dodge: table.dodge,
            parry: table.parry,
            block: table.block,
            glancing: table.glancing,
            crit: table.crit,
            hit: table.hit,
            base_miss: table.base_miss,
            dual_wield_miss: table.dual_wield_miss,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct DpsResponse {
    status: &'static str,
    table: TablePayload,
    dps_main_hand: f64,
    dps_off_hand: f64,
    dps_total: f64,
}

fn validate_stats(stats: &WarriorStats) -> Result<(), RequestError> {
    if stats.base_speed_mh <= 0.0 {
        return Err(RequestError::Validation(
            "base_speed_mh must be positive".to_string(),
        ));
    }
    if stats.base_damage_oh > 0.0 && stats.base_speed_oh < 0.0 {
        return Err(RequestError::Validation(
            "base_speed_oh must not be negative".to_string(),
        ));
    }
    Ok(())
}

/// POST /api/dps: a full [WarriorStats] in, table plus per-hand DPS out.
pub fn dps_payload(body: &str) -> Result<String, RequestError> {
    let stats: WarriorStats = serde_json::from_str(body).map_err(RequestError::Parse)?;
    validate_stats(&stats)?;

    let breakdown = dps_breakdown(&stats);
    let response = DpsResponse {
        status: "ok",
        table: breakdown.table.into(),
        dps_main_hand: breakdown.main_hand,
        dps_off_hand: breakdown.off_hand,
        dps_total: breakdown.total,
    };
    serde_json::to_string_pretty(&response).map_err(RequestError::Parse)
}

#[derive(Debug, Clone, Deserialize)]
struct AbilitiesRequest {
    stats: WarriorStats,
    normalized_speed: f64,
    #[serde(default)]
    overrides: AbilityOverrides,
}

/// POST /api/abilities: stats plus a normalized weapon speed and optional
/// per-call overrides in, the full named damage set out.
pub fn abilities_payload(body: &str) -> Result<String, RequestError> {
    let request: AbilitiesRequest = serde_json::from_str(body).map_err(RequestError::Parse)?;
    if request.normalized_speed <= 0.0 {
        return Err(RequestError::Validation(
            "normalized_speed must be positive".to_string(),
        ));
    }

    let set = ability_damage(&request.stats, request.normalized_speed, &request.overrides);
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "abilities": set
    }))
    .map_err(RequestError::Parse)
}

#[derive(Debug, Clone, Deserialize)]
struct RageRequest {
    damage: f64,
    #[serde(default = "default_level")]
    level: i32,
}

fn default_level() -> i32 {
    60
}

/// POST /api/rage: damage and level in, rage generated both ways out.
pub fn rage_payload(body: &str) -> Result<String, RequestError> {
    let request: RageRequest = serde_json::from_str(body).map_err(RequestError::Parse)?;
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "level": request.level,
        "rage_from_damage_dealt": rage_from_damage_dealt(request.damage, request.level),
        "rage_from_damage_taken": rage_from_damage_taken(request.damage, request.level),
    }))
    .map_err(RequestError::Parse)
}

/// POST /api/gear/dps: base inputs plus item names in; items are resolved
/// through the catalog and aggregated before evaluation.
pub fn gear_dps_payload(store_path: &str, body: &str) -> Result<String, RequestError> {
    let inputs: GearInputs = serde_json::from_str(body).map_err(RequestError::Parse)?;
    let stats = build_stats(store_path, &inputs)?;
    validate_stats(&stats)?;

    let breakdown = dps_breakdown(&stats);
    let response = serde_json::json!({
        "status": "ok",
        "stats": stats,
        "table": TablePayload::from(breakdown.table),
        "dps_main_hand": breakdown.main_hand,
        "dps_off_hand": breakdown.off_hand,
        "dps_total": breakdown.total,
    });
    serde_json::to_string_pretty(&response).map_err(RequestError::Parse)
}

/// GET /api/items: sorted item names.
pub fn items_list_payload(store_path: &str) -> Result<String, RequestError> {
    let names = store::list_item_names(store_path)?;
    serde_json::to_string_pretty(&serde_json::json!({ "items": names }))
        .map_err(RequestError::Parse)
}

/// POST /api/items: upsert one catalog item.
pub fn items_add_payload(store_path: &str, body: &str) -> Result<String, RequestError> {
    let item: Item = serde_json::from_str(body).map_err(RequestError::Parse)?;
    if item.name.trim().is_empty() {
        return Err(RequestError::Validation("name must not be empty".to_string()));
    }
    store::add_item(store_path, item.clone())?;
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "inserted": item.name
    }))
    .map_err(RequestError::Parse)
}

/// Resolve the catalog path the server should use.
pub fn store_path_from_env() -> String {
    std::env::var("WARCALC_ITEMS").unwrap_or_else(|_| DEFAULT_ITEMS_PATH.to_string())
}
