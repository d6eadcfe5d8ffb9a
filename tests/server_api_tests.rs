use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use warcalc::server::routes::route_request;

fn unique_temp_path(name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("warcalc-{name}-{stamp}.json"))
}

const REFERENCE_BODY: &str = r#"{
    "player_level": 60,
    "target_level": 63,
    "weapon_skill": 300,
    "base_damage_mh": 100.0,
    "base_speed_mh": 2.8,
    "attack_power": 800.0,
    "hit": 5.0,
    "spellbook_crit": 20.0,
    "target_armor": 3000.0
}"#;

#[test]
fn health_endpoint_returns_ok_json() {
    let response = route_request("GET", "/api/health", "");
    assert_eq!(response.status_code, 200);
    assert_eq!(response.content_type, "application/json");
    assert!(response.body.contains("\"status\": \"ok\""));
}

#[test]
fn dps_endpoint_returns_table_and_totals() {
    let response = route_request("POST", "/api/dps", REFERENCE_BODY);
    assert_eq!(response.status_code, 200);

    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("response should be valid json");
    assert_eq!(payload["status"], "ok");
    assert_eq!(payload["table"]["miss"], 4.0);
    assert_eq!(payload["table"]["glancing"], 40.0);
    assert_eq!(payload["dps_off_hand"], 0.0);

    let total = payload["dps_total"].as_f64().expect("dps_total");
    assert!((total - 46.646008403361344).abs() < 1e-9);
}

#[test]
fn dps_endpoint_is_deterministic() {
    let a = route_request("POST", "/api/dps", REFERENCE_BODY);
    let b = route_request("POST", "/api/dps", REFERENCE_BODY);
    assert_eq!(a.body, b.body);
}

#[test]
fn dps_endpoint_rejects_invalid_payload() {
    let response = route_request("POST", "/api/dps", "{bad json}");
    assert_eq!(response.status_code, 400);
    assert!(response.body.contains("Invalid request body"));
}

#[test]
fn dps_endpoint_rejects_non_positive_weapon_speed() {
    let response = route_request(
        "POST",
        "/api/dps",
        r#"{"player_level":60,"target_level":63,"weapon_skill":300,"base_damage_mh":100.0,"base_speed_mh":0.0,"attack_power":800.0}"#,
    );
    assert_eq!(response.status_code, 400);
    assert!(response.body.contains("base_speed_mh"));
}

#[test]
fn abilities_endpoint_returns_full_named_set() {
    let body = format!(
        r#"{{"stats": {REFERENCE_BODY}, "normalized_speed": 2.4, "overrides": {{"rage": 40.0}}}}"#
    );
    let response = route_request("POST", "/api/abilities", &body);
    assert_eq!(response.status_code, 200);

    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("response should be valid json");
    let abilities = &payload["abilities"];
    for name in [
        "bloodthirst",
        "mortal_strike",
        "whirlwind",
        "overpower",
        "slam",
        "heroic_strike",
        "cleave",
        "execute",
        "shield_slam",
        "hamstring",
    ] {
        assert!(abilities[name].is_number(), "missing ability {name}");
    }
    // rage 40 -> 25 spendable points above the threshold
    assert_eq!(abilities["execute"], 600.0 + 15.0 * 25.0);
}

#[test]
fn rage_endpoint_reports_both_conversions() {
    let response = route_request("POST", "/api/rage", r#"{"damage": 461.2, "level": 60}"#);
    assert_eq!(response.status_code, 200);

    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("response should be valid json");
    let dealt = payload["rage_from_damage_dealt"].as_f64().expect("dealt");
    let taken = payload["rage_from_damage_taken"].as_f64().expect("taken");
    assert!((dealt / taken - 3.0).abs() < 1e-9);
}

#[test]
fn unknown_route_is_404() {
    let response = route_request("GET", "/api/nope", "");
    assert_eq!(response.status_code, 404);
}

#[test]
fn index_page_serves_html_console() {
    let response = route_request("GET", "/", "");
    assert_eq!(response.status_code, 200);
    assert!(response.content_type.starts_with("text/html"));
    assert!(response.body.contains("/api/dps"));
}

#[test]
fn items_and_gear_endpoints_share_the_catalog() {
    let path = unique_temp_path("api-items");
    std::env::set_var("WARCALC_ITEMS", &path);

    let add = route_request(
        "POST",
        "/api/items",
        r#"{"name":"Ironfoe","slot":"Main Hand","required_level":60,"stats":{"base_damage_mh":110.0,"base_speed_mh":2.4,"str":10.0}}"#,
    );
    assert_eq!(add.status_code, 200, "add failed: {}", add.body);

    let list = route_request("GET", "/api/items", "");
    assert_eq!(list.status_code, 200);
    assert!(list.body.contains("Ironfoe"));

    let gear = route_request(
        "POST",
        "/api/gear/dps",
        r#"{"player_level":60,"target_level":63,"weapon_skill":300,"items":["Ironfoe"]}"#,
    );
    assert_eq!(gear.status_code, 200, "gear dps failed: {}", gear.body);
    let payload: serde_json::Value =
        serde_json::from_str(&gear.body).expect("response should be valid json");
    // 10 strength -> 20 attack power
    assert_eq!(payload["stats"]["attack_power"], 20.0);
    assert!(payload["dps_total"].as_f64().expect("dps_total") > 0.0);

    let missing_name = route_request("POST", "/api/items", r#"{"name":"  ","slot":"Ring","required_level":0}"#);
    assert_eq!(missing_name.status_code, 400);

    std::env::remove_var("WARCALC_ITEMS");
    let _ = fs::remove_file(path);
}
