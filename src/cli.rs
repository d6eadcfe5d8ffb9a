use std::env;

use crate::combat::{
    ability_damage, dps_breakdown, rage_from_damage_dealt, rage_from_damage_taken,
    AbilityOverrides, WarriorStats,
};
use crate::data::export::export_items_csv;
use crate::data::gear::{build_stats, GearInputs};
use crate::data::item::Item;
use crate::data::store::{self, DEFAULT_ITEMS_PATH};
use crate::data::validate::validate_item_catalog;
use crate::parallel::{sweep_weapon_skill, WorkerPool};
use crate::server;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Dps,
    Abilities,
    Rage,
    Sweep,
    Gear,
    Item,
    Export,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("dps") => Some(Command::Dps),
        Some("abilities") => Some(Command::Abilities),
        Some("rage") => Some(Command::Rage),
        Some("sweep") => Some(Command::Sweep),
        Some("gear") => Some(Command::Gear),
        Some("item") => Some(Command::Item),
        Some("export") => Some(Command::Export),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(),
        Some(Command::Dps) => handle_dps(args),
        Some(Command::Abilities) => handle_abilities(args),
        Some(Command::Rage) => handle_rage(args),
        Some(Command::Sweep) => handle_sweep(args),
        Some(Command::Gear) => handle_gear(args),
        Some(Command::Item) => handle_item(args),
        Some(Command::Export) => handle_export(args),
        Some(Command::Validate) => handle_validate(args),
        None => {
            eprintln!(
                "usage: warcalc <serve|dps|abilities|rage|sweep|gear|item|export|validate>"
            );
            2
        }
    }
}

fn handle_serve() -> i32 {
    let bind_addr = env::var("WARCALC_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    match server::run_server(&bind_addr) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

fn stats_from_flags(args: &[String]) -> WarriorStats {
    WarriorStats {
        player_level: parse_i32_flag(args, "--player-level", 60),
        target_level: parse_i32_flag(args, "--target-level", 63),
        weapon_skill: parse_i32_flag(args, "--weapon-skill", 300),
        base_damage_mh: parse_f64_flag(args, "--base-damage-mh", 0.0),
        base_speed_mh: parse_f64_flag(args, "--base-speed-mh", 0.0),
        attack_power: parse_f64_flag(args, "--attack-power", 0.0),
        hit: parse_f64_flag(args, "--hit", 0.0),
        spellbook_crit: parse_f64_flag(args, "--crit", 0.0),
        aura_crit: parse_f64_flag(args, "--aura-crit", 0.0),
        base_damage_oh: parse_f64_flag(args, "--base-damage-oh", 0.0),
        base_speed_oh: parse_f64_flag(args, "--base-speed-oh", 0.0),
        dual_wield_spec: parse_i32_flag(args, "--dual-wield-spec", 0),
        impale: parse_i32_flag(args, "--impale", 0),
        block_value: parse_f64_flag(args, "--block-value", 0.0),
        rage: parse_f64_flag(args, "--rage", 0.0),
        improved_cleave: parse_i32_flag(args, "--improved-cleave", 0),
        improved_execute_rage: parse_f64_flag(args, "--improved-execute-rage", 0.0),
        target_armor: parse_f64_flag(args, "--target-armor", 0.0),
        target_block_value: parse_f64_flag(args, "--target-block-value", 45.0),
    }
}

fn handle_dps(args: &[String]) -> i32 {
    let stats = stats_from_flags(args);
    if stats.base_speed_mh <= 0.0 {
        eprintln!("usage: warcalc dps --base-damage-mh <n> --base-speed-mh <n> [flags]");
        return 2;
    }

    let breakdown = dps_breakdown(&stats);
    if args.iter().any(|arg| arg == "--table") {
        println!("miss\tdodge\tparry\tblock\tglancing\tcrit\thit");
        println!(
            "{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}",
            breakdown.table.miss,
            breakdown.table.dodge,
            breakdown.table.parry,
            breakdown.table.block,
            breakdown.table.glancing,
            breakdown.table.crit,
            breakdown.table.hit,
        );
        println!("Estimated DPS: {:.2}", breakdown.total);
        return 0;
    }

    let payload = serde_json::json!({
        "table": {
            "miss": breakdown.table.miss,
            "dodge": breakdown.table.dodge,
            "parry": breakdown.table.parry,
            "block": breakdown.table.block,
            "glancing": breakdown.table.glancing,
            "crit": breakdown.table.crit,
            "hit": breakdown.table.hit,
            "base_miss": breakdown.table.base_miss,
            "dual_wield_miss": breakdown.table.dual_wield_miss,
        },
        "dps_main_hand": breakdown.main_hand,
        "dps_off_hand": breakdown.off_hand,
        "dps_total": breakdown.total,
    });
    print_json(&payload)
}

fn handle_abilities(args: &[String]) -> i32 {
    let stats = stats_from_flags(args);
    let normalized_speed = parse_f64_flag(args, "--normalized-speed", 2.4);
    if normalized_speed <= 0.0 {
        eprintln!("invalid --normalized-speed: must be positive");
        return 2;
    }

    let set = ability_damage(&stats, normalized_speed, &AbilityOverrides::default());
    let entries: serde_json::Map<String, serde_json::Value> = set
        .entries()
        .iter()
        .map(|(name, damage)| ((*name).to_string(), serde_json::json!(damage)))
        .collect();
    print_json(&serde_json::Value::Object(entries))
}

fn handle_rage(args: &[String]) -> i32 {
    let Some(damage) = args.get(2).and_then(|value| value.parse::<f64>().ok()) else {
        eprintln!("usage: warcalc rage <damage> [level]");
        return 2;
    };
    let level = parse_i32_arg(args.get(3), "level", 60);

    let payload = serde_json::json!({
        "level": level,
        "rage_from_damage_dealt": rage_from_damage_dealt(damage, level),
        "rage_from_damage_taken": rage_from_damage_taken(damage, level),
    });
    print_json(&payload)
}

fn handle_sweep(args: &[String]) -> i32 {
    let stats = stats_from_flags(args);
    if stats.base_speed_mh <= 0.0 {
        eprintln!("usage: warcalc sweep --base-damage-mh <n> --base-speed-mh <n> [--from <skill>] [--to <skill>]");
        return 2;
    }
    let from = parse_i32_flag(args, "--from", 300);
    let to = parse_i32_flag(args, "--to", 315);
    let workers = parse_i32_flag(args, "--workers", 0).max(0) as usize;

    let pool = WorkerPool { workers };
    let points = sweep_weapon_skill(&stats, from, to, &pool);

    if args.iter().any(|arg| arg == "--table") {
        println!("weapon_skill\tdps");
        for point in &points {
            println!("{}\t{:.2}", point.weapon_skill, point.dps);
        }
        return 0;
    }
    print_json(&serde_json::json!(points))
}

fn handle_gear(args: &[String]) -> i32 {
    let store_path = store_path_flag(args);
    let items = args
        .iter()
        .position(|arg| arg == "--items")
        .and_then(|index| args.get(index + 1))
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    let inputs = GearInputs {
        player_level: parse_i32_flag(args, "--player-level", 60),
        target_level: parse_i32_flag(args, "--target-level", 63),
        weapon_skill: parse_i32_flag(args, "--weapon-skill", 300),
        dual_wield_spec: parse_i32_flag(args, "--dual-wield-spec", 0),
        impale: parse_i32_flag(args, "--impale", 0),
        target_armor: parse_f64_flag(args, "--target-armor", 0.0),
        target_block_value: parse_f64_flag(args, "--target-block-value", 45.0),
        items,
    };

    let stats = match build_stats(&store_path, &inputs) {
        Ok(stats) => stats,
        Err(err) => {
            eprintln!("gear lookup failed: {err}");
            return 1;
        }
    };
    if stats.base_speed_mh <= 0.0 {
        eprintln!("equipped items provide no main-hand weapon");
        return 1;
    }

    let breakdown = dps_breakdown(&stats);
    println!("Estimated DPS: {:.2}", breakdown.total);
    0
}

fn handle_item(args: &[String]) -> i32 {
    let store_path = store_path_flag(args);
    match args.get(2).map(String::as_str) {
        Some("init") => match store::init_store(&store_path) {
            Ok(()) => {
                println!("catalog initialized: {store_path}");
                0
            }
            Err(err) => {
                eprintln!("init failed: {err}");
                1
            }
        },
        Some("list") => match store::list_item_names(&store_path) {
            Ok(names) => {
                for name in names {
                    println!("{name}");
                }
                0
            }
            Err(err) => {
                eprintln!("list failed: {err}");
                1
            }
        },
        Some("add") => handle_item_add(args, &store_path),
        Some("remove") => {
            let Some(name) = args.get(3) else {
                eprintln!("usage: warcalc item remove <name>");
                return 2;
            };
            match store::remove_item(&store_path, name) {
                Ok(true) => {
                    println!("removed {name}");
                    0
                }
                Ok(false) => {
                    eprintln!("no item named '{name}'");
                    1
                }
                Err(err) => {
                    eprintln!("remove failed: {err}");
                    1
                }
            }
        }
        _ => {
            eprintln!("usage: warcalc item <init|add|list|remove>");
            2
        }
    }
}

fn handle_item_add(args: &[String], store_path: &str) -> i32 {
    let (Some(name), Some(slot)) = (args.get(3), args.get(4)) else {
        eprintln!("usage: warcalc item add <name> <slot> [level] [--stat key=value ...]");
        return 2;
    };
    let required_level = parse_i32_arg(
        args.get(5).filter(|value| !value.starts_with("--")),
        "level",
        0,
    );

    let mut stats = std::collections::BTreeMap::new();
    let mut index = 0;
    while let Some(position) = args[index..].iter().position(|arg| arg == "--stat") {
        index += position + 1;
        let Some(pair) = args.get(index) else { break };
        let Some((key, value)) = pair.split_once('=') else {
            eprintln!("invalid stat '{pair}', expected key=value");
            return 2;
        };
        let Ok(value) = value.parse::<f64>() else {
            eprintln!("value for '{key}' must be numeric");
            return 2;
        };
        stats.insert(key.to_string(), value);
    }

    let item = Item {
        name: name.clone(),
        slot: slot.clone(),
        required_level,
        stats,
    };
    match store::add_item(store_path, item) {
        Ok(()) => {
            println!("inserted {name}");
            0
        }
        Err(err) => {
            eprintln!("add failed: {err}");
            1
        }
    }
}

fn handle_export(args: &[String]) -> i32 {
    let store_path = store_path_flag(args);
    let out_path = args
        .get(2)
        .map(String::as_str)
        .filter(|path| !path.starts_with("--"))
        .unwrap_or("items.csv");

    match export_items_csv(&store_path, out_path) {
        Ok(count) => {
            println!("exported {count} item(s) to {out_path}");
            0
        }
        Err(err) => {
            eprintln!("export failed: {err}");
            1
        }
    }
}

fn handle_validate(args: &[String]) -> i32 {
    let path = args
        .get(2)
        .map(String::as_str)
        .unwrap_or(DEFAULT_ITEMS_PATH);

    match validate_item_catalog(path) {
        Ok(report) if !report.has_errors() => {
            for diagnostic in &report.diagnostics {
                eprintln!("- {diagnostic}");
            }
            println!("validation passed: {path}");
            0
        }
        Ok(report) => {
            eprintln!("validation failed: {} issue(s)", report.diagnostics.len());
            for diagnostic in &report.diagnostics {
                eprintln!("- {diagnostic}");
            }
            1
        }
        Err(err) => {
            eprintln!("validation failed: {err}");
            1
        }
    }
}

fn store_path_flag(args: &[String]) -> String {
    flag_value(args, "--store")
        .cloned()
        .or_else(|| env::var("WARCALC_ITEMS").ok())
        .unwrap_or_else(|| DEFAULT_ITEMS_PATH.to_string())
}

fn print_json(payload: &serde_json::Value) -> i32 {
    match serde_json::to_string_pretty(payload) {
        Ok(text) => {
            println!("{text}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize output: {err}");
            1
        }
    }
}

fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a String> {
    args.iter()
        .position(|arg| arg == name)
        .and_then(|index| args.get(index + 1))
}

fn parse_f64_flag(args: &[String], name: &str, default: f64) -> f64 {
    let raw = flag_value(args, name);
    raw.and_then(|value| value.parse::<f64>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}

fn parse_i32_flag(args: &[String], name: &str, default: i32) -> i32 {
    let raw = flag_value(args, name);
    raw.and_then(|value| value.parse::<i32>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}

fn parse_i32_arg(raw: Option<&String>, name: &str, default: i32) -> i32 {
    raw.and_then(|value| value.parse::<i32>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}
