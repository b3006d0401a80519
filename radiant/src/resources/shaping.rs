//! Post-processing applied to upstream payloads before they are cached or returned.

use crate::domain::WeaponSummary;
use serde_json::Value;
use shared::{Error, Result};

/// Guarantees a `players` list regardless of the casing the upstream used
pub fn normalize_players(payload: Value) -> Result<Value> {
    let Value::Object(mut map) = payload else {
        return Err(Error::InvalidPayload(
            "leaderboard payload is not an object".to_string(),
        ));
    };

    let lower = map.remove("players");
    let upper = map.remove("Players");
    let players = [lower, upper]
        .into_iter()
        .flatten()
        .find(|v| v.as_array().is_some_and(|list| !list.is_empty()))
        .unwrap_or_else(|| Value::Array(Vec::new()));

    map.insert("players".to_string(), players);
    Ok(Value::Object(map))
}

/// Pulls the `data` list out of a cosmetic API envelope
pub fn data_list(envelope: Value) -> Vec<Value> {
    match envelope {
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Pulls `data.skins` out of a single-weapon envelope
pub fn weapon_skins(envelope: Value) -> Vec<Value> {
    match envelope {
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Object(mut weapon)) => match weapon.remove("skins") {
                Some(Value::Array(skins)) => skins,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Case-insensitive substring match on `displayName`; a blank query keeps everything
pub fn filter_by_display_name(items: &[Value], query: &str) -> Vec<Value> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| {
            item.get("displayName")
                .and_then(Value::as_str)
                .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

pub fn project_weapon(item: &Value) -> WeaponSummary {
    let text = |field: &str| item.get(field).and_then(Value::as_str).map(str::to_string);

    WeaponSummary {
        identifier: text("uuid").unwrap_or_default(),
        display_name: text("displayName").unwrap_or_default(),
        icon: text("displayIcon"),
        category: text("category"),
    }
}
