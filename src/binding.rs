//! Key maps and binding profiles.
//!
//! A [`KeyMap`] names the control codes for one player's six logical keys; a
//! [`BindingProfile`] groups one map per player slot and round-trips through TOML or
//! JSON **strings**. The crate never touches the filesystem — the host owns where (and
//! whether) profiles are stored.
//!
//! ```toml
//! name = "default"
//!
//! [players.one]
//! left = "KeyA"
//! right = "KeyD"
//! up = "KeyW"
//! down = "KeyS"
//! action = "Space"
//!
//! [players.two]
//! left = "ArrowLeft"
//! right = "ArrowRight"
//! up = "ArrowUp"
//! down = "ArrowDown"
//! action = "Enter"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors from parsing or serializing binding profiles.
#[derive(Debug, Error)]
pub enum BindingError {
    #[error("malformed binding profile: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("could not serialize binding profile: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("malformed binding profile: {0}")]
    Json(#[from] serde_json::Error),
    #[error("binding profile {profile:?} has no player slot {slot:?}")]
    UnknownPlayer { profile: String, slot: String },
}

/// Control codes for one player's logical keys.
///
/// `down_right` is the optional combined diagonal alias; absent means disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMap {
    pub left: String,
    pub right: String,
    pub up: String,
    pub down: String,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down_right: Option<String>,
}

impl KeyMap {
    /// The stock left-hand layout (player one).
    pub fn wasd() -> Self {
        Self {
            left: "KeyA".into(),
            right: "KeyD".into(),
            up: "KeyW".into(),
            down: "KeyS".into(),
            action: "Space".into(),
            down_right: None,
        }
    }

    /// The stock arrow-key layout (player two).
    pub fn arrows() -> Self {
        Self {
            left: "ArrowLeft".into(),
            right: "ArrowRight".into(),
            up: "ArrowUp".into(),
            down: "ArrowDown".into(),
            action: "Enter".into(),
            down_right: None,
        }
    }
}

/// Named set of per-player key maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Player slot name (e.g. `"one"`, `"two"`) to key map. BTreeMap keeps
    /// serialized output stable.
    pub players: BTreeMap<String, KeyMap>,
}

impl BindingProfile {
    /// The stock two-player profile: WASD for slot `"one"`, arrows for slot `"two"`.
    pub fn two_player_default() -> Self {
        let mut players = BTreeMap::new();
        players.insert("one".to_string(), KeyMap::wasd());
        players.insert("two".to_string(), KeyMap::arrows());
        Self {
            name: "default".to_string(),
            description: None,
            players,
        }
    }

    pub fn from_toml(text: &str) -> Result<Self, BindingError> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml(&self) -> Result<String, BindingError> {
        Ok(toml::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, BindingError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, BindingError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Looks up a player slot's key map.
    pub fn player(&self, slot: &str) -> Option<&KeyMap> {
        self.players.get(slot)
    }

    /// Like [`player`](Self::player), but a missing slot is a typed error.
    pub fn require_player(&self, slot: &str) -> Result<&KeyMap, BindingError> {
        self.player(slot).ok_or_else(|| BindingError::UnknownPlayer {
            profile: self.name.clone(),
            slot: slot.to_string(),
        })
    }
}
