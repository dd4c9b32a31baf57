/// UI settings persisted in extension storage
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::host::{HostApi, HostError};

/// Storage key holding the whole settings map.
pub const SETTINGS_STORAGE_KEY: &str = "settings";
/// Storage key holding the last shown panel.
pub const ACTIVE_PANEL_STORAGE_KEY: &str = "activeTab";

/// Setting: persist the selected panel across reloads.
pub const REMEMBER_PANEL_SETTING: &str = "remembertab";
/// Setting: dark styling for the panel.
pub const DARK_MODE_SETTING: &str = "darkmode";

/// Flat toggle-name to state map. Saved wholesale on every change; a key
/// that was never toggled is simply absent and reads as off.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    values: BTreeMap<String, bool>,
}

impl Settings {
    pub fn is_enabled(&self, key: &str) -> bool {
        self.values.get(key).copied().unwrap_or(false)
    }

    pub fn set(&mut self, key: &str, enabled: bool) {
        self.values.insert(key.to_string(), enabled);
    }
}

/// Load settings from storage. Absent or unreadable state falls back to
/// defaults; the panel must come up regardless of what storage holds.
pub async fn load_settings<H: HostApi>(host: &H) -> Settings {
    match host.storage_get(SETTINGS_STORAGE_KEY).await {
        Ok(Some(value)) => serde_json::from_value(value).unwrap_or_else(|err| {
            warn!("stored settings unreadable, using defaults: {err}");
            Settings::default()
        }),
        Ok(None) => Settings::default(),
        Err(err) => {
            warn!("settings load failed, using defaults: {err}");
            Settings::default()
        }
    }
}

pub async fn save_settings<H: HostApi>(host: &H, settings: &Settings) -> Result<(), HostError> {
    let value =
        serde_json::to_value(settings).map_err(|err| HostError::Host(err.to_string()))?;
    host.storage_set(SETTINGS_STORAGE_KEY, value).await
}

/// Record the shown panel, but only while the remember-panel setting is on.
pub async fn remember_active_panel<H: HostApi>(
    host: &H,
    settings: &Settings,
    panel_key: &str,
) -> Result<(), HostError> {
    if !settings.is_enabled(REMEMBER_PANEL_SETTING) {
        return Ok(());
    }
    host.storage_set(ACTIVE_PANEL_STORAGE_KEY, Value::String(panel_key.to_string()))
        .await
}

/// The panel key recorded by an earlier session, if any.
pub async fn restore_active_panel<H: HostApi>(host: &H) -> Option<String> {
    match host.storage_get(ACTIVE_PANEL_STORAGE_KEY).await {
        Ok(Some(Value::String(key))) => Some(key),
        Ok(_) => None,
        Err(err) => {
            warn!("could not restore panel selection: {err}");
            None
        }
    }
}
