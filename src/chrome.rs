/// Production host: chrome.* reached through the side panel's JS bridge
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::host::{HostApi, HostError};
use crate::tab_data::{GroupColor, PageDetails, TabGroupInfo, TabInfo};

// Import JS bridge functions
#[wasm_bindgen(module = "/sidepanel.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn queryTabs(pattern: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn queryActiveTab() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn createTab(url: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn activateTab(tab_id: i32) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn focusWindow(window_id: i32) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn queryTabGroups(title: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn addTabToGroup(tab_id: i32, group_id: i32) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn createTabGroup(tab_id: i32) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn updateTabGroup(group_id: i32, title: &str, color: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn captureVisibleTab() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn runPageProbe(tab_id: i32) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(key: &str, value: JsValue) -> Result<(), JsValue>;

    fn internalPageUrl() -> String;
}

/// The extension's own demo page, addressed through the runtime so the
/// extension id never appears in code.
pub fn internal_page_url() -> String {
    internalPageUrl()
}

fn js_error_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{err:?}"))
}

fn host_err(err: JsValue) -> HostError {
    HostError::classify(&js_error_message(&err))
}

fn parse<T: DeserializeOwned>(value: JsValue) -> Result<T, HostError> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|err| HostError::Host(format!("unexpected bridge payload: {err}")))
}

/// Stateless handle to the real browser; every capability lives host-side.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeHost;

impl HostApi for ChromeHost {
    async fn query_tabs(&self, pattern: &str) -> Result<Vec<TabInfo>, HostError> {
        parse(queryTabs(pattern).await.map_err(host_err)?)
    }

    async fn active_tab(&self) -> Result<Option<TabInfo>, HostError> {
        let value = queryActiveTab().await.map_err(host_err)?;
        if value.is_null() || value.is_undefined() {
            Ok(None)
        } else {
            parse(value).map(Some)
        }
    }

    async fn create_tab(&self, url: &str) -> Result<TabInfo, HostError> {
        parse(createTab(url).await.map_err(host_err)?)
    }

    async fn activate_tab(&self, tab_id: i32) -> Result<(), HostError> {
        activateTab(tab_id).await.map_err(host_err)
    }

    async fn focus_window(&self, window_id: i32) -> Result<(), HostError> {
        focusWindow(window_id).await.map_err(host_err)
    }

    async fn query_groups(&self, title: &str) -> Result<Vec<TabGroupInfo>, HostError> {
        parse(queryTabGroups(title).await.map_err(host_err)?)
    }

    async fn add_tab_to_group(&self, tab_id: i32, group_id: i32) -> Result<(), HostError> {
        addTabToGroup(tab_id, group_id).await.map_err(host_err)
    }

    async fn create_group(&self, tab_id: i32) -> Result<i32, HostError> {
        let value = createTabGroup(tab_id).await.map_err(host_err)?;
        value
            .as_f64()
            .map(|id| id as i32)
            .ok_or_else(|| HostError::Host("group id was not a number".to_string()))
    }

    async fn update_group(
        &self,
        group_id: i32,
        title: &str,
        color: GroupColor,
    ) -> Result<(), HostError> {
        updateTabGroup(group_id, title, color.as_str())
            .await
            .map_err(host_err)
    }

    async fn capture_visible_tab(&self) -> Result<String, HostError> {
        let value = captureVisibleTab().await.map_err(host_err)?;
        value
            .as_string()
            .ok_or_else(|| HostError::Host("screenshot payload was not a string".to_string()))
    }

    async fn run_page_probe(&self, tab_id: i32) -> Result<PageDetails, HostError> {
        parse(runPageProbe(tab_id).await.map_err(host_err)?)
    }

    async fn storage_get(&self, key: &str) -> Result<Option<serde_json::Value>, HostError> {
        let value = getStorage(key).await.map_err(host_err)?;
        if value.is_null() || value.is_undefined() {
            Ok(None)
        } else {
            parse(value).map(Some)
        }
    }

    async fn storage_set(&self, key: &str, value: serde_json::Value) -> Result<(), HostError> {
        // Plain JS objects, not Maps: chrome.storage only round-trips the former
        let js = value
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|err| HostError::Host(format!("unstorable value: {err}")))?;
        setStorage(key, js).await.map_err(host_err)
    }
}
