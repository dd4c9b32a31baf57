/// Host capability surface: the browser API the extension consumes
use thiserror::Error;
use url::Url;

use crate::tab_data::{GroupColor, PageDetails, TabGroupInfo, TabInfo};

/// Errors coming back from the host, sorted by how the caller recovers.
#[derive(Error, Debug)]
pub enum HostError {
    /// The tab or group was closed between observing it and acting on it.
    #[error("stale handle: {0}")]
    StaleHandle(String),

    /// The host refuses to run scripts or capture against this page.
    #[error("page not scriptable: {0}")]
    NotScriptable(String),

    /// Any other host API failure.
    #[error("host call failed: {0}")]
    Host(String),
}

impl HostError {
    /// Sort a host error message into the taxonomy.
    ///
    /// Chrome reports failures as free-text messages on `runtime.lastError`;
    /// the phrasing below is what current Chromium builds emit.
    pub fn classify(message: &str) -> HostError {
        let lower = message.to_lowercase();

        if lower.contains("no tab with id")
            || lower.contains("no group with id")
            || lower.contains("invalid tab id")
        {
            return HostError::StaleHandle(message.to_string());
        }

        if lower.contains("cannot access")
            || lower.contains("cannot be scripted")
            || lower.contains("missing host permission")
        {
            return HostError::NotScriptable(message.to_string());
        }

        HostError::Host(message.to_string())
    }
}

/// True when the URL belongs to a scheme the browser will not let an
/// extension inject scripts into. Unparsable URLs count as unscriptable.
pub fn is_unscriptable_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => matches!(
            url.scheme(),
            "chrome" | "chrome-extension" | "chrome-untrusted" | "edge" | "about" | "devtools"
                | "view-source"
        ),
        Err(_) => true,
    }
}

/// Asynchronous browser surface, scoped to the current window.
///
/// `ChromeHost` implements this over the JS bridge; tests run against
/// `mock::MockHost`. All calls resolve through the host's own error channel,
/// no client-side timeouts.
#[allow(async_fn_in_trait)]
pub trait HostApi {
    /// Tabs in the current window whose URL matches the pattern.
    async fn query_tabs(&self, pattern: &str) -> Result<Vec<TabInfo>, HostError>;

    /// The active tab of the current window, if there is one.
    async fn active_tab(&self) -> Result<Option<TabInfo>, HostError>;

    /// Open a new tab at the URL.
    async fn create_tab(&self, url: &str) -> Result<TabInfo, HostError>;

    /// Mark a tab active. Fails with `StaleHandle` when the tab is gone.
    async fn activate_tab(&self, tab_id: i32) -> Result<(), HostError>;

    /// Bring a window to the foreground.
    async fn focus_window(&self, window_id: i32) -> Result<(), HostError>;

    /// Tab groups in the current window carrying exactly this title.
    async fn query_groups(&self, title: &str) -> Result<Vec<TabGroupInfo>, HostError>;

    /// Move a tab into an existing group.
    async fn add_tab_to_group(&self, tab_id: i32, group_id: i32) -> Result<(), HostError>;

    /// Create a new group seeded with the tab; returns the group id.
    /// The group starts unnamed, `update_group` names it in a second call.
    async fn create_group(&self, tab_id: i32) -> Result<i32, HostError>;

    /// Set a group's title and color.
    async fn update_group(
        &self,
        group_id: i32,
        title: &str,
        color: GroupColor,
    ) -> Result<(), HostError>;

    /// PNG screenshot of the visible tab as a data URL.
    async fn capture_visible_tab(&self) -> Result<String, HostError>;

    /// Inject the page probe into the tab and return its findings.
    async fn run_page_probe(&self, tab_id: i32) -> Result<PageDetails, HostError>;

    /// Read a value from persistent extension storage.
    async fn storage_get(&self, key: &str) -> Result<Option<serde_json::Value>, HostError>;

    /// Write a value to persistent extension storage.
    async fn storage_set(&self, key: &str, value: serde_json::Value) -> Result<(), HostError>;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod mock {
    use std::cell::{Cell, RefCell};
    use std::collections::BTreeMap;

    use super::{HostApi, HostError};
    use crate::pattern::url_matches_pattern;
    use crate::tab_data::{GROUP_NONE, GroupColor, PageDetails, TabGroupInfo, TabInfo};

    const MOCK_WINDOW: i32 = 1;
    const MOCK_SCREENSHOT: &str = "data:image/png;base64,c2NvdXQ=";

    /// In-memory stand-in for the browser: one window of tabs and groups,
    /// plus a storage map, with switches to inject the failures the
    /// components have to recover from.
    #[derive(Default)]
    pub struct MockHost {
        pub tabs: RefCell<Vec<TabInfo>>,
        pub groups: RefCell<Vec<TabGroupInfo>>,
        pub storage: RefCell<BTreeMap<String, serde_json::Value>>,
        pub probe: RefCell<Option<PageDetails>>,
        next_tab_id: Cell<i32>,
        next_group_id: Cell<i32>,
        pub fail_next_activate: Cell<bool>,
        pub fail_tab_query: Cell<bool>,
        pub fail_group_query: Cell<bool>,
        pub fail_screenshot: Cell<bool>,
        pub created_urls: RefCell<Vec<String>>,
        pub activated: RefCell<Vec<i32>>,
        pub focused_windows: RefCell<Vec<i32>>,
    }

    impl MockHost {
        pub fn new() -> MockHost {
            MockHost {
                next_tab_id: Cell::new(1),
                next_group_id: Cell::new(100),
                ..MockHost::default()
            }
        }

        /// Seed a tab and return its id.
        pub fn add_tab(&self, url: &str, active: bool) -> i32 {
            let id = self.next_tab_id.get();
            self.next_tab_id.set(id + 1);
            self.tabs.borrow_mut().push(TabInfo {
                id,
                window_id: MOCK_WINDOW,
                url: url.to_string(),
                title: String::new(),
                status: "complete".to_string(),
                active,
                group_id: GROUP_NONE,
            });
            id
        }

        pub fn tab(&self, tab_id: i32) -> Option<TabInfo> {
            self.tabs.borrow().iter().find(|t| t.id == tab_id).cloned()
        }
    }

    impl HostApi for MockHost {
        async fn query_tabs(&self, pattern: &str) -> Result<Vec<TabInfo>, HostError> {
            if self.fail_tab_query.get() {
                return Err(HostError::Host("tab query refused".to_string()));
            }
            Ok(self
                .tabs
                .borrow()
                .iter()
                .filter(|t| url_matches_pattern(pattern, &t.url))
                .cloned()
                .collect())
        }

        async fn active_tab(&self) -> Result<Option<TabInfo>, HostError> {
            Ok(self.tabs.borrow().iter().find(|t| t.active).cloned())
        }

        async fn create_tab(&self, url: &str) -> Result<TabInfo, HostError> {
            self.created_urls.borrow_mut().push(url.to_string());
            for tab in self.tabs.borrow_mut().iter_mut() {
                tab.active = false;
            }
            let id = self.add_tab(url, true);
            self.tab(id)
                .ok_or_else(|| HostError::Host("created tab vanished".to_string()))
        }

        async fn activate_tab(&self, tab_id: i32) -> Result<(), HostError> {
            if self.fail_next_activate.replace(false) {
                return Err(HostError::classify(&format!("No tab with id: {tab_id}.")));
            }
            let mut tabs = self.tabs.borrow_mut();
            if !tabs.iter().any(|t| t.id == tab_id) {
                return Err(HostError::classify(&format!("No tab with id: {tab_id}.")));
            }
            for tab in tabs.iter_mut() {
                tab.active = tab.id == tab_id;
            }
            self.activated.borrow_mut().push(tab_id);
            Ok(())
        }

        async fn focus_window(&self, window_id: i32) -> Result<(), HostError> {
            self.focused_windows.borrow_mut().push(window_id);
            Ok(())
        }

        async fn query_groups(&self, title: &str) -> Result<Vec<TabGroupInfo>, HostError> {
            if self.fail_group_query.get() {
                return Err(HostError::Host("group query refused".to_string()));
            }
            Ok(self
                .groups
                .borrow()
                .iter()
                .filter(|g| g.title == title)
                .cloned()
                .collect())
        }

        async fn add_tab_to_group(&self, tab_id: i32, group_id: i32) -> Result<(), HostError> {
            if !self.groups.borrow().iter().any(|g| g.id == group_id) {
                return Err(HostError::classify(&format!(
                    "No group with id: {group_id}."
                )));
            }
            let mut tabs = self.tabs.borrow_mut();
            let tab = tabs
                .iter_mut()
                .find(|t| t.id == tab_id)
                .ok_or_else(|| HostError::classify(&format!("No tab with id: {tab_id}.")))?;
            tab.group_id = group_id;
            Ok(())
        }

        async fn create_group(&self, tab_id: i32) -> Result<i32, HostError> {
            let group_id = self.next_group_id.get();
            self.next_group_id.set(group_id + 1);
            {
                let mut tabs = self.tabs.borrow_mut();
                let tab = tabs
                    .iter_mut()
                    .find(|t| t.id == tab_id)
                    .ok_or_else(|| HostError::classify(&format!("No tab with id: {tab_id}.")))?;
                tab.group_id = group_id;
            }
            self.groups.borrow_mut().push(TabGroupInfo {
                id: group_id,
                title: String::new(),
                color: "grey".to_string(),
            });
            Ok(group_id)
        }

        async fn update_group(
            &self,
            group_id: i32,
            title: &str,
            color: GroupColor,
        ) -> Result<(), HostError> {
            let mut groups = self.groups.borrow_mut();
            let group = groups.iter_mut().find(|g| g.id == group_id).ok_or_else(|| {
                HostError::classify(&format!("No group with id: {group_id}."))
            })?;
            group.title = title.to_string();
            group.color = color.as_str().to_string();
            Ok(())
        }

        async fn capture_visible_tab(&self) -> Result<String, HostError> {
            if self.fail_screenshot.get() {
                return Err(HostError::NotScriptable(
                    "Cannot access contents of the page.".to_string(),
                ));
            }
            Ok(MOCK_SCREENSHOT.to_string())
        }

        async fn run_page_probe(&self, _tab_id: i32) -> Result<PageDetails, HostError> {
            self.probe
                .borrow()
                .clone()
                .ok_or_else(|| HostError::Host("script injection failed".to_string()))
        }

        async fn storage_get(&self, key: &str) -> Result<Option<serde_json::Value>, HostError> {
            Ok(self.storage.borrow().get(key).cloned())
        }

        async fn storage_set(&self, key: &str, value: serde_json::Value) -> Result<(), HostError> {
            self.storage.borrow_mut().insert(key.to_string(), value);
            Ok(())
        }
    }
}
