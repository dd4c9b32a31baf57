/// Data structures shared between the bridge, the host trait, and the UI
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::pattern::url_matches_pattern;

/// Group id value Chrome uses for an ungrouped tab.
pub const GROUP_NONE: i32 = -1;

/// Snapshot of a browser tab as reported by the host.
///
/// The handle data here is only trusted for the duration of one operation;
/// the tab can be closed by the user at any time after the snapshot is taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabInfo {
    pub id: i32,
    pub window_id: i32,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default = "ungrouped")]
    pub group_id: i32,
}

fn ungrouped() -> i32 {
    GROUP_NONE
}

/// Snapshot of a tab group as reported by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabGroupInfo {
    pub id: i32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub color: String,
}

/// Display colors Chrome accepts for tab groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupColor {
    Grey,
    Blue,
    Red,
    Yellow,
    Green,
    Pink,
    Purple,
    Cyan,
    Orange,
}

impl GroupColor {
    pub fn as_str(self) -> &'static str {
        match self {
            GroupColor::Grey => "grey",
            GroupColor::Blue => "blue",
            GroupColor::Red => "red",
            GroupColor::Yellow => "yellow",
            GroupColor::Green => "green",
            GroupColor::Pink => "pink",
            GroupColor::Purple => "purple",
            GroupColor::Cyan => "cyan",
            GroupColor::Orange => "orange",
        }
    }
}

/// Desired identity of a tab group: a title to look up and a color to apply
/// when the group has to be created.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSpec {
    pub title: String,
    pub color: GroupColor,
}

impl GroupSpec {
    pub fn new(title: impl Into<String>, color: GroupColor) -> GroupSpec {
        GroupSpec {
            title: title.into(),
            color,
        }
    }
}

/// Where a resolution should land: the URL to open if no tab exists, and the
/// pattern used to find one that already does.
#[derive(Debug, Clone, PartialEq)]
pub struct TabTarget {
    pub url: String,
    pub pattern: String,
}

impl TabTarget {
    /// Target matched by exactly one URL (extension pages).
    pub fn exact(url: impl Into<String>) -> TabTarget {
        let url = url.into();
        let pattern = url.clone();
        TabTarget { url, pattern }
    }

    /// Target with a query pattern wider than the creation URL.
    pub fn with_pattern(url: impl Into<String>, pattern: impl Into<String>) -> TabTarget {
        TabTarget {
            url: url.into(),
            pattern: pattern.into(),
        }
    }

    pub fn matches(&self, url: &str) -> bool {
        url_matches_pattern(&self.pattern, url)
    }
}

/// Structured result of the page probe injected into the inspected tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDetails {
    #[serde(default)]
    pub meta: BTreeMap<String, String>,
    pub stats: PageStats,
    pub doc_info: DocInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStats {
    pub links: u32,
    pub images: u32,
    pub scripts: u32,
    pub stylesheets: u32,
    pub forms: u32,
    pub buttons: u32,
    pub inputs: u32,
    pub headings: HeadingCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadingCounts {
    pub h1: u32,
    pub h2: u32,
    pub h3: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub charset: String,
    #[serde(default)]
    pub doctype: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub content_length: u64,
}

/// Everything the inspector could learn about the active tab.
///
/// `details` is `None` when the page could not be probed (privileged scheme
/// or injection failure) and the report degrades to handle-level fields.
#[derive(Debug, Clone, PartialEq)]
pub struct TabReport {
    pub tab: TabInfo,
    pub screenshot: Option<String>,
    pub details: Option<PageDetails>,
}
