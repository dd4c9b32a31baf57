/// Tab resolution: find a live tab for a target, or open one
use log::{info, warn};

use crate::host::{HostApi, HostError};
use crate::tab_data::{TabInfo, TabTarget};

/// How a target ended up with a live tab.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// An existing tab was activated.
    Focused(TabInfo),
    /// A new tab was opened at the target URL.
    Created(TabInfo),
}

/// Produce a live tab showing the target, activating an existing match when
/// possible.
///
/// The query observes and the activation acts, and the user can close the
/// tab in between. That race is tolerated: a stale activation falls back to
/// creating a fresh tab. A failed query is logged and treated as "no match".
/// Only creation failure propagates.
pub async fn open_or_focus<H: HostApi>(
    host: &H,
    target: &TabTarget,
) -> Result<Resolution, HostError> {
    let matches = match host.query_tabs(&target.pattern).await {
        Ok(tabs) => tabs,
        Err(err) => {
            warn!("tab query for {} failed, treating as no match: {err}", target.pattern);
            Vec::new()
        }
    };

    if let Some(tab) = matches.into_iter().next() {
        match host.activate_tab(tab.id).await {
            Ok(()) => {
                if let Err(err) = host.focus_window(tab.window_id).await {
                    warn!("could not focus window {}: {err}", tab.window_id);
                }
                return Ok(Resolution::Focused(tab));
            }
            Err(err) => {
                info!("tab {} went away before activation, opening a fresh one: {err}", tab.id);
            }
        }
    }

    let tab = host.create_tab(&target.url).await?;
    Ok(Resolution::Created(tab))
}
