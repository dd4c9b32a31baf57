/// Page inspection: a human-readable report on the active tab
use log::warn;

use crate::host::{HostApi, HostError, is_unscriptable_url};
use crate::tab_data::TabReport;

/// Build a report for the active tab.
///
/// The screenshot is attempted first and independently; losing it never
/// blocks the text report. The probe is skipped outright on privileged
/// schemes the host would reject anyway, and any other injection failure
/// degrades to the same handle-level report.
pub async fn inspect_active_tab<H: HostApi>(host: &H) -> Result<TabReport, HostError> {
    let tab = host
        .active_tab()
        .await?
        .ok_or_else(|| HostError::Host("no active tab in the current window".to_string()))?;

    let screenshot = match host.capture_visible_tab().await {
        Ok(data_url) => Some(data_url),
        Err(err) => {
            warn!("screenshot capture failed: {err}");
            None
        }
    };

    if is_unscriptable_url(&tab.url) {
        return Ok(TabReport {
            tab,
            screenshot,
            details: None,
        });
    }

    let details = match host.run_page_probe(tab.id).await {
        Ok(details) => Some(details),
        Err(err) => {
            warn!("page probe failed on tab {}, reporting handle fields only: {err}", tab.id);
            None
        }
    };

    Ok(TabReport {
        tab,
        screenshot,
        details,
    })
}
