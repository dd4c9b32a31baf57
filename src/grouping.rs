/// Group coordination: keep opened tabs in the extension's named group
use crate::host::{HostApi, HostError};
use crate::tab_data::{GroupColor, GroupSpec};

/// Group every tab the panel opens ends up in.
pub const DEMO_GROUP_TITLE: &str = "demo";

pub fn demo_group() -> GroupSpec {
    GroupSpec::new(DEMO_GROUP_TITLE, GroupColor::Blue)
}

/// Make the tab a member of the group the `GroupSpec` names, creating the
/// group if no group in the current window carries that title.
///
/// Creation takes two host calls (create seeded with the tab, then set title
/// and color) because the host has no atomic create-with-name. A failure
/// after the first call leaves an unnamed group behind; nothing rolls it
/// back. When several groups already share the title, the first query match
/// wins.
///
/// Callers treat this as best-effort: run it off the critical path and log
/// the error instead of propagating it into the action that opened the tab.
pub async fn ensure_grouped<H: HostApi>(
    host: &H,
    tab_id: i32,
    spec: &GroupSpec,
) -> Result<i32, HostError> {
    let groups = host.query_groups(&spec.title).await?;

    if let Some(group) = groups.first() {
        host.add_tab_to_group(tab_id, group.id).await?;
        return Ok(group.id);
    }

    let group_id = host.create_group(tab_id).await?;
    host.update_group(group_id, &spec.title, spec.color).await?;
    Ok(group_id)
}
