/// Side panel UI

use log::warn;
use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::chrome::{ChromeHost, internal_page_url};
use crate::grouping::{self, demo_group};
use crate::inspect::inspect_active_tab;
use crate::resolver::{Resolution, open_or_focus};
use crate::settings::{self, DARK_MODE_SETTING, REMEMBER_PANEL_SETTING, Settings};
use crate::tab_data::{PageStats, TabReport, TabTarget};

const TEAM_URL: &str = "https://team.arcblock.io";
const TEAM_PATTERN: &str = "https://team.arcblock.io/*";

#[derive(Clone, PartialEq)]
enum AppState {
    Idle,
    Loading(String),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Panel {
    Actions,
    PageInfo,
    Settings,
}

impl Panel {
    const ALL: [Panel; 3] = [Panel::Actions, Panel::PageInfo, Panel::Settings];

    /// Stable key used for persistence; never tied to panel order.
    fn key(self) -> &'static str {
        match self {
            Panel::Actions => "actions",
            Panel::PageInfo => "pageinfo",
            Panel::Settings => "settings",
        }
    }

    fn from_key(key: &str) -> Option<Panel> {
        Panel::ALL.into_iter().find(|panel| panel.key() == key)
    }

    fn label(self) -> &'static str {
        match self {
            Panel::Actions => "Actions",
            Panel::PageInfo => "Page info",
            Panel::Settings => "Settings",
        }
    }
}

#[function_component(SidePanel)]
pub fn side_panel() -> Html {
    let state = use_state(|| AppState::Idle);
    let report = use_state(|| None::<TabReport>);
    let settings = use_state(Settings::default);
    let active_panel = use_state(|| Panel::Actions);

    // Load settings and restore the last shown panel on mount
    {
        let settings = settings.clone();
        let active_panel = active_panel.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let host = ChromeHost;
                let loaded = settings::load_settings(&host).await;
                apply_dark_mode(loaded.is_enabled(DARK_MODE_SETTING));
                if let Some(panel) = settings::restore_active_panel(&host)
                    .await
                    .and_then(|key| Panel::from_key(&key))
                {
                    active_panel.set(panel);
                }
                settings.set(loaded);
            });
            || ()
        });
    }

    let on_open_team = {
        let state = state.clone();
        Callback::from(move |_| {
            open_target(
                state.clone(),
                TabTarget::with_pattern(TEAM_URL, TEAM_PATTERN),
                "team site",
            );
        })
    };

    let on_open_internal = {
        let state = state.clone();
        Callback::from(move |_| {
            open_target(
                state.clone(),
                TabTarget::exact(internal_page_url()),
                "internal page",
            );
        })
    };

    let on_page_info = {
        let state = state.clone();
        let report = report.clone();
        Callback::from(move |_| {
            let state = state.clone();
            let report = report.clone();
            state.set(AppState::Loading("Reading page info...".to_string()));
            spawn_local(async move {
                match inspect_active_tab(&ChromeHost).await {
                    Ok(built) => {
                        report.set(Some(built));
                        state.set(AppState::Idle);
                    }
                    Err(err) => {
                        state.set(AppState::Error(format!("Failed to read page info: {err}")));
                    }
                }
            });
        })
    };

    let on_panel_click = {
        let active_panel = active_panel.clone();
        let settings = settings.clone();
        move |panel: Panel| {
            let active_panel = active_panel.clone();
            let settings = settings.clone();
            Callback::from(move |_| {
                active_panel.set(panel);
                let settings = (*settings).clone();
                spawn_local(async move {
                    if let Err(err) =
                        settings::remember_active_panel(&ChromeHost, &settings, panel.key()).await
                    {
                        warn!("could not remember panel selection: {err}");
                    }
                });
            })
        }
    };

    let on_toggle = {
        let settings = settings.clone();
        move |key: &'static str| {
            let settings = settings.clone();
            Callback::from(move |e: Event| {
                let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                    return;
                };
                let mut updated = (*settings).clone();
                updated.set(key, input.checked());
                if key == DARK_MODE_SETTING {
                    apply_dark_mode(input.checked());
                }
                settings.set(updated.clone());
                spawn_local(async move {
                    if let Err(err) = settings::save_settings(&ChromeHost, &updated).await {
                        warn!("could not save settings: {err}");
                    }
                });
            })
        }
    };

    let is_busy = !matches!(*state, AppState::Idle);

    html! {
        <div class="padding-20">
            <h1 class="panel-title">{"Tab Scout"}</h1>

            // Panel navigation
            <div class="pf-v5-c-tabs tabs-nav">
                <ul class="pf-v5-c-tabs__list">
                    {for Panel::ALL.into_iter().map(|panel| html! {
                        <li class={if *active_panel == panel { "pf-v5-c-tabs__item pf-m-current" } else { "pf-v5-c-tabs__item" }}>
                            <button
                                class="pf-v5-c-tabs__link"
                                onclick={on_panel_click(panel)}
                            >
                                <span class="pf-v5-c-tabs__item-text">{panel.label()}</span>
                            </button>
                        </li>
                    })}
                </ul>
            </div>

            // Status display
            {match &*state {
                AppState::Loading(msg) => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{msg}</p>
                    </div>
                },
                AppState::Error(err) => html! {
                    <div class="message-top-margin">
                        <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                            {err.clone()}
                        </Alert>
                    </div>
                },
                AppState::Idle => html! {}
            }}

            // Panel content
            <div class="panel-content">
                {match *active_panel {
                    Panel::Actions => html! {
                        <div class="flex-column-gap">
                            <Button onclick={on_open_team} disabled={is_busy} variant={ButtonVariant::Secondary} block={true}>
                                {"Open team site"}
                            </Button>
                            <Button onclick={on_open_internal} disabled={is_busy} variant={ButtonVariant::Secondary} block={true}>
                                {"Open internal page"}
                            </Button>
                        </div>
                    },
                    Panel::PageInfo => html! {
                        <div class="flex-column-gap">
                            <Button onclick={on_page_info} disabled={is_busy} variant={ButtonVariant::Secondary} block={true}>
                                {"Show current tab info"}
                            </Button>
                            if let Some(report) = &*report {
                                {render_report(report)}
                            }
                        </div>
                    },
                    Panel::Settings => html! {
                        <div class="flex-column-gap">
                            {render_toggle("Remember active panel", REMEMBER_PANEL_SETTING, &settings, &on_toggle)}
                            {render_toggle("Dark mode", DARK_MODE_SETTING, &settings, &on_toggle)}
                        </div>
                    },
                }}
            </div>

            <p class="footer-panel">
                {"Tab Scout v0.1.0"}
            </p>
        </div>
    }
}

fn open_target(state: UseStateHandle<AppState>, target: TabTarget, label: &'static str) {
    state.set(AppState::Loading(format!("Opening {label}...")));
    spawn_local(async move {
        let host = ChromeHost;
        match open_or_focus(&host, &target).await {
            Ok(Resolution::Created(tab)) => {
                state.set(AppState::Idle);
                // Grouping must never hold up or fail the open itself
                spawn_local(async move {
                    if let Err(err) = grouping::ensure_grouped(&host, tab.id, &demo_group()).await {
                        warn!("could not group tab {}: {err}", tab.id);
                    }
                });
            }
            Ok(Resolution::Focused(_)) => state.set(AppState::Idle),
            Err(err) => state.set(AppState::Error(format!("Failed to open {label}: {err}"))),
        }
    });
}

fn render_toggle(
    label: &str,
    key: &'static str,
    settings: &UseStateHandle<Settings>,
    on_toggle: &impl Fn(&'static str) -> Callback<Event>,
) -> Html {
    html! {
        <label class="toggle">
            <input
                type="checkbox"
                checked={settings.is_enabled(key)}
                onchange={on_toggle(key)}
            />
            <span class="toggle-label">{label.to_string()}</span>
        </label>
    }
}

fn or_na(value: &str) -> String {
    if value.is_empty() {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

fn info_row(label: &str, value: String) -> Html {
    html! {
        <div class="info-item">
            <span class="info-label">{label.to_string()}</span>
            <span class="info-value">{value}</span>
        </div>
    }
}

fn stats_rows(stats: &PageStats) -> Html {
    html! {
        <div class="info-item">
            <span class="info-label">{"Page statistics"}</span>
            <span class="info-value">
                {format!("Links: {} | Images: {} | Scripts: {}", stats.links, stats.images, stats.scripts)}<br/>
                {format!("Forms: {} | Buttons: {} | Inputs: {}", stats.forms, stats.buttons, stats.inputs)}<br/>
                {format!("Headings: H1({}) H2({}) H3({})", stats.headings.h1, stats.headings.h2, stats.headings.h3)}
            </span>
        </div>
    }
}

fn render_report(report: &TabReport) -> Html {
    let tab = &report.tab;

    html! {
        <div class="page-info">
            if let Some(screenshot) = &report.screenshot {
                <div class="info-item screenshot-container">
                    <span class="info-label">{"Screenshot"}</span>
                    <img src={screenshot.clone()} class="screenshot" alt="Page screenshot" />
                </div>
            }
            {match &report.details {
                Some(details) => {
                    let title = if details.doc_info.title.is_empty() {
                        or_na(&tab.title)
                    } else {
                        details.doc_info.title.clone()
                    };
                    html! {
                        <>
                            {info_row("Title", title)}
                            {info_row("URL", or_na(&tab.url))}
                            {info_row("Language", or_na(&details.doc_info.language))}
                            {info_row("Character set", or_na(&details.doc_info.charset))}
                            {info_row("Content length", format!("{} characters", details.doc_info.content_length))}
                            {for details.meta.get("description").map(|v| info_row("Description", v.clone()))}
                            {for details.meta.get("keywords").map(|v| info_row("Keywords", v.clone()))}
                            {for details.meta.get("author").map(|v| info_row("Author", v.clone()))}
                            {stats_rows(&details.stats)}
                        </>
                    }
                }
                None => html! {
                    <>
                        {info_row("Title", or_na(&tab.title))}
                        {info_row("URL", or_na(&tab.url))}
                        {info_row("Status", or_na(&tab.status))}
                        {info_row("Note", "Detailed info not available for this page type".to_string())}
                    </>
                },
            }}
        </div>
    }
}

fn apply_dark_mode(enabled: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        body.set_class_name(if enabled { "dark" } else { "" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_keys_round_trip() {
        for panel in Panel::ALL {
            assert_eq!(Panel::from_key(panel.key()), Some(panel));
        }
        assert_eq!(Panel::from_key("bogus"), None);
    }
}
