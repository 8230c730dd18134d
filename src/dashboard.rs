use dioxus::prelude::*;

use crate::core::actions::{DashboardAction, DashboardActions, TraceActions};
use crate::core::alerts::model::{AlertIcon, AlertSummaryRecord};

pub const STYLESHEET: &str = include_str!("../assets/dashboard.css");

/// Call the injected handler, or `fallback` when the owner supplied none
fn activate_with(
    handler: Option<EventHandler<()>>,
    action: DashboardAction,
    fallback: &dyn DashboardActions,
) {
    match handler {
        Some(handler) => handler.call(()),
        None => action.dispatch(fallback),
    }
}

fn activate(handler: Option<EventHandler<()>>, action: DashboardAction) {
    activate_with(handler, action, &TraceActions);
}

/// Header plus one card per record, in record order.
///
/// Handlers left as `None` fall back to a debug trace.
#[component]
pub fn AlertSummaryDashboard(
    records: Vec<AlertSummaryRecord>,
    title: String,
    subtitle: String,
    on_mark_all_read: Option<EventHandler<()>>,
    on_open_settings: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div {
            class: "dashboard",
            header {
                class: "dashboard-header",
                div {
                    h1 { class: "dashboard-title", "{title}" }
                    p { class: "dashboard-subtitle", "{subtitle}" }
                }
                div {
                    class: "dashboard-actions",
                    button {
                        class: "mark-all-read",
                        r#type: "button",
                        onclick: move |_| activate(on_mark_all_read, DashboardAction::MarkAllRead),
                        "Mark All Read"
                    }
                    button {
                        class: "settings-button",
                        r#type: "button",
                        title: "Settings",
                        onclick: move |_| activate(on_open_settings, DashboardAction::OpenSettings),
                        SettingsGlyph {}
                    }
                }
            }
            div {
                class: "dashboard-grid",
                for record in records.iter() {
                    AlertCard { key: "{record.id}", record: record.clone() }
                }
            }
        }
    }
}

#[component]
fn AlertCard(record: AlertSummaryRecord) -> Element {
    let theme_vars = record.theme().css_vars();

    rsx! {
        div {
            class: "alert-card",
            style: "{theme_vars}",
            "data-count": "{record.count}",
            "data-label": "{record.label}",
            div {
                class: "alert-icon",
                AlertGlyph { icon: record.icon }
            }
            p { class: "alert-count", "{record.count}" }
            p { class: "alert-label", "{record.label}" }
        }
    }
}

#[component]
fn AlertGlyph(icon: AlertIcon) -> Element {
    let shape = match icon {
        AlertIcon::Bell => rsx! {
            path { d: "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9" }
            path { d: "M10.3 21a1.94 1.94 0 0 0 3.4 0" }
        },
        AlertIcon::WarningTriangle => rsx! {
            path { d: "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z" }
            path { d: "M12 9v4" }
            path { d: "M12 17h.01" }
        },
        AlertIcon::WarningCircle => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            line { x1: "12", x2: "12", y1: "8", y2: "12" }
            line { x1: "12", x2: "12.01", y1: "16", y2: "16" }
        },
    };

    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {shape}
        }
    }
}

#[component]
fn SettingsGlyph() -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z" }
            circle { cx: "12", cy: "12", r: "3" }
        }
    }
}
