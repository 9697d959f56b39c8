use crate::components::{Badge, BadgeVariant, Card};
use crate::home::models::Alert;
use dioxus::prelude::*;

#[component]
pub fn AlertCard(alert: Alert) -> Element {
    let severity = alert.severity.label();
    let glyph = alert.glyph();

    rsx! {
        Card { class: "bg-gradient-alert shadow-alert animate-pulse-alert border-alert",
            div { class: "flex items-start gap-4",
                div { class: "p-3 rounded-full bg-alert-soft text-xl", "{glyph}" }
                div { class: "flex-1",
                    div { class: "flex items-center gap-2 mb-2",
                        h4 { class: "font-semibold text-alert-foreground", "{alert.title}" }
                        Badge { variant: BadgeVariant::Destructive, class: "text-xs",
                            "{severity}"
                        }
                    }
                    p { class: "text-sm text-alert-foreground", "{alert.message}" }
                }
            }
        }
    }
}

/// Cards for every active alert, or the all-clear card when there are none.
#[component]
pub fn ActiveAlerts(alerts: Vec<Alert>) -> Element {
    rsx! {
        for alert in alerts.iter() {
            AlertCard { key: "{alert.id}", alert: alert.clone() }
        }
        if alerts.is_empty() {
            Card {
                div { class: "flex items-center gap-3 text-success",
                    span { class: "text-xl", "✅" }
                    p { class: "font-medium", "All systems normal - no active alerts" }
                }
            }
        }
    }
}

/// One entry of the "Recent History" list.
#[component]
pub fn ResolvedAlertRow(alert: Alert) -> Element {
    let resolved = alert.resolved_label();
    let glyph = alert.glyph();

    rsx! {
        div { class: "flex items-start gap-4 pb-4 border-b border-border last:border-0 last:pb-0",
            div { class: "p-2 rounded-full bg-muted text-sm", "{glyph}" }
            div { class: "flex-1",
                h4 { class: "font-medium text-foreground", "{alert.title}" }
                p { class: "text-sm text-muted-foreground", "{alert.message}" }
                p { class: "text-xs text-muted-foreground mt-1", "{resolved}" }
            }
        }
    }
}
