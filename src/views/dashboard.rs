use crate::components::{ActiveAlerts, Badge, Card, PageHeader, ResolvedAlertRow, SensorCard};
use crate::home::{
    self,
    models::{Alert, AlertTrend},
};
use dioxus::prelude::*;

/// The Dashboard page component that will be rendered when the current route is `[Route::Dashboard]`
#[component]
pub fn Dashboard() -> Element {
    let home = home::snapshot();
    let active_alerts: Vec<Alert> = home.active_alerts().into_iter().cloned().collect();
    let resolved_alerts = home.resolved_alerts();
    let summary = &home.summary;
    let trend = summary.trend();
    let trend_text = trend.message();

    use_hook(|| tracing::debug!(active = active_alerts.len(), "dashboard mounted"));

    rsx! {
        div { class: "min-h-screen bg-background",
            PageHeader {
                title: "Thermal Detective",
                subtitle: "Home Energy Monitoring",
                Badge { class: "text-lg px-4 py-2", "{home.household}" }
            }

            main { class: "container mx-auto px-4 py-8 space-y-8",
                // Energy score
                Card { class: "bg-gradient-thermal shadow-card",
                    div { class: "flex items-center justify-between",
                        div {
                            p { class: "text-sm font-medium text-primary-foreground-soft", "Weekly Energy Score" }
                            h2 { class: "text-5xl font-bold text-primary-foreground mt-2", "{summary.score}" }
                            p { class: "text-sm text-primary-foreground-soft mt-2",
                                span { class: "flex items-center gap-1",
                                    if let AlertTrend::Improved(_) = trend {
                                        span { "✅" }
                                    }
                                    "{trend_text}"
                                }
                            }
                        }
                        div { class: "text-primary-foreground-faint text-6xl font-light", "/100" }
                    }
                }

                div { class: "space-y-4",
                    h3 { class: "text-xl font-semibold text-foreground flex items-center gap-2",
                        span { class: "text-alert", "⚠️" }
                        "Active Alerts"
                    }
                    ActiveAlerts { alerts: active_alerts }
                }

                div { class: "space-y-4",
                    h3 { class: "text-xl font-semibold text-foreground", "Sensor Readings" }
                    div { class: "grid md:grid-cols-3 gap-4",
                        for sensor in home.sensors.iter() {
                            SensorCard { key: "{sensor.location}", sensor: sensor.clone() }
                        }
                    }
                }

                div { class: "space-y-4",
                    h3 { class: "text-xl font-semibold text-foreground", "Recent History" }
                    Card {
                        div { class: "space-y-4",
                            for alert in resolved_alerts.iter() {
                                ResolvedAlertRow { key: "{alert.id}", alert: (*alert).clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}
