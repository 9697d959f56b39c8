use crate::components::{Badge, Card};
use crate::home::models::SensorReading;
use dioxus::prelude::*;

#[component]
pub fn SensorCard(sensor: SensorReading) -> Element {
    let glyph = sensor.icon.glyph();
    let updated = sensor.last_updated();

    rsx! {
        Card { class: "bg-gradient-card shadow-card hover:shadow-lg transition-all duration-300",
            div { class: "flex items-center justify-between mb-4",
                div { class: "p-3 rounded-full bg-primary-soft text-2xl", "{glyph}" }
                if sensor.is_warning() {
                    Badge { class: "border-alert text-alert", "Alert" }
                }
            }
            h4 { class: "font-semibold text-foreground mb-2", "{sensor.location}" }
            p { class: "text-3xl font-bold text-primary", "{sensor.temperature}°C" }
            p { class: "text-xs text-muted-foreground mt-2", "Last updated: {updated}" }
        }
    }
}
