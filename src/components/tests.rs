use super::{ActiveAlerts, Card, SensorCard, TipCard};
use crate::home::{snapshot, models::TipCategory};
use crate::views::Dashboard;
use dioxus::prelude::*;

const ALERT_BADGE: &str = ">Alert</span>";

#[test]
fn alert_badge_only_on_warning_sensors() {
    for sensor in &snapshot().sensors {
        let html = dioxus_ssr::render_element(rsx! {
            SensorCard { sensor: sensor.clone() }
        });
        assert!(html.contains(&sensor.location));
        assert_eq!(html.contains(ALERT_BADGE), sensor.is_warning(), "{}", sensor.location);
    }
}

#[test]
fn all_clear_card_when_no_alerts_active() {
    let html = dioxus_ssr::render_element(rsx! {
        ActiveAlerts { alerts: Vec::new() }
    });
    assert!(html.contains("All systems normal - no active alerts"));
}

#[test]
fn active_alerts_hide_all_clear_card() {
    let alerts = snapshot().active_alerts().into_iter().cloned().collect::<Vec<_>>();
    let html = dioxus_ssr::render_element(rsx! {
        ActiveAlerts { alerts }
    });
    assert!(html.contains("Phantom Draft Detected"));
    assert!(!html.contains("All systems normal"));
}

#[test]
fn tip_steps_are_numbered_from_one() {
    let tip = snapshot().tips_in(TipCategory::Draft)[0].clone();
    let html = dioxus_ssr::render_element(rsx! {
        TipCard { tip }
    });
    assert!(html.contains(">1.</span>"));
    assert!(html.contains(">5.</span>"));
    assert!(!html.contains(">6.</span>"));
}

#[test]
fn dashboard_renders_bundled_snapshot() {
    let html = dioxus_ssr::render_element(rsx! { Dashboard {} });
    assert!(html.contains("Apartment 12B"));
    assert!(html.contains("5 fewer alerts than last week"));
    assert!(html.contains("Phantom Draft Detected"));
    assert!(html.contains("Resolved 2 hours ago"));
    assert_eq!(html.matches(ALERT_BADGE).count(), 1);
}

#[test]
fn card_padding_replaces_default() {
    let html = dioxus_ssr::render_element(rsx! {
        Card { padding: "p-8", "body" }
    });
    assert!(html.contains("p-8"));
    assert!(!html.contains("p-6"));

    let html = dioxus_ssr::render_element(rsx! {
        Card { "body" }
    });
    assert!(html.contains("p-6"));
}

#[test]
fn stylesheet_covers_bottom_bar_layout() {
    let css = include_str!("../../assets/tailwind.css");
    for rule in [".fixed {", ".bottom-0 {", ".md\\:hidden {", ".md\\:grid-cols-3 {", ".space-y-4 >"] {
        assert!(css.contains(rule), "missing {rule}");
    }
}
