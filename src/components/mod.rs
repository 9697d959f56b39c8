//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to defined common UI elements like cards, badges and headers.

mod card;
pub use card::{Badge, BadgeVariant, Card};

mod header;
pub use header::PageHeader;

mod sensor;
pub use sensor::SensorCard;

mod alert;
pub use alert::{ActiveAlerts, AlertCard, ResolvedAlertRow};

mod tip;
pub use tip::TipCard;

#[cfg(test)]
mod tests;
