use chrono::Duration;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Thermometer,
    Wind,
    Snowflake,
    Lightbulb,
    Dollar,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Thermometer => "🌡️",
            Self::Wind => "💨",
            Self::Snowflake => "❄️",
            Self::Lightbulb => "💡",
            Self::Dollar => "💲",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorStatus {
    Normal,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SensorReading {
    pub location: String,
    /// Degrees Celsius.
    pub temperature: i32,
    pub icon: Icon,
    pub status: SensorStatus,
    #[serde(default)]
    pub updated_secs_ago: i64,
}

impl SensorReading {
    pub fn is_warning(&self) -> bool {
        self.status == SensorStatus::Warning
    }

    pub fn last_updated(&self) -> String {
        format_ago(offset(self.updated_secs_ago))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Alert {
    pub id: u32,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub active: bool,
    #[serde(default)]
    pub resolved_secs_ago: Option<i64>,
}

impl Alert {
    pub fn glyph(&self) -> &'static str {
        match self.kind.as_str() {
            "phantom-draft" => Icon::Wind.glyph(),
            "fridge-leak" => Icon::Snowflake.glyph(),
            _ => "⚠️",
        }
    }

    /// Wording for the history list, e.g. "Resolved 2 hours ago".
    pub fn resolved_label(&self) -> String {
        match self.resolved_secs_ago {
            Some(secs) => format!("Resolved {}", format_ago(offset(secs))),
            None => "Resolved".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    Draft,
    Fridge,
    General,
}

impl TipCategory {
    pub const ALL: [TipCategory; 3] = [Self::Draft, Self::Fridge, Self::General];

    pub fn heading(self) -> &'static str {
        match self {
            Self::Draft => "Phantom Draft Solutions",
            Self::Fridge => "Refrigerator Maintenance",
            Self::General => "General Energy Tips",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Self::Draft => "Address temperature differentials and drafts to keep your home comfortable",
            Self::Fridge => "Keep your fridge running efficiently and prevent energy waste",
            Self::General => "Additional strategies to optimize your energy usage",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tip {
    pub title: String,
    pub description: String,
    pub steps: Vec<String>,
    pub category: TipCategory,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnergySummary {
    pub score: u8,
    pub alerts_this_week: u32,
    pub alerts_last_week: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertTrend {
    /// Fewer alerts than last week, by this many.
    Improved(u32),
    /// Same or more alerts than last week; carries this week's count.
    Steady(u32),
}

impl EnergySummary {
    pub fn trend(&self) -> AlertTrend {
        if self.alerts_this_week < self.alerts_last_week {
            AlertTrend::Improved(self.alerts_last_week - self.alerts_this_week)
        } else {
            AlertTrend::Steady(self.alerts_this_week)
        }
    }
}

impl AlertTrend {
    pub fn message(self) -> String {
        match self {
            Self::Improved(n) => format!("{n} fewer alerts than last week"),
            Self::Steady(n) => format!("{n} alerts this week"),
        }
    }
}

/// Largest offset `TimeDelta` can hold as whole seconds.
pub const MAX_OFFSET_SECS: i64 = i64::MAX / 1000;

fn offset(secs: i64) -> Duration {
    Duration::try_seconds(secs).unwrap_or(Duration::MAX)
}

/// Coarse "time ago" wording used on sensor cards and the history list.
pub fn format_ago(elapsed: Duration) -> String {
    let plural = |n: i64, unit: &str| {
        if n == 1 {
            format!("1 {unit} ago")
        } else {
            format!("{n} {unit}s ago")
        }
    };

    if elapsed < Duration::minutes(1) {
        "just now".to_string()
    } else if elapsed < Duration::hours(1) {
        plural(elapsed.num_minutes(), "minute")
    } else if elapsed < Duration::days(1) {
        plural(elapsed.num_hours(), "hour")
    } else {
        plural(elapsed.num_days(), "day")
    }
}
