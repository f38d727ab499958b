//! Mood levels, logged mood entries and the mood history port.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{HappyHeadsError, Result};

/// Self-reported mood on a 1 (difficult) to 5 (excellent) scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum MoodLevel {
    Difficult = 1,
    NotGreat = 2,
    Okay = 3,
    Good = 4,
    Excellent = 5,
}

impl MoodLevel {
    /// Levels in the order the picker shows them.
    pub const PICKER: [MoodLevel; 5] = [
        MoodLevel::Excellent,
        MoodLevel::Good,
        MoodLevel::Okay,
        MoodLevel::NotGreat,
        MoodLevel::Difficult,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            MoodLevel::Difficult => "Difficult",
            MoodLevel::NotGreat => "Not Great",
            MoodLevel::Okay => "Okay",
            MoodLevel::Good => "Good",
            MoodLevel::Excellent => "Excellent",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            MoodLevel::Difficult => "😢",
            MoodLevel::NotGreat => "😕",
            MoodLevel::Okay => "😐",
            MoodLevel::Good => "😊",
            MoodLevel::Excellent => "😄",
        }
    }
}

impl TryFrom<u8> for MoodLevel {
    type Error = HappyHeadsError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(MoodLevel::Difficult),
            2 => Ok(MoodLevel::NotGreat),
            3 => Ok(MoodLevel::Okay),
            4 => Ok(MoodLevel::Good),
            5 => Ok(MoodLevel::Excellent),
            other => Err(HappyHeadsError::validation(
                "mood",
                format!("{other} is outside 1..=5"),
            )),
        }
    }
}

impl From<MoodLevel> for u8 {
    fn from(level: MoodLevel) -> Self {
        level.value()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: String,
    pub level: MoodLevel,
    #[serde(default)]
    pub note: String,
    pub recorded_at: DateTime<Utc>,
}

/// Window the mood chart covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoodPeriod {
    #[default]
    Week,
    Month,
}

impl MoodPeriod {
    pub fn days(self) -> i64 {
        match self {
            MoodPeriod::Week => 7,
            MoodPeriod::Month => 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodTrend {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoodSummary {
    pub period: MoodPeriod,
    pub entries: usize,
    /// Mean level, `None` when there are no entries in the window
    pub average: Option<f64>,
    /// `Up` iff the last level is higher than the first; `None` with fewer
    /// than two entries
    pub trend: Option<MoodTrend>,
}

impl MoodSummary {
    /// Summarizes the entries recorded within `period` before `now`.
    ///
    /// `history` must be in recording order.
    pub fn compute(history: &[MoodEntry], period: MoodPeriod, now: DateTime<Utc>) -> Self {
        let since = now - Duration::days(period.days());
        let window: Vec<&MoodEntry> = history
            .iter()
            .filter(|entry| entry.recorded_at > since && entry.recorded_at <= now)
            .collect();

        let average = if window.is_empty() {
            None
        } else {
            let total: u32 = window.iter().map(|e| u32::from(e.level.value())).sum();
            Some(f64::from(total) / window.len() as f64)
        };

        let trend = match (window.first(), window.last()) {
            (Some(first), Some(last)) if window.len() >= 2 => {
                if last.level > first.level {
                    Some(MoodTrend::Up)
                } else {
                    Some(MoodTrend::Down)
                }
            }
            _ => None,
        };

        Self {
            period,
            entries: window.len(),
            average,
            trend,
        }
    }
}

/// Durable, append-only mood history.
#[async_trait]
pub trait MoodRepository: Send + Sync {
    /// All entries in recording order.
    async fn history(&self) -> Result<Vec<MoodEntry>>;

    async fn append(&self, entry: MoodEntry) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(level: MoodLevel, days_ago: i64, now: DateTime<Utc>) -> MoodEntry {
        MoodEntry {
            id: format!("{days_ago}"),
            level,
            note: String::new(),
            recorded_at: now - Duration::days(days_ago),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_level_from_u8() {
        assert_eq!(MoodLevel::try_from(4).unwrap(), MoodLevel::Good);
        assert!(MoodLevel::try_from(0).is_err());
        assert!(MoodLevel::try_from(6).is_err());
    }

    #[test]
    fn test_level_serializes_as_number() {
        assert_eq!(serde_json::to_string(&MoodLevel::Okay).unwrap(), "3");
        assert!(serde_json::from_str::<MoodLevel>("9").is_err());
    }

    #[test]
    fn test_weekly_summary() {
        let now = now();
        let history = vec![
            entry(MoodLevel::Difficult, 12, now),
            entry(MoodLevel::Okay, 6, now),
            entry(MoodLevel::NotGreat, 4, now),
            entry(MoodLevel::Good, 0, now),
        ];
        let summary = MoodSummary::compute(&history, MoodPeriod::Week, now);
        assert_eq!(summary.entries, 3);
        assert_eq!(summary.average, Some(3.0));
        assert_eq!(summary.trend, Some(MoodTrend::Up));

        let summary = MoodSummary::compute(&history, MoodPeriod::Month, now);
        assert_eq!(summary.entries, 4);
        assert_eq!(summary.average, Some(2.5));
    }

    #[test]
    fn test_flat_trend_is_down() {
        let now = now();
        let history = vec![entry(MoodLevel::Okay, 2, now), entry(MoodLevel::Okay, 1, now)];
        let summary = MoodSummary::compute(&history, MoodPeriod::Week, now);
        assert_eq!(summary.trend, Some(MoodTrend::Down));
    }

    #[test]
    fn test_empty_summary() {
        let summary = MoodSummary::compute(&[], MoodPeriod::Week, now());
        assert_eq!(summary.entries, 0);
        assert_eq!(summary.average, None);
        assert_eq!(summary.trend, None);
    }
}
