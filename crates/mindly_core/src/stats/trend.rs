//! Coarse sentiment trend derived from ranked stats.

use crate::stats::aggregate::AggregateStat;
use serde::Serialize;

/// Emotion ids counted as positive when ranked first.
pub const POSITIVE_EMOTIONS: &[&str] = &["happy", "excited", "grateful", "amazing", "satisfied"];
/// Emotion ids counted as negative when ranked first.
pub const NEGATIVE_EMOTIONS: &[&str] = &["sad", "angry", "anxious", "worried"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Positive,
    Negative,
    /// Top emotion is in neither set, or the top rank is shared.
    Mixed,
    NoData,
}

/// Which summary a trend label is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendScope {
    Week,
    Overall,
}

impl Trend {
    /// Translation key for the presentation layer.
    pub fn label_key(self, scope: TrendScope) -> &'static str {
        match (scope, self) {
            (TrendScope::Week, Self::Positive) => "positive_week_trend",
            (TrendScope::Week, Self::Negative) => "negative_week_trend",
            (TrendScope::Week, Self::Mixed) => "mixed_week_trend",
            (TrendScope::Week, Self::NoData) => "no_data_for_week",
            (TrendScope::Overall, Self::Positive) => "positive_trend",
            (TrendScope::Overall, Self::Negative) => "negative_trend",
            (TrendScope::Overall, Self::Mixed) => "mixed_trend",
            (TrendScope::Overall, Self::NoData) => "no_data_trend",
        }
    }
}

/// Classifies stats already sorted by `compute_stats`.
pub fn classify_trend(stats: &[AggregateStat]) -> Trend {
    let Some(top) = stats.first() else {
        return Trend::NoData;
    };
    if stats.get(1).is_some_and(|runner_up| runner_up.count == top.count) {
        return Trend::Mixed;
    }

    let id = top.emotion_id.as_str();
    if POSITIVE_EMOTIONS.contains(&id) {
        Trend::Positive
    } else if NEGATIVE_EMOTIONS.contains(&id) {
        Trend::Negative
    } else {
        Trend::Mixed
    }
}
