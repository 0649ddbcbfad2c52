//! Per-emotion counts and percentages over a time window.
//!
//! # Invariants
//! - Sum of `count` equals the number of entries inside the window.
//! - `percentage` is `round(100 * count / total)`, half away from zero, per
//!   stat; the set is not normalized to sum to 100.
//! - Order: count descending, then catalog position, then ids missing from
//!   the catalog in first-encounter order.
//! - Unknown emotion ids are counted and rendered with fallback display.

use crate::model::emotion::EmotionCatalog;
use crate::model::entry::JournalEntry;
use crate::stats::window::TimeWindow;
use serde::Serialize;
use std::cmp::Reverse;

/// Count and share of one emotion inside a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateStat {
    pub emotion_id: String,
    pub count: u32,
    /// Integer percentage in `0..=100`.
    pub percentage: u8,
    pub label_key: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
    /// `false` when `emotion_id` is missing from the catalog.
    pub known: bool,
}

/// Aggregates `entries` falling inside `window`.
///
/// Returns an empty vector when no entry is inside the window.
pub fn compute_stats(
    entries: &[JournalEntry],
    window: &TimeWindow,
    catalog: &EmotionCatalog,
) -> Vec<AggregateStat> {
    // (emotion id, count) in first-encounter order.
    let mut groups: Vec<(&str, u32)> = Vec::new();
    let mut total: u32 = 0;

    for entry in entries.iter().filter(|entry| window.contains(&entry.timestamp)) {
        total += 1;
        match groups
            .iter_mut()
            .find(|(id, _)| *id == entry.emotion_id.as_str())
        {
            Some((_, count)) => *count += 1,
            None => groups.push((entry.emotion_id.as_str(), 1)),
        }
    }

    if total == 0 {
        return Vec::new();
    }

    let unknown_base = catalog.len();
    let mut ranked = groups
        .into_iter()
        .enumerate()
        .map(|(encounter, (id, count))| {
            let rank = catalog.position(id).unwrap_or(unknown_base + encounter);
            (rank, id, count)
        })
        .collect::<Vec<_>>();
    ranked.sort_by_key(|&(rank, _, count)| (Reverse(count), rank));

    ranked
        .into_iter()
        .map(|(_, id, count)| {
            let display = catalog.display(id);
            AggregateStat {
                emotion_id: id.to_string(),
                count,
                percentage: rounded_percentage(count, total),
                label_key: display.label_key,
                emoji: display.emoji,
                color: display.color,
                known: display.known,
            }
        })
        .collect()
}

/// `round(100 * count / total)` with halves rounded away from zero.
///
/// Returns 0 when `total` is 0.
pub fn rounded_percentage(count: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let count = u64::from(count.min(total));
    let total = u64::from(total);
    let value = (200 * count + total) / (2 * total);
    // count <= total keeps value within 0..=100.
    value as u8
}

#[cfg(test)]
mod tests {
    use super::{compute_stats, rounded_percentage};
    use crate::model::emotion::EmotionCatalog;
    use crate::model::entry::JournalEntry;
    use crate::stats::window::TimeWindow;
    use chrono::{TimeZone, Utc};

    fn entry(day: u32, hour: u32, emotion: &str) -> JournalEntry {
        JournalEntry::new(
            Utc.with_ymd_and_hms(2024, 4, day, hour, 0, 0).unwrap(),
            emotion,
            None,
        )
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(rounded_percentage(1, 8), 13); // 12.5
        assert_eq!(rounded_percentage(1, 3), 33);
        assert_eq!(rounded_percentage(2, 3), 67);
        assert_eq!(rounded_percentage(1, 200), 1); // 0.5
        assert_eq!(rounded_percentage(0, 5), 0);
        assert_eq!(rounded_percentage(5, 5), 100);
        assert_eq!(rounded_percentage(3, 0), 0);
    }

    #[test]
    fn ties_follow_catalog_order_then_unknown_encounter_order() {
        let entries = vec![
            entry(1, 9, "zen"),
            entry(1, 18, "tired"),
            entry(2, 9, "bored"),
            entry(2, 18, "happy"),
        ];
        let stats = compute_stats(&entries, &TimeWindow::all_time(), &EmotionCatalog::builtin());
        let ids: Vec<_> = stats.iter().map(|s| s.emotion_id.as_str()).collect();
        assert_eq!(ids, ["happy", "tired", "zen", "bored"]);
        assert!(stats.iter().all(|s| s.percentage == 25));
        assert!(!stats[2].known);
        assert_eq!(stats[2].emoji, "❓");
    }

    #[test]
    fn higher_counts_rank_first() {
        let entries = vec![entry(1, 9, "happy"), entry(2, 9, "sad"), entry(3, 9, "sad")];
        let stats = compute_stats(&entries, &TimeWindow::all_time(), &EmotionCatalog::builtin());
        assert_eq!(stats[0].emotion_id, "sad");
        assert_eq!(stats[0].count, 2);
        assert_eq!(stats[0].percentage, 67);
        assert_eq!(stats[1].percentage, 33);
    }

    #[test]
    fn entries_outside_window_are_ignored() {
        let entries = vec![entry(1, 9, "happy"), entry(20, 9, "sad")];
        let window = TimeWindow::day(
            chrono::NaiveDate::from_ymd_opt(2024, 4, 20).unwrap(),
            &Utc,
        );
        let stats = compute_stats(&entries, &window, &EmotionCatalog::builtin());
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].emotion_id, "sad");
        assert_eq!(stats[0].percentage, 100);
    }
}
