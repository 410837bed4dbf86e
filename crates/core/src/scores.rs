//! Bounded score ledger for finished rounds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::round::Difficulty;

/// Most recent entries kept in the ledger.
pub const MAX_HISTORY: usize = 10;

/// One finished round, as persisted in the score history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub date: DateTime<Utc>,
    pub difficulty: Difficulty,
    pub attempts_used: u32,
    pub max_attempts: u32,
    pub success: bool,
    pub number: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_used: Option<u64>,
}

/// Prepend `entry` to the history, keeping only the [`MAX_HISTORY`] most
/// recent records. Newest first.
pub fn record_score(history: Vec<ScoreRecord>, entry: ScoreRecord) -> Vec<ScoreRecord> {
    let mut updated = Vec::with_capacity(history.len() + 1);
    updated.push(entry);
    updated.extend(history);
    updated.truncate(MAX_HISTORY);
    updated
}

/// Pick the best win out of the history: fewest attempts, ties broken by the
/// lower recorded time. A record without a time never displaces the incumbent
/// on an attempts tie, and two timeless records tie in favor of the earlier
/// one in the list.
pub fn best_score(history: &[ScoreRecord]) -> Option<&ScoreRecord> {
    let mut best: Option<&ScoreRecord> = None;

    for record in history.iter().filter(|record| record.success) {
        best = match best {
            None => Some(record),
            Some(current) => {
                let fewer_attempts = record.attempts_used < current.attempts_used;
                let faster_on_tie = record.attempts_used == current.attempts_used
                    && matches!(
                        (record.time_used, current.time_used),
                        (Some(challenger), Some(incumbent)) if challenger < incumbent
                    );

                if fewer_attempts || faster_on_tie {
                    Some(record)
                } else {
                    Some(current)
                }
            }
        };
    }

    best
}

/// Format whole seconds as an `m:ss` clock.
pub fn format_clock(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Format a ledger date for display.
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M").to_string()
}

/// Share of the attempt budget already spent, as a 0-100 percentage.
pub fn attempts_percent(remaining: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    f64::from(max - remaining) / f64::from(max) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(day: u32, attempts_used: u32, success: bool, time_used: Option<u64>) -> ScoreRecord {
        ScoreRecord {
            date: Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap(),
            difficulty: Difficulty::Medium,
            attempts_used,
            max_attempts: 7,
            success,
            number: 42,
            time_used,
        }
    }

    #[test]
    fn test_record_score_prepends_newest() {
        let history = record_score(Vec::new(), record(1, 3, true, None));
        let history = record_score(history, record(2, 5, false, None));

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].date, record(2, 5, false, None).date);
        assert_eq!(history[1].date, record(1, 3, true, None).date);
    }

    #[test]
    fn test_record_score_caps_history_at_ten() {
        let mut history = Vec::new();
        for day in 1..=11 {
            history = record_score(history, record(day, 3, true, None));
        }

        assert_eq!(history.len(), MAX_HISTORY);
        // Newest first; the day-1 record fell off the end.
        assert_eq!(history[0].date, record(11, 3, true, None).date);
        assert_eq!(history[9].date, record(2, 3, true, None).date);
    }

    #[test]
    fn test_best_score_prefers_fewest_attempts() {
        let history = vec![
            record(3, 3, true, None),
            record(2, 2, true, None),
            record(1, 5, false, None),
        ];

        let best = best_score(&history).unwrap();
        assert_eq!(best.attempts_used, 2);
    }

    #[test]
    fn test_best_score_breaks_ties_by_time() {
        let history = vec![
            record(3, 3, true, Some(40)),
            record(2, 3, true, Some(20)),
            record(1, 3, true, Some(30)),
        ];

        let best = best_score(&history).unwrap();
        assert_eq!(best.time_used, Some(20));
    }

    #[test]
    fn test_best_score_timeless_incumbent_keeps_the_tie() {
        // A timed record cannot displace a timeless one on equal attempts, and
        // a timeless record never displaces a timed one.
        let history = vec![record(2, 3, true, None), record(1, 3, true, Some(5))];
        assert_eq!(best_score(&history).unwrap().time_used, None);

        let history = vec![record(2, 3, true, Some(40)), record(1, 3, true, None)];
        assert_eq!(best_score(&history).unwrap().time_used, Some(40));
    }

    #[test]
    fn test_best_score_ignores_losses() {
        let history = vec![record(2, 1, false, None), record(1, 6, true, None)];
        assert_eq!(best_score(&history).unwrap().attempts_used, 6);

        let losses = vec![record(1, 7, false, None)];
        assert!(best_score(&losses).is_none());
        assert!(best_score(&[]).is_none());
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(9), "0:09");
        assert_eq!(format_clock(65), "1:05");
        assert_eq!(format_clock(600), "10:00");
    }

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 9, 5, 0).unwrap();
        assert_eq!(format_date(date), "2024-05-01 09:05");
    }

    #[test]
    fn test_attempts_percent() {
        assert_eq!(attempts_percent(7, 7), 0.0);
        assert_eq!(attempts_percent(3, 10), 70.0);
        assert_eq!(attempts_percent(0, 10), 100.0);
        assert_eq!(attempts_percent(0, 0), 0.0);
    }

    #[test]
    fn test_score_record_serialization_omits_missing_time() {
        let json = serde_json::to_string(&record(1, 3, true, None)).unwrap();
        assert!(!json.contains("time_used"));

        let json = serde_json::to_string(&record(1, 3, true, Some(25))).unwrap();
        assert!(json.contains("\"time_used\":25"));

        let parsed: ScoreRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.time_used, Some(25));
    }
}
