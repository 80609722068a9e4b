use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::entry::{ConsolidatedDayPoint, LiftEntry};
use crate::services::consolidation::consolidate_same_day;
use crate::services::rep_max::estimate_1rm;

const PRIORITY_LIFTS: [&str; 5] = [
    "Deadlift",
    "Bench Press",
    "Back Squat",
    "Push Press",
    "Shoulder Press",
];

const EXPORT_DATE_FORMAT: &str = "%m/%d/%Y";

#[derive(Debug, Clone, Serialize)]
pub struct LiftSummary {
    pub lift: String,
    pub rep_options: Vec<u32>,
    pub best_e1rm: f64,
    pub pr_days: usize,
    pub series: Vec<ConsolidatedDayPoint>,
}

/// Entries grouped per lift, each lift in chronological order.
#[derive(Debug, Clone, Default)]
pub struct LiftHistory {
    lifts: HashMap<String, Vec<LiftEntry>>,
}

impl LiftHistory {
    pub fn from_entries(entries: &[LiftEntry]) -> Self {
        let mut lifts: HashMap<String, Vec<LiftEntry>> = HashMap::new();
        for entry in entries {
            lifts
                .entry(entry.lift.clone())
                .or_default()
                .push(entry.clone());
        }

        for history in lifts.values_mut() {
            history.sort_by_key(|entry| parse_export_date(&entry.date));
        }

        Self { lifts }
    }

    /// Priority lifts first, the rest alphabetically.
    pub fn lift_names(&self) -> Vec<&str> {
        let mut others: Vec<&str> = self
            .lifts
            .keys()
            .map(String::as_str)
            .filter(|lift| !PRIORITY_LIFTS.contains(lift))
            .collect();
        others.sort_unstable();

        PRIORITY_LIFTS
            .iter()
            .copied()
            .filter(|lift| self.lifts.contains_key(*lift))
            .chain(others)
            .collect()
    }

    pub fn entries(&self, lift: &str) -> Option<&[LiftEntry]> {
        self.lifts.get(lift).map(Vec::as_slice)
    }

    pub fn rep_options(&self, lift: &str) -> Vec<u32> {
        self.entries(lift)
            .unwrap_or_default()
            .iter()
            .map(|entry| entry.reps)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn series(&self, lift: &str, target_reps: u32) -> Option<Vec<ConsolidatedDayPoint>> {
        self.entries(lift)
            .map(|entries| consolidate_same_day(entries, target_reps))
    }

    pub fn summary(&self, lift: &str, target_reps: u32) -> Option<LiftSummary> {
        let entries = self.entries(lift)?;
        let series = self.series(lift, target_reps)?;

        let best_e1rm = entries
            .iter()
            .map(|entry| estimate_1rm(entry.max_load, entry.reps))
            .fold(0.0, f64::max);
        let pr_days = series.iter().filter(|day| day.is_pr).count();

        Some(LiftSummary {
            lift: lift.to_string(),
            rep_options: self.rep_options(lift),
            best_e1rm,
            pr_days,
            series,
        })
    }

    pub fn summaries(&self, target_reps: u32) -> Vec<LiftSummary> {
        self.lift_names()
            .into_iter()
            .filter_map(|lift| self.summary(lift, target_reps))
            .collect()
    }
}

/// SugarWOD dates are `M/D/YYYY`. Unparsable dates sort first.
pub fn parse_export_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), EXPORT_DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(lift: &str, date: &str, max_load: f64, reps: u32) -> LiftEntry {
        LiftEntry {
            date: date.to_string(),
            lift: lift.to_string(),
            title: lift.to_string(),
            reps,
            max_load,
            set_loads: Vec::new(),
            notes: String::new(),
            is_pr: false,
        }
    }

    #[test]
    fn test_lift_names_put_priority_lifts_first() {
        let history = LiftHistory::from_entries(&[
            entry("Snatch", "1/1/2024", 135.0, 1),
            entry("Back Squat", "1/1/2024", 225.0, 5),
            entry("Clean", "1/1/2024", 185.0, 1),
            entry("Deadlift", "1/1/2024", 315.0, 3),
        ]);

        assert_eq!(
            history.lift_names(),
            vec!["Deadlift", "Back Squat", "Clean", "Snatch"]
        );
    }

    #[test]
    fn test_entries_sorted_by_calendar_date() {
        let history = LiftHistory::from_entries(&[
            entry("Deadlift", "12/1/2023", 300.0, 1),
            entry("Deadlift", "2/15/2024", 320.0, 1),
            entry("Deadlift", "10/3/2023", 290.0, 1),
            entry("Deadlift", "2/15/2024", 250.0, 5),
        ]);

        let dates: Vec<&str> = history
            .entries("Deadlift")
            .unwrap()
            .iter()
            .map(|entry| entry.date.as_str())
            .collect();

        assert_eq!(dates, vec!["10/3/2023", "12/1/2023", "2/15/2024", "2/15/2024"]);
    }

    #[test]
    fn test_rep_options_are_distinct_and_sorted() {
        let history = LiftHistory::from_entries(&[
            entry("Bench Press", "1/1/2024", 185.0, 5),
            entry("Bench Press", "1/8/2024", 205.0, 1),
            entry("Bench Press", "1/15/2024", 190.0, 5),
            entry("Bench Press", "1/22/2024", 195.0, 3),
        ]);

        assert_eq!(history.rep_options("Bench Press"), vec![1, 3, 5]);
        assert!(history.rep_options("Snatch").is_empty());
    }

    #[test]
    fn test_series_consolidates_chronologically() {
        let history = LiftHistory::from_entries(&[
            entry("Deadlift", "6/8/2024", 330.0, 1),
            entry("Deadlift", "6/1/2024", 300.0, 1),
            entry("Deadlift", "6/1/2024", 280.0, 5),
        ]);

        let series = history.series("Deadlift", 1).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, "6/1/2024");
        assert_eq!(series[0].best.normalized_load, 327.0);
        assert_eq!(series[1].best.normalized_load, 330.0);
        assert!(history.series("Snatch", 1).is_none());
    }

    #[test]
    fn test_summary() {
        let mut pr = entry("Deadlift", "6/8/2024", 330.0, 1);
        pr.is_pr = true;
        let history = LiftHistory::from_entries(&[
            entry("Deadlift", "6/1/2024", 280.0, 5),
            pr,
        ]);

        let summaries = history.summaries(3);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].best_e1rm, 330.0);
        assert_eq!(summaries[0].pr_days, 1);
        assert_eq!(summaries[0].rep_options, vec![1, 5]);
    }

    #[test]
    fn test_parse_export_date() {
        assert_eq!(
            parse_export_date("6/1/2024"),
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
        assert_eq!(parse_export_date("2024-06-01"), None);
    }
}
