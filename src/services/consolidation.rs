use crate::models::entry::{ConsolidatedDayPoint, LiftEntry, NormalizedPoint};
use crate::services::rep_max::estimate_nrm;

pub fn normalize_entry(entry: &LiftEntry, target_reps: u32) -> NormalizedPoint {
    NormalizedPoint {
        entry: entry.clone(),
        normalized_load: estimate_nrm(entry.max_load, entry.reps, target_reps),
        is_exact: entry.reps == target_reps,
    }
}

/// Merge one lift's entries into a single point per date string.
///
/// Entries must already be in chronological order; days come out in the
/// order they are first seen. The strongest normalized entry represents
/// the day (earliest wins a tie) and a PR on any entry marks the day.
pub fn consolidate_same_day(
    entries: &[LiftEntry],
    target_reps: u32,
) -> Vec<ConsolidatedDayPoint> {
    let mut days: Vec<(String, Vec<NormalizedPoint>)> = Vec::new();

    for entry in entries {
        let point = normalize_entry(entry, target_reps);
        match days.iter_mut().find(|(date, _)| *date == entry.date) {
            Some((_, points)) => points.push(point),
            None => days.push((entry.date.clone(), vec![point])),
        }
    }

    days.into_iter()
        .filter_map(|(date, points)| {
            let best = points
                .iter()
                .reduce(|best, point| {
                    if point.normalized_load > best.normalized_load {
                        point
                    } else {
                        best
                    }
                })?
                .clone();
            let is_pr = points.iter().any(|point| point.entry.is_pr);

            Some(ConsolidatedDayPoint {
                date,
                best,
                is_pr,
                all_entries: points,
            })
        })
        .collect()
}
