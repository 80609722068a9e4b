//! Epley rep-max estimation, used for every comparison across rep counts.

const EPLEY_DIVISOR: f64 = 30.0;

/// Estimate the load liftable for `target_reps` given `actual_reps` were
/// done at `load`. Exact matches and zero rep counts return `load`
/// untouched; everything else is rounded to a whole unit.
pub fn estimate_nrm(load: f64, actual_reps: u32, target_reps: u32) -> f64 {
    if actual_reps == target_reps {
        return load;
    }
    if actual_reps == 0 || target_reps == 0 {
        return load;
    }

    let e1rm = load * epley_factor(actual_reps);
    if target_reps == 1 {
        return e1rm.round();
    }
    (e1rm / epley_factor(target_reps)).round()
}

pub fn estimate_1rm(load: f64, reps: u32) -> f64 {
    estimate_nrm(load, reps, 1)
}

fn epley_factor(reps: u32) -> f64 {
    1.0 + f64::from(reps) / EPLEY_DIVISOR
}
