use std::sync::LazyLock;

use regex::Regex;

use crate::models::entry::SetObservation;

// Digits and word boundaries are ASCII-only so every capture parses.
static SETS_BY_REPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?-u:\b)([0-9]+)\s*[x×]\s*([0-9]+)(?-u:\b)").unwrap());
static REP_SEQUENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)([0-9]+(?:-[0-9]+)+)").unwrap());
static HEAVY_SINGLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)heavy\s+single").unwrap());
static HEAVY_REPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)heavy\s+([0-9]+)\s*rep").unwrap());
static INDEXED_SET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)#[0-9]+:\s*([0-9]+)\s*reps?").unwrap());
static BARE_REPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?-u:\b)([0-9]{1,2})\s*reps?(?-u:\b)").unwrap());

const MIN_SEQUENCE_REPS: u32 = 1;
const MAX_SEQUENCE_REPS: u32 = 30;
const DEFAULT_REPS: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepMatch {
    Matched(u32),
    NoMatch,
}

impl RepMatch {
    fn positive(reps: Option<u32>) -> Self {
        match reps {
            Some(n) if n >= 1 => RepMatch::Matched(n),
            _ => RepMatch::NoMatch,
        }
    }

    fn or_else(self, next: impl FnOnce() -> RepMatch) -> RepMatch {
        match self {
            RepMatch::Matched(_) => self,
            RepMatch::NoMatch => next(),
        }
    }
}

/// Everything a strategy may look at for one workout row.
pub struct RepContext<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub sets: &'a [SetObservation],
    pub max_load: f64,
}

type Strategy = fn(&RepContext) -> RepMatch;

/// Title first: it is the most authoritative text on a SugarWOD workout.
const STRATEGIES: [Strategy; 7] = [
    |ctx| sets_by_reps(ctx.title),
    |ctx| sequence_in(ctx.title, ctx),
    |ctx| heavy_phrase(ctx.title).or_else(|| heavy_phrase(ctx.description)),
    indexed_sets,
    |ctx| sets_by_reps(ctx.description),
    |ctx| sequence_in(ctx.description, ctx),
    |ctx| bare_reps(ctx.description),
];

/// Infer how many reps were done at `max_load`. Falls back to a single.
pub fn extract_reps(
    title: &str,
    description: &str,
    sets: &[SetObservation],
    max_load: f64,
) -> u32 {
    let ctx = RepContext {
        title,
        description,
        sets,
        max_load,
    };

    STRATEGIES
        .iter()
        .find_map(|strategy| match strategy(&ctx) {
            RepMatch::Matched(reps) => Some(reps),
            RepMatch::NoMatch => None,
        })
        .unwrap_or(DEFAULT_REPS)
}

fn parse_capture(captures: &regex::Captures, group: usize) -> Option<u32> {
    captures.get(group).and_then(|m| m.as_str().parse().ok())
}

/// `5x3` → 3
pub fn sets_by_reps(text: &str) -> RepMatch {
    RepMatch::positive(
        SETS_BY_REPS
            .captures(text)
            .and_then(|captures| parse_capture(&captures, 2)),
    )
}

/// `6-5-4-3-2-1` → [6, 5, 4, 3, 2, 1]. The first hyphenated run whose
/// terms are all one or two digits in 1..=30 wins; runs holding loads or
/// dates (`135-155-175`, `2024-06-01`) are skipped as a whole.
pub fn rep_sequence(text: &str) -> Option<Vec<u32>> {
    REP_SEQUENCE
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .find_map(|run| rep_terms(run.as_str()))
}

fn rep_terms(run: &str) -> Option<Vec<u32>> {
    run.split('-')
        .map(|term| {
            if term.len() > 2 {
                return None;
            }
            term.parse::<u32>()
                .ok()
                .filter(|n| (MIN_SEQUENCE_REPS..=MAX_SEQUENCE_REPS).contains(n))
        })
        .collect()
}

/// Pick the term of a rep scheme that belongs to the set holding `max_load`.
pub fn resolve_sequence(sequence: &[u32], sets: &[SetObservation], max_load: f64) -> Option<u32> {
    let all_equal = sets
        .first()
        .is_some_and(|first| sets.iter().all(|set| set.load == first.load));
    if all_equal {
        return sequence.iter().copied().min();
    }

    sets.iter()
        .position(|set| set.load == max_load)
        .and_then(|idx| sequence.get(idx))
        .or_else(|| sequence.last())
        .copied()
}

fn sequence_in(text: &str, ctx: &RepContext) -> RepMatch {
    RepMatch::positive(
        rep_sequence(text)
            .and_then(|sequence| resolve_sequence(&sequence, ctx.sets, ctx.max_load)),
    )
}

/// `heavy single` → 1, `heavy 3 reps` → 3
pub fn heavy_phrase(text: &str) -> RepMatch {
    if HEAVY_SINGLE.is_match(text) {
        return RepMatch::Matched(1);
    }
    RepMatch::positive(
        HEAVY_REPS
            .captures(text)
            .and_then(|captures| parse_capture(&captures, 1)),
    )
}

/// `#1: 8 reps #2: 6 reps`: the position of the first max-load set picks
/// the token; when that fails the first token is used.
fn indexed_sets(ctx: &RepContext) -> RepMatch {
    let rep_counts: Vec<Option<u32>> = INDEXED_SET
        .captures_iter(ctx.description)
        .map(|captures| parse_capture(&captures, 1))
        .collect();

    let Some(first) = rep_counts.first() else {
        return RepMatch::NoMatch;
    };

    let at_max_load = ctx
        .sets
        .iter()
        .position(|set| set.load == ctx.max_load)
        .and_then(|idx| rep_counts.get(idx));

    RepMatch::positive(at_max_load.unwrap_or(first).to_owned())
}

fn bare_reps(text: &str) -> RepMatch {
    RepMatch::positive(
        BARE_REPS
            .captures(text)
            .and_then(|captures| parse_capture(&captures, 1)),
    )
}
