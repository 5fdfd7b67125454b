// wOBA metric engine.
//
// Two passes over the pitch rows:
//   1. tally: (batter, player_name) -> outcome label -> count, for every pitch
//      that completed a plate appearance and carries a resolvable name;
//   2. reduce: per group, PA = sum of all counts and
//      wOBA = weighted on-base outcomes / PA.
//
// The result is recomputed from scratch on every call and sorted by wOBA,
// highest first.

use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::events::{BatterId, PitchEvent};
use crate::name::extract_player_name;

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

/// Linear weights for the wOBA numerator. Outcome labels outside these six
/// count toward plate appearances only.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WobaWeights {
    pub walk: f64,
    pub hit_by_pitch: f64,
    pub single: f64,
    pub double: f64,
    pub triple: f64,
    pub home_run: f64,
}

impl Default for WobaWeights {
    fn default() -> Self {
        WobaWeights {
            walk: 0.69,
            hit_by_pitch: 0.72,
            single: 0.89,
            double: 1.27,
            triple: 1.62,
            home_run: 2.10,
        }
    }
}

impl WobaWeights {
    /// Weight applied to an outcome label, or `None` for labels that only
    /// count as plate appearances.
    pub fn weight_for(&self, label: &str) -> Option<f64> {
        match label {
            "walk" => Some(self.walk),
            "hit_by_pitch" => Some(self.hit_by_pitch),
            "single" => Some(self.single),
            "double" => Some(self.double),
            "triple" => Some(self.triple),
            "home_run" => Some(self.home_run),
            _ => None,
        }
    }

    /// `(label, weight)` pairs in numerator order.
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("walk", self.walk),
            ("hit_by_pitch", self.hit_by_pitch),
            ("single", self.single),
            ("double", self.double),
            ("triple", self.triple),
            ("home_run", self.home_run),
        ]
    }

    /// Weighted sum of on-base outcomes. Missing labels contribute zero.
    pub fn numerator(&self, counts: &BTreeMap<String, u32>) -> f64 {
        self.entries()
            .iter()
            .map(|(label, weight)| {
                let count = counts.get(*label).copied().unwrap_or(0);
                weight * f64::from(count)
            })
            .sum()
    }
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// Plate-appearance tallies and wOBA for one (batter, name) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerAggregate {
    pub player_name: String,
    pub batter: BatterId,
    /// Count of every outcome label recorded for this player.
    pub outcomes: BTreeMap<String, u32>,
    /// Total plate appearances: the sum of `outcomes`.
    pub pa: u32,
    pub woba: f64,
}

impl PlayerAggregate {
    /// Number of plate appearances that ended with `label`.
    pub fn count(&self, label: &str) -> u32 {
        self.outcomes.get(label).copied().unwrap_or(0)
    }
}

/// Engine output: per-player rows sorted by wOBA descending.
///
/// The column shape is fixed, so an empty table still reports its columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WobaTable {
    rows: Vec<PlayerAggregate>,
}

impl WobaTable {
    pub const COLUMNS: [&'static str; 4] = ["player_name", "batter", "pa", "woba"];

    pub fn columns(&self) -> &'static [&'static str] {
        &Self::COLUMNS
    }

    pub fn rows(&self) -> &[PlayerAggregate] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Largest plate-appearance total in the table.
    pub fn max_pa(&self) -> Option<u32> {
        self.rows.iter().map(|r| r.pa).max()
    }

    /// Rows with at least `min_pa` plate appearances, in table order.
    pub fn with_min_pa(&self, min_pa: u32) -> Vec<&PlayerAggregate> {
        self.rows.iter().filter(|r| r.pa >= min_pa).collect()
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

type Tallies = BTreeMap<(BatterId, String), BTreeMap<String, u32>>;

/// Compute per-player wOBA from pitch-level rows.
///
/// Pitches without an outcome and pitches whose description yields no player
/// name are ignored. Ties in wOBA keep ascending (batter, name) order.
pub fn compute_woba(events: &[PitchEvent], weights: &WobaWeights) -> WobaTable {
    let tallies = tally_outcomes(events);

    let mut rows: Vec<PlayerAggregate> = tallies
        .into_iter()
        .map(|((batter, player_name), outcomes)| {
            let pa: u32 = outcomes.values().sum();
            let woba = weights.numerator(&outcomes) / f64::from(pa);
            PlayerAggregate {
                player_name,
                batter,
                outcomes,
                pa,
                woba,
            }
        })
        .collect();

    // `sort_by` is stable.
    rows.sort_by(|a, b| b.woba.total_cmp(&a.woba));

    debug!("computed wOBA for {} players", rows.len());
    WobaTable { rows }
}

fn tally_outcomes(events: &[PitchEvent]) -> Tallies {
    let mut tallies = Tallies::new();
    let mut unnamed = 0usize;

    for event in events {
        let Some(outcome) = event.outcome() else {
            continue;
        };
        let Some(name) = extract_player_name(event.des.as_deref()) else {
            unnamed += 1;
            continue;
        };
        *tallies
            .entry((event.batter, name.to_string()))
            .or_default()
            .entry(outcome.to_string())
            .or_insert(0) += 1;
    }

    if unnamed > 0 {
        debug!("dropped {} plate appearances with no resolvable batter name", unnamed);
    }
    tallies
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn pitch(events: Option<&str>, des: Option<&str>, batter: BatterId) -> PitchEvent {
        PitchEvent::new(events, des, batter)
    }

    fn compute(events: &[PitchEvent]) -> WobaTable {
        compute_woba(events, &WobaWeights::default())
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn single_walk() {
        let table = compute(&[pitch(Some("walk"), Some("John Smith walks"), 101)]);
        assert_eq!(table.len(), 1);
        let row = &table.rows()[0];
        assert_eq!(row.player_name, "John Smith");
        assert_eq!(row.batter, 101);
        assert_eq!(row.pa, 1);
        assert!(approx(row.woba, 0.69));
    }

    #[test]
    fn strikeout_counts_toward_pa_only() {
        let table = compute(&[
            pitch(Some("single"), Some("John Smith singles on a ground ball."), 101),
            pitch(Some("strikeout"), Some("John Smith strikes out swinging."), 101),
        ]);
        assert_eq!(table.len(), 1);
        let row = &table.rows()[0];
        assert_eq!(row.pa, 2);
        assert_eq!(row.count("single"), 1);
        assert_eq!(row.count("strikeout"), 1);
        assert!(approx(row.woba, 0.445));
    }

    #[test]
    fn unnamed_rows_are_excluded() {
        let table = compute(&[
            pitch(Some("home_run"), None, 101),
            pitch(Some("home_run"), Some("no name here"), 101),
            pitch(Some("walk"), Some("John Smith walks"), 101),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].pa, 1);
        assert_eq!(table.rows()[0].count("home_run"), 0);
    }

    #[test]
    fn pitches_without_outcome_are_excluded() {
        let table = compute(&[
            pitch(Some(""), Some("John Smith walks"), 101),
            pitch(None, Some("John Smith walks"), 101),
            pitch(Some("double"), Some("John Smith doubles"), 101),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].pa, 1);
        assert!(approx(table.rows()[0].woba, 1.27));
    }

    #[test]
    fn whitespace_only_outcome_counts_as_plate_appearance() {
        let table = compute(&[
            pitch(Some(" "), Some("John Smith grounds out"), 101),
            pitch(Some(""), Some("John Smith fouls"), 101),
        ]);
        assert_eq!(table.len(), 1);
        let row = &table.rows()[0];
        assert_eq!(row.pa, 1);
        assert_eq!(row.count(" "), 1);
        assert!(approx(row.woba, 0.0));
    }

    #[test]
    fn no_plate_appearances_gives_empty_table_with_columns() {
        let table = compute(&[
            pitch(None, Some("John Smith walks"), 101),
            pitch(Some(""), None, 202),
        ]);
        assert!(table.is_empty());
        assert_eq!(table.columns(), &["player_name", "batter", "pa", "woba"]);
        assert_eq!(table.max_pa(), None);

        let table = compute(&[]);
        assert!(table.is_empty());
        assert_eq!(table.columns().len(), 4);
    }

    #[test]
    fn all_unnamed_gives_empty_table() {
        let table = compute(&[pitch(Some("walk"), Some("walks"), 101)]);
        assert!(table.is_empty());
    }

    #[test]
    fn pa_is_sum_of_all_outcomes() {
        let labels = [
            "walk",
            "strikeout",
            "field_out",
            "sac_fly",
            "grounded_into_double_play",
            "home_run",
            "hit_by_pitch",
        ];
        let events: Vec<PitchEvent> = labels
            .iter()
            .map(|l| pitch(Some(*l), Some("Aaron Judge does something"), 592450))
            .collect();
        let table = compute(&events);
        let row = &table.rows()[0];
        assert_eq!(row.pa, labels.len() as u32);
        assert_eq!(row.pa, row.outcomes.values().sum::<u32>());
        let expected = (0.69 + 2.10 + 0.72) / 7.0;
        assert!(approx(row.woba, expected));
    }

    #[test]
    fn every_numerator_category_weighted() {
        let events = vec![
            pitch(Some("walk"), Some("Ann Lee walks"), 1),
            pitch(Some("hit_by_pitch"), Some("Ann Lee hit by pitch"), 1),
            pitch(Some("single"), Some("Ann Lee singles"), 1),
            pitch(Some("double"), Some("Ann Lee doubles"), 1),
            pitch(Some("triple"), Some("Ann Lee triples"), 1),
            pitch(Some("home_run"), Some("Ann Lee homers"), 1),
        ];
        let table = compute(&events);
        let row = &table.rows()[0];
        let expected = (0.69 + 0.72 + 0.89 + 1.27 + 1.62 + 2.10) / 6.0;
        assert_eq!(row.pa, 6);
        assert!(approx(row.woba, expected));
    }

    #[test]
    fn groups_by_batter_and_name() {
        // Same name, different ids: two players.
        // Same id, different names: also two rows.
        let table = compute(&[
            pitch(Some("walk"), Some("Will Smith walks"), 669257),
            pitch(Some("walk"), Some("Will Smith walks"), 519293),
            pitch(Some("single"), Some("Will Smyth singles"), 669257),
        ]);
        assert_eq!(table.len(), 3);
        assert!(table.rows().iter().all(|r| r.pa == 1));
    }

    #[test]
    fn sorted_by_woba_descending() {
        let table = compute(&[
            pitch(Some("strikeout"), Some("Low Guy strikes out"), 1),
            pitch(Some("home_run"), Some("High Guy homers"), 2),
            pitch(Some("single"), Some("Mid Guy singles"), 3),
            pitch(Some("field_out"), Some("Mid Guy flies out"), 3),
        ]);
        let names: Vec<&str> = table.rows().iter().map(|r| r.player_name.as_str()).collect();
        assert_eq!(names, vec!["High Guy", "Mid Guy", "Low Guy"]);
        assert!(table
            .rows()
            .windows(2)
            .all(|w| w[0].woba >= w[1].woba));
    }

    #[test]
    fn ties_keep_group_order() {
        let table = compute(&[
            pitch(Some("walk"), Some("Zed Last walks"), 300),
            pitch(Some("walk"), Some("Amy First walks"), 100),
            pitch(Some("walk"), Some("Bob Middle walks"), 200),
        ]);
        let ids: Vec<BatterId> = table.rows().iter().map(|r| r.batter).collect();
        assert_eq!(ids, vec![100, 200, 300]);
    }

    #[test]
    fn compute_is_idempotent() {
        let events = vec![
            pitch(Some("single"), Some("John Smith singles"), 101),
            pitch(Some("double"), Some("Jane Doe doubles"), 202),
            pitch(None, Some("Jane Doe fouls"), 202),
            pitch(Some("strikeout"), Some("Jane Doe strikes out"), 202),
        ];
        assert_eq!(compute(&events), compute(&events));
    }

    #[test]
    fn injected_weights_are_used() {
        let weights = WobaWeights {
            walk: 1.0,
            ..WobaWeights::default()
        };
        let table = compute_woba(&[pitch(Some("walk"), Some("John Smith walks"), 101)], &weights);
        assert!(approx(table.rows()[0].woba, 1.0));
    }

    #[test]
    fn numerator_ignores_unweighted_labels() {
        let weights = WobaWeights::default();
        let mut counts = BTreeMap::new();
        counts.insert("strikeout".to_string(), 5);
        counts.insert("sac_bunt".to_string(), 2);
        assert_eq!(weights.numerator(&counts), 0.0);

        counts.insert("triple".to_string(), 2);
        assert!(approx(weights.numerator(&counts), 3.24));
    }

    #[test]
    fn weight_for_labels() {
        let weights = WobaWeights::default();
        assert_eq!(weights.weight_for("home_run"), Some(2.10));
        assert_eq!(weights.weight_for("hit_by_pitch"), Some(0.72));
        assert_eq!(weights.weight_for("strikeout"), None);
        assert_eq!(weights.weight_for(""), None);
    }

    #[test]
    fn with_min_pa_filters_and_keeps_order() {
        let mut events = Vec::new();
        for _ in 0..3 {
            events.push(pitch(Some("strikeout"), Some("Many Trips strikes out"), 1));
        }
        events.push(pitch(Some("home_run"), Some("One Shot homers"), 2));
        let table = compute(&events);
        assert_eq!(table.max_pa(), Some(3));

        let all = table.with_min_pa(1);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].player_name, "One Shot");

        let qualified = table.with_min_pa(2);
        assert_eq!(qualified.len(), 1);
        assert_eq!(qualified[0].player_name, "Many Trips");

        assert!(table.with_min_pa(4).is_empty());
    }
}
