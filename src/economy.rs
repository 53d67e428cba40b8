//! Round economy table and budget math for the Gauntlet mode.
//!
//! Gauntlet pays a fixed cash drop at the end of every round and nothing
//! else, so the whole economy fits in one lookup table built from
//! `data/rounds.json`.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::util::round2;

/// One row of the round dataset. `total_money` is the cumulative cash
/// earned through the end of that round.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub cash_gained: f64,
    pub total_money: f64,
}

#[derive(Deserialize)]
struct RoundDataset {
    rounds: Vec<RoundRecord>,
}

/// Lookup table over the round dataset.
///
/// Unlisted rounds contribute zero: a query outside the dataset's range is
/// treated as "no income there", not as an error.
pub struct EconomyTable {
    income: HashMap<u32, f64>,
    cumulative: HashMap<u32, f64>,
    final_total: f64,
}

impl EconomyTable {
    pub fn from_records(records: &[RoundRecord]) -> Self {
        let mut income = HashMap::with_capacity(records.len());
        let mut cumulative = HashMap::with_capacity(records.len());
        let mut final_total = 0.0;
        let mut last_round = 0;
        for rec in records {
            income.insert(rec.round, rec.cash_gained);
            cumulative.insert(rec.round, rec.total_money);
            if rec.round >= last_round {
                last_round = rec.round;
                final_total = rec.total_money;
            }
        }
        Self {
            income,
            cumulative,
            final_total,
        }
    }

    /// The table built from the dataset shipped with the app.
    pub fn embedded() -> &'static Self {
        static TABLE: OnceLock<EconomyTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            let data: RoundDataset = serde_json::from_str(include_str!("../data/rounds.json"))
                .expect("bundled round dataset is valid JSON");
            Self::from_records(&data.rounds)
        })
    }

    /// Cash dropped during `round`; 0 when the dataset has no such round.
    pub fn cash_gained(&self, round: u32) -> f64 {
        self.income.get(&round).copied().unwrap_or(0.0)
    }

    /// Cumulative cash earned through the end of `round`; 0 when unlisted.
    pub fn earned_through(&self, round: u32) -> f64 {
        self.cumulative.get(&round).copied().unwrap_or(0.0)
    }

    /// Total cash the full round range pays out. This comes from the
    /// dataset (the last round's cumulative figure), not from a constant:
    /// swapping the dataset for a different mode configuration changes it.
    pub fn final_total(&self) -> f64 {
        self.final_total
    }
}

/// Budget figures derived from one input snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct BudgetSummary {
    /// Spendable between now and the end of the round range.
    pub remaining: f64,
    /// Spendable between now and the target round, when one was given.
    pub to_target: Option<f64>,
    /// Cash dropped by the current round itself.
    pub earned_this_round: f64,
}

/// Project spendable cash from the current position.
///
/// Inputs are assumed valid (see `model::validate`); this function has no
/// failure mode. "Earned so far" is everything through the *previous*
/// round, so cash still owed by the current round counts as upcoming.
pub fn compute_budget(
    table: &EconomyTable,
    current_round: u32,
    current_money: f64,
    target_round: Option<u32>,
) -> BudgetSummary {
    let earned_so_far = table.earned_through(current_round.saturating_sub(1));
    let remaining = round2(table.final_total() - earned_so_far + current_money);
    let to_target = target_round.map(|target| {
        let earned_at_target = table.earned_through(target.saturating_sub(1));
        round2(earned_at_target - earned_so_far + current_money)
    });
    BudgetSummary {
        remaining,
        to_target,
        earned_this_round: table.cash_gained(current_round),
    }
}
