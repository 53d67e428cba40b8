//! Input state and validation for the planner form.
//!
//! The form state lives in a `use_reducer` handle exactly like a game run
//! would: every widget dispatches an action, the reducer produces the next
//! snapshot, and recomputation keys off the snapshot as a whole.

use std::collections::BTreeSet;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yew::Reducible;

use crate::planner::{AffordPolicy, TowerPlan};

pub const MIN_ROUND: u32 = 6;
pub const MAX_ROUND: u32 = 100;

/// Raw form state. The numeric fields stay as entered (a half-typed value
/// must not be clobbered mid-edit); parsing happens on use.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannerInput {
    pub current_round: String,
    pub target_round: String,
    pub current_money: String,
    pub selected_towers: BTreeSet<String>,
    pub policy: AffordPolicy,
}

impl Default for PlannerInput {
    fn default() -> Self {
        Self {
            current_round: MIN_ROUND.to_string(),
            target_round: MAX_ROUND.to_string(),
            current_money: "650".to_string(),
            selected_towers: BTreeSet::new(),
            policy: AffordPolicy::default(),
        }
    }
}

impl PlannerInput {
    pub fn parsed_round(&self) -> Option<u32> {
        self.current_round.trim().parse().ok()
    }

    pub fn parsed_target(&self) -> Option<u32> {
        self.target_round.trim().parse().ok()
    }

    pub fn parsed_money(&self) -> Option<f64> {
        self.current_money.trim().parse().ok()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputAction {
    SetRound(String),
    /// Clamp the round to 6..=100 when focus leaves the field; junk
    /// becomes the minimum.
    BlurRound,
    SetTargetRound(String),
    /// Clamp the target between the current round and 100; junk becomes
    /// the maximum.
    BlurTargetRound,
    SetMoney(String),
    BlurMoney,
    ToggleTower(String),
    SetPolicy(AffordPolicy),
    /// Replace the whole snapshot (restore from storage).
    Restore(PlannerInput),
}

impl Reducible for PlannerInput {
    type Action = InputAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use InputAction::*;
        let mut new = (*self).clone();
        match action {
            SetRound(v) => new.current_round = v,
            BlurRound => {
                let clamped = new
                    .parsed_round()
                    .map(|r| r.clamp(MIN_ROUND, MAX_ROUND))
                    .unwrap_or(MIN_ROUND);
                new.current_round = clamped.to_string();
            }
            SetTargetRound(v) => new.target_round = v,
            BlurTargetRound => {
                let floor = new
                    .parsed_round()
                    .map(|r| r.clamp(MIN_ROUND, MAX_ROUND))
                    .unwrap_or(MIN_ROUND);
                let clamped = new
                    .parsed_target()
                    .map(|t| t.clamp(floor, MAX_ROUND))
                    .unwrap_or(MAX_ROUND);
                new.target_round = clamped.to_string();
            }
            SetMoney(v) => new.current_money = v,
            BlurMoney => {
                let value = new.parsed_money().unwrap_or(0.0);
                new.current_money = if value == value.trunc() {
                    format!("{}", value as i64)
                } else {
                    value.to_string()
                };
            }
            ToggleTower(name) => {
                if !new.selected_towers.remove(&name) {
                    new.selected_towers.insert(name);
                }
            }
            SetPolicy(policy) => new.policy = policy,
            Restore(saved) => new = saved,
        }
        Rc::new(new)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Round,
    TargetRound,
    Money,
    Tower,
}

/// A per-field validation failure; `field` ties the message to a control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

fn err(field: Field, message: impl Into<String>) -> FieldError {
    FieldError {
        field,
        message: message.into(),
    }
}

/// Check one snapshot. Any error blocks recomputation and clears the
/// previous result.
pub fn validate(input: &PlannerInput) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let round = input.parsed_round();
    match round {
        Some(r) if (MIN_ROUND..=MAX_ROUND).contains(&r) => {}
        _ => errors.push(err(
            Field::Round,
            format!("Round must be between {} and {}", MIN_ROUND, MAX_ROUND),
        )),
    }
    match input.parsed_target() {
        // An out-of-range current round only reports on its own field.
        Some(t) if t <= MAX_ROUND && round.is_none_or(|r| t >= r) => {}
        _ => errors.push(err(
            Field::TargetRound,
            format!(
                "Target round must be between the current round and {}",
                MAX_ROUND
            ),
        )),
    }
    match input.parsed_money() {
        Some(m) if m >= 0.0 => {}
        _ => errors.push(err(Field::Money, "Money cannot be negative")),
    }
    if input.selected_towers.is_empty() {
        errors.push(err(Field::Tower, "Select at least one tower"));
    }
    errors
}

/// One fully-recomputed output snapshot; discarded whenever the input
/// turns invalid.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanResult {
    pub earned_this_round: f64,
    pub remaining: f64,
    pub to_target: f64,
    pub towers: Vec<TowerPlan>,
}

impl PlanResult {
    /// True when no selected tower has a single affordable upgrade.
    pub fn nothing_affordable(&self) -> bool {
        self.towers.iter().all(|t| t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: PlannerInput, action: InputAction) -> PlannerInput {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn valid_input() -> PlannerInput {
        let mut input = PlannerInput::default();
        input.selected_towers.insert("Arrow Tower".to_string());
        input
    }

    fn fields(errors: &[FieldError]) -> Vec<Field> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn default_snapshot_needs_only_a_tower() {
        assert_eq!(fields(&validate(&PlannerInput::default())), [Field::Tower]);
        assert!(validate(&valid_input()).is_empty());
    }

    #[test]
    fn round_outside_range_is_flagged() {
        let mut input = valid_input();
        input.current_round = "5".to_string();
        assert_eq!(fields(&validate(&input)), [Field::Round]);
        input.current_round = "101".to_string();
        // 101 also pushes the target check's floor above 100
        assert_eq!(
            fields(&validate(&input)),
            [Field::Round, Field::TargetRound]
        );
        input.current_round = "abc".to_string();
        assert_eq!(fields(&validate(&input)), [Field::Round]);
    }

    #[test]
    fn target_below_current_round_is_flagged() {
        let mut input = valid_input();
        input.current_round = "40".to_string();
        input.target_round = "39".to_string();
        assert_eq!(fields(&validate(&input)), [Field::TargetRound]);
        input.target_round = "40".to_string();
        assert!(validate(&input).is_empty());
    }

    #[test]
    fn negative_or_junk_money_is_flagged() {
        let mut input = valid_input();
        input.current_money = "-1".to_string();
        assert_eq!(fields(&validate(&input)), [Field::Money]);
        input.current_money = "lots".to_string();
        assert_eq!(fields(&validate(&input)), [Field::Money]);
        input.current_money = "0".to_string();
        assert!(validate(&input).is_empty());
    }

    #[test]
    fn validation_is_a_pure_function_of_the_snapshot() {
        let input = valid_input();
        assert_eq!(validate(&input), validate(&input));
    }

    #[test]
    fn blur_clamps_round_into_range() {
        let mut input = PlannerInput::default();
        input.current_round = "150".to_string();
        assert_eq!(reduce(input, InputAction::BlurRound).current_round, "100");

        let mut input = PlannerInput::default();
        input.current_round = "junk".to_string();
        assert_eq!(reduce(input, InputAction::BlurRound).current_round, "6");
    }

    #[test]
    fn blur_clamps_target_to_at_least_the_current_round() {
        let mut input = PlannerInput::default();
        input.current_round = "40".to_string();
        input.target_round = "12".to_string();
        assert_eq!(
            reduce(input, InputAction::BlurTargetRound).target_round,
            "40"
        );

        let mut input = PlannerInput::default();
        input.target_round = "".to_string();
        assert_eq!(
            reduce(input, InputAction::BlurTargetRound).target_round,
            "100"
        );
    }

    #[test]
    fn blur_defaults_junk_money_to_zero() {
        let mut input = PlannerInput::default();
        input.current_money = "???".to_string();
        assert_eq!(reduce(input, InputAction::BlurMoney).current_money, "0");

        let mut input = PlannerInput::default();
        input.current_money = " 12.5 ".to_string();
        assert_eq!(reduce(input, InputAction::BlurMoney).current_money, "12.5");
    }

    #[test]
    fn toggling_a_tower_twice_removes_it() {
        let input = PlannerInput::default();
        let once = reduce(input, InputAction::ToggleTower("Cannon".to_string()));
        assert!(once.selected_towers.contains("Cannon"));
        let twice = reduce(once, InputAction::ToggleTower("Cannon".to_string()));
        assert!(twice.selected_towers.is_empty());
    }

    #[test]
    fn restore_replaces_the_whole_snapshot() {
        let saved = valid_input();
        let restored = reduce(PlannerInput::default(), InputAction::Restore(saved.clone()));
        assert_eq!(restored, saved);
    }

    #[test]
    fn input_round_trips_through_json() {
        let input = valid_input();
        let raw = serde_json::to_string(&input).expect("serializes");
        let back: PlannerInput = serde_json::from_str(&raw).expect("deserializes");
        assert_eq!(back, input);
    }
}
