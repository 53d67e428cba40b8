//! Affordability filtering: which upgrades fit inside a projected budget.

use serde::{Deserialize, Serialize};

use crate::catalog::{TowerCatalog, UpgradePath, UpgradeStep};

/// How path costs count against the budget.
///
/// `RunningTotal` walks each path in order keeping a running spend: a step
/// is kept when the running spend plus its price still fits, and only kept
/// steps advance the spend. The walk never stops early, so a cheap late
/// step can still be accepted after an expensive one was rejected.
/// `PerUpgrade` prices every step against the full budget on its own,
/// ignoring position and the rest of the path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AffordPolicy {
    PerUpgrade,
    #[default]
    RunningTotal,
}

/// A path reduced to the steps that fit the budget. Paths where nothing
/// fits are dropped entirely.
#[derive(Clone, Debug, PartialEq)]
pub struct AffordablePath {
    pub path: String,
    pub upgrades: Vec<UpgradeStep>,
}

/// One tower's affordable selection, catalog order preserved.
#[derive(Clone, Debug, PartialEq)]
pub struct TowerPlan {
    pub tower: String,
    pub paths: Vec<AffordablePath>,
}

impl TowerPlan {
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

fn filter_path(path: &UpgradePath, budget: f64, policy: AffordPolicy) -> Vec<UpgradeStep> {
    match policy {
        AffordPolicy::PerUpgrade => path
            .upgrades
            .iter()
            .filter(|u| u.price <= budget)
            .cloned()
            .collect(),
        AffordPolicy::RunningTotal => {
            let mut spent = 0.0;
            let mut kept = Vec::new();
            for upgrade in &path.upgrades {
                if spent + upgrade.price <= budget {
                    spent += upgrade.price;
                    kept.push(upgrade.clone());
                }
            }
            kept
        }
    }
}

/// Filter a whole catalog against `budget`.
pub fn affordable_paths(
    catalog: &TowerCatalog,
    budget: f64,
    policy: AffordPolicy,
) -> Vec<AffordablePath> {
    catalog
        .upgrade_paths
        .iter()
        .filter_map(|path| {
            let upgrades = filter_path(path, budget, policy);
            (!upgrades.is_empty()).then(|| AffordablePath {
                path: path.path.clone(),
                upgrades,
            })
        })
        .collect()
}

pub fn plan_tower(
    tower: &str,
    catalog: &TowerCatalog,
    budget: f64,
    policy: AffordPolicy,
) -> TowerPlan {
    TowerPlan {
        tower: tower.to_string(),
        paths: affordable_paths(catalog, budget, policy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(label: &str, prices: &[f64]) -> UpgradePath {
        UpgradePath {
            path: label.to_string(),
            upgrades: prices
                .iter()
                .enumerate()
                .map(|(i, &price)| UpgradeStep {
                    name: format!("{} {}", label, i + 1),
                    price,
                })
                .collect(),
        }
    }

    fn catalog(paths: Vec<UpgradePath>) -> TowerCatalog {
        TowerCatalog {
            upgrade_paths: paths,
        }
    }

    fn prices(kept: &AffordablePath) -> Vec<f64> {
        kept.upgrades.iter().map(|u| u.price).collect()
    }

    #[test]
    fn running_total_accepts_cheap_step_after_a_rejected_one() {
        // 50 fits (spend 50), 200 does not (spend stays 50), 10 then fits
        // at 50 + 10 = 60: the walk does not stop at the rejection.
        let c = catalog(vec![path("a", &[50.0, 200.0, 10.0])]);
        let kept = affordable_paths(&c, 60.0, AffordPolicy::RunningTotal);
        assert_eq!(kept.len(), 1);
        assert_eq!(prices(&kept[0]), [50.0, 10.0]);
    }

    #[test]
    fn running_total_only_advances_on_kept_steps() {
        let c = catalog(vec![path("a", &[30.0, 50.0, 30.0])]);
        let kept = affordable_paths(&c, 60.0, AffordPolicy::RunningTotal);
        assert_eq!(prices(&kept[0]), [30.0, 30.0]);
    }

    #[test]
    fn per_upgrade_ignores_order_and_other_steps() {
        let c = catalog(vec![path("a", &[5000.0, 100.0, 700.0])]);
        let kept = affordable_paths(&c, 800.0, AffordPolicy::PerUpgrade);
        assert_eq!(prices(&kept[0]), [100.0, 700.0]);
    }

    #[test]
    fn exact_budget_is_affordable_under_both_policies() {
        let c = catalog(vec![path("a", &[800.0])]);
        for policy in [AffordPolicy::PerUpgrade, AffordPolicy::RunningTotal] {
            let kept = affordable_paths(&c, 800.0, policy);
            assert_eq!(prices(&kept[0]), [800.0]);
        }
    }

    #[test]
    fn path_with_nothing_affordable_is_dropped() {
        let c = catalog(vec![
            path("cheap", &[10.0, 20.0]),
            path("pricey", &[9000.0]),
            path("mixed", &[5.0, 9000.0]),
        ]);
        let kept = affordable_paths(&c, 100.0, AffordPolicy::RunningTotal);
        let labels: Vec<&str> = kept.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(labels, ["cheap", "mixed"]);
    }

    #[test]
    fn zero_budget_keeps_nothing() {
        let c = catalog(vec![path("a", &[10.0]), path("b", &[20.0])]);
        assert!(affordable_paths(&c, 0.0, AffordPolicy::RunningTotal).is_empty());
        assert!(affordable_paths(&c, 0.0, AffordPolicy::PerUpgrade).is_empty());
    }

    #[test]
    fn plan_tower_carries_the_name_and_empty_flag() {
        let c = catalog(vec![path("a", &[9000.0])]);
        let plan = plan_tower("Cannon", &c, 100.0, AffordPolicy::default());
        assert_eq!(plan.tower, "Cannon");
        assert!(plan.is_empty());
    }

    #[test]
    fn default_policy_is_running_total() {
        assert_eq!(AffordPolicy::default(), AffordPolicy::RunningTotal);
    }
}
