use futures::future::join_all;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::error_list::ErrorList;
use super::planner_form::PlannerForm;
use super::results_panel::ResultsPanel;
use super::tower_grid::TowerGrid;
use crate::catalog::{fetch_catalog, TowerIndex};
use crate::economy::{compute_budget, EconomyTable};
use crate::model::{validate, Field, InputAction, PlanResult, PlannerInput};
use crate::planner::plan_tower;
use crate::util::{cerror, clog};

const STORAGE_KEY: &str = "gp_planner_input";

#[function_component]
pub fn App() -> Html {
    let input = use_reducer(PlannerInput::default);
    let result = use_state(|| None::<PlanResult>);
    let errors = use_state(Vec::new);
    // Bumped on every recomputation; a settled fetch join only stores its
    // result while its generation is still the latest.
    let generation = use_mut_ref(|| 0u64);

    // Restore the previous session's inputs
    {
        let input = input.clone();
        use_effect_with((), move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(Some(raw)) = store.get_item(STORAGE_KEY) {
                        match serde_json::from_str(&raw) {
                            Ok(saved) => input.dispatch(InputAction::Restore(saved)),
                            Err(e) => clog(&format!("ignoring saved inputs: {}", e)),
                        }
                    }
                }
            }
            || ()
        });
    }
    // Persist every input change
    {
        let snapshot = (*input).clone();
        use_effect_with(snapshot, move |snapshot| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(raw) = serde_json::to_string(snapshot) {
                        let _ = store.set_item(STORAGE_KEY, &raw);
                    }
                }
            }
            || ()
        });
    }

    // Validate and recompute on every input change
    {
        let snapshot = (*input).clone();
        let result = result.clone();
        let errors = errors.clone();
        let generation = generation.clone();
        use_effect_with(snapshot, move |snapshot| {
            let validation = validate(snapshot);
            let next_generation = {
                let mut g = generation.borrow_mut();
                *g += 1;
                *g
            };
            if !validation.is_empty() {
                errors.set(validation);
                result.set(None);
            } else {
                if !errors.is_empty() {
                    errors.set(Vec::new());
                }
                let table = EconomyTable::embedded();
                let current_round = snapshot.parsed_round().unwrap_or(crate::model::MIN_ROUND);
                let money = snapshot.parsed_money().unwrap_or(0.0);
                let budget = compute_budget(table, current_round, money, snapshot.parsed_target());
                // Upgrades are priced against the money available up to the
                // target round, not the full remaining payout.
                let spend_budget = budget.to_target.unwrap_or(budget.remaining);
                let policy = snapshot.policy;

                let index = TowerIndex::embedded();
                let mut wanted: Vec<(String, String)> = Vec::new();
                for name in &snapshot.selected_towers {
                    match index.file_for(name) {
                        Some(file) => wanted.push((name.clone(), file.to_string())),
                        // Same treatment as a failed fetch: log and drop.
                        None => clog(&format!("no catalog entry for tower {}", name)),
                    }
                }

                let result = result.clone();
                let generation = generation.clone();
                spawn_local(async move {
                    let fetches = wanted.into_iter().map(|(name, file)| async move {
                        match fetch_catalog(&file).await {
                            Ok(catalog) => Some((name, catalog)),
                            Err(e) => {
                                cerror(&format!("dropping tower {}: {}", name, e));
                                None
                            }
                        }
                    });
                    let settled = join_all(fetches).await;
                    if *generation.borrow() != next_generation {
                        // A newer recomputation superseded this one
                        return;
                    }
                    let towers = settled
                        .into_iter()
                        .flatten()
                        .map(|(name, catalog)| plan_tower(&name, &catalog, spend_budget, policy))
                        .collect();
                    result.set(Some(PlanResult {
                        earned_this_round: budget.earned_this_round,
                        remaining: budget.remaining,
                        to_target: spend_budget,
                        towers,
                    }));
                });
            }
            || ()
        });
    }

    let on_toggle = {
        let input = input.clone();
        Callback::from(move |name: String| input.dispatch(InputAction::ToggleTower(name)))
    };
    let tower_names: Vec<String> = TowerIndex::embedded()
        .towers
        .iter()
        .map(|t| t.name.clone())
        .collect();
    let tower_error = errors.iter().any(|e| e.field == Field::Tower);

    html! {
        <div style="min-height:100vh; background:#0d1117; color:#c9d1d9;">
            <div style="max-width:960px; margin:0 auto; padding:24px; display:flex; flex-direction:column; gap:16px;">
                <h1 style="margin:0; font-size:22px;">{"Gauntlet Budget Planner"}</h1>
                <p style="margin:0; opacity:0.8; font-size:14px;">
                    {"Project how much cash rounds 6-100 still pay out and which tower upgrades fit inside it."}
                </p>
                <PlannerForm input={input.clone()} errors={(*errors).clone()} />
                <TowerGrid
                    towers={tower_names}
                    selected={input.selected_towers.clone()}
                    on_toggle={on_toggle}
                    has_error={tower_error}
                />
                <ErrorList errors={(*errors).clone()} />
                { if let Some(result) = (*result).clone() {
                    html! { <ResultsPanel
                        result={result}
                        current_round={input.current_round.clone()}
                        target_round={input.target_round.clone()}
                    /> }
                } else {
                    html! {}
                } }
            </div>
        </div>
    }
}
