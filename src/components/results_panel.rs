use yew::prelude::*;

use crate::model::{PlanResult, MAX_ROUND};
use crate::planner::TowerPlan;
use crate::util::format_money;

#[derive(Properties, PartialEq, Clone)]
pub struct ResultsPanelProps {
    pub result: PlanResult,
    pub current_round: String,
    pub target_round: String,
}

fn tower_section(plan: &TowerPlan) -> Html {
    html! {
        <div style="border:1px solid #30363d; border-radius:8px; padding:10px 12px;">
            <div style="font-weight:600; margin-bottom:6px;">{ plan.tower.clone() }</div>
            { if plan.is_empty() {
                html! { <div style="font-size:12px; opacity:0.6;">{"No path fits this budget."}</div> }
            } else {
                html! { <div style="display:flex; flex-direction:column; gap:8px;">
                    { for plan.paths.iter().map(|path| html! {
                        <div>
                            <div style="font-size:13px; color:#58a6ff; margin-bottom:2px;">{ path.path.clone() }</div>
                            <ul style="margin:0; padding-left:18px; display:flex; flex-direction:column; gap:2px;">
                                { for path.upgrades.iter().map(|u| html! {
                                    <li style="font-size:13px;">
                                        { u.name.clone() }
                                        { " - " }
                                        <span style="color:#d4af37;">{ format_money(u.price) }</span>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div> }
            } }
        </div>
    }
}

#[function_component]
pub fn ResultsPanel(props: &ResultsPanelProps) -> Html {
    let r = &props.result;
    let row_style = "display:flex; justify-content:space-between; gap:16px; font-size:14px;";
    let value_style = "font-variant-numeric:tabular-nums; font-weight:600; color:#d4af37;";
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:14px 16px; display:flex; flex-direction:column; gap:12px;">
            <h3 style="margin:0; font-size:16px;">{"Projected budget"}</h3>
            <div style="display:flex; flex-direction:column; gap:6px;">
                <div style={row_style}>
                    <span>{ format!("Cash dropped by round {}", props.current_round) }</span>
                    <span style={value_style}>{ format_money(r.earned_this_round) }</span>
                </div>
                <div style={row_style}>
                    <span>{ format!("Spendable from round {} to round {}", props.current_round, props.target_round) }</span>
                    <span style={value_style}>{ format_money(r.to_target) }</span>
                </div>
                <div style={row_style}>
                    <span>{ format!("Spendable before the end of round {}", MAX_ROUND) }</span>
                    <span style={value_style}>{ format_money(r.remaining) }</span>
                </div>
            </div>
            <h4 style="margin:0; font-size:14px;">{"Affordable upgrades"}</h4>
            { if r.towers.is_empty() || r.nothing_affordable() {
                html! { <div style="font-size:13px; opacity:0.7;">{"Nothing is affordable within that budget."}</div> }
            } else {
                html! { <div style="display:flex; flex-direction:column; gap:10px;">
                    { for r.towers.iter().map(tower_section) }
                </div> }
            } }
        </div>
    }
}
