use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::model::{Field, FieldError, InputAction, PlannerInput, MAX_ROUND, MIN_ROUND};
use crate::planner::AffordPolicy;

#[derive(Properties, PartialEq, Clone)]
pub struct PlannerFormProps {
    pub input: UseReducerHandle<PlannerInput>,
    pub errors: Vec<FieldError>,
}

fn field_style(has_error: bool) -> String {
    let border = if has_error { "#f85149" } else { "#30363d" };
    format!(
        "background:#0d1117; color:#c9d1d9; border:1px solid {}; border-radius:6px; padding:6px 8px; width:110px; font-size:14px;",
        border
    )
}

#[function_component]
pub fn PlannerForm(props: &PlannerFormProps) -> Html {
    let has_error = |field: Field| props.errors.iter().any(|e| e.field == field);

    let on_round_input = {
        let input = props.input.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            input.dispatch(InputAction::SetRound(value));
        })
    };
    let on_round_blur = {
        let input = props.input.clone();
        Callback::from(move |_: FocusEvent| input.dispatch(InputAction::BlurRound))
    };
    let on_target_input = {
        let input = props.input.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            input.dispatch(InputAction::SetTargetRound(value));
        })
    };
    let on_target_blur = {
        let input = props.input.clone();
        Callback::from(move |_: FocusEvent| input.dispatch(InputAction::BlurTargetRound))
    };
    let on_money_input = {
        let input = props.input.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            input.dispatch(InputAction::SetMoney(value));
        })
    };
    let on_money_blur = {
        let input = props.input.clone();
        Callback::from(move |_: FocusEvent| input.dispatch(InputAction::BlurMoney))
    };
    let on_policy_toggle = {
        let input = props.input.clone();
        Callback::from(move |_: MouseEvent| {
            let next = match input.policy {
                AffordPolicy::RunningTotal => AffordPolicy::PerUpgrade,
                AffordPolicy::PerUpgrade => AffordPolicy::RunningTotal,
            };
            input.dispatch(InputAction::SetPolicy(next));
        })
    };

    let group_style = "display:flex; flex-direction:column; gap:4px;";
    let label_style = "font-size:12px; opacity:0.8;";

    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:14px 16px; display:flex; gap:18px; flex-wrap:wrap; align-items:flex-end;">
            <div style={group_style}>
                <label style={label_style} for="round">{"Current round"}</label>
                <input
                    type="number"
                    id="round"
                    min={MIN_ROUND.to_string()}
                    max={MAX_ROUND.to_string()}
                    value={props.input.current_round.clone()}
                    oninput={on_round_input}
                    onblur={on_round_blur}
                    style={field_style(has_error(Field::Round))}
                />
            </div>
            <div style={group_style}>
                <label style={label_style} for="target-round">{"Target round"}</label>
                <input
                    type="number"
                    id="target-round"
                    max={MAX_ROUND.to_string()}
                    value={props.input.target_round.clone()}
                    oninput={on_target_input}
                    onblur={on_target_blur}
                    style={field_style(has_error(Field::TargetRound))}
                />
            </div>
            <div style={group_style}>
                <label style={label_style} for="money">{"Current money"}</label>
                <input
                    type="number"
                    id="money"
                    min="0"
                    value={props.input.current_money.clone()}
                    oninput={on_money_input}
                    onblur={on_money_blur}
                    style={field_style(has_error(Field::Money))}
                />
            </div>
            <label style="display:flex; align-items:center; gap:8px; cursor:pointer; padding-bottom:6px;"
                title="Checked: upgrades in a path add up against the budget. Unchecked: every upgrade is priced on its own.">
                <input
                    type="checkbox"
                    checked={props.input.policy == AffordPolicy::RunningTotal}
                    onclick={on_policy_toggle}
                />
                <span style="font-size:13px;">{"Chain path costs"}</span>
            </label>
        </div>
    }
}
