use std::collections::BTreeSet;

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TowerGridProps {
    pub towers: Vec<String>,
    pub selected: BTreeSet<String>,
    pub on_toggle: Callback<String>,
    pub has_error: bool,
}

#[function_component]
pub fn TowerGrid(props: &TowerGridProps) -> Html {
    let border = if props.has_error { "#f85149" } else { "#30363d" };
    html! {
        <div style={format!("background:rgba(22,27,34,0.9); border:1px solid {}; border-radius:8px; padding:14px 16px;", border)}>
            <div style="font-weight:600; margin-bottom:10px;">{"Towers"}</div>
            <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(150px, 1fr)); gap:8px;">
                { for props.towers.iter().map(|name| {
                    let selected = props.selected.contains(name);
                    let onclick = {
                        let cb = props.on_toggle.clone();
                        let name = name.clone();
                        Callback::from(move |_: MouseEvent| cb.emit(name.clone()))
                    };
                    let style = if selected {
                        "background:#1f6feb; border:1px solid #58a6ff; color:#fff; border-radius:8px; padding:8px 6px; font-size:13px;"
                    } else {
                        "background:#1c2128; border:1px solid #30363d; color:#c9d1d9; border-radius:8px; padding:8px 6px; font-size:13px;"
                    };
                    html! { <button onclick={onclick} style={style}>{ name.clone() }</button> }
                }) }
            </div>
        </div>
    }
}
