use yew::prelude::*;

use crate::model::FieldError;

#[derive(Properties, PartialEq, Clone)]
pub struct ErrorListProps {
    pub errors: Vec<FieldError>,
}

#[function_component]
pub fn ErrorList(props: &ErrorListProps) -> Html {
    if props.errors.is_empty() {
        return html! {};
    }
    html! {
        <div style="background:#2d1618; border:1px solid #f85149; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:4px;">
            { for props.errors.iter().map(|err| html! {
                <div style="color:#f85149; font-size:13px;">{ err.message.clone() }</div>
            }) }
        </div>
    }
}
