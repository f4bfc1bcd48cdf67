/// Reusable UI components

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToggleProps {
    pub label: String,
    pub value: bool,
    pub on_toggle: Callback<bool>,
}

#[function_component(Toggle)]
pub fn toggle(props: &ToggleProps) -> Html {
    let track_style = format!(
        "position: relative; width: 44px; height: 24px; border: none; border-radius: 12px; cursor: pointer; transition: background-color 0.2s; background-color: {};",
        if props.value { "#5B4FE8" } else { "#c4c4c4" }
    );

    let knob_style = format!(
        "position: absolute; top: 2px; width: 20px; height: 20px; border-radius: 50%; background-color: white; transition: left 0.2s; left: {};",
        if props.value { "22px" } else { "2px" }
    );

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let next = !props.value;
        Callback::from(move |_| on_toggle.emit(next))
    };

    html! {
        <div style="display: flex; align-items: center; justify-content: space-between; gap: 12px;">
            <span class="toggle-label">{&props.label}</span>
            <button
                type="button"
                onclick={onclick}
                style={track_style}
                aria-pressed={props.value.to_string()}
                aria-label={props.label.clone()}
            >
                <span style={knob_style}></span>
            </button>
        </div>
    }
}
