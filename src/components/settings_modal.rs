use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::modal_frame::ModalFrame;
use crate::model::{MIN_TARGET, Settings, validate_settings};
use crate::state::PromptResult;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub home_name: AttrValue,
    pub visitor_name: AttrValue,
    pub target: u32,
    pub on_result: Callback<PromptResult<Settings>>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    // Prefilled from the current game; the prompt is remounted on every open.
    let home_name = use_state(|| props.home_name.to_string());
    let visitor_name = use_state(|| props.visitor_name.to_string());
    let target = use_state(|| props.target.to_string());
    let error = use_state(|| None::<String>);

    let bind = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };
    let home_input = bind(&home_name);
    let visitor_input = bind(&visitor_name);
    let target_input = bind(&target);

    let submit = {
        let home_name = home_name.clone();
        let visitor_name = visitor_name.clone();
        let target = target.clone();
        let error = error.clone();
        let cb = props.on_result.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // Blank names keep the prompt open; a bad target silently becomes the default.
            match validate_settings(&home_name, &visitor_name, &target) {
                Ok(settings) => cb.emit(PromptResult::Confirmed(settings)),
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };
    let cancel = {
        let cb = props.on_result.clone();
        Callback::from(move |_: ()| cb.emit(PromptResult::Cancelled))
    };
    let close_cb = {
        let cancel = cancel.clone();
        Callback::from(move |_| cancel.emit(()))
    };

    let label_style = "display:block; margin-bottom:6px; color:#ccc; font-size:13px;";
    let input_style = "width:100%; box-sizing:border-box; padding:8px 10px; font-size:16px; background:#0d1117; color:#e6edf3; border:1px solid #30363d; border-radius:6px;";
    html! {
        <ModalFrame title="Settings" on_escape={Some(cancel)}>
            <form onsubmit={submit} style="display:flex; flex-direction:column; gap:12px;">
                <div>
                    <label style={label_style}>{"Team 1 Name"}</label>
                    <input type="text" style={input_style} value={(*home_name).clone()} oninput={home_input} />
                </div>
                <div>
                    <label style={label_style}>{"Team 2 Name"}</label>
                    <input type="text" style={input_style} value={(*visitor_name).clone()} oninput={visitor_input} />
                </div>
                <div>
                    <label style={label_style}>{"Target Score"}</label>
                    <input type="number" min={MIN_TARGET.to_string()} step="50" style={input_style} value={(*target).clone()} oninput={target_input} />
                </div>
                { if let Some(msg) = &*error { html!{ <div style="font-size:12px; color:#f85149; background:#1c2128; border:1px solid #5d2d2d; padding:6px 8px; border-radius:6px;">{ msg.clone() }</div> } } else { html!{} } }
                <div style="display:flex; gap:10px; justify-content:flex-end;">
                    <button type="button" onclick={close_cb} style="min-width:90px;">{"Cancel"}</button>
                    <button type="submit" style="min-width:90px; background:#238636; border:1px solid #2ea043; color:#fff;">{"Save"}</button>
                </div>
            </form>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{ format!("Targets below {} fall back to the default.", MIN_TARGET) }</div>
        </ModalFrame>
    }
}
