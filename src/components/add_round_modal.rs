use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::modal_frame::ModalFrame;
use crate::model::{Round, validate_round};
use crate::state::PromptResult;

#[derive(Properties, PartialEq, Clone)]
pub struct AddRoundModalProps {
    pub home_name: AttrValue,
    pub visitor_name: AttrValue,
    pub on_result: Callback<PromptResult<Round>>,
}

#[function_component]
pub fn AddRoundModal(props: &AddRoundModalProps) -> Html {
    let home = use_state(String::new);
    let visitor = use_state(String::new);
    let error = use_state(|| None::<String>);

    let home_input = {
        let home = home.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            home.set(input.value());
        })
    };
    let visitor_input = {
        let visitor = visitor.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            visitor.set(input.value());
        })
    };
    let submit = {
        let home = home.clone();
        let visitor = visitor.clone();
        let error = error.clone();
        let cb = props.on_result.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate_round(&home, &visitor) {
                Ok(round) => cb.emit(PromptResult::Confirmed(round)),
                // stay open until the user enters points or cancels
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };
    let cancel = {
        let cb = props.on_result.clone();
        Callback::from(move |_: ()| cb.emit(PromptResult::Cancelled))
    };
    let cancel_btn = {
        let cancel = cancel.clone();
        Callback::from(move |_| cancel.emit(()))
    };

    let label_style = "display:block; margin-bottom:6px; color:#ccc; font-size:13px;";
    let input_style = "width:100%; box-sizing:border-box; padding:8px 10px; font-size:20px; background:#0d1117; color:#e6edf3; border:1px solid #30363d; border-radius:6px;";
    html! {
        <ModalFrame title="Add Round" on_escape={Some(cancel)}>
            <form onsubmit={submit} style="display:flex; flex-direction:column; gap:12px;">
                <div>
                    <label style={label_style}>{ format!("{} Score", props.home_name) }</label>
                    <input type="tel" inputmode="numeric" style={input_style} value={(*home).clone()} oninput={home_input} />
                </div>
                <div>
                    <label style={label_style}>{ format!("{} Score", props.visitor_name) }</label>
                    <input type="tel" inputmode="numeric" style={input_style} value={(*visitor).clone()} oninput={visitor_input} />
                </div>
                { if let Some(msg) = &*error { html!{ <div style="font-size:12px; color:#f85149; background:#1c2128; border:1px solid #5d2d2d; padding:6px 8px; border-radius:6px;">{ msg.clone() }</div> } } else { html!{} } }
                <div style="display:flex; gap:10px; justify-content:flex-end;">
                    <button type="button" onclick={cancel_btn} style="min-width:90px;">{"Cancel"}</button>
                    <button type="submit" style="min-width:90px; background:#238636; border:1px solid #2ea043; color:#fff;">{"Save"}</button>
                </div>
            </form>
        </ModalFrame>
    }
}
