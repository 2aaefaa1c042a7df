use yew::prelude::*;

use super::modal_frame::ModalFrame;
use crate::state::PromptResult;

#[derive(Properties, PartialEq, Clone)]
pub struct ConfirmModalProps {
    pub title: AttrValue,
    pub message: AttrValue,
    pub confirm_label: AttrValue,
    pub on_result: Callback<PromptResult<()>>,
}

/// Destructive confirmation (delete round, reset). Dismissing is a no-op.
#[function_component]
pub fn ConfirmModal(props: &ConfirmModalProps) -> Html {
    let cancel = {
        let cb = props.on_result.clone();
        Callback::from(move |_: ()| cb.emit(PromptResult::Cancelled))
    };
    let cancel_btn = {
        let cancel = cancel.clone();
        Callback::from(move |_| cancel.emit(()))
    };
    let confirm_btn = {
        let cb = props.on_result.clone();
        Callback::from(move |_| cb.emit(PromptResult::Confirmed(())))
    };
    html! {
        <ModalFrame title={props.title.clone()} on_escape={Some(cancel)} accent="#f85149">
            <div style="font-size:13px; line-height:1.4; opacity:0.85; text-align:center;">{ props.message.to_string() }</div>
            <div style="display:flex; gap:10px; justify-content:flex-end;">
                <button onclick={cancel_btn} style="min-width:90px; background:#444;">{"Cancel"}</button>
                <button onclick={confirm_btn} style="min-width:110px; background:#b62324; border:1px solid #da3633; color:#fff;">{ props.confirm_label.to_string() }</button>
            </div>
        </ModalFrame>
    }
}
