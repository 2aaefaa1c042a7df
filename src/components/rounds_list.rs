use yew::prelude::*;

use crate::model::Round;

#[derive(Properties, PartialEq, Clone)]
pub struct RoundsListProps {
    pub rounds: Vec<Round>,
    pub home_name: AttrValue,
    pub visitor_name: AttrValue,
    /// Positional index of the round to delete.
    pub on_delete: Callback<usize>,
    pub on_add: Callback<()>,
}

#[function_component]
pub fn RoundsList(props: &RoundsListProps) -> Html {
    let add_cb = {
        let cb = props.on_add.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let row_style = "display:grid; grid-template-columns:56px 1fr 1fr; align-items:center; gap:8px; padding:6px 8px;";
    let score_style = "text-align:center; font-size:18px; font-variant-numeric:tabular-nums;";

    let rows = if props.rounds.is_empty() {
        html! {
            <div class="empty-state" style="padding:28px 0; text-align:center; opacity:0.6;">
                <div style="font-size:28px;">{"📥"}</div>
                <p style="margin:6px 0 0 0;">{"No rounds yet"}</p>
            </div>
        }
    } else {
        props
            .rounds
            .iter()
            .enumerate()
            .map(|(index, round)| {
                let delete_cb = {
                    let cb = props.on_delete.clone();
                    Callback::from(move |_| cb.emit(index))
                };
                html! {
                    <div key={index} class="round-row" style={format!("{} border-top:1px solid #21262d;", row_style)}>
                        <div style="display:flex; align-items:center; gap:6px;">
                            <button class="delete-round" onclick={delete_cb} title="Delete round" style="padding:2px 6px; background:#3b1d1d; border:1px solid #5d2d2d;">{"✕"}</button>
                            <span style="font-size:11px; opacity:0.6;">{ format!("#{}", index + 1) }</span>
                        </div>
                        <div style={score_style}>{ round.home }</div>
                        <div style={score_style}>{ round.visitor }</div>
                    </div>
                }
            })
            .collect::<Html>()
    };

    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:10px; display:flex; flex-direction:column; overflow:hidden;">
        <div style={format!("{} font-size:12px; font-weight:600; opacity:0.8; background:#1c2128;", row_style)}>
            <span>{"ROUND"}</span>
            <span style="text-align:center;">{ props.home_name.to_string() }</span>
            <span style="text-align:center;">{ props.visitor_name.to_string() }</span>
        </div>
        <div style="max-height:50vh; overflow-y:auto;">{ rows }</div>
        <button onclick={add_cb} style="margin:10px; padding:10px; font-size:16px; background:#238636; border:1px solid #2ea043; color:#fff;">{"＋ Add Round"}</button>
    </div>}
}
