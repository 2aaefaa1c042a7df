use yew::prelude::*;

use super::modal_frame::ModalFrame;
use crate::model::Outcome;
use crate::state::PromptResult;

#[derive(Properties, PartialEq, Clone)]
pub struct WinnerOverlayProps {
    pub outcome: Outcome,
    /// `None` for a tie.
    pub winner_name: Option<AttrValue>,
    pub score: u64,
    pub on_result: Callback<PromptResult<()>>,
}

pub fn announcement_title(outcome: Outcome, winner_name: Option<&str>) -> String {
    match (outcome, winner_name) {
        (Outcome::Tie, _) | (_, None) => "🤝 TIE!".to_string(),
        (_, Some(name)) => format!("🏆 {} WINS!", name),
    }
}

pub fn announcement_detail(outcome: Outcome, score: u64) -> String {
    match outcome {
        Outcome::Tie => format!("Both teams: {} points", score),
        _ => format!("Final score: {} points", score),
    }
}

#[function_component]
pub fn WinnerOverlay(props: &WinnerOverlayProps) -> Html {
    if !props.outcome.is_decided() {
        return html! {};
    }
    let new_game_btn = {
        let cb = props.on_result.clone();
        Callback::from(move |_| cb.emit(PromptResult::Confirmed(())))
    };
    let keep_btn = {
        let cb = props.on_result.clone();
        Callback::from(move |_| cb.emit(PromptResult::Cancelled))
    };
    let title = announcement_title(props.outcome, props.winner_name.as_deref());
    html! {
        <ModalFrame title={title} accent="#d4af37">
            <p style="font-size:24px; margin:12px 0; text-align:center;">{ announcement_detail(props.outcome, props.score) }</p>
            <div style="display:flex; gap:12px; justify-content:center;">
                <button onclick={new_game_btn} style="background:#238636; border:1px solid #2ea043; color:#fff;">{"New Game"}</button>
                <button onclick={keep_btn}>{"Keep Scoring"}</button>
            </div>
        </ModalFrame>
    }
}
