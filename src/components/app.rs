use super::{
    add_round_modal::AddRoundModal, confirm_modal::ConfirmModal, header_bar::HeaderBar,
    rounds_list::RoundsList, score_box::ScoreBox, settings_modal::SettingsModal,
    winner_overlay::WinnerOverlay,
};
use crate::model::{GameAction, Round, Settings};
use crate::state::prompt::{resolve_add_round, resolve_confirm, resolve_settings};
use crate::state::{Prompt, PromptResult, session_store, storage};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let store = use_memo((), |_| session_store());
    let game = {
        let store = store.clone();
        use_reducer(move || storage::load(&**store))
    };
    // At most one prompt is open; every flow suspends on it and resumes once.
    let prompt = use_state(|| None::<Prompt>);

    // Persist after every accepted mutation
    {
        let game = game.clone();
        let store = store.clone();
        use_effect_with(game.version, move |_| {
            storage::save(&**store, &game);
            || ()
        });
    }
    // Announce a winner decided by the latest round
    {
        let prompt = prompt.clone();
        let outcome = game.pending_outcome;
        use_effect_with((game.version, outcome), move |_| {
            if outcome.is_decided() {
                prompt.set(Some(Prompt::Winner(outcome)));
            }
            || ()
        });
    }

    let open = |p: Prompt| {
        let prompt = prompt.clone();
        Callback::from(move |_: ()| {
            if prompt.is_none() {
                prompt.set(Some(p));
            }
        })
    };
    let open_add = open(Prompt::AddRound);
    let open_settings = open(Prompt::Settings);
    let open_reset = open(Prompt::Reset);
    let open_delete = {
        let prompt = prompt.clone();
        Callback::from(move |index: usize| {
            if prompt.is_none() {
                prompt.set(Some(Prompt::DeleteRound { index }));
            }
        })
    };

    let finish = {
        let prompt = prompt.clone();
        let game = game.clone();
        move |action: Option<GameAction>| {
            prompt.set(None);
            if let Some(action) = action {
                game.dispatch(action);
            }
        }
    };
    let on_add_result = {
        let finish = finish.clone();
        Callback::from(move |r: PromptResult<Round>| finish(resolve_add_round(r)))
    };
    let on_settings_result = {
        let finish = finish.clone();
        Callback::from(move |r: PromptResult<Settings>| finish(resolve_settings(r)))
    };
    let on_confirm_result = {
        let finish = finish.clone();
        let open_prompt = *prompt;
        Callback::from(move |r: PromptResult<()>| {
            if let Some(p) = open_prompt {
                finish(resolve_confirm(p, r));
            }
        })
    };

    let modal = match *prompt {
        None => html! {},
        Some(Prompt::AddRound) => html! { <AddRoundModal
            home_name={game.home_name.clone()}
            visitor_name={game.visitor_name.clone()}
            on_result={on_add_result}
        /> },
        Some(Prompt::Settings) => html! { <SettingsModal
            home_name={game.home_name.clone()}
            visitor_name={game.visitor_name.clone()}
            target={game.target}
            on_result={on_settings_result}
        /> },
        Some(Prompt::DeleteRound { .. }) => html! { <ConfirmModal
            title="Delete this round?"
            message="This cannot be undone."
            confirm_label="🗑 Delete"
            on_result={on_confirm_result}
        /> },
        Some(Prompt::Reset) => html! { <ConfirmModal
            title="Reset the game?"
            message="All recorded rounds will be lost."
            confirm_label="↺ Reset"
            on_result={on_confirm_result}
        /> },
        Some(Prompt::Winner(outcome)) => html! { <WinnerOverlay
            outcome={outcome}
            winner_name={game.winner_name(outcome).map(|n| AttrValue::from(n.to_string()))}
            score={game.winning_score(outcome)}
            on_result={on_confirm_result}
        /> },
    };

    html! {
        <div id="root" style="min-height:100vh; background:#0d1117; color:#e6edf3; font-family:sans-serif;">
            <HeaderBar target={game.target} on_open_settings={open_settings} on_reset={open_reset} />
            <div style="max-width:560px; margin:0 auto; padding:14px; display:flex; flex-direction:column; gap:14px;">
                <div style="display:flex; gap:12px;">
                    <ScoreBox name={game.home_name.clone()} total={game.home_total} winner={game.home_reached_target()} color="#58a6ff" />
                    <ScoreBox name={game.visitor_name.clone()} total={game.visitor_total} winner={game.visitor_reached_target()} color="#f0883e" />
                </div>
                <RoundsList
                    rounds={game.rounds.clone()}
                    home_name={game.home_name.clone()}
                    visitor_name={game.visitor_name.clone()}
                    on_delete={open_delete}
                    on_add={open_add}
                />
            </div>
            { modal }
        </div>
    }
}
