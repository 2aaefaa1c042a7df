use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderBarProps {
    pub target: u32,
    pub on_open_settings: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component]
pub fn HeaderBar(props: &HeaderBarProps) -> Html {
    let settings_cb = {
        let cb = props.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div id="top-bar" style="display:flex; align-items:center; justify-content:space-between; gap:8px; background:rgba(22,27,34,0.95); border-bottom:1px solid #30363d; padding:10px 14px;">
        <button onclick={settings_cb} title="Settings">{"⚙ Settings"}</button>
        <div style="display:flex; flex-direction:column; align-items:center;">
            <span style="font-size:11px; opacity:0.7; letter-spacing:1px;">{"TARGET"}</span>
            <span style="font-size:20px; font-weight:600; color:#d4af37;">{ props.target }</span>
        </div>
        <button onclick={reset_cb} title="Reset" style="background:#3b1d1d; border:1px solid #5d2d2d;">{"↺ Reset"}</button>
    </div>}
}
