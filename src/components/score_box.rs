use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ScoreBoxProps {
    pub name: AttrValue,
    pub total: u64,
    /// Total at or above the target.
    pub winner: bool,
    pub color: &'static str,
}

#[function_component]
pub fn ScoreBox(props: &ScoreBoxProps) -> Html {
    let border = if props.winner {
        "border:2px solid #d4af37; box-shadow:0 0 12px rgba(212,175,55,0.5);"
    } else {
        "border:2px solid #30363d;"
    };
    let class = if props.winner { "score-box winner" } else { "score-box" };
    html! {
        <div class={class} style={format!("flex:1; background:rgba(22,27,34,0.9); {} border-radius:10px; padding:12px 10px; display:flex; flex-direction:column; align-items:center; gap:6px;", border)}>
            <span style={format!("font-size:14px; font-weight:600; letter-spacing:1px; color:{};", props.color)}>{ props.name.to_string() }</span>
            <span style="font-size:44px; font-weight:700; font-variant-numeric:tabular-nums;">{ props.total }</span>
            { if props.winner { html!{ <span style="font-size:16px;">{"🏆"}</span> } } else { html!{} } }
        </div>
    }
}
