use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ModalFrameProps {
    pub title: AttrValue,
    /// Escape key. Not wired for prompts that must be answered explicitly.
    #[prop_or_default]
    pub on_escape: Option<Callback<()>>,
    #[prop_or("#30363d")]
    pub accent: &'static str,
    pub children: Children,
}

pub fn is_cancel_key(key: &str) -> bool {
    // "Esc" is what older Edge reports
    matches!(key, "Escape" | "Esc")
}

/// Backdrop + card shared by every prompt. Only one is mounted at a time.
#[function_component]
pub fn ModalFrame(props: &ModalFrameProps) -> Html {
    let card_ref = use_node_ref();

    // Focus the card on open so key presses reach it before any control is clicked.
    {
        let card_ref = card_ref.clone();
        use_effect_with((), move |_| {
            if let Some(card) = card_ref.cast::<web_sys::HtmlElement>() {
                let _ = card.focus();
            }
            || ()
        });
    }

    let keydown = {
        let cb = props.on_escape.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_cancel_key(&e.key()) {
                if let Some(cb) = &cb {
                    cb.emit(());
                }
            }
        })
    };
    html! {<div onkeydown={keydown} style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.6); z-index:50;">
        <div ref={card_ref} tabindex="-1" style={format!("outline:none; background:#161b22; border:2px solid {}; border-radius:12px; padding:18px 22px; min-width:300px; max-width:420px; width:90%; display:flex; flex-direction:column; gap:14px;", props.accent)}>
            <h3 style="margin:0; font-size:18px; text-align:center;">{ props.title.to_string() }</h3>
            { for props.children.iter() }
        </div>
    </div>}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_spellings_cancel() {
        assert!(is_cancel_key("Escape"));
        assert!(is_cancel_key("Esc"));
        assert!(!is_cancel_key("Enter"));
        assert!(!is_cancel_key("e"));
    }
}
