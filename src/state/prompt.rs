// Modal prompts: each user flow suspends on exactly one prompt and resumes once
// with a typed result.
use crate::model::{GameAction, Outcome, Round, Settings};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prompt {
    AddRound,
    /// Index captured when the delete button was rendered.
    DeleteRound { index: usize },
    Settings,
    Reset,
    Winner(Outcome),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptResult<T> {
    Confirmed(T),
    Cancelled,
}

impl<T> PromptResult<T> {
    pub fn into_action(self, f: impl FnOnce(T) -> GameAction) -> Option<GameAction> {
        match self {
            PromptResult::Confirmed(v) => Some(f(v)),
            PromptResult::Cancelled => None,
        }
    }
}

pub fn resolve_add_round(result: PromptResult<Round>) -> Option<GameAction> {
    result.into_action(GameAction::AddRound)
}

pub fn resolve_settings(result: PromptResult<Settings>) -> Option<GameAction> {
    result.into_action(GameAction::ApplySettings)
}

/// Confirmation for the destructive prompts. Other prompts carry their own payload.
pub fn resolve_confirm(prompt: Prompt, result: PromptResult<()>) -> Option<GameAction> {
    match (prompt, result) {
        (Prompt::DeleteRound { index }, PromptResult::Confirmed(())) => {
            Some(GameAction::DeleteRound(index))
        }
        (Prompt::Reset, PromptResult::Confirmed(())) => Some(GameAction::Reset),
        (Prompt::Winner(_), PromptResult::Confirmed(())) => Some(GameAction::NewGame),
        // Closing the announcement keeps the rounds; it reappears after the next round.
        (Prompt::Winner(_), PromptResult::Cancelled) => Some(GameAction::DismissOutcome),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_prompts_produce_no_mutation() {
        assert_eq!(resolve_add_round(PromptResult::Cancelled), None);
        assert_eq!(resolve_settings(PromptResult::Cancelled), None);
        assert_eq!(
            resolve_confirm(Prompt::DeleteRound { index: 0 }, PromptResult::Cancelled),
            None
        );
        assert_eq!(resolve_confirm(Prompt::Reset, PromptResult::Cancelled), None);
    }

    #[test]
    fn confirmed_prompts_map_to_actions() {
        let round = Round { home: 15, visitor: 0 };
        assert_eq!(
            resolve_add_round(PromptResult::Confirmed(round)),
            Some(GameAction::AddRound(round))
        );
        assert_eq!(
            resolve_confirm(Prompt::DeleteRound { index: 2 }, PromptResult::Confirmed(())),
            Some(GameAction::DeleteRound(2))
        );
        assert_eq!(
            resolve_confirm(Prompt::Reset, PromptResult::Confirmed(())),
            Some(GameAction::Reset)
        );
    }

    #[test]
    fn winner_prompt_resolves_either_way() {
        let prompt = Prompt::Winner(Outcome::Tie);
        assert_eq!(
            resolve_confirm(prompt, PromptResult::Confirmed(())),
            Some(GameAction::NewGame)
        );
        assert_eq!(
            resolve_confirm(prompt, PromptResult::Cancelled),
            Some(GameAction::DismissOutcome)
        );
    }
}
