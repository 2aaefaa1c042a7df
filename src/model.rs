// Game state, the reducer every user flow goes through, and the pure helpers behind it.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use thiserror::Error;
use yew::Reducible;

use crate::util::{clog, parse_int_lenient};

pub const DEFAULT_TARGET: u32 = 200;
pub const MIN_TARGET: u32 = 50;
pub const DEFAULT_HOME_NAME: &str = "HOME";
pub const DEFAULT_VISITOR_NAME: &str = "VISITOR";

/// One recorded pair of scores. Rounds are appended or removed whole, never edited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub home: u32,
    pub visitor: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Outcome {
    /// Neither side has reached the target.
    #[default]
    None,
    HomeWins,
    VisitorWins,
    /// Both sides at or above the target with equal totals.
    Tie,
}

impl Outcome {
    pub fn is_decided(self) -> bool {
        !matches!(self, Outcome::None)
    }
}

/// Validated result of the settings prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub home_name: String,
    pub visitor_name: String,
    pub target: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("Add points for at least one team")]
    NoPoints,
    #[error("Team names cannot be empty")]
    EmptyTeamName,
    #[error("round {index} does not exist ({len} recorded)")]
    RoundOutOfRange { index: usize, len: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub target: u32,
    pub home_name: String,
    pub visitor_name: String,
    /// Insertion order defines round numbering.
    pub rounds: Vec<Round>,
    /// Cached sums over `rounds`; recomputed after every change to `rounds`.
    pub home_total: u64,
    pub visitor_total: u64,
    /// Bumped on every accepted mutation (not persisted).
    pub version: u64,
    /// Winner evaluation of the latest Add Round, waiting to be announced (not persisted).
    pub pending_outcome: Outcome,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            home_name: DEFAULT_HOME_NAME.to_string(),
            visitor_name: DEFAULT_VISITOR_NAME.to_string(),
            rounds: Vec::new(),
            home_total: 0,
            visitor_total: 0,
            version: 0,
            pending_outcome: Outcome::None,
        }
    }
}

impl GameState {
    pub fn calculate_totals(&mut self) {
        self.home_total = self.rounds.iter().map(|r| u64::from(r.home)).sum();
        self.visitor_total = self.rounds.iter().map(|r| u64::from(r.visitor)).sum();
    }

    pub fn check_winner(&self) -> Outcome {
        let target = u64::from(self.target);
        let home_in = self.home_total >= target;
        let visitor_in = self.visitor_total >= target;
        match (home_in, visitor_in) {
            (true, true) => match self.home_total.cmp(&self.visitor_total) {
                std::cmp::Ordering::Greater => Outcome::HomeWins,
                std::cmp::Ordering::Less => Outcome::VisitorWins,
                std::cmp::Ordering::Equal => Outcome::Tie,
            },
            (true, false) => Outcome::HomeWins,
            (false, true) => Outcome::VisitorWins,
            (false, false) => Outcome::None,
        }
    }

    /// Threshold check used for highlighting; both sides can be marked at once.
    pub fn home_reached_target(&self) -> bool {
        self.home_total >= u64::from(self.target)
    }

    pub fn visitor_reached_target(&self) -> bool {
        self.visitor_total >= u64::from(self.target)
    }

    pub fn winner_name(&self, outcome: Outcome) -> Option<&str> {
        match outcome {
            Outcome::HomeWins => Some(self.home_name.as_str()),
            Outcome::VisitorWins => Some(self.visitor_name.as_str()),
            Outcome::Tie | Outcome::None => None,
        }
    }

    /// Score shown in the announcement. A tie shows the shared total.
    pub fn winning_score(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::HomeWins | Outcome::Tie => self.home_total,
            Outcome::VisitorWins => self.visitor_total,
            Outcome::None => 0,
        }
    }

    pub fn add_round(&mut self, round: Round) {
        self.rounds.push(round);
        self.calculate_totals();
    }

    pub fn delete_round(&mut self, index: usize) -> Result<Round, FlowError> {
        if index >= self.rounds.len() {
            return Err(FlowError::RoundOutOfRange {
                index,
                len: self.rounds.len(),
            });
        }
        let removed = self.rounds.remove(index);
        self.calculate_totals();
        Ok(removed)
    }

    pub fn apply_settings(&mut self, settings: Settings) {
        self.home_name = settings.home_name;
        self.visitor_name = settings.visitor_name;
        self.target = settings.target;
    }

    pub fn clear_rounds(&mut self) {
        self.rounds.clear();
        self.calculate_totals();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameAction {
    AddRound(Round),
    DeleteRound(usize),
    ApplySettings(Settings),
    Reset,
    /// Winner announcement confirmed: start over with the same settings.
    NewGame,
    /// Winner announcement closed without starting over.
    DismissOutcome,
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        let mut new = (*self).clone();
        new.pending_outcome = Outcome::None;
        match action {
            AddRound(round) => {
                new.add_round(round);
                new.pending_outcome = new.check_winner();
                clog(&format!(
                    "round {} added: {}-{} (totals {}-{})",
                    new.rounds.len(),
                    round.home,
                    round.visitor,
                    new.home_total,
                    new.visitor_total
                ));
                if new.pending_outcome.is_decided() {
                    clog(&format!("target {} reached: {:?}", new.target, new.pending_outcome));
                }
            }
            DeleteRound(index) => match new.delete_round(index) {
                Ok(round) => clog(&format!("round {} deleted: {}-{}", index + 1, round.home, round.visitor)),
                Err(e) => {
                    clog(&format!("delete ignored: {}", e));
                    return self;
                }
            },
            ApplySettings(settings) => {
                new.apply_settings(settings);
                clog(&format!(
                    "settings: {} vs {} to {}",
                    new.home_name, new.visitor_name, new.target
                ));
            }
            Reset | NewGame => {
                new.clear_rounds();
                clog("rounds cleared");
            }
            DismissOutcome => {
                if !self.pending_outcome.is_decided() {
                    return self;
                }
            }
        }
        new.version = new.version.wrapping_add(1);
        Rc::new(new)
    }
}

/// Blank, non-numeric and negative inputs count as zero.
pub fn parse_score(raw: &str) -> u32 {
    parse_int_lenient(raw)
        .filter(|v| *v > 0)
        .map(|v| u32::try_from(v).unwrap_or(u32::MAX))
        .unwrap_or(0)
}

/// Invalid or too-small targets fall back to the default instead of being rejected.
pub fn parse_target(raw: &str) -> u32 {
    parse_int_lenient(raw)
        .filter(|v| *v >= i64::from(MIN_TARGET))
        .map(|v| u32::try_from(v).unwrap_or(u32::MAX))
        .unwrap_or(DEFAULT_TARGET)
}

pub fn validate_round(home_raw: &str, visitor_raw: &str) -> Result<Round, FlowError> {
    let round = Round {
        home: parse_score(home_raw),
        visitor: parse_score(visitor_raw),
    };
    if round.home == 0 && round.visitor == 0 {
        return Err(FlowError::NoPoints);
    }
    Ok(round)
}

pub fn validate_settings(
    home_name: &str,
    visitor_name: &str,
    target_raw: &str,
) -> Result<Settings, FlowError> {
    let home_name = home_name.trim();
    let visitor_name = visitor_name.trim();
    if home_name.is_empty() || visitor_name.is_empty() {
        return Err(FlowError::EmptyTeamName);
    }
    Ok(Settings {
        home_name: home_name.to_string(),
        visitor_name: visitor_name.to_string(),
        target: parse_target(target_raw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_totals(home: u32, visitor: u32, target: u32) -> GameState {
        let mut gs = GameState {
            target,
            rounds: vec![Round { home, visitor }],
            ..Default::default()
        };
        gs.calculate_totals();
        gs
    }

    fn dispatch(state: GameState, action: GameAction) -> GameState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn winner_table() {
        assert_eq!(with_totals(200, 150, 200).check_winner(), Outcome::HomeWins);
        assert_eq!(with_totals(200, 200, 200).check_winner(), Outcome::Tie);
        assert_eq!(with_totals(150, 90, 200).check_winner(), Outcome::None);
        assert_eq!(with_totals(250, 260, 200).check_winner(), Outcome::VisitorWins);
        assert_eq!(with_totals(120, 210, 200).check_winner(), Outcome::VisitorWins);
    }

    #[test]
    fn highlight_marks_both_sides_independently() {
        let gs = with_totals(250, 260, 200);
        assert!(gs.home_reached_target());
        assert!(gs.visitor_reached_target());
        let gs = with_totals(199, 0, 200);
        assert!(!gs.home_reached_target());
    }

    #[test]
    fn totals_follow_appends_and_removals() {
        let mut gs = GameState::default();
        let rounds = [(10, 0), (0, 25), (40, 5), (3, 3), (0, 70)];
        for (home, visitor) in rounds {
            gs = dispatch(gs, GameAction::AddRound(Round { home, visitor }));
        }
        assert_eq!((gs.home_total, gs.visitor_total), (53, 103));
        gs = dispatch(gs, GameAction::DeleteRound(2));
        gs = dispatch(gs, GameAction::DeleteRound(0));
        let home: u64 = gs.rounds.iter().map(|r| u64::from(r.home)).sum();
        let visitor: u64 = gs.rounds.iter().map(|r| u64::from(r.visitor)).sum();
        assert_eq!((gs.home_total, gs.visitor_total), (home, visitor));
        assert_eq!((home, visitor), (3, 98));
    }

    #[test]
    fn delete_shifts_following_rounds_down() {
        let mut gs = GameState::default();
        for home in 1..=4 {
            gs.add_round(Round { home, visitor: 0 });
        }
        let removed = gs.delete_round(1).unwrap();
        assert_eq!(removed.home, 2);
        let homes: Vec<u32> = gs.rounds.iter().map(|r| r.home).collect();
        assert_eq!(homes, vec![1, 3, 4]);
    }

    #[test]
    fn out_of_range_delete_is_rejected_without_change() {
        let mut gs = GameState::default();
        gs.add_round(Round { home: 5, visitor: 5 });
        assert_eq!(
            gs.clone().delete_round(3),
            Err(FlowError::RoundOutOfRange { index: 3, len: 1 })
        );
        let before = Rc::new(gs);
        let after = before.clone().reduce(GameAction::DeleteRound(3));
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn zero_zero_round_is_rejected() {
        assert_eq!(validate_round("0", ""), Err(FlowError::NoPoints));
        assert_eq!(validate_round("abc", "-4"), Err(FlowError::NoPoints));
        assert_eq!(validate_round("", "15"), Ok(Round { home: 0, visitor: 15 }));
        assert_eq!(validate_round("30pts", "x"), Ok(Round { home: 30, visitor: 0 }));
    }

    #[test]
    fn settings_reject_blank_names_but_default_bad_target() {
        assert_eq!(
            validate_settings("  ", "VISITOR", "300"),
            Err(FlowError::EmptyTeamName)
        );
        let s = validate_settings(" Ana ", "Luis", "abc").unwrap();
        assert_eq!(s.home_name, "Ana");
        assert_eq!(s.target, DEFAULT_TARGET);
        assert_eq!(validate_settings("A", "B", "20").unwrap().target, DEFAULT_TARGET);
        assert_eq!(validate_settings("A", "B", "50").unwrap().target, 50);
        assert_eq!(validate_settings("A", "B", "150").unwrap().target, 150);
    }

    #[test]
    fn settings_leave_rounds_untouched() {
        let mut gs = GameState::default();
        gs.add_round(Round { home: 40, visitor: 10 });
        let gs = dispatch(
            gs,
            GameAction::ApplySettings(Settings {
                home_name: "Ana".into(),
                visitor_name: "Luis".into(),
                target: 100,
            }),
        );
        assert_eq!(gs.rounds.len(), 1);
        assert_eq!((gs.home_total, gs.visitor_total), (40, 10));
        assert_eq!(gs.target, 100);
    }

    #[test]
    fn home_wins_scenario_then_new_game() {
        let gs = GameState::default();
        let gs = dispatch(gs, GameAction::AddRound(Round { home: 100, visitor: 80 }));
        assert_eq!(gs.pending_outcome, Outcome::None);
        let gs = dispatch(gs, GameAction::AddRound(Round { home: 105, visitor: 60 }));
        assert_eq!((gs.home_total, gs.visitor_total), (205, 140));
        assert_eq!(gs.pending_outcome, Outcome::HomeWins);
        assert_eq!(gs.winner_name(gs.pending_outcome), Some("HOME"));
        assert_eq!(gs.winning_score(gs.pending_outcome), 205);

        let gs = dispatch(gs, GameAction::NewGame);
        assert!(gs.rounds.is_empty());
        assert_eq!((gs.home_total, gs.visitor_total), (0, 0));
        assert_eq!(gs.pending_outcome, Outcome::None);
        assert_eq!(gs.target, DEFAULT_TARGET);
    }

    #[test]
    fn dismissing_the_announcement_keeps_rounds() {
        let gs = dispatch(
            GameState::default(),
            GameAction::AddRound(Round { home: 0, visitor: 230 }),
        );
        assert_eq!(gs.pending_outcome, Outcome::VisitorWins);
        let gs = dispatch(gs, GameAction::DismissOutcome);
        assert_eq!(gs.pending_outcome, Outcome::None);
        assert_eq!(gs.rounds.len(), 1);
        assert_eq!(gs.check_winner(), Outcome::VisitorWins);
    }

    #[test]
    fn every_accepted_action_bumps_version() {
        let gs = GameState::default();
        let gs = dispatch(gs, GameAction::AddRound(Round { home: 1, visitor: 0 }));
        assert_eq!(gs.version, 1);
        let gs = dispatch(gs, GameAction::Reset);
        assert_eq!(gs.version, 2);
        let gs = dispatch(gs, GameAction::DismissOutcome);
        assert_eq!(gs.version, 2);
    }

    #[test]
    fn reset_clears_rounds_and_totals_but_keeps_settings() {
        let mut gs = GameState {
            target: 150,
            home_name: "Ana".into(),
            ..Default::default()
        };
        gs.add_round(Round { home: 60, visitor: 0 });
        gs.add_round(Round { home: 0, visitor: 45 });
        let gs = dispatch(gs, GameAction::Reset);
        assert!(gs.rounds.is_empty());
        assert_eq!((gs.home_total, gs.visitor_total), (0, 0));
        assert_eq!(gs.target, 150);
        assert_eq!(gs.home_name, "Ana");
    }
}
