use std::mem;

use cheonja_core::IdRange;
use cheonja_game::GameAction;

use crate::state::{RangeInput, Screen, Settings};

pub(crate) mod handler;

#[derive(Debug, Clone)]
pub(crate) enum Action {
    UpdateRangeInput(RangeInput),
    UsePreset(IdRange),
    OpenScreen(Screen),
    BackToRangeInput,
    Quiz(QuizAction),
    StartGame,
    Game(GameAction),
    UpdateSettings(Settings),
    DismissMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum QuizAction {
    Answer(usize),
    Next,
    Restart,
    Exit,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ActionRequestQueue, QuizAction};

    #[test]
    fn test_take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::StartGame);
        queue.request(Action::Quiz(QuizAction::Next));

        let drained = queue.take_all();
        assert_eq!(drained.len(), 2);
        assert!(matches!(drained[0], Action::StartGame));
        assert!(matches!(drained[1], Action::Quiz(QuizAction::Next)));

        assert!(queue.take_all().is_empty());
    }
}
