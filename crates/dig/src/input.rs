//! Key mapping from terminal events to actions

use crate::app::Mode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dig_core::{Movement, Step};

/// Everything a key press can ask the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Vertical movement in the focused area
    Move(Movement),
    ScrollLeft,
    ScrollRight,
    ToggleFocus,
    FocusList,
    ExpandSide(isize),
    ToggleSide,
    StartFind,
    FindPush(char),
    FindPop,
    FindConfirm,
    FindCancel,
    Quit,
}

pub fn map_key(key: KeyEvent, mode: Mode) -> Option<Action> {
    match mode {
        Mode::Normal => map_normal(key),
        Mode::Find => map_find(key),
    }
}

fn map_normal(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('f') => Some(Action::StartFind),
            KeyCode::Char('u') => Some(Action::Move(Movement::Backward(Step::HalfPage))),
            KeyCode::Char('d') => Some(Action::Move(Movement::Forward(Step::HalfPage))),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Up | KeyCode::Char('k') => Action::Move(Movement::Backward(Step::Line)),
        KeyCode::Down | KeyCode::Char('j') => Action::Move(Movement::Forward(Step::Line)),
        KeyCode::PageUp | KeyCode::Char('b') => Action::Move(Movement::Backward(Step::Page)),
        KeyCode::PageDown | KeyCode::Char('f') | KeyCode::Char(' ') => {
            Action::Move(Movement::Forward(Step::Page))
        }
        KeyCode::Char('u') => Action::Move(Movement::Backward(Step::HalfPage)),
        KeyCode::Char('d') => Action::Move(Movement::Forward(Step::HalfPage)),
        KeyCode::Home | KeyCode::Char('g') => Action::Move(Movement::First),
        KeyCode::End | KeyCode::Char('G') => Action::Move(Movement::Last),
        KeyCode::Left | KeyCode::Char('h') => Action::ScrollLeft,
        KeyCode::Right | KeyCode::Char('l') => Action::ScrollRight,
        KeyCode::Tab | KeyCode::Enter | KeyCode::Char('.') => Action::ToggleFocus,
        KeyCode::Esc => Action::FocusList,
        KeyCode::Char('<') => Action::ExpandSide(-1),
        KeyCode::Char('>') => Action::ExpandSide(1),
        KeyCode::Char('s') => Action::ToggleSide,
        KeyCode::Char('/') => Action::StartFind,
        _ => return None,
    };
    Some(action)
}

fn map_find(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') | KeyCode::Char('k') => {
                Some(Action::FindCancel)
            }
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Action::FindCancel),
        KeyCode::Enter => Some(Action::FindConfirm),
        KeyCode::Backspace => Some(Action::FindPop),
        KeyCode::Char(ch) => Some(Action::FindPush(ch)),
        _ => None,
    }
}
