use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::msg::Msg;

/// What a key press asks the application to do
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Dispatch(Msg),
    Quit,
}

/// Translate a terminal key press into an action, if it is bound
pub fn translate_key(key: &KeyEvent) -> Option<UiAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(UiAction::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(UiAction::Quit),
        KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::Right => {
            Some(UiAction::Dispatch(Msg::NextPage))
        }
        KeyCode::Char('h') | KeyCode::Char('p') | KeyCode::Left => {
            Some(UiAction::Dispatch(Msg::PrevPage))
        }
        KeyCode::Char('+') => Some(UiAction::Dispatch(Msg::IncreaseCounter(1))),
        KeyCode::Char('-') => Some(UiAction::Dispatch(Msg::DecreaseCounter(1))),
        _ => None,
    }
}
