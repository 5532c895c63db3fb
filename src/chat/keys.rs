use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means for the chat input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Submit the current input. The key's newline is swallowed.
    Submit,
    /// Extend the text with a line break.
    InsertNewline,
    /// Ordinary editing, handled by the input widget.
    Edit,
    /// Not for the input (global shortcuts, key releases).
    Ignore,
}

/// Modifiers that turn Enter into "extend the text". Many terminals never
/// report Shift together with Enter, so Alt works as well.
const EXTEND_MODIFIERS: KeyModifiers = KeyModifiers::SHIFT.union(KeyModifiers::ALT);

pub fn classify(key: &KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::Ignore;
    }

    match key.code {
        KeyCode::Enter if key.modifiers.intersects(EXTEND_MODIFIERS) => KeyAction::InsertNewline,
        KeyCode::Enter => KeyAction::Submit,
        _ if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            KeyAction::Ignore
        }
        _ => KeyAction::Edit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_enter_submits() {
        assert_eq!(
            classify(&key(KeyCode::Enter, KeyModifiers::NONE)),
            KeyAction::Submit
        );
    }

    #[test]
    fn test_extended_enter_inserts_newline() {
        assert_eq!(
            classify(&key(KeyCode::Enter, KeyModifiers::SHIFT)),
            KeyAction::InsertNewline
        );
        assert_eq!(
            classify(&key(KeyCode::Enter, KeyModifiers::ALT)),
            KeyAction::InsertNewline
        );
    }

    #[test]
    fn test_shortcuts_pass_through() {
        assert_eq!(
            classify(&key(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            KeyAction::Ignore
        );
        assert_eq!(
            classify(&key(KeyCode::Char('1'), KeyModifiers::ALT)),
            KeyAction::Ignore
        );
        assert_eq!(
            classify(&key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            KeyAction::Edit
        );
        assert_eq!(
            classify(&key(KeyCode::Backspace, KeyModifiers::NONE)),
            KeyAction::Edit
        );
    }
}
