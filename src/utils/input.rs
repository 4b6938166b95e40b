use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Rows moved per wheel notch.
pub const WHEEL_STEP: i16 = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,

    PointerDown { col: u16, row: u16 },
    PointerDrag { col: u16, row: u16 },
    PointerUp { col: u16, row: u16 },
    PointerMoved { col: u16, row: u16 },
    ScrollBy(i16),

    FocusNext,
    Blur,
    Char(char),
    Backspace,
    Enter,

    None,
}

/// Keys only drive the contact form and quitting. While a form field has
/// focus, printable keys are text.
pub fn map_key(ev: KeyEvent, form_focused: bool) -> Action {
    if ev.kind == KeyEventKind::Release {
        return Action::None;
    }
    if ev.modifiers.contains(KeyModifiers::CONTROL) {
        return match ev.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Action::Quit,
            _ => Action::None,
        };
    }

    if form_focused {
        return match ev.code {
            KeyCode::Esc => Action::Blur,
            KeyCode::Tab => Action::FocusNext,
            KeyCode::Enter => Action::Enter,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Char(c) => Action::Char(c),
            _ => Action::None,
        };
    }

    match ev.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        KeyCode::Tab => Action::FocusNext,
        _ => Action::None,
    }
}

pub fn map_mouse(ev: MouseEvent) -> Action {
    let (col, row) = (ev.column, ev.row);
    match ev.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::PointerDown { col, row },
        MouseEventKind::Drag(MouseButton::Left) => Action::PointerDrag { col, row },
        MouseEventKind::Up(MouseButton::Left) => Action::PointerUp { col, row },
        MouseEventKind::Moved => Action::PointerMoved { col, row },
        MouseEventKind::ScrollDown => Action::ScrollBy(WHEEL_STEP),
        MouseEventKind::ScrollUp => Action::ScrollBy(-WHEEL_STEP),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn q_is_text_inside_the_form() {
        assert_eq!(map_key(key(KeyCode::Char('q')), false), Action::Quit);
        assert_eq!(map_key(key(KeyCode::Char('q')), true), Action::Char('q'));
        assert_eq!(map_key(key(KeyCode::Esc), true), Action::Blur);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut ev = key(KeyCode::Char('c'));
        ev.modifiers = KeyModifiers::CONTROL;
        assert_eq!(map_key(ev, true), Action::Quit);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut ev = key(KeyCode::Char('q'));
        ev.kind = KeyEventKind::Release;
        assert_eq!(map_key(ev, false), Action::None);
    }

    #[test]
    fn left_button_lifecycle() {
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Down(MouseButton::Left))),
            Action::PointerDown { col: 7, row: 3 }
        );
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Drag(MouseButton::Left))),
            Action::PointerDrag { col: 7, row: 3 }
        );
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Up(MouseButton::Left))),
            Action::PointerUp { col: 7, row: 3 }
        );
        assert_eq!(map_mouse(mouse(MouseEventKind::Down(MouseButton::Right))), Action::None);
        assert_eq!(map_mouse(mouse(MouseEventKind::ScrollUp)), Action::ScrollBy(-WHEEL_STEP));
    }
}
