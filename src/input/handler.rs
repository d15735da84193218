use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::session::{Mode, PromptKind, Session};

pub fn handle_event(session: &mut Session, event: Event) {
    match event {
        Event::Key(key) => {
            // Clear any message on keypress
            session.clear_message();
            handle_key(session, key);
        }
        Event::Resize(_, _) => {
            // Resize is handled by the renderer
        }
        _ => {}
    }
}

fn handle_key(session: &mut Session, key: KeyEvent) {
    // Command shortcuts work from any mode
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        handle_shortcut(session, key);
        return;
    }

    match session.mode {
        Mode::Edit => handle_edit_mode(session, key),
        Mode::Prompt(_) => handle_prompt_mode(session, key),
    }
}

fn handle_shortcut(session: &mut Session, key: KeyEvent) {
    match key.code {
        KeyCode::Char('n') => session.new_tab(),
        KeyCode::Char('o') => session.open_prompt(PromptKind::OpenFile),
        KeyCode::Char('s') => session.open_prompt(PromptKind::SaveFile),
        KeyCode::Char('r') => session.run_code(),
        KeyCode::Char('p') => session.open_prompt(PromptKind::InstallPackage),
        KeyCode::Char('t') => session.toggle_theme(),
        KeyCode::Char('q') => session.quit(),

        // Tab selection
        KeyCode::Left => session.prev_tab(),
        KeyCode::Right => session.next_tab(),

        _ => {}
    }
}

fn handle_edit_mode(session: &mut Session, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => session.insert_char(c),
        KeyCode::Enter => session.insert_newline(),
        KeyCode::Tab => session.insert_tab_stop(),
        KeyCode::Backspace => session.delete_char_backward(),

        KeyCode::Left => session.move_left(),
        KeyCode::Right => session.move_right(),
        KeyCode::Up => session.move_up(),
        KeyCode::Down => session.move_down(),

        KeyCode::F(1) => session.about(),

        _ => {}
    }
}

fn handle_prompt_mode(session: &mut Session, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => session.cancel_prompt(),
        KeyCode::Enter => session.submit_prompt(),

        KeyCode::Backspace => {
            session.prompt_input.pop();
        }

        KeyCode::Char(c) => {
            session.prompt_input.push(c);
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::launch::TerminalSpawner;
    use std::io;
    use std::path::Path;

    struct NoopSpawner;

    impl TerminalSpawner for NoopSpawner {
        fn spawn_in_terminal(&self, _program: &str, _arg: &Path) -> io::Result<()> {
            Ok(())
        }
    }

    fn session() -> Session {
        Session::new(Settings::default(), Box::new(NoopSpawner))
    }

    fn press(session: &mut Session, code: KeyCode) {
        handle_event(session, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn press_ctrl(session: &mut Session, code: KeyCode) {
        handle_event(
            session,
            Event::Key(KeyEvent::new(code, KeyModifiers::CONTROL)),
        );
    }

    #[test]
    fn ctrl_n_adds_a_tab() {
        let mut session = session();
        press_ctrl(&mut session, KeyCode::Char('n'));
        assert_eq!(session.tabs.len(), 2);
        assert_eq!(session.active, 1);
    }

    #[test]
    fn typing_inserts_into_active_buffer() {
        let mut session = session();
        for c in "hi".chars() {
            press(&mut session, KeyCode::Char(c));
        }
        press(&mut session, KeyCode::Enter);
        assert_eq!(session.active_tab().buffer.content(), "hi\n");
    }

    #[test]
    fn tab_key_inserts_spaces() {
        let mut session = session();
        session.settings.tab_width = 4;
        press(&mut session, KeyCode::Tab);
        assert_eq!(session.active_tab().buffer.content(), "    ");
    }

    #[test]
    fn prompt_captures_typing_instead_of_buffer() {
        let mut session = session();
        press_ctrl(&mut session, KeyCode::Char('o'));
        assert_eq!(session.mode, Mode::Prompt(PromptKind::OpenFile));

        for c in "a.py".chars() {
            press(&mut session, KeyCode::Char(c));
        }
        assert_eq!(session.prompt_input, "a.py");
        assert_eq!(session.active_tab().buffer.content(), "");
    }

    #[test]
    fn esc_cancels_prompt() {
        let mut session = session();
        press_ctrl(&mut session, KeyCode::Char('p'));
        press(&mut session, KeyCode::Char('x'));
        press(&mut session, KeyCode::Esc);
        assert_eq!(session.mode, Mode::Edit);
        assert!(session.prompt_input.is_empty());
    }

    #[test]
    fn submitting_bad_open_path_reports_error() {
        let mut session = session();
        press_ctrl(&mut session, KeyCode::Char('o'));
        for c in "/no/such/wren-file.py".chars() {
            press(&mut session, KeyCode::Char(c));
        }
        press(&mut session, KeyCode::Enter);

        assert_eq!(session.tabs.len(), 1);
        assert!(session.message.clone().unwrap().starts_with("Error"));
    }

    #[test]
    fn ctrl_arrows_switch_tabs() {
        let mut session = session();
        press_ctrl(&mut session, KeyCode::Char('n'));
        press_ctrl(&mut session, KeyCode::Left);
        assert_eq!(session.active, 0);
        press_ctrl(&mut session, KeyCode::Right);
        assert_eq!(session.active, 1);
    }

    #[test]
    fn ctrl_t_toggles_theme() {
        let mut session = session();
        press_ctrl(&mut session, KeyCode::Char('t'));
        assert_eq!(session.theme.name, "light");
    }

    #[test]
    fn ctrl_q_quits() {
        let mut session = session();
        press_ctrl(&mut session, KeyCode::Char('q'));
        assert!(!session.running);
    }

    #[test]
    fn f1_shows_about() {
        let mut session = session();
        press(&mut session, KeyCode::F(1));
        assert!(session.message.is_some());
    }
}
