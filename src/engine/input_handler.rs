use ratatui::backend::Backend;
use termion::event::Key;

use crate::engine::app_engine::AppEngine;
use crate::menu::Selection;
use crate::ui::ui::{Focus, InputMode};

/// Keyboard front door. Confirmation dialogs capture everything first, then
/// the global bindings apply, then whatever panel holds focus.
pub fn handle_key<B: Backend>(engine: &mut AppEngine<B>, key: Key) {
    if engine.confirm.is_some() {
        handle_confirm_key(engine, key);
        return;
    }

    match key {
        Key::Ctrl('c') => {
            engine.exit = true;
        },
        Key::Esc => {
            if engine.input_mode == InputMode::SaveName {
                engine.cancel_save_prompt();
            } else {
                engine.exit = true;
            }
        },
        Key::Char('\t') => {
            engine.cycle_focus();
        },
        Key::F(2) => {
            engine.add_all();
        },
        Key::F(3) => {
            engine.start_spin();
        },
        Key::F(4) => {
            engine.copy_result();
        },
        Key::F(5) => {
            engine.begin_save_prompt();
        },
        Key::F(6) => {
            engine.request_reset();
        },
        Key::F(7) => {
            engine.toggle_language();
        },
        Key::F(8) => {
            engine.toggle_sound();
        },
        key => {
            match engine.focus {
                Focus::Input => handle_input_key(engine, key),
                Focus::Options => handle_options_key(engine, key),
                Focus::Saved => handle_saved_key(engine, key)
            }
        }
    }
}

fn handle_confirm_key<B: Backend>(engine: &mut AppEngine<B>, key: Key) {
    match key {
        Key::Char('y') | Key::Char('Y') | Key::Char('\n') => {
            engine.apply_confirm();
        },
        _ => {
            engine.cancel_confirm();
        }
    }
}

fn handle_input_key<B: Backend>(engine: &mut AppEngine<B>, key: Key) {
    match key {
        Key::Char('\n') => {
            engine.submit_input();
        },
        Key::Char(c) => {
            engine.input.add_char(c);
        },
        Key::Backspace => {
            engine.input.delete_char();
        },
        _ => {}
    }
}

fn handle_options_key<B: Backend>(engine: &mut AppEngine<B>, key: Key) {
    match key {
        Key::Up => {
            engine.select_option_up();
        },
        Key::Down => {
            engine.select_option_down();
        },
        Key::Backspace | Key::Delete => {
            engine.remove_selected_option();
        },
        _ => {}
    }
}

fn handle_saved_key<B: Backend>(engine: &mut AppEngine<B>, key: Key) {
    match key {
        Key::Up => {
            engine.saved_menu.select_up();
        },
        Key::Down => {
            engine.saved_menu.select_down();
        },
        Key::Char('\n') => {
            engine.load_selected_saved();
        },
        Key::Delete => {
            engine.request_delete_selected_saved();
        },
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use termion::event::Key;

    use crate::engine::app_engine::build_test_engine;
    use crate::engine::input_handler::handle_key;
    use crate::storage::Storage;
    use crate::ui::ui::{Focus, InputMode};

    fn build_test_storage(dir: &tempfile::TempDir) -> Storage {
        Storage::new(dir.path().join("storage.json"))
    }

    #[test]
    fn test_typing_and_enter_adds_an_option() {
        // GIVEN a fresh engine with the input focused
        let dir = tempfile::tempdir().unwrap();
        let mut engine = build_test_engine(build_test_storage(&dir));

        // WHEN the user types "Pho" and presses Enter
        for c in "Pho".chars() {
            handle_key(&mut engine, Key::Char(c));
        }
        handle_key(&mut engine, Key::Char('\n'));

        // THEN the option lands in the list and the input resets
        assert_eq!(&["Pho".to_owned()], engine.options.entries());
        assert_eq!("", engine.input.get_input());
    }

    #[test]
    fn test_tab_cycles_focus() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = build_test_engine(build_test_storage(&dir));

        assert_eq!(Focus::Input, engine.focus);
        handle_key(&mut engine, Key::Char('\t'));
        assert_eq!(Focus::Options, engine.focus);
        handle_key(&mut engine, Key::Char('\t'));
        assert_eq!(Focus::Saved, engine.focus);
        handle_key(&mut engine, Key::Char('\t'));
        assert_eq!(Focus::Input, engine.focus);
    }

    #[test]
    fn test_f3_starts_a_run() {
        // GIVEN an engine holding 3 options
        let dir = tempfile::tempdir().unwrap();
        let mut engine = build_test_engine(build_test_storage(&dir));
        engine.options.add_many("A, B, C");

        // WHEN F3 is pressed
        handle_key(&mut engine, Key::F(3));

        // THEN a run is active
        assert!(engine.spin.is_some());
    }

    #[test]
    fn test_delete_removes_the_selected_option() {
        // GIVEN the options panel focused on the middle entry
        let dir = tempfile::tempdir().unwrap();
        let mut engine = build_test_engine(build_test_storage(&dir));
        engine.options.add_many("A, B, C");
        engine.focus = Focus::Options;
        engine.options_index = 1;

        // WHEN Delete is pressed
        handle_key(&mut engine, Key::Delete);

        // THEN the selected entry is gone and the rest keep their order
        assert_eq!(&["A".to_owned(), "C".to_owned()], engine.options.entries());
    }

    #[test]
    fn test_escape_cancels_the_save_prompt_before_quitting() {
        // GIVEN an engine sitting in the save-name prompt
        let dir = tempfile::tempdir().unwrap();
        let mut engine = build_test_engine(build_test_storage(&dir));
        engine.options.add("A");
        handle_key(&mut engine, Key::F(5));
        assert_eq!(InputMode::SaveName, engine.input_mode);

        // WHEN Escape is pressed once
        handle_key(&mut engine, Key::Esc);

        // THEN only the prompt closes
        assert_eq!(InputMode::AddOption, engine.input_mode);
        assert!(!engine.exit);

        // AND a second Escape quits
        handle_key(&mut engine, Key::Esc);
        assert!(engine.exit);
    }

    #[test]
    fn test_confirm_dialog_captures_keys() {
        // GIVEN a pending reset dialog
        let dir = tempfile::tempdir().unwrap();
        let mut engine = build_test_engine(build_test_storage(&dir));
        engine.options.add_many("A, B");
        handle_key(&mut engine, Key::F(6));
        assert!(engine.confirm.is_some());

        // WHEN any non-confirming key is pressed
        handle_key(&mut engine, Key::Char('n'));

        // THEN the dialog closes without applying
        assert!(engine.confirm.is_none());
        assert_eq!(2, engine.options.len());

        // AND WHEN the dialog is re-opened and confirmed with 'y'
        handle_key(&mut engine, Key::F(6));
        handle_key(&mut engine, Key::Char('y'));

        // THEN the reset goes through
        assert!(engine.options.is_empty());
    }

    #[test]
    fn test_saved_panel_enter_loads_the_selection() {
        // GIVEN an archive entry and the saved panel focused
        let dir = tempfile::tempdir().unwrap();
        let mut engine = build_test_engine(build_test_storage(&dir));
        engine.options.add_many("A, B");
        handle_key(&mut engine, Key::F(5));
        for c in "week1".chars() {
            handle_key(&mut engine, Key::Char(c));
        }
        handle_key(&mut engine, Key::Char('\n'));
        engine.options.add("C");

        // WHEN the saved entry is loaded via Enter
        engine.focus = Focus::Saved;
        handle_key(&mut engine, Key::Char('\n'));

        // THEN the live list reverts to the snapshot
        assert_eq!(&["A".to_owned(), "B".to_owned()], engine.options.entries());
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = build_test_engine(build_test_storage(&dir));
        handle_key(&mut engine, Key::Ctrl('c'));
        assert!(engine.exit);
    }

    #[test]
    fn test_f7_toggles_display_language() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = build_test_engine(build_test_storage(&dir));
        assert_eq!("en", engine.language.code());
        handle_key(&mut engine, Key::F(7));
        assert_eq!("vi", engine.language.code());
    }
}
