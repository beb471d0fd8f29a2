use std::io;

use rand_pcg::Pcg64;
use rand_seeder::Seeder;
use ratatui::backend::Backend;

use crate::archive::{ListArchive, SaveOutcome};
use crate::clipboard;
use crate::menu::{build_archive_menu, Menu};
use crate::options::{AddOutcome, OptionList};
use crate::settings::{build_settings, Settings, SETTING_LANGUAGE, SETTING_RNG_SEED, SETTING_SOUND_EFFECTS};
use crate::sound::sounds::{build_sound_sinks, SoundSinks};
use crate::spin::{SpinRun, TICK_PERIOD_MS};
use crate::storage::{Storage, KEY_OPTIONS, KEY_SAVED_LISTS};
use crate::terminal::terminal_manager::TerminalManager;
use crate::translations;
use crate::translations::{text_table, Language, TextTable};
use crate::ui::confetti::Confetti;
use crate::ui::event::{Event, TerminalEventHandler};
use crate::ui::ui;
use crate::ui::ui::{Focus, InputMode, ViewModel};
use crate::widget::text_widget::{build_text_input, TextInputState};
use crate::widget::Focusable;

const TOAST_DURATION_MS: u64 = 1800;
const TOAST_TICKS: u64 = TOAST_DURATION_MS / TICK_PERIOD_MS;

const INPUT_LENGTH: i8 = 40;

pub struct Toast {
    pub message: String,
    pub ticks_left: u64
}

/// Destructive operations that wait behind the Y/N dialog.
pub enum ConfirmAction {
    ResetAll,
    DeleteSaved(String)
}

pub struct AppEngine<B: Backend> {
    pub terminal_manager: TerminalManager<B>,
    pub settings: Settings,
    pub storage: Storage,
    pub options: OptionList,
    pub archive: ListArchive,
    pub sounds: SoundSinks,
    pub rng: Pcg64,
    pub language: Language,
    pub input: TextInputState,
    pub input_mode: InputMode,
    pub focus: Focus,
    pub options_index: usize,
    pub saved_menu: Menu,
    pub spin: Option<SpinRun>,
    pub highlight: Option<usize>,
    pub result: Option<String>,
    pub confetti: Option<Confetti>,
    pub toast: Option<Toast>,
    pub confirm: Option<ConfirmAction>,
    pub exit: bool
}

pub fn build_engine<B: Backend>(terminal_manager: TerminalManager<B>, storage: Storage) -> AppEngine<B> {
    let settings = build_settings();
    let seed = settings.find_string_setting_value(SETTING_RNG_SEED).unwrap_or_default();
    log::info!("Seeding spin RNG with '{}'", seed);
    let rng: Pcg64 = Seeder::from(seed.as_str()).into_rng();

    let language_code = settings.find_string_setting_value(SETTING_LANGUAGE).unwrap_or_default();
    let language = Language::from_code(&language_code);

    let entries: Vec<String> = storage.read_key(KEY_OPTIONS).unwrap_or_default();
    log::info!("Restored {} option(s) from storage", entries.len());
    let options = OptionList::from_entries(entries);
    let archive = ListArchive::from_lists(storage.read_key(KEY_SAVED_LISTS).unwrap_or_default());
    let saved_menu = build_archive_menu(&archive);

    let mut input = build_text_input(INPUT_LENGTH, String::new(), 1);
    input.focus();

    AppEngine {
        terminal_manager,
        settings,
        storage,
        options,
        archive,
        sounds: build_sound_sinks(),
        rng,
        language,
        input,
        input_mode: InputMode::AddOption,
        focus: Focus::Input,
        options_index: 0,
        saved_menu,
        spin: None,
        highlight: None,
        result: None,
        confetti: None,
        toast: None,
        confirm: None,
        exit: false
    }
}

impl<B: Backend> AppEngine<B> {
    pub async fn start(&mut self) -> Result<(), io::Error> {
        let mut handler = TerminalEventHandler::new();
        let task_data = handler.spawn_task();

        self.draw()?;
        while !self.exit {
            match handler.receiver.recv().await {
                Some(Event::Tick) => {
                    self.on_tick();
                    self.draw()?;
                },
                Some(Event::Termion(termion::event::Event::Key(key))) => {
                    crate::engine::input_handler::handle_key(self, key);
                    self.draw()?;
                },
                Some(_) => {},
                None => {
                    break;
                }
            }
        }

        log::info!("Shutting down");
        task_data.cancellation_token.cancel();
        self.terminal_manager.clear_screen()?;
        self.terminal_manager.terminal.show_cursor()?;
        Ok(())
    }

    pub fn draw(&mut self) -> Result<(), io::Error> {
        let confirm_message = self.confirm.as_ref().map(|action| match action {
            ConfirmAction::ResetAll => self.texts().confirm_reset.to_string(),
            ConfirmAction::DeleteSaved(name) => translations::confirm_delete_list(self.language, name)
        });

        let mut view = ViewModel {
            texts: text_table(self.language),
            input: self.input.clone(),
            input_mode: self.input_mode,
            focus: self.focus,
            options: &self.options,
            options_index: self.options_index,
            highlight: self.highlight,
            spinning: self.spin.is_some(),
            saved_menu: &self.saved_menu,
            result: self.result.as_deref(),
            toast: self.toast.as_ref().map(|t| t.message.as_str()),
            confirm: confirm_message,
            confetti: self.confetti.as_ref()
        };
        let terminal = &mut self.terminal_manager.terminal;
        terminal.draw(|frame| ui::render(frame, &mut view))?;
        Ok(())
    }

    /// One step of the 90ms cadence: advance any active selection run, then
    /// retire expired toasts and spent confetti.
    pub fn on_tick(&mut self) {
        let outcome = match self.spin.as_mut() {
            Some(run) => Some(run.tick()),
            None => None
        };
        if let Some(outcome) = outcome {
            self.highlight = Some(outcome.highlight);
            if self.sound_enabled() {
                self.sounds.play_tick(outcome.pitch_step);
            }
            if let Some(winner) = outcome.winner {
                self.finish_spin(winner);
            }
        }

        let toast_expired = match self.toast.as_mut() {
            Some(toast) if toast.ticks_left == 0 => true,
            Some(toast) => {
                toast.ticks_left -= 1;
                false
            },
            None => false
        };
        if toast_expired {
            self.toast = None;
        }

        let confetti_spent = match self.confetti.as_mut() {
            Some(confetti) => !confetti.advance(),
            None => false
        };
        if confetti_spent {
            self.confetti = None;
        }
    }

    fn finish_spin(&mut self, winner: usize) {
        self.spin = None;
        self.highlight = None;
        match self.options.get(winner) {
            Some(value) => {
                log::info!("Selection run finished, winner: '{}'", value);
                self.result = Some(value.clone());
                let (width, height) = match self.terminal_manager.terminal.size() {
                    Ok(size) => (size.width, size.height),
                    Err(_) => (80, 24)
                };
                self.confetti = Some(Confetti::burst(width, height, &mut self.rng));
                if self.sound_enabled() {
                    self.sounds.play_win();
                }
            },
            None => {
                // Unreachable while the mutation lock holds; log it if it ever isn't
                log::error!("Winner index {} out of bounds for {} options", winner, self.options.len());
            }
        }
    }

    /// The OptionList is frozen while a run is active. Mutating entry points
    /// check this and drop the request, which is what "the trigger control is
    /// disabled" amounts to on a keyboard.
    pub fn mutations_locked(&self) -> bool {
        self.spin.is_some()
    }

    pub fn start_spin(&mut self) {
        if self.mutations_locked() {
            return;
        }
        if self.options.len() < 2 {
            self.show_toast(self.texts().toast_min_options.to_string());
            return;
        }
        match SpinRun::start(self.options.len(), &mut self.rng) {
            Ok(run) => {
                log::info!("Starting selection run over {} options", run.option_count());
                self.highlight = None;
                self.spin = Some(run);
            },
            Err(e) => {
                log::error!("Refusing to start selection run: {}", e);
            }
        }
    }

    pub fn submit_input(&mut self) {
        if self.mutations_locked() {
            return;
        }
        let value = self.input.get_input();
        match self.input_mode {
            InputMode::AddOption => self.submit_option(&value),
            InputMode::SaveName => self.submit_save_name(&value)
        }
    }

    fn submit_option(&mut self, value: &str) {
        match self.options.add(value) {
            AddOutcome::Added => {
                self.input.clear();
                self.persist_options();
            },
            AddOutcome::EmptyInput => {
                self.show_toast(self.texts().toast_empty_input.to_string());
            },
            AddOutcome::Duplicate => {
                self.show_toast(self.texts().toast_duplicate.to_string());
            }
        }
    }

    fn submit_save_name(&mut self, name: &str) {
        match self.archive.save(name, self.options.entries()) {
            SaveOutcome::Saved => {
                self.input.clear();
                self.input_mode = InputMode::AddOption;
                self.persist_archive();
                self.rebuild_saved_menu();
                self.show_toast(self.texts().toast_list_saved.to_string());
            },
            SaveOutcome::EmptyName => {
                self.show_toast(self.texts().toast_name_required.to_string());
            },
            SaveOutcome::EmptySnapshot => {
                self.input_mode = InputMode::AddOption;
                self.show_toast(self.texts().toast_nothing_to_save.to_string());
            }
        }
    }

    pub fn add_all(&mut self) {
        if self.mutations_locked() {
            return;
        }
        let raw = self.input.get_input();
        if raw.trim().is_empty() {
            self.show_toast(self.texts().toast_empty_list.to_string());
            return;
        }
        let outcome = self.options.add_many(&raw);
        if outcome.added > 0 {
            self.input.clear();
            self.persist_options();
            self.show_toast(translations::toast_added(self.language, outcome.added, outcome.skipped));
        } else {
            self.show_toast(self.texts().toast_no_valid.to_string());
        }
    }

    pub fn select_option_up(&mut self) {
        if self.options_index > 0 {
            self.options_index -= 1;
        }
    }

    pub fn select_option_down(&mut self) {
        if !self.options.is_empty() && self.options_index < self.options.len() - 1 {
            self.options_index += 1;
        }
    }

    pub fn remove_selected_option(&mut self) {
        if self.mutations_locked() {
            return;
        }
        if self.options.remove(self.options_index).is_some() {
            if self.options_index >= self.options.len() && self.options_index > 0 {
                self.options_index -= 1;
            }
            self.persist_options();
        }
    }

    pub fn copy_result(&mut self) {
        let result = match self.result.as_ref() {
            Some(result) if !result.is_empty() => result.clone(),
            _ => {
                self.show_toast(self.texts().toast_no_result.to_string());
                return;
            }
        };
        match clipboard::copy_to_clipboard(&result) {
            Ok(()) => self.show_toast(self.texts().toast_copied.to_string()),
            Err(e) => {
                log::warn!("Clipboard copy failed: {}", e);
                self.show_toast(self.texts().toast_copy_failed.to_string());
            }
        }
    }

    pub fn begin_save_prompt(&mut self) {
        if self.mutations_locked() {
            return;
        }
        if self.options.is_empty() {
            self.show_toast(self.texts().toast_nothing_to_save.to_string());
            return;
        }
        self.input_mode = InputMode::SaveName;
        self.input.clear();
        self.set_focus(Focus::Input);
    }

    pub fn cancel_save_prompt(&mut self) {
        self.input_mode = InputMode::AddOption;
        self.input.clear();
    }

    pub fn load_selected_saved(&mut self) {
        if self.mutations_locked() {
            return;
        }
        let name = match self.saved_menu.selected_entry() {
            Some(name) => name.clone(),
            None => return
        };
        match self.archive.load(&name) {
            Some(entries) => {
                log::info!("Loaded saved list '{}' with {} option(s)", name, entries.len());
                self.options = OptionList::from_entries(entries);
                self.options_index = 0;
                self.result = None;
                self.persist_options();
                self.show_toast(self.texts().toast_list_loaded.to_string());
            },
            None => {
                // Archive and menu drifting apart would be a bug, but the
                // defined behaviour is a notice, not a fault
                self.show_toast(self.texts().toast_list_missing.to_string());
            }
        }
    }

    pub fn request_delete_selected_saved(&mut self) {
        if self.mutations_locked() {
            return;
        }
        if let Some(name) = self.saved_menu.selected_entry() {
            self.confirm = Some(ConfirmAction::DeleteSaved(name.clone()));
        }
    }

    pub fn request_reset(&mut self) {
        if self.mutations_locked() {
            return;
        }
        if self.options.is_empty() {
            return;
        }
        self.confirm = Some(ConfirmAction::ResetAll);
    }

    pub fn apply_confirm(&mut self) {
        match self.confirm.take() {
            Some(ConfirmAction::ResetAll) => {
                log::info!("Resetting all options");
                self.options.clear();
                self.options_index = 0;
                self.result = None;
                self.persist_options();
            },
            Some(ConfirmAction::DeleteSaved(name)) => {
                if self.archive.delete(&name) {
                    log::info!("Deleted saved list '{}'", name);
                    self.persist_archive();
                    self.rebuild_saved_menu();
                }
            },
            None => {}
        }
    }

    pub fn cancel_confirm(&mut self) {
        self.confirm = None;
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }

    pub fn toggle_sound(&mut self) {
        let enabled = self.settings.toggle_bool_setting(SETTING_SOUND_EFFECTS).unwrap_or(false);
        let message = if enabled {
            self.texts().toast_sound_on
        } else {
            self.texts().toast_sound_off
        };
        self.show_toast(message.to_string());
    }

    pub fn cycle_focus(&mut self) {
        let next = match self.focus {
            Focus::Input => Focus::Options,
            Focus::Options => Focus::Saved,
            Focus::Saved => Focus::Input
        };
        self.set_focus(next);
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        if self.focus == Focus::Input {
            self.input.focus();
        } else {
            self.input.unfocus();
        }
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast = Some(Toast { message, ticks_left: TOAST_TICKS });
    }

    pub fn texts(&self) -> &'static TextTable {
        text_table(self.language)
    }

    fn sound_enabled(&self) -> bool {
        self.settings.find_bool_setting_value(SETTING_SOUND_EFFECTS).unwrap_or(false)
    }

    fn persist_options(&self) {
        self.storage.write_key(KEY_OPTIONS, &self.options.entries().to_vec());
    }

    fn persist_archive(&self) {
        self.storage.write_key(KEY_SAVED_LISTS, self.archive.lists());
    }

    fn rebuild_saved_menu(&mut self) {
        self.saved_menu = build_archive_menu(&self.archive);
    }
}

#[cfg(test)]
pub fn build_test_engine(storage: Storage) -> AppEngine<ratatui::backend::TestBackend> {
    use crate::sound::sounds::build_disabled_sound_sinks;
    use crate::terminal::terminal_manager;

    let terminal_manager = terminal_manager::init_test(80, 24).unwrap();
    let mut engine = build_engine(terminal_manager, storage);
    engine.sounds = build_disabled_sound_sinks();
    engine.language = Language::English;
    engine.rng = Seeder::from("test seed").into_rng();
    engine
}
