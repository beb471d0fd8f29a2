use rand::distr::Alphanumeric;
use rand::{rng, Rng};

use crate::translations::Language;

pub const SETTING_SOUND_EFFECTS: &str = "Sound effects";
pub const SETTING_RNG_SEED: &str = "Spin RNG Seed";
pub const SETTING_LANGUAGE: &str = "Language";

pub struct Setting<T> {
    pub name: String,
    pub value: T
}

pub struct Settings {
    pub bool_settings: Vec<Setting<bool>>,
    pub string_settings: Vec<Setting<String>>
}

impl Settings {
    pub fn find_string_setting_value(&self, name: &str) -> Option<String> {
        let setting = self.string_settings.iter().find(|x| x.name == name);
        if let Some(s) = setting {
            return Some(s.value.clone());
        }
        None
    }

    pub fn find_bool_setting_value(&self, name: &str) -> Option<bool> {
        let setting = self.bool_settings.iter().find(|x| x.name == name);
        if let Some(s) = setting {
            return Some(s.value);
        }
        None
    }

    pub fn toggle_bool_setting(&mut self, name: &str) -> Option<bool> {
        let setting = self.bool_settings.iter_mut().find(|x| x.name == name);
        if let Some(s) = setting {
            s.toggle();
            return Some(s.value);
        }
        None
    }
}

pub fn build_settings() -> Settings {
    let sound_effects: Setting<bool> = Setting { name: SETTING_SOUND_EFFECTS.to_string(), value: true };

    // A fresh seed per session keeps spins unpredictable while staying
    // reproducible once captured in the log.
    let random_seed: String = rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect();
    let spin_seed: Setting<String> = Setting { name: SETTING_RNG_SEED.to_string(), value: random_seed };
    let language: Setting<String> = Setting {
        name: SETTING_LANGUAGE.to_string(),
        value: Language::Vietnamese.code().to_string()
    };
    Settings {
        bool_settings: vec![sound_effects],
        string_settings: vec![spin_seed, language]
    }
}

pub trait Toggleable {
    fn toggle(&mut self);
}

impl Toggleable for Setting<bool> {
    fn toggle(&mut self) {
        self.value = !self.value;
    }
}
