use serde::{Deserialize, Serialize};

use crate::{Storage, StorageError};

pub const CURRENT_LEVEL: &str = "current_level";
pub const CURRENT_LEVEL_SCORE: &str = "current_level_score";
pub const HIGHEST_SCORE: &str = "highest_score";
pub const SOUND_VOLUME: &str = "sound_volume";
pub const MUSIC_VOLUME: &str = "music_volume";
pub const KEY_BINDINGS: &str = "key_bindings";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Binding {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Interact,
    InteractAlternate,
    Pause,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub keys: Vec<(Binding, char)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            keys: vec![
                (Binding::MoveUp, 'w'),
                (Binding::MoveDown, 's'),
                (Binding::MoveLeft, 'a'),
                (Binding::MoveRight, 'd'),
                (Binding::Interact, 'e'),
                (Binding::InteractAlternate, 'f'),
                (Binding::Pause, 'p'),
            ],
        }
    }
}

impl KeyBindings {
    pub fn key(&self, binding: Binding) -> Option<char> {
        self.keys
            .iter()
            .find(|(target, _)| *target == binding)
            .map(|(_, key)| *key)
    }

    pub fn binding(&self, key: char) -> Option<Binding> {
        self.keys
            .iter()
            .find(|(_, target)| *target == key)
            .map(|(binding, _)| *binding)
    }

    /// Assigns key to binding. Previous owner of the key loses it.
    pub fn rebind(&mut self, binding: Binding, key: char) {
        self.keys.retain(|(target, bound)| *target != binding && *bound != key);
        self.keys.push((binding, key));
    }
}

/// Typed access to player preferences and level progress.
pub struct Preferences {
    storage: Storage,
}

impl Preferences {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    #[inline]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn current_level(&self) -> Result<u32, StorageError> {
        self.storage.get_or(CURRENT_LEVEL, 1)
    }

    pub fn set_current_level(&self, level: u32) -> Result<(), StorageError> {
        self.storage.set(CURRENT_LEVEL, level)
    }

    pub fn current_level_score(&self) -> Result<u32, StorageError> {
        self.storage.get_or(CURRENT_LEVEL_SCORE, 0)
    }

    pub fn set_current_level_score(&self, score: u32) -> Result<(), StorageError> {
        self.storage.set(CURRENT_LEVEL_SCORE, score)
    }

    pub fn highest_score(&self) -> Result<u32, StorageError> {
        self.storage.get_or(HIGHEST_SCORE, 0)
    }

    /// Keeps the best score, returns true when a new record is set.
    pub fn update_highest_score(&self, score: u32) -> Result<bool, StorageError> {
        if score > self.highest_score()? {
            self.storage.set(HIGHEST_SCORE, score)?;
            return Ok(true);
        }
        Ok(false)
    }

    pub fn sound_volume(&self) -> Result<f32, StorageError> {
        self.storage.get_or(SOUND_VOLUME, 1.0)
    }

    pub fn set_sound_volume(&self, volume: f32) -> Result<(), StorageError> {
        self.storage.set(SOUND_VOLUME, volume.clamp(0.0, 1.0))
    }

    pub fn music_volume(&self) -> Result<f32, StorageError> {
        self.storage.get_or(MUSIC_VOLUME, 0.3)
    }

    pub fn set_music_volume(&self, volume: f32) -> Result<(), StorageError> {
        self.storage.set(MUSIC_VOLUME, volume.clamp(0.0, 1.0))
    }

    pub fn key_bindings(&self) -> Result<KeyBindings, StorageError> {
        self.storage.get_or(KEY_BINDINGS, KeyBindings::default())
    }

    pub fn set_key_bindings(&self, bindings: &KeyBindings) -> Result<(), StorageError> {
        self.storage.set(KEY_BINDINGS, bindings)
    }

    pub fn reset_progress(&self) -> Result<(), StorageError> {
        self.storage.remove(CURRENT_LEVEL)?;
        self.storage.remove(CURRENT_LEVEL_SCORE)
    }
}
