//! Show and edit the persisted settings

use crate::output::print_settings;
use crate::settings::{GameMode, SettingsRecord, SettingsStore};
use anyhow::{Context, Result, bail};
use tracing::info;

/// Values to change; `None` leaves a field as it is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub language: Option<String>,
    pub mode: Option<GameMode>,
    pub word_length: Option<usize>,
    pub has_seen_instructions: Option<bool>,
}

impl SettingsUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overlay the set fields onto `settings`
    ///
    /// # Errors
    /// Returns an error for an empty language code or a zero word length.
    pub fn apply(&self, settings: &mut SettingsRecord) -> Result<()> {
        if let Some(language) = &self.language {
            let language = language.trim().to_lowercase();
            if language.is_empty() {
                bail!("language code must not be empty");
            }
            settings.language = language;
        }
        if let Some(mode) = self.mode {
            settings.mode = mode;
        }
        if let Some(length) = self.word_length {
            if length == 0 {
                bail!("word length must be at least 1");
            }
            settings.word_length = length;
        }
        if let Some(seen) = self.has_seen_instructions {
            settings.has_seen_instructions = seen;
        }
        Ok(())
    }
}

/// Print the stored settings
///
/// # Errors
/// Returns an error if the settings file cannot be read.
pub fn show_settings(store: &SettingsStore) -> Result<()> {
    let settings = store.load().context("failed to load settings")?;
    print_settings(&settings, store.path());
    Ok(())
}

/// Apply `update` to the stored settings and save them
///
/// # Errors
/// Returns an error if nothing was given to change, a value is invalid, or
/// the file cannot be read or written.
pub fn set_settings(store: &SettingsStore, update: &SettingsUpdate) -> Result<SettingsRecord> {
    if update.is_empty() {
        bail!("nothing to change; pass --language, --length, --mode or --seen-instructions");
    }

    let mut settings = store.load().context("failed to load settings")?;
    update.apply(&mut settings)?;
    store.save(&settings).context("failed to save settings")?;

    info!(?settings, "settings updated");
    print_settings(&settings, store.path());
    Ok(settings)
}
