//! Persisted language preference.
//!
//! The one piece of cross-page, persisted user preference. A single
//! process-wide store is initialized from disk at startup; the setter
//! persists the new value and reports that a full reload is required. No
//! other state piggybacks on this mechanism.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use tracing::{info, warn};

use crate::defaults::PREF_FILE_NAME;
use crate::error::{Error, Result};

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "en" => Some(Language::English),
            "hi" => Some(Language::Hindi),
            _ => None,
        }
    }
}

/// Outcome of a preference change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// The host shell must perform a full reload for the change to apply.
    ReloadRequired,
    /// The selected language was already active.
    Unchanged,
}

/// File-backed language preference store.
#[derive(Debug)]
pub struct PrefStore {
    path: PathBuf,
}

static GLOBAL: OnceCell<PrefStore> = OnceCell::new();

impl PrefStore {
    /// Store rooted in the given directory.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(PREF_FILE_NAME),
        }
    }

    /// Initialize the process-wide store. Later calls are no-ops.
    pub fn init_global(dir: impl AsRef<Path>) -> &'static PrefStore {
        GLOBAL.get_or_init(|| PrefStore::new(dir))
    }

    /// The process-wide store, if initialized.
    pub fn global() -> Option<&'static PrefStore> {
        GLOBAL.get()
    }

    /// Load the persisted language, falling back to English on a missing,
    /// unreadable, or unrecognized value.
    pub fn load(&self) -> Language {
        match fs::read_to_string(&self.path) {
            Ok(content) => match Language::from_code(&content) {
                Some(lang) => lang,
                None => {
                    warn!(
                        subsystem = "core",
                        component = "prefs",
                        value = %content.trim(),
                        "Unrecognized language preference, defaulting to English"
                    );
                    Language::English
                }
            },
            Err(_) => Language::English,
        }
    }

    /// Persist a new language. Returns whether the host must reload.
    pub fn set(&self, language: Language) -> Result<SetOutcome> {
        if self.load() == language {
            return Ok(SetOutcome::Unchanged);
        }
        fs::write(&self.path, language.as_str())
            .map_err(|e| Error::Preference(format!("could not persist language: {e}")))?;
        info!(
            subsystem = "core",
            component = "prefs",
            language = language.as_str(),
            "Language preference changed, reload required"
        );
        Ok(SetOutcome::ReloadRequired)
    }
}
