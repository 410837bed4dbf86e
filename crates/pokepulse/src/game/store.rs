use std::fs;
use std::path::{Path, PathBuf};

use pokepulse_core::scores::{record_score, ScoreRecord};

use crate::prelude::Error;

/// File stem for the persisted ledger.
pub const STORE_KEY: &str = "number-game-scores";

/// Score history persisted as JSON under the user data directory. The file is
/// read in full and rewritten on every append.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    /// Open the default store under the user data directory.
    pub fn open() -> Result<Self, Error> {
        let data_dir = dirs_next::data_dir().ok_or(Error::NoDataDir)?;
        Ok(Self::with_dir(&data_dir.join("pokepulse")))
    }

    /// Open a store rooted at `dir`.
    pub fn with_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(format!("{STORE_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the history, newest first. A missing or unreadable file counts as
    /// an empty history; the next append rewrites it.
    pub fn load(&self) -> Vec<ScoreRecord> {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };

        match serde_json::from_str(&contents) {
            Ok(records) => records,
            Err(e) => {
                log::warn!(
                    "Ignoring corrupt score history at {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Append one record, keeping the history bounded, and rewrite the file.
    /// Returns the updated history.
    pub fn append(&self, record: ScoreRecord) -> Result<Vec<ScoreRecord>, Error> {
        let history = record_score(self.load(), record);
        self.save(&history)?;
        Ok(history)
    }

    pub fn save(&self, history: &[ScoreRecord]) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(history)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    /// Delete the persisted history. Succeeds when there is nothing to
    /// delete.
    pub fn clear(&self) -> Result<(), Error> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Write(e)),
        }
    }
}
