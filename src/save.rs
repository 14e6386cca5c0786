//! Save files: the current room id and the inventory, as versioned JSON.
//!
//! Writes go to a temporary sibling first and are renamed into place, so a
//! failed save never clobbers the previous one.

use std::collections::BTreeSet;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current save file format version
pub const SAVE_VERSION: u32 = 1;

pub const DEFAULT_SAVE_FILE: &str = "savegame.json";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("save file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("incompatible save version: expected {expected}, found {found}")]
    IncompatibleVersion { expected: u32, found: u32 },

    #[error("saved room '{0}' does not exist in this world")]
    UnknownRoom(String),
}

/// The whole persisted session: where the player stands and what they carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub version: u32,
    pub room: String,
    pub inventory: BTreeSet<String>,
}

impl SavedGame {
    pub fn new(room: impl Into<String>, inventory: BTreeSet<String>) -> Self {
        SavedGame {
            version: SAVE_VERSION,
            room: room.into(),
            inventory,
        }
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        if self.version != SAVE_VERSION {
            return Err(SaveError::IncompatibleVersion {
                expected: SAVE_VERSION,
                found: self.version,
            });
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(s: &str) -> Result<SavedGame, SaveError> {
        let saved: SavedGame = serde_json::from_str(s)?;
        saved.validate()?;
        Ok(saved)
    }
}

/// Write `saved` to `path`, replacing any earlier save.
pub fn save_game(saved: &SavedGame, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let json = saved.to_json()?;
    write_atomic(path.as_ref(), &json)?;
    Ok(())
}

/// Read a save file back. Does not touch any game state.
pub fn load_game(path: impl AsRef<Path>) -> Result<SavedGame, SaveError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SaveError::NotFound(path.to_path_buf()),
        _ => SaveError::Io(e),
    })?;
    let saved: SavedGame = serde_json::from_reader(BufReader::new(file))?;
    saved.validate()?;
    Ok(saved)
}

/// Temporary siblings tried before a save gives up.
const MAX_TEMP_ATTEMPTS: u32 = 16;

fn temp_path(dir: &Path, base: &str, attempt: u32) -> PathBuf {
    dir.join(format!(".{}.tmp-{}-{}", base, std::process::id(), attempt))
}

fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let base = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(DEFAULT_SAVE_FILE);

    let mut tmp_path = None;
    for attempt in 0..MAX_TEMP_ATTEMPTS {
        let cand = temp_path(dir, base, attempt);
        match OpenOptions::new().write(true).create_new(true).open(&cand) {
            Ok(mut tmp) => {
                let written = tmp.write_all(content.as_bytes()).and_then(|_| tmp.sync_all());
                if let Err(e) = written {
                    let _ = fs::remove_file(&cand);
                    return Err(e);
                }
                tmp_path = Some(cand);
                break;
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e),
        }
    }
    let tmp_path = tmp_path.ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!(
                "no free temporary file next to {} after {} attempts",
                path.display(),
                MAX_TEMP_ATTEMPTS
            ),
        )
    })?;

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    Ok(())
}
