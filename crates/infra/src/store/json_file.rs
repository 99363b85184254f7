//! JSON file record store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;

use sweetshop_inventory::{RecordStore, StoreError, StoreResult, StoreState};

/// Stores the inventory document as pretty-printed JSON at `path`.
///
/// Saves go to a sibling `<path>.tmp` file which is then renamed over the
/// target. There is no locking: concurrent processes race and the last
/// writer wins.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

/// Four-space indented JSON, matching the documents the shop has always written.
fn encode(state: &StoreState) -> StoreResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    state
        .serialize(&mut ser)
        .map_err(|e| StoreError::Storage(format!("failed to encode store document: {e}")))?;
    buf.push(b'\n');
    Ok(buf)
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> StoreResult<StoreState> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "store file missing; creating empty inventory");
                let state = StoreState::default();
                self.save(&state)?;
                return Ok(state);
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::Malformed(format!("{}: {e}", self.path.display())))
    }

    fn save(&self, state: &StoreState) -> StoreResult<()> {
        let bytes = encode(state)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let tmp = self.temp_path();
        fs::write(&tmp, &bytes).map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::io(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), sweets = state.sweets.len(), "store file written");
        Ok(())
    }
}
