//! File I/O for board files (JSON).

use super::Board;
use crate::error::{PlanError, Result};
use std::path::Path;

impl Board {
    /// Load a board file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PlanError::Io(format!(
                "failed to read board file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    /// Atomically save the board to disk.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_json()?;
        crate::fs::atomic_write_file(path, &content)
    }

    /// Parse a board from JSON, rejecting renumbered slots.
    pub fn from_json(json: &str) -> Result<Self> {
        let board: Board = serde_json::from_str(json)
            .map_err(|e| PlanError::UserError(format!("failed to parse board JSON: {}", e)))?;

        if !board.has_contiguous_slots() {
            return Err(PlanError::UserError(
                "board slots must be numbered 1..N in order".to_string(),
            ));
        }

        Ok(board)
    }

    /// Serialize the board to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlanError::UserError(format!("failed to serialize board: {}", e)))
    }

    /// Serialize the board to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| PlanError::UserError(format!("failed to serialize board: {}", e)))
    }
}
