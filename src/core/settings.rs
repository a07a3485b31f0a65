use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::ComphyError;

pub const DEFAULT_UI_PROGRAM: &str = "comphy-ui";

/// Which external programs the dispatcher invokes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub ui_program: String,
    pub generator_program: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ui_program: DEFAULT_UI_PROGRAM.to_string(),
            generator_program: DEFAULT_UI_PROGRAM.to_string(),
        }
    }
}

impl Settings {
    /// Read settings from a JSON file; absent keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ComphyError> {
        let raw = fs::read_to_string(path).map_err(|source| ComphyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ComphyError::Settings {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply command-line overrides on top of file or default values.
    pub fn with_overrides(mut self, ui_program: Option<String>, generator: Option<String>) -> Self {
        if let Some(program) = ui_program {
            self.ui_program = program;
        }
        if let Some(program) = generator {
            self.generator_program = program;
        }
        self
    }
}
