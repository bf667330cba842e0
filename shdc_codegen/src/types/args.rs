/// Output request and header configuration

use std::path::PathBuf;
use crate::types::SlangSet;

/// What to generate and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// Destination header path
    pub output: PathBuf,
    /// Requested target languages
    pub slang: SlangSet,
}

impl Args {
    pub fn new(output: impl Into<PathBuf>, slang: SlangSet) -> Self {
        Self {
            output: output.into(),
            slang,
        }
    }

    /// File name of the output, as referenced by the include-order guard
    pub fn output_file_name(&self) -> String {
        self.output
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Fixed preamble values written at the top of every header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderConfig {
    /// Generator version stamped into the `#version:N#` comment
    pub version: u32,
    /// Macro the runtime header defines once included
    pub runtime_marker: String,
    /// Runtime header the user must include first
    pub runtime_header: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            version: 1,
            runtime_marker: "SOKOL_GFX_INCLUDED".to_string(),
            runtime_header: "sokol_gfx.h".to_string(),
        }
    }
}
