/// Shader stage classification

use std::fmt;

/// A shader stage
///
/// `Invalid` only exists for default-constructed descriptors and must never
/// reach emitted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShaderStage {
    #[default]
    Invalid,
    /// Vertex shader
    Vertex,
    /// Fragment shader
    Fragment,
}

impl ShaderStage {
    /// Short token for diagnostics and dumps
    pub fn to_str(&self) -> &'static str {
        match self {
            ShaderStage::Vertex => "VS",
            ShaderStage::Fragment => "FS",
            ShaderStage::Invalid => "INVALID",
        }
    }

    pub fn is_vs(&self) -> bool {
        *self == ShaderStage::Vertex
    }

    pub fn is_fs(&self) -> bool {
        *self == ShaderStage::Fragment
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}
