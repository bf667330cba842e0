/// Target shading languages and the request bitset
///
/// The order of `Slang::ALL` is the canonical emission order: language blocks
/// appear in the header in this order no matter how the request was built.

use std::fmt;
use std::str::FromStr;
use bitflags::bitflags;
use crate::error::Error;

/// A target shading language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slang {
    /// Desktop GL core profile
    Glsl330,
    /// GLES3 / WebGL2
    Glsl300es,
    /// GLES2 / WebGL
    Glsl100,
    /// Direct3D 11
    Hlsl5,
    /// Metal on macOS
    MetalMacos,
    /// Metal on iOS
    MetalIos,
}

impl Slang {
    /// Every language, in canonical order
    pub const ALL: [Slang; 6] = [
        Slang::Glsl330,
        Slang::Glsl300es,
        Slang::Glsl100,
        Slang::Hlsl5,
        Slang::MetalMacos,
        Slang::MetalIos,
    ];

    /// Number of languages
    pub const NUM: usize = Self::ALL.len();

    /// Position in `ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Token used in declaration names and messages
    pub fn to_str(&self) -> &'static str {
        match self {
            Slang::Glsl330 => "glsl330",
            Slang::Glsl300es => "glsl300es",
            Slang::Glsl100 => "glsl100",
            Slang::Hlsl5 => "hlsl5",
            Slang::MetalMacos => "metal_macos",
            Slang::MetalIos => "metal_ios",
        }
    }

    /// Preprocessor macro the runtime defines when this backend is compiled in
    pub fn guard_macro(&self) -> &'static str {
        match self {
            Slang::Glsl330 => "SOKOL_GLCORE33",
            Slang::Glsl300es => "SOKOL_GLES3",
            Slang::Glsl100 => "SOKOL_GLES2",
            Slang::Hlsl5 => "SOKOL_D3D11",
            Slang::MetalMacos | Slang::MetalIos => "SOKOL_METAL",
        }
    }

    /// Single-language request set
    pub fn bit(&self) -> SlangSet {
        match self {
            Slang::Glsl330 => SlangSet::GLSL330,
            Slang::Glsl300es => SlangSet::GLSL300ES,
            Slang::Glsl100 => SlangSet::GLSL100,
            Slang::Hlsl5 => SlangSet::HLSL5,
            Slang::MetalMacos => SlangSet::METAL_MACOS,
            Slang::MetalIos => SlangSet::METAL_IOS,
        }
    }
}

impl fmt::Display for Slang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Slang {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Slang::ALL
            .iter()
            .copied()
            .find(|slang| slang.to_str() == s)
            .ok_or_else(|| Error::UnknownSlang(s.to_string()))
    }
}

bitflags! {
    /// Set of requested target languages
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SlangSet: u32 {
        const GLSL330 = 1 << 0;
        const GLSL300ES = 1 << 1;
        const GLSL100 = 1 << 2;
        const HLSL5 = 1 << 3;
        const METAL_MACOS = 1 << 4;
        const METAL_IOS = 1 << 5;
    }
}

impl SlangSet {
    /// Requested languages in canonical order
    pub fn iter_slangs(self) -> impl Iterator<Item = Slang> {
        Slang::ALL.into_iter().filter(move |slang| self.contains(slang.bit()))
    }
}

impl From<Slang> for SlangSet {
    fn from(slang: Slang) -> Self {
        slang.bit()
    }
}

impl FromIterator<Slang> for SlangSet {
    fn from_iter<I: IntoIterator<Item = Slang>>(iter: I) -> Self {
        iter.into_iter().fold(SlangSet::empty(), |set, slang| set | slang.bit())
    }
}

#[cfg(test)]
#[path = "slang_tests.rs"]
mod tests;
