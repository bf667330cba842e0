/// Per-language index of cross-compiled snippet sources

use crate::types::Slang;

/// Compiled source text of one snippet for one target language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledSource {
    /// Index of the originating snippet in `Input::snippets`
    pub snippet_index: usize,
    pub source_code: String,
}

/// Compiled sources grouped by target language
///
/// Each per-language collection holds at most a few dozen entries, so lookup
/// is a linear scan.
#[derive(Debug, Clone, Default)]
pub struct CompiledVariantIndex {
    sources: [Vec<CompiledSource>; Slang::NUM],
}

impl CompiledVariantIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, slang: Slang, snippet_index: usize, source_code: impl Into<String>) {
        self.sources[slang.index()].push(CompiledSource {
            snippet_index,
            source_code: source_code.into(),
        });
    }

    pub fn sources(&self, slang: Slang) -> &[CompiledSource] {
        &self.sources[slang.index()]
    }

    /// First source in collection order compiled from `snippet_index`
    pub fn find(&self, slang: Slang, snippet_index: usize) -> Option<&CompiledSource> {
        self.sources(slang)
            .iter()
            .find(|src| src.snippet_index == snippet_index)
    }
}
