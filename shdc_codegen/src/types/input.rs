/// Parsed shader input: snippets and the programs that pair them
///
/// Built once by the (external) parser and read-only afterwards.

use std::collections::BTreeMap;
use rustc_hash::FxHashMap;

/// A named, line-addressable fragment of the original shader source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snippet {
    /// Snippet name as declared in the source (`@vs vs`, `@fs fs`, ...)
    pub name: String,
    /// Source line numbers covered by the snippet
    pub lines: Vec<u32>,
}

impl Snippet {
    /// First source line, used to locate diagnostics (0 if the snippet is empty)
    pub fn first_line(&self) -> u32 {
        self.lines.first().copied().unwrap_or(0)
    }
}

/// A vertex/fragment snippet pair grouped under one name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub name: String,
    pub vs_name: String,
    pub fs_name: String,
    /// Line of the `@program` declaration
    pub line_index: u32,
}

/// Everything the generator needs from the parsed source file
#[derive(Debug, Clone, Default)]
pub struct Input {
    /// Path of the source file, reported in every located error
    pub path: String,
    pub snippets: Vec<Snippet>,
    /// Snippet name to index into `snippets`
    pub snippet_map: FxHashMap<String, usize>,
    /// Programs by name; iteration order is emission order
    pub programs: BTreeMap<String, Program>,
}

impl Input {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Append a snippet and register its name, returning its index
    pub fn add_snippet(&mut self, name: impl Into<String>, lines: Vec<u32>) -> usize {
        let name = name.into();
        let index = self.snippets.len();
        self.snippet_map.insert(name.clone(), index);
        self.snippets.push(Snippet { name, lines });
        index
    }

    /// Register a program, replacing any previous one with the same name
    pub fn add_program(
        &mut self,
        name: impl Into<String>,
        vs_name: impl Into<String>,
        fs_name: impl Into<String>,
        line_index: u32,
    ) {
        let name = name.into();
        self.programs.insert(name.clone(), Program {
            name,
            vs_name: vs_name.into(),
            fs_name: fs_name.into(),
            line_index,
        });
    }

    pub fn snippet_index(&self, name: &str) -> Option<usize> {
        self.snippet_map.get(name).copied()
    }

    pub fn snippet(&self, index: usize) -> Option<&Snippet> {
        self.snippets.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_snippet_registers_index() {
        let mut input = Input::new("shd.glsl");
        assert_eq!(input.add_snippet("vs", vec![3, 4, 5]), 0);
        assert_eq!(input.add_snippet("fs", vec![8, 9]), 1);

        assert_eq!(input.snippet_index("fs"), Some(1));
        assert_eq!(input.snippet_index("cs"), None);
        assert_eq!(input.snippet(0).unwrap().first_line(), 3);
    }

    #[test]
    fn test_empty_snippet_first_line() {
        assert_eq!(Snippet::default().first_line(), 0);
    }

    #[test]
    fn test_programs_iterate_by_name() {
        let mut input = Input::new("shd.glsl");
        input.add_program("quad", "vs", "fs", 20);
        input.add_program("blit", "vs", "fs", 10);

        let names: Vec<&str> = input.programs.keys().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["blit", "quad"]);
        assert_eq!(input.programs["quad"].line_index, 20);
    }
}
