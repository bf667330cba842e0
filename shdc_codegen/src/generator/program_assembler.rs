//! Per-program source embedding
//!
//! For one target language, resolves a program's vertex and fragment snippets
//! against the compiled variant index and writes both sources as C string
//! literal declarations:
//!
//! ```text
//! static const char* triangle_vs_glsl330_src =
//! "#version 330\n"
//! "void main() {\n"
//! ...
//! ;
//! ```
//!
//! Each source line becomes its own literal; the C compiler concatenates
//! adjacent literals back into the original text.

use std::io::Write;
use crate::error::{Error, Result};
use crate::types::{CompiledSource, CompiledVariantIndex, Input, Program, ShaderStage, Slang};

/// Write the vertex and fragment declarations of every program, in program
/// map order. The first failure aborts.
///
/// `dest` is the path `out` writes to; write errors are reported against it.
pub fn write_programs<W: Write + ?Sized>(
    out: &mut W,
    dest: &str,
    input: &Input,
    compiled: &CompiledVariantIndex,
    slang: Slang,
) -> Result<()> {
    for program in input.programs.values() {
        write_program(&mut *out, dest, input, compiled, slang, program)?;
    }
    Ok(())
}

/// Write the vertex and fragment declarations of a single program
///
/// # Errors
///
/// - `Error::UnknownSnippet` if the program names a snippet the input lacks
/// - `Error::MissingCompiledVariant` if either snippet has no compiled source
///   for `slang`; nothing is written for the program in that case
/// - `Error::OutputWriteFailed` (located at `dest`) if `out` fails
pub fn write_program<W: Write + ?Sized>(
    out: &mut W,
    dest: &str,
    input: &Input,
    compiled: &CompiledVariantIndex,
    slang: Slang,
    program: &Program,
) -> Result<()> {
    let vs_src = resolve_stage(input, compiled, slang, program, ShaderStage::Vertex)?;
    let fs_src = resolve_stage(input, compiled, slang, program, ShaderStage::Fragment)?;

    write_source_decl(&mut *out, dest, &program.name, &program.vs_name, slang, &vs_src.source_code)?;
    write_source_decl(&mut *out, dest, &program.name, &program.fs_name, slang, &fs_src.source_code)?;

    crate::shdc_trace!("shdc::program", "Embedded program '{}' for {}", program.name, slang);
    Ok(())
}

/// Name of the C variable holding one stage's source
pub fn source_decl_name(program_name: &str, snippet_name: &str, slang: Slang) -> String {
    format!("{}_{}_{}_src", program_name, snippet_name, slang.to_str())
}

/// Locate the compiled source for one stage of a program
fn resolve_stage<'a>(
    input: &Input,
    compiled: &'a CompiledVariantIndex,
    slang: Slang,
    program: &Program,
    stage: ShaderStage,
) -> Result<&'a CompiledSource> {
    let (snippet_name, stage_desc) = match stage {
        ShaderStage::Fragment => (&program.fs_name, "fragment shader"),
        _ => (&program.vs_name, "vertex shader"),
    };

    let snippet_index = input.snippet_index(snippet_name).ok_or_else(|| Error::UnknownSnippet {
        file: input.path.clone(),
        line: program.line_index,
        message: format!("unknown {} '{}' in program '{}'", stage_desc, snippet_name, program.name),
    })?;

    compiled.find(slang, snippet_index).ok_or_else(|| {
        let line = input.snippet(snippet_index).map(|s| s.first_line()).unwrap_or(0);
        Error::MissingCompiledVariant {
            file: input.path.clone(),
            line,
            message: format!(
                "no generated '{}' source for {} '{}' in program '{}'",
                slang.to_str(), stage_desc, snippet_name, program.name
            ),
        }
    })
}

fn write_source_decl<W: Write + ?Sized>(
    out: &mut W,
    dest: &str,
    program_name: &str,
    snippet_name: &str,
    slang: Slang,
    source_code: &str,
) -> Result<()> {
    let write_failed = |e: std::io::Error| Error::OutputWriteFailed {
        file: dest.to_string(),
        message: e.to_string(),
    };

    writeln!(out, "static const char* {} =", source_decl_name(program_name, snippet_name, slang))
        .map_err(write_failed)?;
    for line in split_lines(source_code) {
        writeln!(out, "\"{}\\n\"", escape_line(line)).map_err(write_failed)?;
    }
    writeln!(out, ";").map_err(write_failed)?;
    Ok(())
}

/// Split on `\n`, `\r\n` or `\r`; a trailing line break does not produce an
/// empty final line
pub fn split_lines(src: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = src.as_bytes();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&src[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&src[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if start < bytes.len() {
        lines.push(&src[start..]);
    }
    lines
}

/// Escape a line for use inside a C string literal
///
/// Besides `\\` and `"`, a `?` that follows another `?` becomes `\?` so no
/// trigraph can form, and control characters other than tab become
/// three-digit octal escapes.
pub fn escape_line(line: &str) -> String {
    let mut escaped = String::with_capacity(line.len());
    let mut prev = None;
    for c in line.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '?' if prev == Some('?') => escaped.push_str("\\?"),
            '\t' => escaped.push(c),
            c if c.is_ascii_control() => escaped.push_str(&format!("\\{:03o}", c as u32)),
            _ => escaped.push(c),
        }
        prev = Some(c);
    }
    escaped
}

/// Reassemble source text from literal lines written by `write_program`
///
/// Accepts the literal lines of one declaration (without the `static const
/// char* ... =` and `;` lines) and applies C concatenation plus unescaping.
pub fn unescape_literals<'a, I>(literal_lines: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut source = String::new();
    for literal in literal_lines {
        let body = literal
            .strip_prefix('"')
            .and_then(|l| l.strip_suffix('"'))
            .unwrap_or(literal);
        let mut chars = body.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                source.push(c);
                continue;
            }
            match chars.next() {
                Some('n') => source.push('\n'),
                Some(d) if d.is_digit(8) => {
                    let mut code = d.to_digit(8).unwrap_or(0);
                    for _ in 0..2 {
                        match chars.clone().next().and_then(|c| c.to_digit(8)) {
                            Some(digit) => {
                                code = code * 8 + digit;
                                chars.next();
                            }
                            None => break,
                        }
                    }
                    source.extend(char::from_u32(code));
                }
                Some(other) => source.push(other),
                None => source.push('\\'),
            }
        }
    }
    source
}

#[cfg(test)]
#[path = "program_assembler_tests.rs"]
mod tests;
