//! Header file assembly
//!
//! Writes the preamble, then one guarded block per requested language (in
//! canonical language order) holding every program's embedded sources:
//!
//! ```text
//! #pragma once
//! /* #version:1# machine generated, don't edit */
//! #include <stdint.h>
//! #if !defined(SOKOL_GFX_INCLUDED)
//! #error "Please include sokol_gfx.h before shaders.glsl.h"
//! #endif
//! #if defined(SOKOL_GLCORE33)
//! static const char* triangle_vs_glsl330_src =
//! ...
//! #endif /* SOKOL_GLCORE33 */
//! ```
//!
//! The first failure aborts the run. The output file is closed on every path
//! but left in place; a failed run's partial header must be discarded by the
//! caller.

use std::fs::File;
use std::io::{BufWriter, Write};
use crate::error::{Error, Result};
use crate::generator::program_assembler;
use crate::types::{Args, CompiledVariantIndex, HeaderConfig, Input};

/// Generate `args.output` with the default header configuration
pub fn generate(args: &Args, input: &Input, compiled: &CompiledVariantIndex) -> Result<()> {
    generate_with_config(args, &HeaderConfig::default(), input, compiled)
}

/// Generate `args.output`
///
/// # Errors
///
/// - `Error::OutputOpenFailed` if the destination cannot be created
/// - any error from `write_header`
pub fn generate_with_config(
    args: &Args,
    config: &HeaderConfig,
    input: &Input,
    compiled: &CompiledVariantIndex,
) -> Result<()> {
    crate::shdc_info!("shdc::header", "Generating '{}' from '{}'", args.output.display(), input.path);

    let file = File::create(&args.output).map_err(|e| {
        crate::shdc_debug!("shdc::header", "Create '{}': {}", args.output.display(), e);
        log_and_return_error(Error::OutputOpenFailed {
            file: input.path.clone(),
            line: 0,
            message: format!("failed to open output file '{}'", args.output.display()),
        })
    })?;
    let mut out = BufWriter::new(file);

    write_header(&mut out, args, config, input, compiled).map_err(log_and_return_error)?;
    out.flush().map_err(|e| {
        log_and_return_error(Error::OutputWriteFailed {
            file: args.output.display().to_string(),
            message: e.to_string(),
        })
    })?;

    crate::shdc_info!(
        "shdc::header",
        "Wrote {} program(s) for {} language(s) to '{}'",
        input.programs.len(),
        args.slang.iter_slangs().count(),
        args.output.display()
    );
    Ok(())
}

/// Write the complete header for `args` to `out`
///
/// The include-order `#error` names the file name of `args.output`; write
/// errors, wherever they happen, are located at the full `args.output` path.
pub fn write_header<W: Write + ?Sized>(
    out: &mut W,
    args: &Args,
    config: &HeaderConfig,
    input: &Input,
    compiled: &CompiledVariantIndex,
) -> Result<()> {
    let dest = args.output.display().to_string();
    let write_failed = |e: std::io::Error| Error::OutputWriteFailed {
        file: dest.clone(),
        message: e.to_string(),
    };

    write!(
        out,
        concat!(
            "#pragma once\n",
            "/* #version:{}# machine generated, don't edit */\n",
            "#include <stdint.h>\n",
            "#if !defined({})\n",
            "#error \"Please include {} before {}\"\n",
            "#endif\n",
        ),
        config.version, config.runtime_marker, config.runtime_header, args.output_file_name()
    )
    .map_err(write_failed)?;

    for slang in args.slang.iter_slangs() {
        crate::shdc_debug!("shdc::header", "Writing {} block ({})", slang, slang.guard_macro());
        writeln!(out, "#if defined({})", slang.guard_macro()).map_err(write_failed)?;
        program_assembler::write_programs(&mut *out, &dest, input, compiled, slang)?;
        writeln!(out, "#endif /* {} */", slang.guard_macro()).map_err(write_failed)?;
    }
    Ok(())
}

/// Log errors before returning them so a failed run always leaves a trace
fn log_and_return_error(error: Error) -> Error {
    crate::shdc_error!("shdc::header", "{}", error);
    error
}

#[cfg(test)]
#[path = "header_emitter_tests.rs"]
mod tests;
