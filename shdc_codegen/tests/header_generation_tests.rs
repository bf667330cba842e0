//! End-to-end tests for header generation
//!
//! Drive `generate` against real files in the system temp directory.
//! All tests are #[serial] since one of them swaps the global logger.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use serial_test::serial;
use shdc_codegen::shdc::{Error, ErrorFormat, Shdc};
use shdc_codegen::shdc::generator::{generate, generate_with_config};
use shdc_codegen::shdc::log::{Logger, LogEntry, LogSeverity};
use shdc_codegen::shdc::types::{Args, CompiledVariantIndex, HeaderConfig, Input, Slang, SlangSet};

const VS_SRC: &str = "#version 300 es\nin vec4 position;\nvoid main() {\n    gl_Position = position;\n}\n";
const FS_SRC: &str = "#version 300 es\nprecision mediump float;\nout vec4 frag_color;\nvoid main() {\n    frag_color = vec4(1.0, 0.0, 0.0, 1.0);\n}\n";

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn temp_output(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("shdc_codegen_{}_{}.h", std::process::id(), name))
}

fn triangle_input() -> Input {
    let mut input = Input::new("triangle.glsl");
    input.add_snippet("vs", vec![2, 3, 4, 5, 6]);
    input.add_snippet("fs", vec![9, 10, 11, 12, 13]);
    input.add_program("triangle", "vs", "fs", 15);
    input
}

struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

// ============================================================================
// SUCCESS SCENARIOS
// ============================================================================

#[test]
#[serial]
fn test_triangle_single_language() {
    let output = temp_output("triangle_single_language");
    let mut compiled = CompiledVariantIndex::new();
    compiled.push(Slang::Glsl300es, 0, VS_SRC);
    compiled.push(Slang::Glsl300es, 1, FS_SRC);

    generate(&Args::new(&output, SlangSet::GLSL300ES), &triangle_input(), &compiled).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    let file_name = output.file_name().unwrap().to_string_lossy().into_owned();
    let expected = format!(
        concat!(
            "#pragma once\n",
            "/* #version:1# machine generated, don't edit */\n",
            "#include <stdint.h>\n",
            "#if !defined(SOKOL_GFX_INCLUDED)\n",
            "#error \"Please include sokol_gfx.h before {}\"\n",
            "#endif\n",
            "#if defined(SOKOL_GLES3)\n",
            "static const char* triangle_vs_glsl300es_src =\n",
            "\"#version 300 es\\n\"\n",
            "\"in vec4 position;\\n\"\n",
            "\"void main() {{\\n\"\n",
            "\"    gl_Position = position;\\n\"\n",
            "\"}}\\n\"\n",
            ";\n",
            "static const char* triangle_fs_glsl300es_src =\n",
            "\"#version 300 es\\n\"\n",
            "\"precision mediump float;\\n\"\n",
            "\"out vec4 frag_color;\\n\"\n",
            "\"void main() {{\\n\"\n",
            "\"    frag_color = vec4(1.0, 0.0, 0.0, 1.0);\\n\"\n",
            "\"}}\\n\"\n",
            ";\n",
            "#endif /* SOKOL_GLES3 */\n",
        ),
        file_name
    );
    assert_eq!(text, expected);
    assert_eq!(text.matches("#if defined(").count(), 1);

    fs::remove_file(&output).unwrap();
}

#[test]
#[serial]
fn test_all_languages_with_custom_config() {
    let output = temp_output("all_languages");
    let mut compiled = CompiledVariantIndex::new();
    for slang in Slang::ALL {
        compiled.push(slang, 1, FS_SRC);
        compiled.push(slang, 0, VS_SRC);
    }
    let config = HeaderConfig {
        version: 3,
        ..Default::default()
    };

    generate_with_config(&Args::new(&output, SlangSet::all()), &config, &triangle_input(), &compiled)
        .unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("#pragma once\n/* #version:3# machine generated, don't edit */\n"));
    for slang in Slang::ALL {
        let vs = format!("static const char* triangle_vs_{}_src =", slang.to_str());
        let fs_decl = format!("static const char* triangle_fs_{}_src =", slang.to_str());
        assert_eq!(text.matches(&vs).count(), 1);
        assert_eq!(text.matches(&fs_decl).count(), 1);
    }
    assert!(text.ends_with("#endif /* SOKOL_METAL */\n"));

    fs::remove_file(&output).unwrap();
}

// ============================================================================
// FAILURE SCENARIOS
// ============================================================================

#[test]
#[serial]
fn test_triangle_missing_fragment_leaves_partial_file() {
    let output = temp_output("triangle_missing_fs");
    let mut compiled = CompiledVariantIndex::new();
    compiled.push(Slang::Glsl330, 0, VS_SRC);

    let err = generate(&Args::new(&output, SlangSet::GLSL330), &triangle_input(), &compiled)
        .unwrap_err();

    assert!(matches!(err, Error::MissingCompiledVariant { .. }));
    assert_eq!(err.format(ErrorFormat::Gcc),
        "triangle.glsl:9:0: error: no generated 'glsl330' source for fragment shader 'fs' in program 'triangle'");

    // The file was closed with incomplete content; discarding it is up to the caller
    let partial = fs::read_to_string(&output).unwrap();
    assert!(partial.ends_with("#if defined(SOKOL_GLCORE33)\n"));
    assert!(!partial.contains("#endif /* SOKOL_GLCORE33 */"));

    fs::remove_file(&output).unwrap();
}

#[test]
#[serial]
fn test_unwritable_destination() {
    let output = std::env::temp_dir()
        .join(format!("shdc_codegen_{}_missing_dir", std::process::id()))
        .join("out.h");

    let err = generate(&Args::new(&output, SlangSet::GLSL330), &triangle_input(), &CompiledVariantIndex::new())
        .unwrap_err();

    assert!(matches!(err, Error::OutputOpenFailed { .. }));
    assert_eq!(err.file(), "triangle.glsl");
    assert_eq!(err.line(), 0);
    assert_eq!(err.message(), format!("failed to open output file '{}'", output.display()));
    assert!(!output.exists());
}

#[test]
#[serial]
fn test_failure_is_logged_as_error() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Shdc::set_logger(CaptureLogger { entries: entries.clone() });

    let output = temp_output("logged_failure");
    let _ = generate(&Args::new(&output, SlangSet::HLSL5), &triangle_input(), &CompiledVariantIndex::new());
    Shdc::reset_logger();

    let entries_lock = entries.lock().unwrap();
    let error = entries_lock.iter()
        .find(|e| e.severity == LogSeverity::Error)
        .expect("error entry");
    assert_eq!(error.source, "shdc::header");
    assert!(error.message.contains("vertex shader 'vs'"));
    assert!(error.file.is_some());
    drop(entries_lock);

    let _ = fs::remove_file(&output);
}
