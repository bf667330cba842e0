//! Header generation stages
//!
//! - `program_assembler`: embeds one program's vertex/fragment sources for
//!   one target language
//! - `header_emitter`: owns the output file and drives the assembler across
//!   every requested language

pub mod program_assembler;
pub mod header_emitter;

pub use header_emitter::{generate, generate_with_config, write_header};
pub use program_assembler::{write_program, write_programs};
