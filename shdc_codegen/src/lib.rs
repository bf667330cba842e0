/*!
# shdc codegen

Final stage of the shader build pipeline: assembles cross-compiled shader
sources into a single C header that embeds, per requested target language,
the vertex and fragment source of every program.

## Architecture

- **types**: input programs/snippets, compiled variant index, target
  languages, reflection descriptors
- **generator::program_assembler**: resolves one program for one language
  and writes its string literal declarations
- **generator::header_emitter**: owns the output file, writes the preamble
  and one guarded block per requested language

Parsing shader sources and running the cross compiler happen upstream; this
crate only consumes their results.
*/

// Internal modules
mod error;
mod diagnostics;
pub mod log;
pub mod types;
pub mod generator;

// Main shdc namespace module
pub mod shdc {
    // Error types
    pub use crate::error::{Error, ErrorFormat, Result};

    // Logging facade
    pub use crate::diagnostics::Shdc;

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    pub mod types {
        pub use crate::types::*;
    }

    pub mod generator {
        pub use crate::generator::*;
    }
}
