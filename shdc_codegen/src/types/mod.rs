//! Data model shared by the generator stages

pub mod shader_stage;
pub mod slang;
pub mod input;
pub mod compiled;
pub mod args;
pub mod reflection;

pub use shader_stage::ShaderStage;
pub use slang::{Slang, SlangSet};
pub use input::{Input, Program, Snippet};
pub use compiled::{CompiledSource, CompiledVariantIndex};
pub use args::{Args, HeaderConfig};
