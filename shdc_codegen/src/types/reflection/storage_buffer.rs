/// Storage buffer binding reflected from a shader stage
///
/// The same conceptual binding must come out structurally equal from every
/// target language a program is compiled to; `equals` is the primitive the
/// cross-language consistency check is built on.

use std::io::Write;
use crate::types::ShaderStage;
use crate::types::reflection::StructuralType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageBuffer {
    pub stage: ShaderStage,
    /// Binding slot, -1 while unassigned
    pub slot: i32,
    pub inst_name: String,
    pub struct_refl: StructuralType,
}

impl Default for StorageBuffer {
    fn default() -> Self {
        Self {
            stage: ShaderStage::Invalid,
            slot: -1,
            inst_name: String::new(),
            struct_refl: StructuralType::default(),
        }
    }
}

impl StorageBuffer {
    /// Max storage buffers per shader stage (matches the runtime limit)
    pub const NUM: usize = 4;

    pub fn equals(&self, other: &StorageBuffer) -> bool {
        self.stage == other.stage
            && self.slot == other.slot
            && self.inst_name == other.inst_name
            && self.struct_refl.equals(&other.struct_refl)
    }

    /// Dump to stderr
    pub fn dump_debug(&self, indent: &str) {
        let stderr = std::io::stderr();
        let mut lock = stderr.lock();
        self.dump_debug_to(&mut lock, indent);
    }

    /// Dump to any writer; write errors are ignored
    pub fn dump_debug_to(&self, out: &mut dyn Write, indent: &str) {
        let _ = self.write_debug(out, indent);
    }

    fn write_debug(&self, out: &mut dyn Write, indent: &str) -> std::io::Result<()> {
        let indent2 = format!("{}  ", indent);
        writeln!(out, "{}-", indent)?;
        writeln!(out, "{}stage: {}", indent2, self.stage.to_str())?;
        writeln!(out, "{}slot: {}", indent2, self.slot)?;
        writeln!(out, "{}inst_name: {}", indent2, self.inst_name)?;
        writeln!(out, "{}struct:", indent2)?;
        self.struct_refl.dump_debug_to(out, &indent2);
        Ok(())
    }
}

#[cfg(test)]
#[path = "storage_buffer_tests.rs"]
mod tests;
