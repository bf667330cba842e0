/// Reflected data-layout types (struct members of uniform and storage blocks)

use std::io::Write;

/// Scalar base kind of a reflected member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Int32,
    UInt32,
    Float32,
    Float64,
}

impl ScalarKind {
    pub fn to_str(&self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Int32 => "int",
            ScalarKind::UInt32 => "uint",
            ScalarKind::Float32 => "float",
            ScalarKind::Float64 => "double",
        }
    }
}

/// Shape of a reflected type
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeKind {
    #[default]
    Invalid,
    Scalar(ScalarKind),
    /// Scalar kind and component count
    Vector(ScalarKind, u32),
    /// Scalar kind, column count, row count
    Matrix(ScalarKind, u32, u32),
    Array {
        element: Box<StructuralType>,
        /// 0 for runtime-sized arrays
        count: u32,
        stride: u32,
    },
    Struct {
        typename: String,
        members: Vec<StructuralType>,
    },
}

/// A named, laid-out reflected type
///
/// Equality is structural: every field and the full recursive shape must
/// match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StructuralType {
    pub name: String,
    /// Byte offset inside the enclosing struct
    pub offset: u32,
    /// Size in bytes (0 when runtime-sized)
    pub size: u32,
    pub kind: TypeKind,
}

impl StructuralType {
    pub fn equals(&self, other: &StructuralType) -> bool {
        self == other
    }

    /// Dump the type to `out`, one field per line
    ///
    /// Write errors are ignored.
    pub fn dump_debug_to(&self, out: &mut dyn Write, indent: &str) {
        let _ = self.write_debug(out, indent);
    }

    fn write_debug(&self, out: &mut dyn Write, indent: &str) -> std::io::Result<()> {
        let indent2 = format!("{}  ", indent);
        writeln!(out, "{}-", indent)?;
        writeln!(out, "{}name: {}", indent2, self.name)?;
        writeln!(out, "{}offset: {}", indent2, self.offset)?;
        writeln!(out, "{}size: {}", indent2, self.size)?;
        match &self.kind {
            TypeKind::Invalid => writeln!(out, "{}type: invalid", indent2)?,
            TypeKind::Scalar(kind) => writeln!(out, "{}type: {}", indent2, kind.to_str())?,
            TypeKind::Vector(kind, n) => writeln!(out, "{}type: {}{}", indent2, kind.to_str(), n)?,
            TypeKind::Matrix(kind, cols, rows) => {
                writeln!(out, "{}type: {}{}x{}", indent2, kind.to_str(), cols, rows)?
            }
            TypeKind::Array { element, count, stride } => {
                writeln!(out, "{}type: array", indent2)?;
                writeln!(out, "{}array_count: {}", indent2, count)?;
                writeln!(out, "{}array_stride: {}", indent2, stride)?;
                writeln!(out, "{}element:", indent2)?;
                element.write_debug(out, &indent2)?;
            }
            TypeKind::Struct { typename, members } => {
                writeln!(out, "{}type: struct", indent2)?;
                writeln!(out, "{}struct_typename: {}", indent2, typename)?;
                writeln!(out, "{}members:", indent2)?;
                for member in members {
                    member.write_debug(out, &indent2)?;
                }
            }
        }
        Ok(())
    }
}
