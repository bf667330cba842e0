//! Reflection descriptors
//!
//! Only the pieces the generator relies on live here: the structural type
//! model and the storage buffer binding with its equality and dump contract.

pub mod structural_type;
pub mod storage_buffer;

pub use structural_type::{StructuralType, TypeKind, ScalarKind};
pub use storage_buffer::StorageBuffer;
