/// Null program backend - stand-in for unsupported languages

use std::sync::Arc;

use crate::program::{
    CompiledProgramArtifact, DeviceFlags, GpuProgram, GpuProgramDesc, ProgramBackend, ProgramKind,
};

/// Reserved language id of the built-in null backend
///
/// Never matched by a real request; the registry refuses to register or
/// unregister under this id.
pub const NULL_LANGUAGE: &str = "null";

/// Backend used in place of backends we cannot resolve
///
/// Programs it creates report unsupported and never contain usable
/// instructions, so callers always get a well-formed object instead of a
/// lookup failure.
pub struct NullProgramBackend;

impl ProgramBackend for NullProgramBackend {
    fn language(&self) -> &str {
        NULL_LANGUAGE
    }

    fn create(self: Arc<Self>, desc: GpuProgramDesc, device_mask: DeviceFlags) -> GpuProgram {
        GpuProgram::new(desc, device_mask, self)
    }

    fn create_empty(self: Arc<Self>, kind: ProgramKind, device_mask: DeviceFlags) -> GpuProgram {
        GpuProgram::new(GpuProgramDesc::empty(kind), device_mask, self)
    }

    fn compile(&self, _desc: &GpuProgramDesc) -> CompiledProgramArtifact {
        CompiledProgramArtifact::failed(String::new())
    }

    fn is_supported(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[path = "null_backend_tests.rs"]
mod tests;
