/// Mock program backend for unit tests (no real compiler required)

#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};
#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use crate::program::{
    CompiledProgramArtifact, DeviceFlags, GpuProgram, GpuProgramDesc, ProgramBackend, ProgramKind,
};

/// Scriptable backend: succeeds with a fixed binary or fails with fixed
/// diagnostics, and counts compile invocations.
#[cfg(test)]
pub struct MockBackend {
    pub language: String,
    pub succeed: bool,
    pub binary: Vec<u8>,
    pub diagnostics: String,
    pub compile_calls: AtomicUsize,
}

#[cfg(test)]
impl MockBackend {
    pub fn succeeding(language: &str, binary: Vec<u8>) -> Self {
        Self {
            language: language.to_string(),
            succeed: true,
            binary,
            diagnostics: String::new(),
            compile_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(language: &str, diagnostics: &str) -> Self {
        Self {
            language: language.to_string(),
            succeed: false,
            binary: Vec::new(),
            diagnostics: diagnostics.to_string(),
            compile_calls: AtomicUsize::new(0),
        }
    }

    pub fn compile_count(&self) -> usize {
        self.compile_calls.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
impl ProgramBackend for MockBackend {
    fn language(&self) -> &str {
        &self.language
    }

    fn create(self: Arc<Self>, desc: GpuProgramDesc, device_mask: DeviceFlags) -> GpuProgram {
        GpuProgram::new(desc, device_mask, self)
    }

    fn create_empty(self: Arc<Self>, kind: ProgramKind, device_mask: DeviceFlags) -> GpuProgram {
        GpuProgram::new(GpuProgramDesc::empty(kind), device_mask, self)
    }

    fn compile(&self, _desc: &GpuProgramDesc) -> CompiledProgramArtifact {
        self.compile_calls.fetch_add(1, Ordering::SeqCst);
        if self.succeed {
            CompiledProgramArtifact {
                success: true,
                diagnostics: self.diagnostics.clone(),
                instructions: self.binary.clone(),
                machine_specific: false,
                params: Default::default(),
                vertex_input: None,
            }
        } else {
            CompiledProgramArtifact::failed(self.diagnostics.clone())
        }
    }
}
