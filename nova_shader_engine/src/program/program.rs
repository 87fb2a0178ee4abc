/// GpuProgram handle - lazily compiled program wrapper

use std::sync::Arc;

use crate::program::{
    CompiledProgramArtifact, DeviceFlags, GpuParamTable, GpuProgramDesc, ProgramBackend,
    ProgramKind, VertexInputLayout,
};

/// Lifecycle state of a program handle
///
/// `Loaded` and `Failed` are terminal; no transition leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramState {
    /// Created, load step not yet requested
    Uninitialized,
    /// Load step in progress
    Loading,
    /// Compile pipeline succeeded; compiled contents available
    Loaded,
    /// Compile pipeline failed; diagnostics available
    Failed,
}

/// Handle to a GPU program
///
/// Wraps a descriptor plus the backend that owns it; compiled contents are
/// filled in by the backend on the first (and only) load step. Queries for
/// compiled contents return empty results until a terminal state is reached;
/// use [`GpuProgram::is_loaded`] to guard.
pub struct GpuProgram {
    desc: GpuProgramDesc,
    device_mask: DeviceFlags,
    backend: Arc<dyn ProgramBackend>,
    state: ProgramState,
    artifact: Option<CompiledProgramArtifact>,
}

impl GpuProgram {
    /// Create an uninitialized handle tagged with its owning backend
    pub fn new(
        desc: GpuProgramDesc,
        device_mask: DeviceFlags,
        backend: Arc<dyn ProgramBackend>,
    ) -> Self {
        Self {
            desc,
            device_mask,
            backend,
            state: ProgramState::Uninitialized,
            artifact: None,
        }
    }

    /// Run the load step: compile the descriptor through the owning backend
    ///
    /// Transitions Uninitialized → Loading → {Loaded, Failed}. Calling this
    /// on an already-loading or terminal handle is a no-op.
    pub fn load(&mut self) {
        if self.state != ProgramState::Uninitialized {
            return;
        }
        self.state = ProgramState::Loading;

        let artifact = self.backend.compile(&self.desc);
        self.state = if artifact.success {
            ProgramState::Loaded
        } else {
            ProgramState::Failed
        };
        self.artifact = Some(artifact);
    }

    /// Current lifecycle state
    pub fn state(&self) -> ProgramState {
        self.state
    }

    /// True once the load step succeeded
    pub fn is_loaded(&self) -> bool {
        self.state == ProgramState::Loaded
    }

    /// Whether this program comes from a real backend
    ///
    /// Handles created by the null backend report false.
    pub fn is_supported(&self) -> bool {
        self.backend.is_supported()
    }

    /// Program kind this handle was created for
    pub fn kind(&self) -> ProgramKind {
        self.desc.kind
    }

    /// Descriptor this handle wraps
    pub fn descriptor(&self) -> &GpuProgramDesc {
        &self.desc
    }

    /// Device mask this handle was created for
    pub fn device_mask(&self) -> DeviceFlags {
        self.device_mask
    }

    /// Compile artifact, once a terminal state is reached
    pub fn artifact(&self) -> Option<&CompiledProgramArtifact> {
        match self.state {
            ProgramState::Loaded | ProgramState::Failed => self.artifact.as_ref(),
            _ => None,
        }
    }

    /// Compiled instruction blob; empty until loaded
    pub fn instructions(&self) -> &[u8] {
        match self.artifact() {
            Some(artifact) if self.state == ProgramState::Loaded => &artifact.instructions,
            _ => &[],
        }
    }

    /// Reflected parameter table; empty until loaded
    pub fn params(&self) -> Option<&GpuParamTable> {
        self.artifact().map(|a| &a.params)
    }

    /// Reflected vertex input layout (vertex programs only)
    pub fn vertex_input(&self) -> Option<&VertexInputLayout> {
        self.artifact().and_then(|a| a.vertex_input.as_ref())
    }

    /// Diagnostics from the load step; empty until a terminal state
    pub fn diagnostics(&self) -> &str {
        self.artifact().map(|a| a.diagnostics.as_str()).unwrap_or("")
    }
}

#[cfg(test)]
#[path = "program_tests.rs"]
mod tests;
