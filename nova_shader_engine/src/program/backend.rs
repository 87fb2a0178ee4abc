/// ProgramBackend trait - per-language compiler backend interface

use std::sync::Arc;

use crate::program::{CompiledProgramArtifact, DeviceFlags, GpuProgram, GpuProgramDesc, ProgramKind};

/// Compiler backend for one shading language
///
/// Implemented by concrete language backends (e.g. the naga GLSL backend)
/// and by the built-in null backend. Backends are stateless with respect to
/// a single compile call; the registry may invoke them from multiple threads.
pub trait ProgramBackend: Send + Sync {
    /// Language id this backend compiles (e.g. "glsl")
    fn language(&self) -> &str;

    /// Construct an uninitialized program handle for the given descriptor
    ///
    /// No compilation happens here; the handle's own load step drives the
    /// compile pipeline later.
    fn create(self: Arc<Self>, desc: GpuProgramDesc, device_mask: DeviceFlags) -> GpuProgram;

    /// Construct an uninitialized program handle carrying only a kind
    fn create_empty(self: Arc<Self>, kind: ProgramKind, device_mask: DeviceFlags) -> GpuProgram;

    /// Compile the descriptor's source into an artifact
    ///
    /// Failures are reported through the artifact, never as an error.
    fn compile(&self, desc: &GpuProgramDesc) -> CompiledProgramArtifact;

    /// Whether programs from this backend are usable
    ///
    /// The null backend returns false; real backends keep the default.
    fn is_supported(&self) -> bool {
        true
    }
}
