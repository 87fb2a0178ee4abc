/*!
# NovaShade Engine

Core traits and types for the NovaShade GPU program compilation engine.

This crate provides the platform-agnostic API for compiling shader source
text into backend-executable microcode, together with reflection metadata
(parameter layouts, vertex-input signatures). Compiler backends for concrete
shading languages live in their own crates and are registered with a
[`program::ProgramRegistry`] at runtime.

## Architecture

- **ProgramRegistry**: thread-safe language id → backend dispatch with a
  guaranteed null fallback
- **ProgramBackend**: capability trait implemented by per-language backends
- **GpuProgram**: lazily compiled program handle with a one-way
  Uninitialized → {Loaded, Failed} lifecycle
- **CompiledProgramArtifact**: compile result — instructions, diagnostics and
  reflection data

Compile failures travel as data in the artifact, never as errors, so callers
always receive a well-formed result object.
*/

// Internal modules
pub mod error;
pub mod log;
pub mod program;

// Main nova namespace module
pub mod nova {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Program sub-module with the whole compilation data model
    pub mod program {
        pub use crate::program::*;
    }

    // Most-used types at the namespace root
    pub use crate::program::{
        CompiledProgramArtifact, DeviceFlags, GpuProgram, GpuProgramDesc, ProgramBackend,
        ProgramKind, ProgramRegistry, ProgramState,
    };
}
