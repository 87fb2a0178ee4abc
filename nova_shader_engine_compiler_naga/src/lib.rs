/*!
# NovaShade Engine - GLSL Compiler Backend

GLSL implementation of the NovaShade program compilation engine.

This crate provides a "glsl" program backend that implements the
nova_shader_engine traits using naga for GLSL → SPIR-V compilation and spirq
for SPIR-V reflection.

The backend is registered with a [`nova_shader_engine::program::ProgramRegistry`]
and selected per program by language id.
*/

// GLSL implementation modules
mod compiler;
mod glsl_backend;
mod reflection;

pub use compiler::{CompileInput, CompileOutput, NagaGlslCompiler, ShadingCompiler};
pub use glsl_backend::{CompilerSettings, GlslProgramBackend, GLSL_LANGUAGE};
pub use reflection::{ReflectionParser, SpirqReflector};

/// Register a default-configured GLSL backend with a registry
///
/// Returns the backend it replaced, if one was already registered for
/// [`GLSL_LANGUAGE`].
pub fn register(
    registry: &nova_shader_engine::program::ProgramRegistry,
) -> nova_shader_engine::error::Result<
    Option<std::sync::Arc<dyn nova_shader_engine::program::ProgramBackend>>,
> {
    registry.register(GLSL_LANGUAGE, std::sync::Arc::new(GlslProgramBackend::new()))
}
