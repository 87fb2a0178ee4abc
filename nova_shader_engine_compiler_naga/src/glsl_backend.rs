/// GLSL program backend wiring the native compiler and reflector together

use std::sync::Arc;

use rustc_hash::FxHashMap;

use nova_shader_engine::program::{
    CompiledProgramArtifact, DeviceFlags, GpuParamTable, GpuProgram, GpuProgramDesc,
    ProgramBackend, ProgramKind, VertexInputLayout,
};

use crate::compiler::{CompileInput, NagaGlslCompiler, ShadingCompiler};
use crate::reflection::{ReflectionParser, SpirqReflector};

/// Language id this backend registers under
pub const GLSL_LANGUAGE: &str = "glsl";

const FAILURE_PREFIX: &str = "Cannot compile GLSL shader. Errors:\n";

/// Tunables applied to every compile this backend runs
pub struct CompilerSettings {
    /// Emit debug symbols and skip optimization
    pub debug: bool,
    /// Extra macro definitions, in addition to the built-in `GLSL` define
    pub definitions: Vec<(String, String)>,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            debug: cfg!(debug_assertions),
            definitions: Vec::new(),
        }
    }
}

/// Program backend for the "glsl" language
///
/// Per compile: resolve a target profile for the program kind, invoke the
/// native compiler, map diagnostics back to source lines on failure, reflect
/// the binary on success.
pub struct GlslProgramBackend {
    compiler: Box<dyn ShadingCompiler>,
    reflector: Box<dyn ReflectionParser>,
    profiles: FxHashMap<ProgramKind, String>,
    settings: CompilerSettings,
}

impl GlslProgramBackend {
    /// Backend with the naga compiler, spirq reflector and default settings
    pub fn new() -> Self {
        Self::with_parts(
            Box::new(NagaGlslCompiler),
            Box::new(SpirqReflector),
            CompilerSettings::default(),
        )
    }

    /// Backend with explicit compiler, reflector and settings
    pub fn with_parts(
        compiler: Box<dyn ShadingCompiler>,
        reflector: Box<dyn ReflectionParser>,
        settings: CompilerSettings,
    ) -> Self {
        Self {
            compiler,
            reflector,
            profiles: Self::default_profiles(),
            settings,
        }
    }

    /// Target profiles for the program kinds the GLSL frontend can compile
    fn default_profiles() -> FxHashMap<ProgramKind, String> {
        let mut profiles = FxHashMap::default();
        profiles.insert(ProgramKind::Vertex, "vs_450".to_string());
        profiles.insert(ProgramKind::Fragment, "fs_450".to_string());
        profiles.insert(ProgramKind::Compute, "cs_450".to_string());
        profiles
    }

    /// Extract the 0-based source line index from a diagnostics message
    ///
    /// Scans for the first `"(<line>,"` pattern with a closing paren, where
    /// `<line>` is 1-based. Returns 0 when no such pattern is found.
    fn parse_error_line(message: &str) -> u32 {
        for (open, _) in message.match_indices('(') {
            let rest = &message[open + 1..];
            let end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            if end == 0 || !rest[end..].starts_with(',') || !rest[end..].contains(')') {
                continue;
            }
            if let Ok(line) = rest[..end].parse::<u32>() {
                return line.saturating_sub(1);
            }
        }
        0
    }

    /// Append the offending source line to a raw compiler message
    fn annotate_with_source_line(message: &str, source: &str) -> String {
        let line_index = Self::parse_error_line(message);
        let line_text = source.split('\n').nth(line_index as usize).unwrap_or("");
        format!("{}\n\nLine {}: {}", message, line_index, line_text)
    }

    fn compile_desc(&self, desc: &GpuProgramDesc) -> CompiledProgramArtifact {
        let Some(profile) = self.profiles.get(&desc.kind) else {
            return CompiledProgramArtifact::failed(format!(
                "{}no target profile for {:?} programs",
                FAILURE_PREFIX, desc.kind
            ));
        };

        let mut definitions = vec![("GLSL".to_string(), "1".to_string())];
        definitions.extend(self.settings.definitions.iter().cloned());

        let output = self.compiler.compile(&CompileInput {
            source: &desc.source,
            entry_point: &desc.entry_point,
            profile,
            definitions: &definitions,
            debug: self.settings.debug,
        });

        // Warnings-only compiles surface annotated diagnostics too
        let diagnostics = match output.diagnostics {
            Some(raw) if !raw.is_empty() => Self::annotate_with_source_line(&raw, &desc.source),
            _ => String::new(),
        };

        if !output.succeeded {
            return CompiledProgramArtifact::failed(format!("{}{}", FAILURE_PREFIX, diagnostics));
        }

        // The compiler may report success without producing a binary; there
        // is nothing to reflect in that case.
        let Some(instructions) = output.binary else {
            return CompiledProgramArtifact {
                success: true,
                diagnostics,
                instructions: Vec::new(),
                machine_specific: output.machine_specific,
                params: GpuParamTable::default(),
                vertex_input: None,
            };
        };

        let mut params = GpuParamTable::default();
        let mut layout = VertexInputLayout::default();
        let layout_slot = (desc.kind == ProgramKind::Vertex).then_some(&mut layout);
        if let Err(error) = self
            .reflector
            .parse(&instructions, desc.kind, &mut params, layout_slot)
        {
            // A binary we cannot reflect is unusable; drop it with the
            // failure rather than hand back partial contents.
            return CompiledProgramArtifact::failed(format!("{}{}", FAILURE_PREFIX, error));
        }

        CompiledProgramArtifact {
            success: true,
            diagnostics,
            instructions,
            machine_specific: output.machine_specific,
            params,
            vertex_input: (desc.kind == ProgramKind::Vertex).then_some(layout),
        }
    }
}

impl Default for GlslProgramBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgramBackend for GlslProgramBackend {
    fn language(&self) -> &str {
        GLSL_LANGUAGE
    }

    fn create(self: Arc<Self>, desc: GpuProgramDesc, device_mask: DeviceFlags) -> GpuProgram {
        GpuProgram::new(desc, device_mask, self)
    }

    fn create_empty(self: Arc<Self>, kind: ProgramKind, device_mask: DeviceFlags) -> GpuProgram {
        GpuProgram::new(GpuProgramDesc::empty(kind), device_mask, self)
    }

    fn compile(&self, desc: &GpuProgramDesc) -> CompiledProgramArtifact {
        self.compile_desc(desc)
    }
}

#[cfg(test)]
#[path = "glsl_backend_tests.rs"]
mod tests;
