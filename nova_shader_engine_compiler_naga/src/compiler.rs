/// ShadingCompiler seam and the naga-based GLSL → SPIR-V implementation

use std::fmt::Write as _;

use naga::valid::{Capabilities, ValidationFlags, Validator};

/// One invocation of the native shading compiler
pub struct CompileInput<'a> {
    /// Shader source text
    pub source: &'a str,
    /// Entry point function name
    pub entry_point: &'a str,
    /// Target profile string (e.g. "vs_450")
    pub profile: &'a str,
    /// Macro definitions passed to the preprocessor
    pub definitions: &'a [(String, String)],
    /// Emit debug symbols and skip optimization
    pub debug: bool,
}

/// What came back from the native compiler: a binary, diagnostics, or both
pub struct CompileOutput {
    /// True when a usable binary was produced
    pub succeeded: bool,
    /// Compiled instruction blob
    pub binary: Option<Vec<u8>>,
    /// Diagnostics text in the `"(<line>, <col>): error: ..."` convention
    pub diagnostics: Option<String>,
    /// True when the binary is tied to the compiling machine
    pub machine_specific: bool,
}

impl CompileOutput {
    fn failure(diagnostics: String) -> Self {
        Self {
            succeeded: false,
            binary: None,
            diagnostics: Some(diagnostics),
            machine_specific: false,
        }
    }
}

/// Native shading compiler interface
///
/// Treated as an opaque, possibly-slow, synchronous foreign call. The call
/// owns its buffers; ownership of the outputs moves to the caller.
pub trait ShadingCompiler: Send + Sync {
    /// Compile one shader; never fails as an error, only via the output
    fn compile(&self, input: &CompileInput<'_>) -> CompileOutput;
}

/// GLSL → SPIR-V compiler built on naga's GLSL frontend and SPIR-V backend
///
/// SPIR-V is portable, so outputs are never machine specific. GLSL has a
/// fixed `main` entry point; requests for a different entry point fail with
/// a diagnostic rather than silently compiling the wrong function.
pub struct NagaGlslCompiler;

impl NagaGlslCompiler {
    fn stage_for_profile(profile: &str) -> Option<naga::ShaderStage> {
        match profile {
            "vs_450" => Some(naga::ShaderStage::Vertex),
            "fs_450" => Some(naga::ShaderStage::Fragment),
            "cs_450" => Some(naga::ShaderStage::Compute),
            _ => None,
        }
    }

    /// Render GLSL parse errors as `"(line, col): error: message"` lines
    fn render_parse_errors(errors: &[naga::front::glsl::Error], source: &str) -> String {
        let mut text = String::new();
        for err in errors {
            let location = err.meta.location(source);
            let _ = writeln!(
                text,
                "({}, {}): error: {}",
                location.line_number, location.line_position, err.kind
            );
        }
        text
    }

    fn render_validation_error(
        error: &naga::WithSpan<naga::valid::ValidationError>,
        source: &str,
    ) -> String {
        match error.location(source) {
            Some(location) => format!(
                "({}, {}): error: {}",
                location.line_number,
                location.line_position,
                error.as_inner()
            ),
            None => format!("(0, 0): error: {}", error.as_inner()),
        }
    }
}

impl ShadingCompiler for NagaGlslCompiler {
    fn compile(&self, input: &CompileInput<'_>) -> CompileOutput {
        let Some(stage) = Self::stage_for_profile(input.profile) else {
            return CompileOutput::failure(format!(
                "(0, 0): error: unknown target profile '{}'",
                input.profile
            ));
        };

        let mut options = naga::front::glsl::Options::from(stage);
        for (name, value) in input.definitions {
            options.defines.insert(name.clone(), value.clone());
        }

        let mut frontend = naga::front::glsl::Frontend::default();
        let module = match frontend.parse(&options, input.source) {
            Ok(module) => module,
            Err(errors) => {
                return CompileOutput::failure(Self::render_parse_errors(&errors, input.source));
            }
        };

        if !module.entry_points.iter().any(|ep| ep.name == input.entry_point) {
            return CompileOutput::failure(format!(
                "(0, 0): error: entry point '{}' not found",
                input.entry_point
            ));
        }

        let info = match Validator::new(ValidationFlags::all(), Capabilities::all())
            .validate(&module)
        {
            Ok(info) => info,
            Err(error) => {
                return CompileOutput::failure(Self::render_validation_error(
                    &error,
                    input.source,
                ));
            }
        };

        let flags = if input.debug {
            naga::back::spv::WriterFlags::DEBUG
        } else {
            naga::back::spv::WriterFlags::empty()
        };
        let spv_options = naga::back::spv::Options {
            lang_version: (1, 0),
            flags,
            ..Default::default()
        };

        let words = match naga::back::spv::write_vec(&module, &info, &spv_options, None) {
            Ok(words) => words,
            Err(error) => {
                return CompileOutput::failure(format!(
                    "(0, 0): error: SPIR-V generation failed: {}",
                    error
                ));
            }
        };

        let mut binary = Vec::with_capacity(words.len() * 4);
        for word in words {
            binary.extend_from_slice(&word.to_le_bytes());
        }

        CompileOutput {
            succeeded: true,
            binary: Some(binary),
            diagnostics: None,
            machine_specific: false,
        }
    }
}

#[cfg(test)]
#[path = "compiler_tests.rs"]
mod tests;
